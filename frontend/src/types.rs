//! Common types used across the frontend application.
//!
//! This module centralizes the wire types returned by the analysis
//! service and the frontend error type.
//!
//! # Categories
//!
//! - **API Types** - `/process-pdf` response structures
//! - **Error Types** - Frontend error handling

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend processing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// One entry per PDF page, in page order
    pub result: Vec<PageResult>,
}

/// Bounding box of a text block, usually `[x0, y0, x1, y1]`.
pub type BoundingBox = Vec<f64>;

/// Extraction output for a single page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based page number
    pub page: u32,
    /// Rows of the table detected on the page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub table_data: Vec<TableRow>,
    /// Raw text blocks, in extraction order
    #[serde(default, deserialize_with = "lenient_list")]
    pub raw_texts: Vec<String>,
    /// One box per raw text block
    #[serde(default, deserialize_with = "lenient_list")]
    pub boxes: Vec<BoundingBox>,
}

/// `null` decodes like an absent list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Informational lists never fail the page: a non-list decodes as empty and
/// elements of the wrong shape are skipped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// A single table record: column name to cell text.
///
/// Keeps columns in the order they appear in the payload. Non-string JSON
/// values are turned into display text when decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    /// Build a row from `(column, value)` pairs. A repeated column keeps its
    /// first position and its last value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = TableRow::default();
        for (column, value) in pairs {
            row.insert(column.into(), value.into());
        }
        row
    }

    fn insert(&mut self, column: String, value: String) {
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Column names in payload order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    /// Cell values in payload order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Display text of a JSON cell value.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for TableRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = TableRow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table row object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TableRow, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut row = TableRow::default();
                while let Some((column, value)) = map.next_entry::<String, Value>()? {
                    row.insert(column, cell_text(value));
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

impl Serialize for TableRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Only [`AppError::Validation`] is shown to the user, as its bare message;
/// every other variant is logged and replaced by the generic upload message.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Picked file was rejected before any request.
    #[error("{0}")]
    Validation(String),
    /// Form data or request could not be built.
    #[error("Request error: {0}")]
    Request(String),
    /// Network/HTTP transport error, including aborts.
    #[error("Network error: {0}")]
    Network(String),
    /// Service answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },
    /// Response body is not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
