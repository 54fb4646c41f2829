//! Table layout for a page's `table_data`.
//!
//! Rows coming from the service are independent objects, so nothing
//! guarantees they share a key set. [`Table::from_rows`] lays every row out
//! against one header list:
//!
//! - headers start as the keys of the first row, in order
//! - keys first seen in later rows are appended in first-seen order
//! - a row missing a header gets an empty cell

use crate::types::{PageResult, TableRow};

/// Rectangular table ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    ragged: bool,
}

impl Table {
    /// `None` when there are no rows.
    pub fn from_rows(rows: &[TableRow]) -> Option<Table> {
        let first = rows.first()?;

        let mut headers: Vec<String> = first.columns().map(str::to_string).collect();
        let mut ragged = false;
        for row in &rows[1..] {
            if row.len() != headers.len() || !row.columns().eq(headers.iter().map(String::as_str)) {
                ragged = true;
            }
            for column in row.columns() {
                if !headers.iter().any(|h| h == column) {
                    headers.push(column.to_string());
                }
            }
        }

        let rows = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|h| row.get(h).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        Some(Table { headers, rows, ragged })
    }

    /// Whether the rows disagreed on their keys or key order.
    pub fn is_ragged(&self) -> bool {
        self.ragged
    }
}

/// Heading shown above a page's block.
pub fn page_heading(page: u32) -> String {
    format!("Page {}", page)
}

/// How one page is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    Table(Table),
    Empty,
}

impl PageView {
    pub fn from_result(result: &PageResult) -> PageView {
        match Table::from_rows(&result.table_data) {
            Some(table) => PageView::Table(table),
            None => PageView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProcessResponse;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_row_table() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"result": [{"page": 1, "table_data": [{"A": "1", "B": "2"}]}]}"#).unwrap();
        assert_eq!(response.result.len(), 1);
        assert_eq!(page_heading(response.result[0].page), "Page 1");

        match PageView::from_result(&response.result[0]) {
            PageView::Table(table) => {
                assert_eq!(table.headers, strings(&["A", "B"]));
                assert_eq!(table.rows, vec![strings(&["1", "2"])]);
                assert!(!table.is_ragged());
            }
            PageView::Empty => panic!("expected a table"),
        }
    }

    #[test]
    fn test_empty_table_data_renders_placeholder() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"result": [{"page": 2, "table_data": []}]}"#).unwrap();
        assert_eq!(page_heading(response.result[0].page), "Page 2");
        assert_eq!(PageView::from_result(&response.result[0]), PageView::Empty);
    }

    #[test]
    fn test_absent_table_data_renders_placeholder() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"result": [{"page": 4, "raw_texts": ["hello"]}]}"#).unwrap();
        assert_eq!(PageView::from_result(&response.result[0]), PageView::Empty);
    }

    #[test]
    fn test_uniform_rows_keep_first_row_order() {
        let rows = vec![
            TableRow::from_pairs([("item", "Pen"), ("qty", "2")]),
            TableRow::from_pairs([("item", "Ink"), ("qty", "1")]),
        ];
        let table = Table::from_rows(&rows).unwrap();
        assert_eq!(table.headers, strings(&["item", "qty"]));
        assert_eq!(table.rows, vec![strings(&["Pen", "2"]), strings(&["Ink", "1"])]);
        assert!(!table.is_ragged());
    }

    #[test]
    fn test_reordered_keys_are_aligned_to_headers() {
        let rows = vec![
            TableRow::from_pairs([("item", "Pen"), ("qty", "2")]),
            TableRow::from_pairs([("qty", "1"), ("item", "Ink")]),
        ];
        let table = Table::from_rows(&rows).unwrap();
        assert_eq!(table.rows[1], strings(&["Ink", "1"]));
        assert!(table.is_ragged());
    }

    #[test]
    fn test_missing_and_extra_keys_are_normalized() {
        let rows = vec![
            TableRow::from_pairs([("item", "Pen"), ("qty", "2")]),
            TableRow::from_pairs([("item", "Ink"), ("total", "$3")]),
            TableRow::from_pairs([("qty", "5")]),
        ];
        let table = Table::from_rows(&rows).unwrap();
        assert_eq!(table.headers, strings(&["item", "qty", "total"]));
        assert_eq!(
            table.rows,
            vec![
                strings(&["Pen", "2", ""]),
                strings(&["Ink", "", "$3"]),
                strings(&["", "5", ""]),
            ]
        );
        assert!(table.is_ragged());
    }

    #[test]
    fn test_no_rows_is_none() {
        assert_eq!(Table::from_rows(&[]), None);
    }
}
