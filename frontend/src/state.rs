//! Upload state owned by the uploader component.
//!
//! All transitions go through [`UploadState::select`] and
//! [`UploadState::complete`]:
//!
//! ```text
//! Idle ──select(pdf)──▶ Uploading ──complete(Ok)──▶ Success(results)
//!                          │      └──complete(Err)─▶ Failure(error)
//!                          └──select(pdf)──▶ Uploading (previous ticket is stale)
//! ```
//!
//! Overlapping uploads follow a latest-wins policy: each accepted selection
//! issues a new [`UploadTicket`] and outcomes for older tickets are dropped.

use serde::{Deserialize, Serialize};

use crate::config::{GENERIC_UPLOAD_ERROR_MESSAGE, INVALID_FILE_TYPE_MESSAGE, PDF_MEDIA_TYPE_MARKER};
use crate::types::{AppError, AppResult, PageResult};

/// Metadata of the file picked by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    /// Declared media type, e.g. `application/pdf`
    pub media_type: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn is_pdf(&self) -> bool {
        self.media_type
            .to_ascii_lowercase()
            .contains(PDF_MEDIA_TYPE_MARKER)
    }
}

impl From<&web_sys::File> for SelectedFile {
    fn from(file: &web_sys::File) -> Self {
        SelectedFile {
            name: file.name(),
            media_type: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// Identifies one accepted upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

/// Outcome of a file selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Empty file list.
    Ignored,
    /// Not a PDF; no request may be sent.
    Rejected,
    /// Send the file, then report back with this ticket.
    Accepted(UploadTicket),
}

/// What the uploader should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveView<'a> {
    Idle,
    Loading,
    Failed(&'a str),
    Results(&'a [PageResult]),
}

/// Client-side upload state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadState {
    pub selected_file: Option<SelectedFile>,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<PageResult>,
    generation: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a file-input change.
    pub fn select(&mut self, file: Option<SelectedFile>) -> Selection {
        let Some(file) = file else {
            return Selection::Ignored;
        };

        if !file.is_pdf() {
            log::warn!("Rejected '{}' with media type '{}'", file.name, file.media_type);
            let rejection = AppError::Validation(INVALID_FILE_TYPE_MESSAGE.to_string());
            self.error = Some(rejection.to_string());
            return Selection::Rejected;
        }

        self.generation += 1;
        self.selected_file = Some(file);
        self.error = None;
        self.results.clear();
        self.loading = true;
        Selection::Accepted(UploadTicket {
            generation: self.generation,
        })
    }

    /// Whether `ticket` belongs to the most recent accepted upload.
    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of an upload. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn complete(&mut self, ticket: UploadTicket, outcome: AppResult<Vec<PageResult>>) -> bool {
        if !self.is_current(ticket) {
            log::warn!(
                "Dropping outcome of superseded upload #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(pages) => {
                self.results = pages;
                self.error = None;
            }
            Err(e) => {
                log::debug!("Upload #{} failed: {}", ticket.generation, e);
                self.results.clear();
                self.error = Some(GENERIC_UPLOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Single active display condition: loading, then error, then results.
    pub fn display(&self) -> ActiveView<'_> {
        if self.loading {
            ActiveView::Loading
        } else if let Some(message) = self.error.as_deref() {
            ActiveView::Failed(message)
        } else if !self.results.is_empty() {
            ActiveView::Results(&self.results)
        } else {
            ActiveView::Idle
        }
    }
}
