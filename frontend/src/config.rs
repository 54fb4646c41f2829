//! Application configuration.
//!
//! Centralized configuration for the PDF Document Parser frontend.
//! Everything is fixed at compile time; the page exposes no settings.

/// Backend API base URL.
///
/// The document-analysis service that extracts text, boxes and tables.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Path of the processing endpoint on [`BACKEND_URL`].
pub const PROCESS_PDF_PATH: &str = "/process-pdf";

/// Multipart field carrying the PDF bytes.
pub const UPLOAD_FIELD: &str = "file";

/// Value of the file input's `accept` attribute.
pub const ACCEPTED_EXTENSION: &str = ".pdf";

/// Substring a file's declared media type must contain to be uploaded.
pub const PDF_MEDIA_TYPE_MARKER: &str = "pdf";

/// Shown when the picked file is not a PDF.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Please upload a PDF file";

/// Shown for every network or server failure.
pub const GENERIC_UPLOAD_ERROR_MESSAGE: &str = "Error processing PDF. Please try again.";

/// Placeholder for pages without tabular data.
pub const NO_TABLE_DATA_MESSAGE: &str = "No table data found on this page";

/// Full URL of the processing endpoint.
pub fn process_pdf_url() -> String {
    format!("{}{}", BACKEND_URL, PROCESS_PDF_PATH)
}
