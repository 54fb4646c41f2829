//! UI Components for the PDF Document Parser.
//!
//! # Layout Components
//! - [`Header`] - Static page banner
//!
//! # Feature Components
//! - [`PdfUploader`] - File picker, upload and result dispatch
//! - [`ProcessingStatus`] - Loading indicator while a request is in flight
//! - [`UploadErrorMessage`] - Single-line error
//! - [`ResultDisplay`] - One table (or placeholder) per page

mod header;
mod uploader;
mod status;
mod results;

pub use header::*;
pub use uploader::*;
pub use status::*;
pub use results::*;
