//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - PDF upload to the document-analysis service

pub mod upload;

pub use upload::*;
