//! PDF Document Parser - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a PDF to a document-analysis
//! service and renders the tables it extracts, page by page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (static banner)                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PdfUploader (owns UploadState)                              │
//! │  ├── ProcessingStatus   (loading)                           │
//! │  ├── UploadErrorMessage (error)                             │
//! │  └── ResultDisplay      (results, one table per page)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire types (PageResult, TableRow) and AppError
//! - [`state`] - Upload state machine
//! - [`table`] - Table normalization for rendering
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod table;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    ProcessResponse, PageResult, TableRow, BoundingBox,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{ActiveView, SelectedFile, Selection, UploadState, UploadTicket};
pub use table::{page_heading, PageView, Table};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PDF Document Parser - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PDF Document Parser"/>
        <Router>
            <div class="page">
                <Header/>
                <main class="container">
                    <Routes>
                        <Route path="/" view=PdfUploader/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
