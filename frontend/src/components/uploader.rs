//! PDF upload component.
//!
//! Owns the [`UploadState`], validates the picked file, sends it to the
//! analysis service and shows whichever of status, error or results is
//! active.

use leptos::*;
use web_sys::{AbortController, Event, HtmlInputElement};

use crate::components::{ProcessingStatus, ResultDisplay, UploadErrorMessage};
use crate::config::{process_pdf_url, ACCEPTED_EXTENSION};
use crate::services::process_pdf;
use crate::state::{ActiveView, SelectedFile, Selection, UploadState};

#[component]
pub fn PdfUploader() -> impl IntoView {
    let state = create_rw_signal(UploadState::new());
    // Controller of the request in flight, aborted when a newer upload starts
    let in_flight = store_value(None::<AbortController>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Re-picking the same file must fire `change` again
        input.set_value("");

        let selection = state.try_update(|s| s.select(file.as_ref().map(SelectedFile::from)));
        let (Some(Selection::Accepted(ticket)), Some(file)) = (selection, file) else {
            return;
        };

        if let Some(previous) = in_flight.get_value() {
            log::info!("Cancelling previous upload");
            previous.abort();
        }
        let controller = AbortController::new()
            .map_err(|e| log::warn!("AbortController unavailable: {:?}", e))
            .ok();
        in_flight.set_value(controller.clone());

        log::info!("📤 Uploading '{}' ({} bytes)", file.name(), file.size());

        spawn_local(async move {
            let signal = controller.as_ref().map(AbortController::signal);
            let outcome = process_pdf(&file, &process_pdf_url(), signal.as_ref()).await;

            let current = state.with_untracked(|s| s.is_current(ticket));
            match &outcome {
                Ok(pages) => log::info!("✅ Processed {} page(s)", pages.len()),
                Err(e) if current => log::error!("❌ Error processing PDF: {}", e),
                Err(e) => log::debug!("Superseded upload ended: {}", e),
            }
            if current {
                in_flight.set_value(None);
            }

            state.update(|s| {
                s.complete(ticket, outcome);
            });
        });
    };

    view! {
        <div class="uploader">
            <div class="upload-field">
                <label for="pdfInput" class="upload-label">"Upload PDF Document"</label>
                <input
                    type="file"
                    id="pdfInput"
                    accept=ACCEPTED_EXTENSION
                    on:change=on_file_change
                />
            </div>

            {move || state.with(|s| match s.display() {
                ActiveView::Loading => view! { <ProcessingStatus/> }.into_view(),
                ActiveView::Failed(message) => view! {
                    <UploadErrorMessage message=message.to_string()/>
                }.into_view(),
                ActiveView::Results(pages) => view! {
                    <ResultDisplay results=pages.to_vec()/>
                }.into_view(),
                ActiveView::Idle => ().into_view(),
            })}
        </div>
    }
}
