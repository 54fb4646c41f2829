use leptos::*;

#[component]
pub fn ProcessingStatus() -> impl IntoView {
    view! {
        <div class="processing-status">
            <div class="spinner"></div>
            <span>"⏳ Processing PDF..."</span>
        </div>
    }
}

#[component]
pub fn UploadErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-message">{message}</div>
    }
}
