//! Header component

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-content">
                <h1 class="title">"PDF Document Parser"</h1>
                <p class="subtitle">"Upload and analyze PDF documents using LayoutLM"</p>
            </div>
        </header>
    }
}
