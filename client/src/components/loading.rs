//! Full-height loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}
