use crate::shared::config::Wordmark;
use leptos::prelude::*;

/// "VOID&VESSEL" logo text; the caller supplies the heading level.
#[component]
pub fn BrandWordmark(wordmark: Wordmark) -> impl IntoView {
    view! {
        <span class="wordmark">
            {wordmark.lead}
            <span class="wordmark__amp">"&"</span>
            {wordmark.tail}
        </span>
    }
}
