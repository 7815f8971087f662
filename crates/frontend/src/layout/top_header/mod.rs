use leptos::prelude::*;

/// Thin shipping notice above the header.
#[component]
pub fn AnnouncementBar(message: String, note: String) -> impl IntoView {
    view! {
        <div data-zone="announcement" class="announcement">
            <span>
                {message}
                " — "
                <span class="announcement__note">{note}</span>
            </span>
        </div>
    }
}
