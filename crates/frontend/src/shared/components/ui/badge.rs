use leptos::prelude::*;

/// Small black label: product tags and the bag counter
#[component]
pub fn Badge(
    /// Badge text, rendered as given
    #[prop(into)]
    label: String,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "badge".to_string()
    } else {
        format!("badge {}", class)
    };

    view! { <span class=class>{label}</span> }
}
