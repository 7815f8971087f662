use crate::layout::StorefrontPage;
use crate::shared::config::StorefrontConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    view! { <StorefrontPage config=config catalog=contracts::catalog() /> }
}
