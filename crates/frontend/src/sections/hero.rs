use crate::shared::components::ui::{Button, ButtonVariant};
use leptos::prelude::*;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1469334031218-e382a71b716b?q=80&w=2000&auto=format&fit=crop";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <img class="hero__image" src=HERO_IMAGE alt="Hero" />
            <div class="hero__scrim"></div>
            <div class="hero__content">
                <div class="hero__copy">
                    <p class="hero__kicker">"Spring / Summer 2024"</p>
                    <h2 class="hero__title">"Urban" <br /> "Vessels"</h2>
                    <p class="hero__lead">
                        "Explore the latest curation of technical outerwear and contemporary staples designed for the modern metropolis."
                    </p>
                    <div class="hero__actions">
                        <Button label="Shop Men" variant=ButtonVariant::Light />
                        <Button label="Shop Women" variant=ButtonVariant::Ghost />
                    </div>
                </div>
            </div>
        </section>
    }
}
