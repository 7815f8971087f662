use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::icons::{icon, Icon};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Email capture. Nothing is stored or sent: the signup service is not part
/// of the landing page, so submission only stops the browser's default
/// form post.
#[component]
pub fn Newsletter() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("newsletter submit ignored: no signup backend");
    };

    view! {
        <section class="newsletter">
            <div class="container newsletter__inner">
                <div class="newsletter__icon">{icon(Icon::Mail, 32)}</div>
                <h2 class="section-title newsletter__title">"Join The Community"</h2>
                <p class="newsletter__lead">
                    "Sign up for early access to drops, exclusive content, and 10% off your first order."
                </p>
                <form class="newsletter__form" on:submit=on_submit>
                    <input class="newsletter__input" type="email" placeholder="ENTER YOUR EMAIL" />
                    <Button label="Subscribe" variant=ButtonVariant::Light button_type="submit" />
                </form>
            </div>
        </section>
    }
}
