use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// White fill, for dark backgrounds
    #[default]
    Light,
    /// Transparent with a white border, for dark backgrounds
    Ghost,
    /// Transparent with a black border, for light backgrounds
    Outline,
}

impl ButtonVariant {
    fn css_class(self) -> &'static str {
        match self {
            ButtonVariant::Light => "button--light",
            ButtonVariant::Ghost => "button--ghost",
            ButtonVariant::Outline => "button--outline",
        }
    }
}

pub fn button_class(variant: ButtonVariant, class: &str) -> String {
    if class.is_empty() {
        format!("button {}", variant.css_class())
    } else {
        format!("button {} {}", variant.css_class(), class)
    }
}

/// Upper-case call-to-action button.
///
/// Targets behind these buttons (shop, journal, signup) are not part of the
/// landing page, so the button carries no click handler.
#[component]
pub fn Button(
    label: &'static str,
    #[prop(optional)]
    variant: ButtonVariant,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Button type attribute, "button" unless given
    #[prop(optional)]
    button_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button type=button_type.unwrap_or("button") class=button_class(variant, class)>
            {label}
        </button>
    }
}
