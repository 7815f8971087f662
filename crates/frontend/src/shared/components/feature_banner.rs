use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// Which side of the tile the copy block anchors to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerAlign {
    #[default]
    Left,
    Right,
}

pub fn banner_class(align: BannerAlign, dark: bool) -> String {
    let side = match align {
        BannerAlign::Left => "feature-banner--left",
        BannerAlign::Right => "feature-banner--right",
    };
    // `--dark` has no rules yet; it is carried so themes can hook it.
    if dark {
        format!("feature-banner {} feature-banner--dark", side)
    } else {
        format!("feature-banner {}", side)
    }
}

/// Full-bleed promotional tile with a title, subtitle and "Explore" call to action.
#[component]
pub fn FeatureBanner(
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
    #[prop(optional)]
    align: BannerAlign,
    #[prop(optional)]
    dark: bool,
) -> impl IntoView {
    view! {
        <div class=banner_class(align, dark)>
            <img class="feature-banner__image" src=image alt=title loading="lazy" />
            <div class="feature-banner__scrim"></div>
            <div class="feature-banner__copy">
                <span class="feature-banner__subtitle">{subtitle}</span>
                <h3 class="feature-banner__title">{title}</h3>
                <div class="feature-banner__cta">
                    <Button label="Explore" />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alignment_is_left() {
        assert_eq!(BannerAlign::default(), BannerAlign::Left);
        assert_eq!(banner_class(BannerAlign::default(), false), "feature-banner feature-banner--left");
    }

    #[test]
    fn test_right_alignment() {
        assert_eq!(banner_class(BannerAlign::Right, false), "feature-banner feature-banner--right");
    }

    #[test]
    fn test_dark_is_only_a_modifier() {
        assert_eq!(
            banner_class(BannerAlign::Left, true),
            "feature-banner feature-banner--left feature-banner--dark"
        );
    }
}
