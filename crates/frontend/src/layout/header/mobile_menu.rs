use crate::shared::components::BrandWordmark;
use crate::shared::config::Wordmark;
use crate::shared::icons::{icon, Icon};
use contracts::Category;
use leptos::prelude::*;

struct MenuLink {
    label: &'static str,
    class: &'static str,
}

const SECONDARY_LINKS: [MenuLink; 3] = [
    MenuLink {
        label: "Account",
        class: "mobile-menu__link",
    },
    MenuLink {
        label: "Contact",
        class: "mobile-menu__link",
    },
    MenuLink {
        label: "Sale",
        class: "mobile-menu__link mobile-menu__link--sale",
    },
];

/// Full-screen navigation overlay.
///
/// The page mounts this only while the menu is open; it covers the whole
/// viewport above the sticky header, so nothing underneath is reachable.
#[component]
pub fn MobileMenu(
    categories: &'static [Category],
    wordmark: Wordmark,
    on_close: Callback<()>,
) -> impl IntoView {
    log::debug!("mobile menu mounted");
    on_cleanup(|| log::debug!("mobile menu unmounted"));

    view! {
        <div data-zone="mobile-menu" class="mobile-menu" role="dialog" aria-modal="true">
            <div class="mobile-menu__bar">
                <h2 class="mobile-menu__wordmark">
                    <BrandWordmark wordmark=wordmark />
                </h2>
                <button
                    class="mobile-menu__close"
                    type="button"
                    aria-label="Close menu"
                    on:click=move |_| on_close.run(())
                >
                    {icon(Icon::Close, 32)}
                </button>
            </div>
            <div class="mobile-menu__body hide-scrollbar">
                {categories
                    .iter()
                    .map(|category| {
                        view! {
                            <a href="#" class="mobile-menu__category">
                                {category.as_str()}
                                <span class="mobile-menu__arrow">{icon(Icon::ArrowRight, 24)}</span>
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="mobile-menu__links">
                    {SECONDARY_LINKS
                        .iter()
                        .map(|link| view! { <a href="#" class=link.class>{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::StorefrontConfig;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn text_after<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
        html.split(marker)
            .skip(1)
            .filter_map(|rest| rest.split_once('>'))
            .filter_map(|(_, text)| text.split('<').next())
            .collect()
    }

    #[test]
    fn renders_every_category_then_secondary_links() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <MobileMenu
                    categories=contracts::catalog().categories.as_slice()
                    wordmark=StorefrontConfig::default().storefront.wordmark
                    on_close=Callback::new(|_: ()| {})
                />
            }
            .to_html()
        });

        assert_eq!(
            text_after(&html, "<a href=\"#\" class=\"mobile-menu__category\""),
            vec!["Men", "Women", "Lifestyle", "Beauty", "Brands", "Launches", "Sale"]
        );
        assert_eq!(
            text_after(&html, "<a href=\"#\" class=\"mobile-menu__link"),
            vec!["Account", "Contact", "Sale"]
        );

        let last_category = html.rfind("mobile-menu__category").unwrap();
        let first_link = html.find("<a href=\"#\" class=\"mobile-menu__link").unwrap();
        assert!(last_category < first_link);
    }
}
