use crate::shared::components::ui::Badge;
use crate::shared::components::BrandWordmark;
use crate::shared::config::Wordmark;
use crate::shared::icons::{icon, Icon};
use contracts::Category;
use leptos::prelude::*;

/// Header classes for the current scroll position.
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-header site-header--scrolled"
    } else {
        "site-header"
    }
}

/// Leading categories shown in the desktop nav, in catalog order.
pub fn desktop_nav(categories: &[Category], limit: usize) -> &[Category] {
    &categories[..limit.min(categories.len())]
}

#[component]
pub fn Header(
    #[prop(into)]
    is_scrolled: Signal<bool>,
    categories: &'static [Category],
    nav_limit: usize,
    /// Placeholder count; the landing page has no cart
    bag_count: u32,
    wordmark: Wordmark,
    on_open_menu: Callback<()>,
) -> impl IntoView {
    view! {
        <header data-zone="header" class=move || header_class(is_scrolled.get())>
            <div class="container">
                <div class="site-header__bar">
                    <div class="site-header__left">
                        <button
                            class="site-header__menu-toggle"
                            type="button"
                            aria-label="Open menu"
                            on:click=move |_| on_open_menu.run(())
                        >
                            {icon(Icon::Menu, 24)}
                        </button>
                        <nav class="site-header__nav">
                            {desktop_nav(categories, nav_limit)
                                .iter()
                                .map(|category| {
                                    view! {
                                        <a href="#" class="site-header__nav-link">
                                            {category.as_str()}
                                            <span class="site-header__nav-underline"></span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>

                    <div class="site-header__logo">
                        <h1 class="site-header__wordmark">
                            <BrandWordmark wordmark=wordmark />
                        </h1>
                    </div>

                    <div class="site-header__actions">
                        <button class="icon-action icon-action--search" type="button" aria-label="Search">
                            {icon(Icon::Search, 20)}
                        </button>
                        <button class="icon-action" type="button" aria-label="Account">
                            {icon(Icon::User, 20)}
                        </button>
                        <button class="icon-action icon-action--bag" type="button" aria-label="Bag">
                            {icon(Icon::ShoppingBag, 20)}
                            <Badge label=bag_count.to_string() class="icon-action__count" />
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::StorefrontConfig;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render(scrolled: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let config = StorefrontConfig::default();
            let is_scrolled = Signal::derive(move || scrolled);
            view! {
                <Header
                    is_scrolled=is_scrolled
                    categories=contracts::catalog().categories.as_slice()
                    nav_limit=config.header.nav_limit
                    bag_count=config.header.bag_count
                    wordmark=config.storefront.wordmark
                    on_open_menu=Callback::new(|_: ()| {})
                />
            }
            .to_html()
        })
    }

    #[test]
    fn renders_first_four_categories_in_nav() {
        let html = render(false);
        assert_eq!(html.matches("class=\"site-header__nav-link\"").count(), 4);
        let men = html.find(">Men").unwrap();
        let beauty = html.find(">Beauty").unwrap();
        assert!(men < beauty);
        assert!(!html.contains(">Launches"));
    }

    #[test]
    fn renders_bag_count_badge() {
        let html = render(false);
        assert!(html.contains("class=\"badge icon-action__count\">2</span>"));
    }

    #[test]
    fn scrolled_flag_switches_header_class() {
        assert!(render(true).contains("class=\"site-header site-header--scrolled\""));
        let html = render(false);
        assert!(html.contains("class=\"site-header\""));
        assert!(!html.contains("site-header--scrolled"));
    }

    fn categories() -> Vec<Category> {
        ["Men", "Women", "Lifestyle", "Beauty", "Brands", "Launches", "Sale"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_desktop_nav_takes_first_four() {
        let all = categories();
        assert_eq!(desktop_nav(&all, 4), &["Men", "Women", "Lifestyle", "Beauty"]);
    }

    #[test]
    fn test_desktop_nav_short_list() {
        let all = categories();
        assert_eq!(desktop_nav(&all[..2], 4).len(), 2);
        assert!(desktop_nav(&[], 4).is_empty());
    }

    #[test]
    fn test_header_class_follows_scroll_flag() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(header_class(true), "site-header site-header--scrolled");
    }
}
