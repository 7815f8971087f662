pub mod footer;
pub mod header;
pub mod page_state;
pub mod top_header;

use crate::sections::{FeatureBanners, Hero, JournalGrid, Newsletter, ProductGrid, Ticker};
use crate::shared::config::{StorefrontConfig, Wordmark};
use crate::shared::styles::GlobalStyles;
use contracts::{Catalog, Category};
use footer::Footer;
use header::{Header, MobileMenu};
use leptos::prelude::*;
use page_state::{use_body_scroll_lock, use_scroll_offset, MenuState, PageState};
use top_header::AnnouncementBar;

/// Overlay for the current menu state: mounted only while open.
pub fn menu_overlay(
    menu: MenuState,
    categories: &'static [Category],
    wordmark: Wordmark,
    on_close: Callback<()>,
) -> Option<impl IntoView> {
    match menu {
        MenuState::Open => Some(view! {
            <MobileMenu categories=categories wordmark=wordmark on_close=on_close />
        }),
        MenuState::Closed => None,
    }
}

/// Everything except the overlay; made `inert` while the menu is open so
/// neither pointer nor keyboard focus can reach it.
pub fn content_inert(menu: MenuState) -> bool {
    menu.is_open()
}

/// Page root: owns the interaction state and lays the sections out top to bottom.
///
/// ```text
/// AnnouncementBar
/// Header (sticky)          MobileMenu (fixed overlay, only while open)
/// main: Hero, Ticker, FeatureBanners, ProductGrid, JournalGrid, Newsletter
/// Footer
/// ```
#[component]
pub fn StorefrontPage(config: StorefrontConfig, catalog: &'static Catalog) -> impl IntoView {
    let state = RwSignal::new(PageState::default());
    let threshold = config.header.scroll_threshold;

    use_scroll_offset(move |offset| {
        let current = state.get_untracked();
        let next = current.with_scroll_offset(offset, threshold);
        if next != current {
            log::debug!("header scrolled={} at offset {}", next.scrolled, offset);
            state.set(next);
        }
    });

    let is_scrolled = Signal::derive(move || state.get().scrolled);
    let menu = Memo::new(move |_| state.get().menu);
    use_body_scroll_lock(Signal::derive(move || menu.get().is_open()));

    let open_menu = Callback::new(move |_: ()| {
        log::debug!("mobile menu opened");
        state.update(|s| *s = s.open_menu());
    });
    let close_menu = Callback::new(move |_: ()| {
        log::debug!("mobile menu closed");
        state.update(|s| *s = s.close_menu());
    });

    log::info!(
        "storefront mounted: {} products, {} stories, {} brands",
        catalog.products.len(),
        catalog.stories.len(),
        catalog.brands.len()
    );
    on_cleanup(|| log::info!("storefront unmounted"));

    let StorefrontConfig {
        storefront: branding,
        header: header_config,
        ticker,
        ..
    } = config;
    let menu_wordmark = branding.wordmark.clone();
    let footer_wordmark = branding.wordmark.clone();
    let categories = catalog.categories.as_slice();
    let repeat = ticker.repeat;

    view! {
        <div class="storefront">
            <GlobalStyles ticker=ticker />
            <div class="storefront__content" inert=move || content_inert(menu.get())>
                <AnnouncementBar message=branding.announcement note=branding.announcement_note />
                <Header
                    is_scrolled=is_scrolled
                    categories=categories
                    nav_limit=header_config.nav_limit
                    bag_count=header_config.bag_count
                    wordmark=branding.wordmark
                    on_open_menu=open_menu
                />
                <main class="storefront__main">
                    <Hero />
                    <Ticker brands=catalog.brands.as_slice() repeat=repeat />
                    <FeatureBanners />
                    <ProductGrid products=catalog.products.as_slice() />
                    <JournalGrid stories=catalog.stories.as_slice() />
                    <Newsletter />
                </main>
                <Footer
                    wordmark=footer_wordmark
                    name=branding.name
                    copyright_year=branding.copyright_year
                />
            </div>
            {move || menu_overlay(menu.get(), categories, menu_wordmark.clone(), close_menu)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_overlay(menu: MenuState) -> Option<String> {
        let owner = Owner::new();
        owner.with(|| {
            let categories = contracts::catalog().categories.as_slice();
            let wordmark = StorefrontConfig::default().storefront.wordmark;
            let on_close = Callback::new(|_: ()| {});
            menu_overlay(menu, categories, wordmark, on_close).map(|view| view.to_html())
        })
    }

    #[test]
    fn overlay_absent_while_closed() {
        assert!(render_overlay(MenuState::Closed).is_none());
    }

    #[test]
    fn overlay_mounted_while_open() {
        let html = render_overlay(MenuState::Open).unwrap();
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("aria-label=\"Close menu\""));
    }

    #[test]
    fn test_content_inert_only_while_open() {
        assert!(!content_inert(MenuState::Closed));
        assert!(content_inert(MenuState::Open));
        assert!(!content_inert(PageState::default().open_menu().close_menu().menu));
    }
}
