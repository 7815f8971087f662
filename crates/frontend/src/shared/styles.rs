//! Stylesheet for the landing page.
//!
//! Kept as Rust constants and injected once by [`GlobalStyles`], so the
//! bundle has no separate CSS asset. Breakpoints follow the usual
//! small / tablet / desktop steps.

use crate::shared::config::TickerConfig;
use leptos::prelude::*;

pub const BREAKPOINT_SM_PX: u32 = 640;
pub const BREAKPOINT_MD_PX: u32 = 768;
pub const BREAKPOINT_LG_PX: u32 = 1024;

/// Overlay sits above the sticky header.
pub const Z_HEADER: u32 = 50;
pub const Z_OVERLAY: u32 = 60;

const BASE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background: #fff; color: #000; font-family: ui-sans-serif, system-ui, -apple-system, "Helvetica Neue", Arial, sans-serif; }
::selection { background: #000; color: #fff; }
a { color: inherit; text-decoration: none; }
button { font: inherit; color: inherit; background: none; border: 0; padding: 0; cursor: pointer; }
img { display: block; }
h1, h2, h3, h4, p { margin: 0; }

.container { width: 100%; max-width: 1280px; margin: 0 auto; padding: 0 16px; }
.kicker { font-size: 12px; font-weight: 700; letter-spacing: 0.3em; text-transform: uppercase; color: #9ca3af; }
.section-title { font-size: 30px; font-weight: 900; text-transform: uppercase; letter-spacing: -0.05em; }
.hide-scrollbar::-webkit-scrollbar { display: none; }
.hide-scrollbar { -ms-overflow-style: none; scrollbar-width: none; }

.wordmark { font-weight: 900; font-style: italic; text-transform: uppercase; letter-spacing: -0.05em; line-height: 1; }
.wordmark__amp { font-style: normal; }

.button { display: inline-block; padding: 16px 40px; font-size: 12px; font-weight: 900; letter-spacing: 0.1em; text-transform: uppercase; border: 1px solid transparent; transition: all 300ms; }
.button--light { background: #fff; color: #000; border-color: #fff; }
.button--light:hover { background: #000; color: #fff; }
.button--ghost { background: transparent; color: #fff; border-color: #fff; }
.button--ghost:hover { background: #fff; color: #000; }
.button--outline { background: transparent; color: #000; border-color: #000; padding: 12px 24px; }
.button--outline:hover { background: #000; color: #fff; }

.badge { display: inline-block; background: #000; color: #fff; font-size: 10px; font-weight: 700; letter-spacing: 0.05em; text-transform: uppercase; padding: 4px 12px; }

.announcement { background: #000; color: #fff; padding: 10px 16px; text-align: center; font-size: 10px; font-weight: 700; letter-spacing: 0.15em; text-transform: uppercase; border-bottom: 1px solid #1f2937; }
.announcement__note { color: #9ca3af; }

.site-header { position: sticky; top: 0; z-index: 50; background: #fff; padding: 16px 0; transition: all 300ms; }
.site-header--scrolled { background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(12px); border-bottom: 1px solid #f3f4f6; padding: 8px 0; }
.site-header__bar { position: relative; display: flex; align-items: center; justify-content: space-between; }
.site-header__left { display: flex; align-items: center; }
.site-header__menu-toggle { margin-right: 16px; }
.site-header__nav { display: none; gap: 32px; }
.site-header__nav-link { position: relative; font-size: 11px; font-weight: 900; letter-spacing: 0.1em; text-transform: uppercase; transition: color 150ms; }
.site-header__nav-link:hover { color: #6b7280; }
.site-header__nav-underline { position: absolute; left: 0; bottom: -4px; width: 0; height: 2px; background: #000; transition: width 300ms; }
.site-header__nav-link:hover .site-header__nav-underline { width: 100%; }
.site-header__logo { position: absolute; left: 50%; transform: translateX(-50%); cursor: pointer; }
.site-header__wordmark { font-size: 24px; }
.site-header__wordmark .wordmark__amp { color: #9ca3af; }
.site-header__actions { display: flex; align-items: center; gap: 20px; }
.icon-action { position: relative; transition: transform 150ms; }
.icon-action:hover { transform: scale(1.1); }
.icon-action--search { display: none; }
.icon-action__count { position: absolute; top: -6px; right: -6px; width: 16px; height: 16px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; padding: 0; font-size: 9px; }

.mobile-menu { position: fixed; inset: 0; z-index: 60; background: #fff; display: flex; flex-direction: column; animation: slide-in-left 300ms ease-out; }
.mobile-menu__bar { display: flex; justify-content: space-between; align-items: center; padding: 24px; border-bottom: 1px solid #e5e7eb; }
.mobile-menu__wordmark { font-size: 20px; }
.mobile-menu__close { transition: transform 300ms; }
.mobile-menu__close:hover { transform: rotate(90deg); }
.mobile-menu__body { display: flex; flex-direction: column; gap: 24px; padding: 24px; overflow-y: auto; }
.mobile-menu__category { display: flex; justify-content: space-between; align-items: center; font-size: 36px; font-weight: 900; text-transform: uppercase; letter-spacing: -0.05em; transition: color 150ms; }
.mobile-menu__category:hover { color: #6b7280; }
.mobile-menu__arrow { opacity: 0; transform: translateX(-16px); transition: all 150ms; }
.mobile-menu__category:hover .mobile-menu__arrow { opacity: 1; transform: translateX(0); }
.mobile-menu__links { margin-top: 32px; padding-top: 32px; border-top: 1px solid #e5e7eb; display: flex; flex-direction: column; gap: 16px; }
.mobile-menu__link { font-size: 14px; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
.mobile-menu__link--sale { color: #dc2626; }
@keyframes slide-in-left { from { transform: translateX(-100%); } to { transform: translateX(0); } }

.hero { position: relative; height: 85vh; width: 100%; overflow: hidden; background: #111827; }
.hero__image { width: 100%; height: 100%; object-fit: cover; opacity: 0.8; }
.hero__scrim { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.8), transparent 50%, rgba(0,0,0,0.2)); }
.hero__content { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: flex-end; padding: 32px; color: #fff; }
.hero__copy { max-width: 896px; display: flex; flex-direction: column; gap: 24px; animation: fade-up 1000ms ease-out; }
.hero__kicker { font-size: 12px; font-weight: 700; letter-spacing: 0.3em; text-transform: uppercase; color: #d1d5db; }
.hero__title { font-size: 60px; font-weight: 900; letter-spacing: -0.05em; line-height: 0.85; text-transform: uppercase; }
.hero__lead { font-size: 14px; font-weight: 500; max-width: 512px; line-height: 1.6; color: #d1d5db; }
.hero__actions { display: flex; flex-wrap: wrap; gap: 16px; padding-top: 32px; }
@keyframes fade-up { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: translateY(0); } }

.ticker { position: relative; overflow: hidden; white-space: nowrap; background: #fff; padding: 24px 0; border-top: 1px solid #f3f4f6; border-bottom: 1px solid #f3f4f6; }
.ticker__track { display: flex; width: max-content; }
.ticker__track:hover { animation-play-state: paused; }
.ticker__item { margin: 0 32px; font-size: 20px; font-weight: 900; font-style: italic; text-transform: uppercase; letter-spacing: -0.05em; color: #d1d5db; cursor: default; user-select: none; transition: color 150ms; }
.ticker__item:hover { color: #000; }

.feature-banners { display: grid; grid-template-columns: 1fr; gap: 4px; background: #fff; }
.feature-banner { position: relative; overflow: hidden; height: 500px; display: flex; flex-direction: column; justify-content: flex-end; padding: 32px; cursor: pointer; }
.feature-banner--left { align-items: flex-start; text-align: left; }
.feature-banner--right { align-items: flex-end; text-align: right; }
.feature-banner__image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; transition: transform 1000ms; }
.feature-banner:hover .feature-banner__image { transform: scale(1.05); }
.feature-banner__scrim { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.6), transparent); }
.feature-banner__copy { position: relative; z-index: 10; max-width: 576px; display: flex; flex-direction: column; gap: 16px; }
.feature-banner--right .feature-banner__copy { align-items: flex-end; }
.feature-banner__subtitle { display: inline-block; border-bottom: 2px solid #fff; padding-bottom: 4px; font-size: 12px; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; color: #fff; }
.feature-banner__title { font-size: 36px; font-weight: 900; text-transform: uppercase; letter-spacing: -0.05em; line-height: 0.9; color: #fff; }
.feature-banner__cta { padding-top: 16px; opacity: 0; transition: opacity 500ms 100ms; }
.feature-banner:hover .feature-banner__cta { opacity: 1; }

.products { padding: 80px 0; }
.products__head { display: flex; flex-direction: column; justify-content: space-between; gap: 16px; margin-bottom: 48px; }
.products__heading { display: flex; flex-direction: column; gap: 8px; }
.products__view-all { display: inline-flex; align-items: center; gap: 8px; width: fit-content; font-size: 12px; font-weight: 900; letter-spacing: 0.1em; text-transform: uppercase; border-bottom: 1px solid #000; padding-bottom: 4px; }
.products__grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); column-gap: 16px; row-gap: 40px; }

.product-card { display: flex; flex-direction: column; height: 100%; cursor: pointer; }
.product-card__media { position: relative; aspect-ratio: 3 / 4; overflow: hidden; background: #f3f4f6; margin-bottom: 16px; }
.product-card__image { width: 100%; height: 100%; object-fit: cover; transition: transform 700ms ease-in-out; }
.product-card:hover .product-card__image { transform: scale(1.05); }
.product-card__tag { position: absolute; top: 0; left: 0; z-index: 10; }
.product-card__shade { position: absolute; inset: 0; background: rgba(0,0,0,0.05); opacity: 0; transition: opacity 300ms; }
.product-card:hover .product-card__shade { opacity: 1; }
.product-card__add { position: absolute; right: 16px; bottom: 16px; z-index: 20; background: #fff; padding: 12px; border-radius: 9999px; box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1); opacity: 0; transform: translateY(16px); transition: all 300ms; }
.product-card:hover .product-card__add { opacity: 1; transform: translateY(0); }
.product-card__add:hover { background: #000; color: #fff; }
.product-card__info { display: flex; flex-direction: column; gap: 4px; }
.product-card__brand { font-size: 11px; font-weight: 900; letter-spacing: 0.1em; text-transform: uppercase; color: #6b7280; }
.product-card__name { font-size: 14px; font-weight: 700; line-height: 1.25; }
.product-card:hover .product-card__name { text-decoration: underline; text-underline-offset: 2px; }
.product-card__price { font-size: 14px; font-weight: 500; }

.journal { background: #f9fafb; padding: 80px 0; }
.journal__head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 48px; }
.journal__all--wide { display: none; }
.journal__all--narrow { width: 100%; margin-top: 32px; }
.journal__grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
.story-tile { cursor: pointer; }
.story-tile__media { aspect-ratio: 4 / 3; overflow: hidden; background: #e5e7eb; margin-bottom: 24px; }
.story-tile__image { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); transition: transform 700ms, filter 700ms; }
.story-tile:hover .story-tile__image { transform: scale(1.05); filter: grayscale(0); }
.story-tile__category { display: inline-block; background: #fff; border: 1px solid #e5e7eb; padding: 4px 8px; font-size: 10px; font-weight: 700; letter-spacing: 0.1em; color: #6b7280; }
.story-tile__title { margin-top: 8px; font-size: 20px; font-weight: 700; line-height: 1.25; }
.story-tile:hover .story-tile__title { text-decoration: underline; text-underline-offset: 4px; }

.newsletter { background: #000; color: #fff; padding: 80px 0; }
.newsletter__inner { max-width: 672px; text-align: center; }
.newsletter__icon { display: flex; justify-content: center; margin-bottom: 24px; opacity: 0.5; }
.newsletter__title { margin-bottom: 16px; }
.newsletter__lead { color: #9ca3af; font-weight: 500; margin-bottom: 32px; }
.newsletter__form { display: flex; flex-direction: column; gap: 16px; }
.newsletter__input { flex: 1; background: transparent; border: 1px solid #374151; padding: 16px 24px; color: #fff; font-size: 12px; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
.newsletter__input:focus { outline: none; border-color: #fff; }
.newsletter__input::placeholder { color: #4b5563; }

.site-footer { background: #fff; padding: 80px 0 40px; border-top: 1px solid #f3f4f6; }
.site-footer__grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 40px; margin-bottom: 80px; }
.site-footer__about { grid-column: span 2; }
.site-footer__wordmark { font-size: 24px; margin-bottom: 24px; }
.site-footer__blurb { font-size: 14px; color: #6b7280; max-width: 320px; line-height: 1.6; }
.site-footer__column { display: flex; flex-direction: column; gap: 16px; }
.site-footer__heading { font-size: 12px; font-weight: 900; letter-spacing: 0.1em; text-transform: uppercase; }
.site-footer__links { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 8px; font-size: 14px; font-weight: 500; color: #6b7280; }
.site-footer__links a:hover { color: #000; }
.site-footer__social { display: flex; gap: 16px; }
.site-footer__social-link { background: #f3f4f6; padding: 8px; border-radius: 9999px; transition: all 150ms; }
.site-footer__social-link:hover { background: #000; color: #fff; }
.site-footer__legal { display: flex; flex-direction: column; justify-content: space-between; align-items: center; gap: 16px; padding-top: 32px; border-top: 1px solid #f3f4f6; font-size: 10px; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: #9ca3af; }
.site-footer__notes { display: flex; gap: 24px; }
"#;

const SMALL_CSS: &str = r#"
.icon-action--search { display: block; }
.newsletter__form { flex-direction: row; }
"#;

const TABLET_CSS: &str = r#"
.container { padding: 0 32px; }
.section-title { font-size: 48px; }
.site-header__menu-toggle { display: none; }
.site-header__nav { display: flex; }
.site-header__wordmark { font-size: 30px; }
.hero__content { padding: 64px; }
.hero__kicker { font-size: 14px; }
.hero__title { font-size: 96px; }
.hero__lead { font-size: 18px; }
.ticker__item { margin: 0 48px; font-size: 24px; }
.feature-banners { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.feature-banner { height: 650px; padding: 48px; }
.feature-banner__title { font-size: 60px; }
.products { padding: 112px 0; }
.products__head { flex-direction: row; align-items: flex-end; }
.products__grid { column-gap: 32px; }
.journal { padding: 112px 0; }
.journal__all--wide { display: block; }
.journal__all--narrow { display: none; }
.journal__grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.story-tile__title { font-size: 24px; }
.site-footer__grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.site-footer__legal { flex-direction: row; }
"#;

const DESKTOP_CSS: &str = r#"
.hero__content { padding: 96px; }
.hero__title { font-size: 128px; }
.products__grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.site-footer__grid { grid-template-columns: repeat(5, minmax(0, 1fr)); }
"#;

/// Keyframes for the brand marquee.
///
/// The track holds `repeat` identical copies of the brand list, so moving it
/// by `100 / repeat` percent shifts exactly one copy and the reset is invisible.
pub fn ticker_css(ticker: &TickerConfig) -> String {
    let shift = 100.0 / ticker.repeat.max(1) as f64;
    format!(
        "@keyframes ticker-scroll {{ from {{ transform: translateX(0); }} to {{ transform: translateX(-{shift}%); }} }}\n\
         .ticker__track {{ animation: ticker-scroll {}s linear infinite; }}\n",
        ticker.duration_secs
    )
}

pub fn stylesheet(ticker: &TickerConfig) -> String {
    format!(
        "{BASE_CSS}\n@media (min-width: {BREAKPOINT_SM_PX}px) {{{SMALL_CSS}}}\n\
         @media (min-width: {BREAKPOINT_MD_PX}px) {{{TABLET_CSS}}}\n\
         @media (min-width: {BREAKPOINT_LG_PX}px) {{{DESKTOP_CSS}}}\n{}",
        ticker_css(ticker)
    )
}

#[component]
pub fn GlobalStyles(ticker: TickerConfig) -> impl IntoView {
    view! { <style inner_html=stylesheet(&ticker)></style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(repeat: usize) -> TickerConfig {
        TickerConfig {
            repeat,
            duration_secs: 20,
        }
    }

    #[test]
    fn test_ticker_shifts_one_copy() {
        let css = ticker_css(&ticker(4));
        assert!(css.contains("translateX(-25%)"));
        assert!(css.contains("ticker-scroll 20s linear infinite"));

        let css = ticker_css(&ticker(2));
        assert!(css.contains("translateX(-50%)"));
    }

    #[test]
    fn test_stylesheet_breakpoints() {
        let css = stylesheet(&ticker(4));
        assert!(css.contains("@media (min-width: 640px)"));
        assert!(css.contains("@media (min-width: 768px)"));
        assert!(css.contains("@media (min-width: 1024px)"));
    }

    #[test]
    fn test_overlay_layers_above_header() {
        assert!(Z_OVERLAY > Z_HEADER);
        assert!(BASE_CSS.contains(&format!("z-index: {};", Z_HEADER)));
        assert!(BASE_CSS.contains(&format!("z-index: {};", Z_OVERLAY)));
    }
}
