//! Interaction state owned by the page root.
//!
//! The page tracks exactly two things: whether the mobile menu is mounted and
//! whether the window has scrolled far enough to compact the header. Both live
//! in one [`PageState`] value held by a single signal; children only see
//! derived read-only signals and callbacks.

use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

/// Mobile menu overlay: mounted only while `Open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub menu: MenuState,
    pub scrolled: bool,
}

impl PageState {
    pub fn open_menu(self) -> Self {
        Self {
            menu: MenuState::Open,
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu: MenuState::Closed,
            ..self
        }
    }

    pub fn with_scroll_offset(self, offset: f64, threshold: f64) -> Self {
        Self {
            scrolled: is_scrolled(offset, threshold),
            ..self
        }
    }
}

/// Strictly past the threshold; sitting exactly on it still counts as top.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

fn current_scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Calls `on_offset` with the window's vertical offset on every scroll event.
///
/// The listener is registered once, when called, and removed when the
/// calling component's owner is cleaned up.
pub fn use_scroll_offset(on_offset: impl Fn(f64) + Send + Sync + 'static) {
    let handle = window_event_listener(ev::scroll, move |_| on_offset(current_scroll_offset()));
    log::debug!("scroll listener registered");

    on_cleanup(move || {
        handle.remove();
        log::debug!("scroll listener removed");
    });
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// Keeps the page underneath from scrolling while `locked` is true.
pub fn use_body_scroll_lock(locked: Signal<bool>) {
    Effect::new(move |_| set_body_scroll_locked(locked.get()));
    on_cleanup(|| set_body_scroll_locked(false));
}
