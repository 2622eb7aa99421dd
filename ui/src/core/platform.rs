//! Platform detection and small DOM helpers.
//!
//! On native (webview) builds none of the browser capabilities are reachable
//! from Rust, so every probe reports "unavailable" and callers fail open.

use crate::i18n::{Language, TextDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Whether `IntersectionObserver` exists in the host environment.
#[cfg(target_arch = "wasm32")]
pub fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn supports_intersection_observer() -> bool {
    false
}

/// Mirror the current language onto `<html lang dir>` so browser-level
/// features (scrollbars, form controls) follow the page direction.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_locale(language: Language, direction: TextDirection) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(err) = root
        .set_attribute("lang", language.code())
        .and_then(|_| root.set_attribute("dir", direction.as_attr()))
    {
        tracing::warn!("[platform] could not set document locale: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_locale(language: Language, direction: TextDirection) {
    tracing::debug!("[platform] document locale {language}/{direction} (native: no-op)");
}

/// Current vertical scroll offset in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_y() -> f64 {
    0.0
}

/// A `scroll` listener on `window`, removed when dropped.
#[cfg(target_arch = "wasm32")]
pub struct ScrollSubscription {
    callback: wasm_bindgen::closure::Closure<dyn Fn()>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollSubscription {
    pub fn new(on_scroll: impl Fn() + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let callback = wasm_bindgen::closure::Closure::<dyn Fn()>::new(on_scroll);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Native builds have no scroll events to subscribe to.
#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollSubscription;

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSubscription {
    pub fn new(_on_scroll: impl Fn() + 'static) -> Option<Self> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_host_reports_no_observer() {
        assert_eq!(Platform::current(), Platform::Native);
        assert!(!supports_intersection_observer());
        assert!(ScrollSubscription::new(|| {}).is_none());
    }
}
