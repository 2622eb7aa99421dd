//! Image element that swaps to an alternate source once on load failure.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Fallback,
}

/// `Primary` → `Fallback` on the first load error; `Fallback` is terminal so
/// a broken alternate never loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageState {
    primary: String,
    fallback: String,
    source: ImageSource,
}

impl ImageState {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            source: ImageSource::Primary,
        }
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    pub fn src(&self) -> &str {
        match self.source {
            ImageSource::Primary => &self.primary,
            ImageSource::Fallback => &self.fallback,
        }
    }

    /// Returns `true` if the error caused a swap.
    pub fn on_error(&mut self) -> bool {
        match self.source {
            ImageSource::Primary => {
                self.source = ImageSource::Fallback;
                true
            }
            ImageSource::Fallback => false,
        }
    }
}

#[component]
pub fn FallbackImage(
    #[props(into)] src: String,
    #[props(into)] fallback: String,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
) -> Element {
    let mut state = use_signal(|| ImageState::new(src, fallback));
    let current = state.read().src().to_string();

    rsx! {
        img {
            class: "{class}",
            src: "{current}",
            alt: "{alt}",
            onerror: move |_| {
                let failed = state.peek().src().to_string();
                if state.with_mut(|s| s.on_error()) {
                    tracing::warn!("[image] {failed} failed to load; using fallback");
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_primary() {
        let state = ImageState::new("a.png", "b.png");
        assert_eq!(state.source(), ImageSource::Primary);
        assert_eq!(state.src(), "a.png");
    }

    #[test]
    fn swaps_exactly_once() {
        let mut state = ImageState::new("https://broken.invalid/x.png", "b.png");
        assert!(state.on_error());
        assert_eq!(state.src(), "b.png");

        // The fallback failing too must not trigger another swap.
        assert!(!state.on_error());
        assert!(!state.on_error());
        assert_eq!(state.source(), ImageSource::Fallback);
        assert_eq!(state.src(), "b.png");
    }
}
