//! Visibility state machine for a single revealed element.
//!
//! `Hidden` → `Visible` on the first sample that intersects the viewport by at
//! least the configured fraction. `Visible` is terminal.

/// Fraction of the element that must be on screen before it is revealed.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// One observation delivered by the host's intersection mechanism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element's area, `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealEngine {
    state: RevealState,
    options: RevealOptions,
}

impl RevealEngine {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            state: RevealState::Hidden,
            options,
        }
    }

    /// Engine for hosts without visibility detection: content starts shown.
    pub fn visible(options: RevealOptions) -> Self {
        Self {
            state: RevealState::Visible,
            options,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Feed a sample. Returns `true` when this sample revealed the element,
    /// i.e. the caller should stop observing.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.is_visible() {
            return false;
        }
        if sample.is_intersecting && sample.ratio >= self.options.threshold {
            self.state = RevealState::Visible;
            return true;
        }
        false
    }

    /// Detection became unavailable after mount; never leave content hidden.
    pub fn fail_open(&mut self) {
        self.state = RevealState::Visible;
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(is_intersecting: bool, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn stays_hidden_until_intersecting() {
        let mut engine = RevealEngine::default();
        assert!(!engine.observe(sample(false, 0.0)));
        assert_eq!(engine.state(), RevealState::Hidden);
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut engine = RevealEngine::default();
        assert!(!engine.observe(sample(true, 0.05)));
        assert_eq!(engine.state(), RevealState::Hidden);
    }

    #[test]
    fn visible_is_terminal() {
        let mut engine = RevealEngine::default();
        assert!(engine.observe(sample(true, 0.25)));
        assert_eq!(engine.state(), RevealState::Visible);

        // Scrolling away must not hide it again, nor report a second reveal.
        assert!(!engine.observe(sample(false, 0.0)));
        assert_eq!(engine.state(), RevealState::Visible);
    }

    #[test]
    fn instances_are_independent() {
        let mut first = RevealEngine::default();
        let second = RevealEngine::default();
        first.observe(sample(true, 1.0));
        assert!(first.is_visible());
        assert!(!second.is_visible());
    }

    #[test]
    fn fail_open_shows_content() {
        assert!(RevealEngine::visible(RevealOptions::default()).is_visible());

        let mut engine = RevealEngine::default();
        engine.fail_open();
        assert!(engine.is_visible());
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut engine = RevealEngine::new(RevealOptions { threshold: 0.5 });
        assert!(!engine.observe(sample(true, 0.4)));
        assert!(engine.observe(sample(true, 0.5)));
    }
}
