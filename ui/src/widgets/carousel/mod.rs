//! Auto-advancing slide index with manual override.

pub mod engine;

pub use engine::{CarouselEngine, CarouselError, CAROUSEL_INTERVAL_MS};

use dioxus::prelude::*;

use crate::core::timing;

/// Carousel state bound to a reactive slide count.
///
/// `item_count` is re-evaluated whenever the signals it reads change, and the
/// index is clamped to the new length. The advance task ticks every
/// `interval_ms` regardless of manual selection and is cancelled together
/// with the owning component.
pub fn use_carousel(
    item_count: impl Fn() -> usize + Copy + 'static,
    interval_ms: u64,
) -> Signal<CarouselEngine> {
    let mut engine = use_signal(move || CarouselEngine::new(item_count()));

    use_effect(move || {
        let len = item_count();
        if engine.peek().len() != len {
            engine.with_mut(|c| c.resize(len));
        }
    });

    use_future(move || async move {
        loop {
            timing::sleep_ms(interval_ms).await;
            engine.with_mut(|c| c.advance());
        }
    });

    engine
}
