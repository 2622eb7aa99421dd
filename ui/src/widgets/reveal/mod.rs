//! Scroll-triggered, one-shot entrance transitions.

pub mod engine;
#[cfg(target_arch = "wasm32")]
pub mod observer;
pub mod view;

pub use engine::{IntersectionSample, RevealEngine, RevealOptions, RevealState, DEFAULT_THRESHOLD};
pub use view::Reveal;
