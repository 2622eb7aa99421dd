//! Stateful building blocks used by the page sections.

pub mod carousel;
pub mod fallback_image;
pub mod reveal;

pub use carousel::{use_carousel, CarouselEngine, CarouselError, CAROUSEL_INTERVAL_MS};
pub use fallback_image::{FallbackImage, ImageSource, ImageState};
pub use reveal::{Reveal, RevealEngine, RevealOptions, RevealState};
