//! Index state for a fixed list of slides.

use thiserror::Error;

use crate::i18n::TextDirection;

/// Period of the automatic advance.
pub const CAROUSEL_INTERVAL_MS: u64 = 6_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselEngine {
    index: usize,
    len: usize,
}

impl CarouselEngine {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Timer tick: move to the next slide, wrapping at the end.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Manual selection. The automatic cadence is not affected.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// The slide list changed length (e.g. after a language switch). An index
    /// that no longer exists resets to the first slide.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Horizontal track offset in percent for the current slide.
    pub fn offset_percent(&self, direction: TextDirection) -> i64 {
        let offset = self.index as i64 * 100;
        match direction {
            TextDirection::Ltr => -offset,
            TextDirection::Rtl => offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_start() {
        let mut engine = CarouselEngine::new(3);
        for _ in 0..3 {
            engine.advance();
        }
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn cycle_law_holds_from_any_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut engine = CarouselEngine::new(len);
                engine.select(start).unwrap();
                for _ in 0..(len * 2) {
                    engine.advance();
                }
                assert_eq!(engine.index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn manual_select_overrides_auto_advance() {
        let mut engine = CarouselEngine::new(3);
        engine.advance();
        engine.select(2).unwrap();
        assert_eq!(engine.index(), 2);
        engine.advance();
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn out_of_range_select_is_rejected() {
        let mut engine = CarouselEngine::new(3);
        engine.select(1).unwrap();
        assert_eq!(
            engine.select(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(engine.index(), 1);
    }

    #[test]
    fn shrinking_resets_dangling_index() {
        let mut engine = CarouselEngine::new(5);
        engine.select(4).unwrap();
        engine.resize(3);
        assert_eq!(engine.index(), 0);
        assert_eq!(engine.len(), 3);

        engine.select(2).unwrap();
        engine.resize(4);
        assert_eq!(engine.index(), 2);
    }

    #[test]
    fn empty_carousel_ignores_ticks() {
        let mut engine = CarouselEngine::new(0);
        engine.advance();
        assert_eq!(engine.index(), 0);
        assert!(engine.select(0).is_err());
    }

    #[test]
    fn offset_mirrors_for_rtl() {
        let mut engine = CarouselEngine::new(3);
        engine.select(2).unwrap();
        assert_eq!(engine.offset_percent(TextDirection::Ltr), -200);
        assert_eq!(engine.offset_percent(TextDirection::Rtl), 200);
    }
}
