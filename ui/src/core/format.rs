//! Formatting helpers for presenting content.

/// First `words` whitespace-separated words of `text`, followed by an
/// ellipsis when anything was cut.
pub fn teaser(text: &str, words: usize) -> String {
    let mut parts = text.split_whitespace();
    let head: Vec<&str> = parts.by_ref().take(words).collect();
    let mut out = head.join(" ");
    if parts.next().is_some() {
        out.push_str("...");
    }
    out
}

/// Star string for a testimonial rating, capped at five.
pub fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teaser_cuts_after_word_count() {
        assert_eq!(teaser("Discover the Heart of Istanbul", 3), "Discover the Heart...");
        assert_eq!(teaser("Short title", 3), "Short title");
        assert_eq!(teaser("", 3), "");
    }

    #[test]
    fn stars_are_capped() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
