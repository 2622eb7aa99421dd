//! Internationalization (i18n) support for `istanbul-guide-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   tr/istanbul-guide-ui.ftl   (fallback/reference)
//!   en/istanbul-guide-ui.ftl
//!   ar/istanbul-guide-ui.ftl   (right-to-left)
//! ```
//!
//! Unlike a single global loader, every [`Language`] gets its own
//! `FluentLanguageLoader` whose fallback is the language itself. A message
//! missing from one locale therefore fails the content build for that locale
//! instead of quietly rendering Turkish text in an Arabic page.
//!
//! To add a message:
//! 1. Add `key = value` to `tr/istanbul-guide-ui.ftl`.
//! 2. Add the same key to every other locale (keep variable placeholders identical).
//! 3. Read it in `content::Content::load` and run the tests.
//!
//! NOTE: The hyphenated filename `istanbul-guide-ui.ftl` is canonical across all locales.
use std::fmt;
use std::str::FromStr;

use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use serde::Serialize;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Fluent "domain" (matches the crate / the FTL filename).
pub const DOMAIN: &str = "istanbul-guide-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
pub struct Localizations;

/// The closed set of languages the page ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tr,
    En,
    Ar,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Language; 3] = [Language::Tr, Language::En, Language::Ar];

    /// Language shown before the visitor picks one.
    pub const DEFAULT: Language = Language::Tr;

    /// Primary language subtag, also the folder name under `i18n/`.
    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Name of the language in the language itself (switcher label).
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Tr => "🇹🇷",
            Language::En => "🇬🇧",
            Language::Ar => "🇸🇦",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::Tr | Language::En => TextDirection::Ltr,
        }
    }

    /// Parse a language tag such as `ar`, `en-GB` or `TR`.
    ///
    /// Only the primary subtag is considered; region and script are ignored.
    pub fn from_code(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    pub fn identifier(self) -> Result<LanguageIdentifier, unic_langid::LanguageIdentifierError> {
        self.code().parse()
    }

    /// Build a loader holding only this language's bundle.
    pub fn loader(self) -> Result<FluentLanguageLoader, crate::locale::LocaleError> {
        let id = self.identifier()?;
        let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
        i18n_embed::select(&loader, &Localizations, &[id])?;
        // Placeables are plain numbers; Unicode isolation marks would leak into
        // aria labels and the copyright line.
        loader.set_use_isolating(false);
        Ok(loader)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::locale::LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| crate::locale::LocaleError::Unsupported(s.to_string()))
    }
}

/// Text direction derived from the current language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
