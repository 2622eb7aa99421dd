//! Locale context: the visitor's selected language, the derived text
//! direction and the resolved content tree.
//!
//! The state is a plain value ([`LocaleState`]) so it can be exercised without
//! a renderer. Components reach it through a [`LocaleHandle`] provided once at
//! the root with [`use_locale_provider`] and read with [`use_locale`]; there is
//! no ambient global language.
//!
//! ```ignore
//! #[component]
//! fn Root() -> Element {
//!     use_locale_provider(Language::DEFAULT);
//!     rsx! { Landing {} }
//! }
//!
//! #[component]
//! fn Title() -> Element {
//!     let locale = use_locale();
//!     let content = locale.content();
//!     rsx! { h1 { dir: "{locale.direction()}", "{content.hero.title}" } }
//! }
//! ```
use dioxus::prelude::*;
use thiserror::Error;

use crate::content::{Content, ContentRepository};
use crate::i18n::{Language, TextDirection};

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("unsupported language code `{0}`")]
    Unsupported(String),
    #[error("locale `{language}` has no message `{key}`")]
    MissingMessage {
        language: Language,
        key: &'static str,
    },
    #[error("invalid language identifier: {0}")]
    Identifier(#[from] unic_langid::LanguageIdentifierError),
    #[error(transparent)]
    Embed(#[from] i18n_embed::I18nEmbedError),
}

/// Selected language plus the repository it resolves against.
#[derive(Debug, Clone, Copy)]
pub struct LocaleState {
    language: Language,
    repository: &'static ContentRepository,
}

impl LocaleState {
    pub fn new(language: Language) -> Self {
        Self::with_repository(language, ContentRepository::embedded())
    }

    pub fn with_repository(language: Language, repository: &'static ContentRepository) -> Self {
        Self {
            language,
            repository,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch by textual code. Unknown codes are rejected and the current
    /// language is kept.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, LocaleError> {
        let language: Language = code.parse()?;
        self.set_language(language);
        Ok(language)
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub fn content(&self) -> &'static Content {
        self.repository.get(self.language)
    }
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::new(Language::DEFAULT)
    }
}

/// Reactive handle over the shared [`LocaleState`].
///
/// Reading through the handle during render subscribes the component, so a
/// language switch re-renders every reader in the same update.
#[derive(Clone, Copy, PartialEq)]
pub struct LocaleHandle {
    state: Signal<LocaleState>,
}

impl LocaleHandle {
    pub fn language(&self) -> Language {
        self.state.read().language()
    }

    pub fn direction(&self) -> TextDirection {
        self.state.read().direction()
    }

    pub fn content(&self) -> &'static Content {
        self.state.read().content()
    }

    pub fn set_language(&self, language: Language) {
        let mut state = self.state;
        if state.peek().language() == language {
            return;
        }
        state.write().set_language(language);
        tracing::info!("[i18n] language set to {language} ({})", language.direction());
    }

    pub fn set_language_code(&self, code: &str) -> Result<Language, LocaleError> {
        let language: Language = code.parse().inspect_err(|err| {
            tracing::warn!("[i18n] rejected language change: {err}");
        })?;
        self.set_language(language);
        Ok(language)
    }
}

/// Install the locale context at the root of the tree.
pub fn use_locale_provider(initial: Language) -> LocaleHandle {
    let state = use_signal(|| LocaleState::new(initial));
    use_context_provider(|| LocaleHandle { state })
}

/// Read the locale context installed by [`use_locale_provider`].
pub fn use_locale() -> LocaleHandle {
    use_context::<LocaleHandle>()
}
