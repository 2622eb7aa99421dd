use dioxus::prelude::*;

use crate::components::{AppNavbar, FloatingWhatsApp, Footer};
use crate::core::platform::{self, Platform};
use crate::i18n::Language;
use crate::locale::use_locale_provider;
use crate::sections::{About, Contact, Gallery, Hero, Services, Testimonials};

#[cfg(debug_assertions)]
fn log_landing_render(lang: Language) {
    tracing::debug!("[i18n] Landing render lang={lang}");
}

/// The single-page site. Installs the locale context, so everything below
/// it follows the selected language and direction.
#[component]
pub fn Landing(#[props(default = Language::DEFAULT)] initial_language: Language) -> Element {
    let locale = use_locale_provider(initial_language);
    use_hook(|| {
        tracing::info!(
            "[platform] landing mounted on {:?} (lang={initial_language})",
            Platform::current()
        );
    });
    let language = locale.language();
    let dir = locale.direction();

    // Mirror lang/dir onto <html> so scrollbars and native controls flip too.
    use_effect(move || {
        platform::apply_document_locale(locale.language(), locale.direction());
    });

    #[cfg(debug_assertions)]
    {
        log_landing_render(language);
    }

    rsx! {
        div { class: "page page-landing", lang: "{language.code()}", dir: "{dir}",
            AppNavbar {}
            main {
                Hero {}
                About {}
                Services {}
                Gallery {}
                Testimonials {}
                Contact {}
            }
            Footer {}
            FloatingWhatsApp {}
        }
    }
}
