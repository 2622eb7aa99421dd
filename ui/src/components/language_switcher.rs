use dioxus::prelude::*;

use crate::i18n::Language;
use crate::locale::use_locale;

/// Flag button opening a dropdown of the supported languages. Selecting one
/// switches the page locale and closes the dropdown.
#[component]
pub fn LanguageSwitcher() -> Element {
    let locale = use_locale();
    let current = locale.language();
    let label = locale.content().chrome.language.clone();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "locale",
            button {
                r#type: "button",
                class: "locale__toggle",
                aria_label: "{label}",
                aria_haspopup: "listbox",
                aria_expanded: "{open()}",
                onclick: move |_| open.set(!open()),
                span { class: "locale__flag", "{current.flag()}" }
                span { class: "locale__name", "{current.native_name()}" }
            }
            if open() {
                div { class: "locale__menu", role: "listbox",
                    for lang in Language::ALL {
                        button {
                            key: "{lang.code()}",
                            r#type: "button",
                            role: "option",
                            lang: "{lang.code()}",
                            aria_selected: "{lang == current}",
                            class: format!(
                                "locale__option {}",
                                if lang == current { "locale__option--active" } else { "" }
                            ),
                            onclick: move |_| {
                                locale.set_language(lang);
                                open.set(false);
                            },
                            span { class: "locale__flag", "{lang.flag()}" }
                            "{lang.native_name()}"
                        }
                    }
                }
            }
        }
    }
}
