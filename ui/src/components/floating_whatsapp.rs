use dioxus::prelude::*;

use crate::content::site;
use crate::locale::use_locale;

/// Pulsing WhatsApp shortcut pinned to the bottom corner of the viewport.
#[component]
pub fn FloatingWhatsApp() -> Element {
    let label = use_locale().content().chrome.whatsapp.clone();

    rsx! {
        a {
            class: "whatsapp-float",
            href: site::WHATSAPP_LINK,
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            span { class: "whatsapp-float__pulse", aria_hidden: "true" }
            span { class: "whatsapp-float__icon", "💬" }
        }
    }
}
