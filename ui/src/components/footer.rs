use dioxus::prelude::*;

use crate::content::site::{self, Anchor};
use crate::locale::use_locale;

#[component]
pub fn Footer() -> Element {
    let locale = use_locale();
    let footer = &locale.content().footer;

    rsx! {
        footer { class: "footer", dir: "{locale.direction()}",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    a { class: "footer__brand-link", href: "#",
                        "{site::BRAND_FIRST} "
                        span { class: "footer__brand-accent", "{site::BRAND_LAST}" }
                    }
                    p { class: "footer__copyright", "{footer.copyright}" }
                }
                nav { class: "footer__links",
                    a { class: "footer__link", href: "{Anchor::Services.href()}", "{footer.links.services}" }
                    a { class: "footer__link", href: "{Anchor::About.href()}", "{footer.links.about}" }
                    a { class: "footer__link", href: "{Anchor::Contact.href()}", "{footer.links.contact}" }
                }
                div { class: "footer__social",
                    a {
                        class: "footer__icon",
                        href: site::INSTAGRAM_LINK,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "{footer.instagram_label}",
                        "◎"
                    }
                    a { class: "footer__icon", href: site::EMAIL_LINK, aria_label: "{footer.email_label}", "✉" }
                }
            }
        }
    }
}
