use dioxus::prelude::*;

use crate::content::site::{self, Anchor};
use crate::locale::use_locale;

/// Full-height opening section. Uses CSS keyframe entrances rather than
/// [`Reveal`](crate::widgets::Reveal): it is on screen at load and must never
/// wait for an observer.
#[component]
pub fn Hero() -> Element {
    let locale = use_locale();
    let content = locale.content();
    let hero = &content.hero;

    rsx! {
        section { id: Anchor::Home.id(), class: "hero",
            div { class: "hero__backdrop",
                img { class: "hero__image", src: site::HERO_IMAGE, alt: "{hero.image_alt}" }
                div { class: "hero__overlay" }
            }
            div { class: "hero__content",
                div { class: "hero__badge fade-in-up fade-in-up--1",
                    span { class: "hero__badge-star", "★" }
                    "{hero.badge}"
                }
                h1 { class: "hero__title fade-in-up fade-in-up--2", "{hero.title}" }
                p { class: "hero__subtitle fade-in-up fade-in-up--3", "{hero.subtitle}" }
                div { class: "hero__actions fade-in-up fade-in-up--4",
                    a { class: "button button--primary button--large", href: "{Anchor::Contact.href()}",
                        "{hero.cta_primary}"
                        span { class: "button__arrow", aria_hidden: "true", "→" }
                    }
                    a { class: "button button--ghost button--large", href: "{Anchor::About.href()}",
                        "{hero.cta_secondary}"
                    }
                }
            }
            a {
                class: "hero__scroll",
                href: "{Anchor::About.href()}",
                aria_label: "{content.chrome.scroll_down}",
                "↓"
            }
        }
    }
}
