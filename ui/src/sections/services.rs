use dioxus::prelude::*;

use crate::content::site::Anchor;
use crate::locale::use_locale;
use crate::widgets::Reveal;

/// Delay between consecutive card reveals.
const STAGGER_MS: u32 = 100;

#[component]
pub fn Services() -> Element {
    let locale = use_locale();
    let services = &locale.content().services;
    let arrow_class = if locale.direction().is_rtl() {
        "service-card__arrow service-card__arrow--flipped"
    } else {
        "service-card__arrow"
    };

    rsx! {
        section { id: Anchor::Services.id(), class: "services section section--muted",
            div { class: "section__inner",
                div { class: "section__header",
                    Reveal {
                        h2 { class: "section__eyebrow-text", "{services.title}" }
                        h3 { class: "section__heading", "{services.subtitle}" }
                        div { class: "section__underline" }
                    }
                }
                div { class: "services__grid",
                    for (idx, service) in services.items.iter().enumerate() {
                        Reveal { key: "{idx}", delay_ms: (idx as u32) * STAGGER_MS, class: "services__cell",
                            article { class: "service-card",
                                div { class: "service-card__icon", "{service.icon.glyph()}" }
                                h4 { class: "service-card__title", "{service.title}" }
                                p { class: "service-card__description", "{service.description}" }
                                div { class: "service-card__more",
                                    span { "{services.details}" }
                                    span { class: "{arrow_class}", aria_hidden: "true", "→" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
