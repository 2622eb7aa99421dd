use dioxus::prelude::*;

use crate::content::site::{self, Anchor};
use crate::core::format;
use crate::locale::use_locale;
use crate::widgets::{FallbackImage, Reveal};

/// Number of "why me" highlights shown beside the biography.
const HIGHLIGHT_COUNT: usize = 4;
const HIGHLIGHT_GLYPHS: [&str; HIGHLIGHT_COUNT] = ["★", "♛", "◍", "⌖"];

#[component]
pub fn About() -> Element {
    let locale = use_locale();
    let content = locale.content();
    let about = &content.about;
    let headline = format::teaser(&content.hero.title, 3);

    rsx! {
        section { id: Anchor::About.id(), class: "about section",
            div { class: "section__inner about__grid",
                div { class: "about__portrait",
                    Reveal {
                        div { class: "about__frame",
                            FallbackImage {
                                class: "about__photo",
                                src: site::PROFILE_IMAGE,
                                fallback: site::FALLBACK_IMAGE,
                                alt: about.name.clone(),
                            }
                            div { class: "about__caption",
                                h3 { class: "about__name", "{about.name}" }
                                p { class: "about__role", "{about.role}" }
                            }
                        }
                    }
                }
                div { class: "about__text",
                    Reveal { delay_ms: 200,
                        div { class: "section__eyebrow",
                            span { class: "section__rule" }
                            h2 { "{about.title}" }
                        }
                        h3 { class: "section__heading", "{headline}" }
                        p { class: "about__bio", "{about.bio}" }
                        ul { class: "about__badges",
                            for (idx, badge) in about.badges.iter().enumerate() {
                                li { key: "{idx}", class: "badge",
                                    span { class: "badge__check", "✓" }
                                    "{badge}"
                                }
                            }
                        }
                        h4 { class: "about__why", "{content.why_me.title}" }
                        div { class: "about__highlights",
                            for (idx, feature) in content.why_me.features.iter().take(HIGHLIGHT_COUNT).enumerate() {
                                div { key: "{idx}", class: "highlight",
                                    div { class: "highlight__icon", "{HIGHLIGHT_GLYPHS[idx]}" }
                                    div {
                                        h4 { class: "highlight__title", "{feature.title}" }
                                        p { class: "highlight__description", "{feature.description}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
