use dioxus::prelude::*;

use crate::core::format;
use crate::locale::use_locale;
use crate::widgets::{use_carousel, CAROUSEL_INTERVAL_MS};

/// Rotating guest reviews with dot navigation.
#[component]
pub fn Testimonials() -> Element {
    let locale = use_locale();
    let testimonials = &locale.content().testimonials;
    let mut carousel = use_carousel(
        move || locale.content().testimonials.items.len(),
        CAROUSEL_INTERVAL_MS,
    );

    let engine = carousel();
    let current = engine.index();
    let offset = engine.offset_percent(locale.direction());

    rsx! {
        section { class: "testimonials section",
            div { class: "section__inner",
                div { class: "section__header",
                    h2 { class: "section__eyebrow-text", "{testimonials.title}" }
                }
                div { class: "carousel",
                    div { class: "carousel__viewport",
                        div {
                            class: "carousel__track",
                            style: "transform: translateX({offset}%)",
                            for (idx, item) in testimonials.items.iter().enumerate() {
                                div { key: "{idx}", class: "carousel__slide",
                                    blockquote { class: "testimonial",
                                        span { class: "testimonial__quote", aria_hidden: "true", "\u{201C}" }
                                        div { class: "testimonial__stars", "{format::stars(item.rating)}" }
                                        p { class: "testimonial__comment", "{item.comment}" }
                                        footer {
                                            h4 { class: "testimonial__name", "{item.name}" }
                                            p { class: "testimonial__location", "{item.location}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "carousel__dots",
                        for (idx, item) in testimonials.items.iter().enumerate() {
                            button {
                                key: "{idx}",
                                r#type: "button",
                                class: format!(
                                    "carousel__dot {}",
                                    if current == idx { "carousel__dot--active" } else { "" }
                                ),
                                aria_label: "{item.slide_label}",
                                aria_current: "{current == idx}",
                                onclick: move |_| {
                                    if let Err(err) = carousel.with_mut(|c| c.select(idx)) {
                                        tracing::warn!("[carousel] {err}");
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
