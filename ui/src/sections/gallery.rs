use dioxus::prelude::*;

use crate::content::site::{self, Anchor};
use crate::locale::use_locale;
use crate::widgets::Reveal;

const STAGGER_MS: u32 = 50;

/// Photo grid with a click-to-enlarge lightbox.
#[component]
pub fn Gallery() -> Element {
    let locale = use_locale();
    let gallery = &locale.content().gallery;
    let mut selected = use_signal(|| Option::<usize>::None);

    rsx! {
        section {
            id: Anchor::Gallery.id(),
            class: "gallery section section--dark",
            onkeydown: move |evt| {
                if selected().is_some() && evt.key().to_string() == "Escape" {
                    selected.set(None);
                }
            },
            div { class: "section__inner",
                div { class: "gallery__header",
                    div {
                        h2 { class: "section__eyebrow-text", "{gallery.title}" }
                        h3 { class: "section__heading", "{gallery.subtitle}" }
                    }
                    a {
                        class: "gallery__instagram button button--outline",
                        href: site::INSTAGRAM_LINK,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{site::INSTAGRAM_HANDLE}"
                    }
                }
                div { class: "gallery__grid",
                    for (idx, image) in site::GALLERY.iter().enumerate() {
                        Reveal {
                            key: "{idx}",
                            delay_ms: (idx as u32) * STAGGER_MS,
                            class: tile_class(image.featured),
                            button {
                                r#type: "button",
                                class: "gallery__open",
                                aria_label: "{gallery.open_label}",
                                onclick: move |_| selected.set(Some(idx)),
                                img { class: "gallery__image", src: image.src, alt: gallery.image_alts[idx].clone(), "loading": "lazy" }
                                span { class: "gallery__zoom", aria_hidden: "true", "+" }
                            }
                        }
                    }
                }
            }

            if let Some(idx) = selected() {
                div {
                    class: "lightbox",
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |_| selected.set(None),
                    button {
                        r#type: "button",
                        class: "lightbox__close",
                        aria_label: "{gallery.close_label}",
                        "✕"
                    }
                    img { class: "lightbox__image", src: site::GALLERY[idx].src, alt: gallery.image_alts[idx].clone() }
                }
            }
        }
    }
}

fn tile_class(featured: bool) -> &'static str {
    if featured {
        "gallery__tile gallery__tile--featured"
    } else {
        "gallery__tile"
    }
}
