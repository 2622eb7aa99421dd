use dioxus::prelude::*;

use crate::content::site::{self, Anchor};
use crate::locale::use_locale;

/// Enquiry form and contact details.
///
/// The form has no backend: submission is suppressed and nothing leaves the
/// page. A deployment that wants enquiries must wire its own endpoint here.
#[component]
pub fn Contact() -> Element {
    let locale = use_locale();
    let contact = &locale.content().contact;
    let form = &contact.form;
    let info = &contact.info;

    rsx! {
        section { id: Anchor::Contact.id(), class: "contact section section--muted",
            div { class: "section__inner",
                div { class: "contact__card",
                    div { class: "contact__form-side",
                        div { class: "contact__intro",
                            h2 { class: "section__eyebrow-text", "{contact.title}" }
                            h3 { class: "section__heading", "{contact.subtitle}" }
                        }
                        form {
                            class: "contact__form",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                tracing::info!("[contact] form submission is disabled; nothing sent");
                            },
                            div { class: "contact__row",
                                FloatingField { id: "contact-name", kind: "text", label: form.name.clone() }
                                FloatingField { id: "contact-phone", kind: "tel", label: form.phone.clone() }
                            }
                            FloatingField { id: "contact-email", kind: "email", label: form.email.clone() }
                            div { class: "field field--pinned",
                                input { id: "contact-date", class: "field__input", r#type: "date", name: "date" }
                                label { class: "field__label", r#for: "contact-date", "{form.date}" }
                            }
                            div { class: "field",
                                textarea {
                                    id: "contact-message",
                                    class: "field__input",
                                    name: "message",
                                    rows: 4,
                                    placeholder: " ",
                                }
                                label { class: "field__label", r#for: "contact-message", "{form.message}" }
                            }
                            button { r#type: "submit", class: "button button--dark button--block", "{form.submit}" }
                        }
                    }
                    aside { class: "contact__info-side",
                        h3 { class: "contact__info-title", "{info.title}" }
                        ul { class: "contact__channels",
                            li {
                                a { class: "channel", href: site::PHONE_LINK,
                                    span { class: "channel__icon", "☎" }
                                    span {
                                        span { class: "channel__label", "{info.phone}" }
                                        span { class: "channel__value", dir: "ltr", "{site::PHONE_NUMBER}" }
                                    }
                                }
                            }
                            li {
                                a {
                                    class: "channel",
                                    href: site::INSTAGRAM_LINK,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    span { class: "channel__icon", "◎" }
                                    span {
                                        span { class: "channel__label", "{info.instagram}" }
                                        span { class: "channel__value", "{site::INSTAGRAM_HANDLE}" }
                                    }
                                }
                            }
                            li {
                                div { class: "channel",
                                    span { class: "channel__icon", "⌖" }
                                    span {
                                        span { class: "channel__label", "{info.location}" }
                                        span { class: "channel__value", "{info.address}" }
                                    }
                                }
                            }
                        }
                        div { class: "contact__map",
                            iframe {
                                src: site::MAP_EMBED,
                                title: "{info.address}",
                                width: "100%",
                                height: "100%",
                                "loading": "lazy",
                                referrerpolicy: "no-referrer-when-downgrade",
                                allowfullscreen: true,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Input with a label that floats above it once focused or filled.
#[component]
fn FloatingField(id: &'static str, kind: &'static str, label: String) -> Element {
    rsx! {
        div { class: "field",
            input { id, class: "field__input", r#type: kind, name: id, placeholder: " " }
            label { class: "field__label", r#for: id, "{label}" }
        }
    }
}
