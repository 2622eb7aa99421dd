use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::LanguageSwitcher;
use crate::content::site::{self, Anchor};
use crate::core::platform::{self, ScrollSubscription};
use crate::locale::use_locale;

/// Scroll offset (CSS px) after which the navbar switches to its solid style.
pub const NAVBAR_SHADE_OFFSET_PX: f64 = 20.0;

/// Fixed page header: brand, anchor links, language switcher and the phone
/// call-to-action, collapsing into a full-screen menu on small screens.
///
/// Every render pulls labels from the locale context, so a language switch
/// re-renders the header together with the rest of the page.
#[component]
pub fn AppNavbar() -> Element {
    let locale = use_locale();
    let content = locale.content();
    let dir = locale.direction();

    let mut menu_open = use_signal(|| false);
    let scrolled = use_scrolled(NAVBAR_SHADE_OFFSET_PX);

    #[cfg(debug_assertions)]
    {
        tracing::debug!("[i18n] AppNavbar render lang={}", locale.language());
    }

    let shade = if scrolled() {
        "navbar navbar--solid"
    } else {
        "navbar"
    };
    let menu_class = if menu_open() {
        "navbar__mobile navbar__mobile--open"
    } else {
        "navbar__mobile"
    };
    let toggle_label = if menu_open() {
        content.chrome.menu_close.clone()
    } else {
        content.chrome.menu_open.clone()
    };

    rsx! {
        header { id: "navbar", class: "{shade}", dir: "{dir}",
            div { class: "navbar__inner",
                // Brand
                a { class: "navbar__brand", href: "#",
                    span { class: "navbar__brand-first", "{site::BRAND_FIRST}" }
                    span { class: "navbar__brand-last", "{site::BRAND_LAST}" }
                }

                // Desktop navigation
                div { class: "navbar__desktop",
                    nav { class: "navbar__links",
                        for anchor in Anchor::NAV_ORDER {
                            a {
                                key: "{anchor.id()}",
                                class: "navbar__link",
                                href: "{anchor.href()}",
                                "{content.nav.label(anchor)}"
                            }
                        }
                    }
                    span { class: "navbar__divider", aria_hidden: "true" }
                    LanguageSwitcher {}
                    a { class: "navbar__phone button button--primary", href: site::PHONE_LINK,
                        span { dir: "ltr", "{site::PHONE_NUMBER}" }
                    }
                }

                // Mobile toggle
                div { class: "navbar__compact",
                    LanguageSwitcher {}
                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_label: "{toggle_label}",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }

                // Mobile menu
                div { class: "{menu_class}",
                    nav { class: "navbar__mobile-links",
                        for anchor in Anchor::NAV_ORDER {
                            a {
                                key: "{anchor.id()}",
                                class: "navbar__mobile-link",
                                href: "{anchor.href()}",
                                onclick: move |_| menu_open.set(false),
                                "{content.nav.label(anchor)}"
                            }
                        }
                    }
                    a { class: "navbar__mobile-phone button button--primary", href: site::PHONE_LINK,
                        span { dir: "ltr", "{site::PHONE_NUMBER}" }
                    }
                }
            }
        }
    }
}

/// `true` once the window is scrolled past `offset` pixels. The scroll
/// listener lives as long as the calling component.
fn use_scrolled(offset: f64) -> Signal<bool> {
    let scrolled = use_signal(move || platform::scroll_y() > offset);

    let subscription: Rc<RefCell<Option<ScrollSubscription>>> = use_hook(move || {
        Rc::new(RefCell::new(ScrollSubscription::new(move || {
            let mut shaded = scrolled;
            let now = platform::scroll_y() > offset;
            if *shaded.peek() != now {
                shaded.set(now);
            }
        })))
    });
    use_drop(move || {
        subscription.borrow_mut().take();
    });

    scrolled
}
