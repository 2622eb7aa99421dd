use dioxus::prelude::*;

use ui::i18n::Language;
use ui::theme::THEME_CSS;
use ui::views::Landing;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:lang")]
    LocalizedHome { lang: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { Landing {} }
}

/// `/en`, `/ar`, ... open the page in that language; anything else falls back
/// to the default.
#[component]
fn LocalizedHome(lang: String) -> Element {
    let initial = lang.parse::<Language>().unwrap_or_else(|err| {
        tracing::warn!("[i18n] {err}; using {}", Language::DEFAULT);
        Language::DEFAULT
    });
    rsx! { Landing { initial_language: initial } }
}
