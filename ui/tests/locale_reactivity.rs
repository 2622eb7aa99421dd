//! Mounted-tree behaviour: the carousel timer ticks on its own and a language
//! switch re-renders every reader of the locale context in one update.

use std::cell::Cell;
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::components::{AppNavbar, Footer};
use ui::i18n::Language;
use ui::locale::{use_locale_provider, LocaleHandle};
use ui::sections::{Hero, Testimonials};
use ui::widgets::CAROUSEL_INTERVAL_MS;

thread_local! {
    static HANDLE: Cell<Option<LocaleHandle>> = const { Cell::new(None) };
}

fn page() -> Element {
    let locale = use_locale_provider(Language::Tr);
    HANDLE.with(|slot| slot.set(Some(locale)));

    rsx! {
        AppNavbar {}
        Hero {}
        Testimonials {}
        Footer {}
    }
}

fn locale_handle() -> LocaleHandle {
    HANDLE
        .with(|slot| slot.get())
        .expect("page installed the locale context")
}

/// Run queued work until `done` holds for the rendered markup.
async fn settle(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    for _ in 0..16 {
        let html = dioxus_ssr::render(dom);
        if done(&html) {
            return html;
        }
        dom.wait_for_work().await;
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(dom)
}

#[tokio::test(start_paused = true)]
async fn carousel_advances_after_interval_then_flips_with_language() {
    let mut dom = VirtualDom::new(page);
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("translateX(0%)"), "{html}");

    let started = tokio::time::Instant::now();
    let html = settle(&mut dom, |html| html.contains("translateX(-100%)")).await;
    assert!(html.contains("translateX(-100%)"), "{html}");
    assert!(started.elapsed() >= Duration::from_millis(CAROUSEL_INTERVAL_MS));

    let handle = locale_handle();
    dom.in_runtime(|| handle.set_language(Language::Ar));
    let html = settle(&mut dom, |html| html.contains(r#"dir="rtl""#)).await;

    assert!(html.contains(r#"dir="rtl""#));
    assert!(html.contains("اكتشف قلب إسطنبول مع خبير"));
    assert!(html.contains("اتصل بي"));
    assert!(!html.contains("Kalbini Uzman Rehberle"));
    // Same slide, mirrored track offset.
    assert!(html.contains("translateX(100%)"), "{html}");
}

#[tokio::test(start_paused = true)]
async fn unsupported_code_leaves_the_mounted_page_untouched() {
    let mut dom = VirtualDom::new(page);
    dom.rebuild_in_place();

    let handle = locale_handle();
    let result = dom.in_runtime(|| handle.set_language_code("zz"));
    assert!(result.is_err());
    dom.render_immediate(&mut NoOpMutations);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Kalbini Uzman Rehberle"));
    assert!(!html.contains(r#"dir="rtl""#));
    assert_eq!(dom.in_runtime(|| handle.language()), Language::Tr);
}
