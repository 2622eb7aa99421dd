//! Server-side renders of the full landing page.
//!
//! Native builds have no IntersectionObserver, so every reveal block must
//! render already visible, and the markup must follow the initial language.

use dioxus::prelude::*;
use ui::i18n::Language;
use ui::views::Landing;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn default_app() -> Element {
    rsx! { Landing {} }
}

fn english_app() -> Element {
    rsx! { Landing { initial_language: Language::En } }
}

fn arabic_app() -> Element {
    rsx! { Landing { initial_language: Language::Ar } }
}

#[tokio::test]
async fn default_render_is_turkish_left_to_right() {
    let html = render(default_app);

    assert!(html.contains("Kalbini Uzman Rehberle Keşfedin"), "{html}");
    assert!(html.contains("İletişim"));
    assert!(html.contains(r#"lang="tr""#));
    assert!(html.contains(r#"dir="ltr""#));
    assert!(!html.contains(r#"dir="rtl""#));
}

#[tokio::test]
async fn arabic_render_is_right_to_left() {
    let html = render(arabic_app);

    assert!(html.contains("اكتشف قلب إسطنبول مع خبير"));
    assert!(html.contains("اتصل بي"));
    assert!(html.contains(r#"lang="ar""#));
    assert!(html.contains(r#"dir="rtl""#));
    assert!(html.contains("service-card__arrow--flipped"));
    assert!(html.contains("معرض إسطنبول، صورة 1"));
    assert!(html.contains("البريد الإلكتروني"));
    assert!(!html.contains(r#"aria-label="Email""#));
}

#[tokio::test]
async fn english_render_uses_english_copy() {
    let html = render(english_app);

    assert!(html.contains("Discover the Heart of Istanbul"));
    assert!(html.contains("John D."));
    assert!(!html.contains("Ahmet Y."));
}

#[tokio::test]
async fn reveal_blocks_fail_open_without_an_observer() {
    let html = render(default_app);

    let revealed = html.matches("reveal reveal--visible").count();
    assert!(revealed > 0);
    assert_eq!(html.matches(r#"class="reveal "#).count(), revealed);
}

#[tokio::test]
async fn carousel_starts_on_first_slide_with_one_dot_per_testimonial() {
    let html = render(default_app);

    assert_eq!(html.matches("carousel__slide").count(), 3);
    assert_eq!(html.matches("carousel__dot--active").count(), 1);
    assert!(html.contains("translateX(0%)"));
}

#[tokio::test]
async fn overlays_start_closed() {
    let html = render(default_app);

    assert!(!html.contains("lightbox__image"));
    assert!(!html.contains("locale__menu"));
    assert!(!html.contains("navbar__mobile--open"));
    assert!(!html.contains("navbar--solid"));
}
