//! Localized content tree.
//!
//! Every language resolves to the same typed [`Content`] record, built once per
//! process from the embedded Fluent bundles. Structural parity across languages
//! is guaranteed by the type itself; completeness of each bundle is checked
//! while building (`LocaleError::MissingMessage`) and by the i18n tests.

pub mod site;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use serde::Serialize;
use time::OffsetDateTime;

use crate::i18n::{available_languages, fl, Language};
use crate::locale::LocaleError;

/// Look up a message, failing if this language's bundle does not define it.
macro_rules! message {
    ($bundle:ident, $key:literal) => {{
        $bundle.require($key)?;
        fl!(&$bundle.loader, $key)
    }};
    ($bundle:ident, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {{
        $bundle.require($key)?;
        fl!(&$bundle.loader, $key, $( $arg = $value ),+)
    }};
}

/// Every user-visible string for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub nav: NavContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: ServicesContent,
    pub why_me: WhyMeContent,
    pub gallery: GalleryContent,
    pub testimonials: TestimonialsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
    pub chrome: ChromeContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavContent {
    pub home: String,
    pub about: String,
    pub services: String,
    pub gallery: String,
    pub contact: String,
}

impl NavContent {
    pub fn label(&self, anchor: site::Anchor) -> &str {
        match anchor {
            site::Anchor::Home => &self.home,
            site::Anchor::About => &self.about,
            site::Anchor::Services => &self.services,
            site::Anchor::Gallery => &self.gallery,
            site::Anchor::Contact => &self.contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutContent {
    pub title: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Landmark,
    Ship,
    Crown,
    Coffee,
    User,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Landmark => "🏛",
            ServiceIcon::Ship => "⛵",
            ServiceIcon::Crown => "👑",
            ServiceIcon::Coffee => "☕",
            ServiceIcon::User => "👤",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceItem {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesContent {
    pub title: String,
    pub subtitle: String,
    pub details: String,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhyMeContent {
    pub title: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryContent {
    pub title: String,
    pub subtitle: String,
    pub open_label: String,
    pub close_label: String,
    /// Alt text per entry of [`site::GALLERY`], same order.
    pub image_alts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub comment: String,
    pub rating: u8,
    /// Accessible label of this testimonial's carousel dot.
    pub slide_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialsContent {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub message: String,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub title: String,
    pub phone: String,
    pub instagram: String,
    pub location: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub form: ContactForm,
    pub info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLinks {
    pub services: String,
    pub about: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterContent {
    pub copyright: String,
    pub links: FooterLinks,
    pub instagram_label: String,
    pub email_label: String,
}

/// Labels for page chrome: switcher, menu toggle, floating buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeContent {
    pub language: String,
    pub menu_open: String,
    pub menu_close: String,
    pub whatsapp: String,
    pub scroll_down: String,
}

struct Bundle {
    language: Language,
    loader: FluentLanguageLoader,
}

impl Bundle {
    fn open(language: Language) -> Result<Self, LocaleError> {
        Ok(Self {
            language,
            loader: language.loader()?,
        })
    }

    fn require(&self, key: &'static str) -> Result<(), LocaleError> {
        if self.loader.has(key) {
            Ok(())
        } else {
            Err(LocaleError::MissingMessage {
                language: self.language,
                key,
            })
        }
    }
}

impl Content {
    /// Build the content tree for `language` from its embedded bundle.
    pub fn load(language: Language) -> Result<Self, LocaleError> {
        let year = OffsetDateTime::now_utc().year();
        Self::load_with_year(language, year)
    }

    pub fn load_with_year(language: Language, year: i32) -> Result<Self, LocaleError> {
        let b = Bundle::open(language)?;

        let nav = NavContent {
            home: message!(b, "nav-home"),
            about: message!(b, "nav-about"),
            services: message!(b, "nav-services"),
            gallery: message!(b, "nav-gallery"),
            contact: message!(b, "nav-contact"),
        };

        let hero = HeroContent {
            badge: message!(b, "hero-badge"),
            title: message!(b, "hero-title"),
            subtitle: message!(b, "hero-subtitle"),
            cta_primary: message!(b, "hero-cta-primary"),
            cta_secondary: message!(b, "hero-cta-secondary"),
            image_alt: message!(b, "hero-image-alt"),
        };

        let about = AboutContent {
            title: message!(b, "about-title"),
            name: message!(b, "about-name"),
            role: message!(b, "about-role"),
            bio: message!(b, "about-bio"),
            badges: vec![
                message!(b, "about-badge-expert"),
                message!(b, "about-badge-experience"),
                message!(b, "about-badge-licensed"),
                message!(b, "about-badge-languages"),
            ],
        };

        let services = ServicesContent {
            title: message!(b, "services-title"),
            subtitle: message!(b, "services-subtitle"),
            details: message!(b, "services-details"),
            items: vec![
                ServiceItem {
                    icon: ServiceIcon::Landmark,
                    title: message!(b, "service-landmark-title"),
                    description: message!(b, "service-landmark-description"),
                },
                ServiceItem {
                    icon: ServiceIcon::Ship,
                    title: message!(b, "service-ship-title"),
                    description: message!(b, "service-ship-description"),
                },
                ServiceItem {
                    icon: ServiceIcon::Crown,
                    title: message!(b, "service-crown-title"),
                    description: message!(b, "service-crown-description"),
                },
                ServiceItem {
                    icon: ServiceIcon::Coffee,
                    title: message!(b, "service-coffee-title"),
                    description: message!(b, "service-coffee-description"),
                },
                ServiceItem {
                    icon: ServiceIcon::User,
                    title: message!(b, "service-user-title"),
                    description: message!(b, "service-user-description"),
                },
            ],
        };

        let why_me = WhyMeContent {
            title: message!(b, "why-title"),
            features: vec![
                Feature {
                    title: message!(b, "why-experience-title"),
                    description: message!(b, "why-experience-description"),
                },
                Feature {
                    title: message!(b, "why-licensed-title"),
                    description: message!(b, "why-licensed-description"),
                },
                Feature {
                    title: message!(b, "why-bilingual-title"),
                    description: message!(b, "why-bilingual-description"),
                },
                Feature {
                    title: message!(b, "why-local-title"),
                    description: message!(b, "why-local-description"),
                },
                Feature {
                    title: message!(b, "why-personal-title"),
                    description: message!(b, "why-personal-description"),
                },
                Feature {
                    title: message!(b, "why-flexible-title"),
                    description: message!(b, "why-flexible-description"),
                },
            ],
        };

        let mut image_alts = Vec::with_capacity(site::GALLERY.len());
        for index in 1..=(site::GALLERY.len() as i32) {
            image_alts.push(message!(b, "gallery-image-alt", index = index));
        }
        let gallery = GalleryContent {
            title: message!(b, "gallery-title"),
            subtitle: message!(b, "gallery-subtitle"),
            open_label: message!(b, "gallery-open"),
            close_label: message!(b, "gallery-close"),
            image_alts,
        };

        let testimonials = TestimonialsContent {
            title: message!(b, "testimonials-title"),
            items: vec![
                Testimonial {
                    name: message!(b, "testimonial-first-name"),
                    location: message!(b, "testimonial-first-location"),
                    comment: message!(b, "testimonial-first-comment"),
                    rating: 5,
                    slide_label: message!(b, "testimonials-goto", index = 1),
                },
                Testimonial {
                    name: message!(b, "testimonial-second-name"),
                    location: message!(b, "testimonial-second-location"),
                    comment: message!(b, "testimonial-second-comment"),
                    rating: 5,
                    slide_label: message!(b, "testimonials-goto", index = 2),
                },
                Testimonial {
                    name: message!(b, "testimonial-third-name"),
                    location: message!(b, "testimonial-third-location"),
                    comment: message!(b, "testimonial-third-comment"),
                    rating: 5,
                    slide_label: message!(b, "testimonials-goto", index = 3),
                },
            ],
        };

        let contact = ContactContent {
            title: message!(b, "contact-title"),
            subtitle: message!(b, "contact-subtitle"),
            form: ContactForm {
                name: message!(b, "contact-form-name"),
                email: message!(b, "contact-form-email"),
                phone: message!(b, "contact-form-phone"),
                date: message!(b, "contact-form-date"),
                message: message!(b, "contact-form-message"),
                submit: message!(b, "contact-form-submit"),
            },
            info: ContactInfo {
                title: message!(b, "contact-info-title"),
                phone: message!(b, "contact-info-phone"),
                instagram: message!(b, "contact-info-instagram"),
                location: message!(b, "contact-info-location"),
                address: message!(b, "contact-info-address"),
            },
        };

        let footer = FooterContent {
            copyright: message!(b, "footer-copyright", year = year),
            links: FooterLinks {
                services: message!(b, "footer-link-services"),
                about: message!(b, "footer-link-about"),
                contact: message!(b, "footer-link-contact"),
            },
            instagram_label: message!(b, "footer-instagram"),
            email_label: message!(b, "footer-email"),
        };

        let chrome = ChromeContent {
            language: message!(b, "chrome-language"),
            menu_open: message!(b, "chrome-menu-open"),
            menu_close: message!(b, "chrome-menu-close"),
            whatsapp: message!(b, "chrome-whatsapp"),
            scroll_down: message!(b, "chrome-scroll-down"),
        };

        Ok(Content {
            nav,
            hero,
            about,
            services,
            why_me,
            gallery,
            testimonials,
            contact,
            footer,
            chrome,
        })
    }
}

/// Content trees for every [`Language`], built together so a defect in any
/// bundle is reported before the page renders.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    tr: Content,
    en: Content,
    ar: Content,
}

impl ContentRepository {
    pub fn load() -> Result<Self, LocaleError> {
        let repo = Self {
            tr: Content::load(Language::Tr)?,
            en: Content::load(Language::En)?,
            ar: Content::load(Language::Ar)?,
        };
        tracing::debug!(
            "[i18n] loaded content for {} languages (embedded bundles: {:?})",
            Language::ALL.len(),
            available_languages()
        );
        Ok(repo)
    }

    pub fn get(&self, language: Language) -> &Content {
        match language {
            Language::Tr => &self.tr,
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// The process-wide repository built from the embedded bundles.
    pub fn embedded() -> &'static ContentRepository {
        &EMBEDDED
    }
}

static EMBEDDED: Lazy<ContentRepository> = Lazy::new(|| {
    ContentRepository::load().expect("embedded locale bundles define every message")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_builds() {
        for lang in Language::ALL {
            let content = Content::load(lang).unwrap();
            assert!(!content.hero.title.is_empty(), "{lang} hero title empty");
        }
    }

    #[test]
    fn repository_resolves_each_language() {
        let repo = ContentRepository::embedded();
        assert_eq!(
            repo.get(Language::Tr).hero.title,
            "İstanbul'un Kalbini Uzman Rehberle Keşfedin"
        );
        assert_eq!(repo.get(Language::En).hero.title, "Discover the Heart of Istanbul");
        assert_eq!(repo.get(Language::Ar).nav.home, "الرئيسية");
    }

    #[test]
    fn copyright_carries_the_year_without_isolation_marks() {
        let content = Content::load_with_year(Language::En, 2026).unwrap();
        assert_eq!(
            content.footer.copyright,
            "© 2026 Hüseyin Hizmetçi - Professional Tourist Guide"
        );
    }

    #[test]
    fn slide_labels_are_numbered_from_one() {
        let content = Content::load(Language::En).unwrap();
        let labels: Vec<_> = content
            .testimonials
            .items
            .iter()
            .map(|t| t.slide_label.as_str())
            .collect();
        assert_eq!(labels, ["Go to slide 1", "Go to slide 2", "Go to slide 3"]);
    }

    #[test]
    fn nav_labels_follow_anchor_order() {
        let content = Content::load(Language::Tr).unwrap();
        let labels: Vec<_> = site::Anchor::NAV_ORDER
            .iter()
            .map(|a| content.nav.label(*a))
            .collect();
        assert_eq!(labels, ["Ana Sayfa", "Hakkımda", "Turlar", "Galeri", "İletişim"]);
    }

    #[test]
    fn image_and_icon_labels_are_localized() {
        let en = Content::load(Language::En).unwrap();
        let ar = Content::load(Language::Ar).unwrap();

        assert_eq!(en.gallery.image_alts.len(), site::GALLERY.len());
        assert_eq!(en.gallery.image_alts[0], "Istanbul gallery, photo 1");
        assert_eq!(ar.gallery.image_alts[5], "معرض إسطنبول، صورة 6");
        assert_eq!(en.footer.email_label, "Email");
        assert_eq!(ar.footer.email_label, "البريد الإلكتروني");
        assert_ne!(en.hero.image_alt, ar.hero.image_alt);
    }
}
