//! Static, language-independent site data: contact endpoints and imagery.

pub const BRAND_FIRST: &str = "Hüseyin";
pub const BRAND_LAST: &str = "Hizmetçi";

pub const PHONE_NUMBER: &str = "+90 555 637 00 46";
pub const PHONE_LINK: &str = "tel:+905556370046";
pub const WHATSAPP_LINK: &str = "https://wa.me/905556370046";
pub const INSTAGRAM_LINK: &str = "https://www.instagram.com/bir_an_istanbul/";
pub const INSTAGRAM_HANDLE: &str = "@bir_an_istanbul";
pub const EMAIL_LINK: &str = "mailto:info@example.com";

pub const PROFILE_IMAGE: &str =
    "https://i.ibb.co/gF9XMMzN/Gemini-Generated-mage-xc72aixc72aixc72.png";
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1552058544-f2b08422138a?auto=format&fit=crop&q=80&w=800";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1527838832700-5059252407fa?auto=format&fit=crop&q=80&w=2500";

pub const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d192698.6041696238!2d28.85764353406322!3d41.00546324200673!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x14caa7040068086b%3A0xe1ccfe98bc01b0d0!2sIstanbul%2C%20T%C3%BCrkiye!5e0!3m2!1sen!2sus!4v1709900000000!5m2!1sen!2sus";

/// A gallery tile. `featured` tiles span two columns and two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub featured: bool,
}

pub static GALLERY: [GalleryImage; 6] = [
    // Blue Mosque interior
    GalleryImage {
        src: "https://images.unsplash.com/photo-1545459720-aac3f94783a4?auto=format&fit=crop&q=80&w=800",
        featured: true,
    },
    // Galata Tower
    GalleryImage {
        src: "https://images.unsplash.com/photo-1596316218764-28b33538c645?auto=format&fit=crop&q=80&w=800",
        featured: false,
    },
    // Hagia Sophia
    GalleryImage {
        src: "https://images.unsplash.com/photo-1622587853578-dd1bf9608d26?auto=format&fit=crop&q=80&w=800",
        featured: false,
    },
    // Grand Bazaar
    GalleryImage {
        src: "https://images.unsplash.com/photo-1541432901042-2d8bd64b4a9b?auto=format&fit=crop&q=80&w=800",
        featured: true,
    },
    // Tea
    GalleryImage {
        src: "https://images.unsplash.com/photo-1634914757273-0305ca775c74?auto=format&fit=crop&q=80&w=800",
        featured: false,
    },
    // Ortaköy
    GalleryImage {
        src: "https://images.unsplash.com/photo-1524231757912-21f4fe3a7200?auto=format&fit=crop&q=80&w=800",
        featured: false,
    },
];

/// In-page anchors targeted by the navbar, hero and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Services,
    Gallery,
    Contact,
}

impl Anchor {
    pub const NAV_ORDER: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Gallery,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Gallery => "gallery",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}
