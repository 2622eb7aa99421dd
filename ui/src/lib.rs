//! Shared UI crate for the Istanbul guide site. Content, locale handling,
//! interactive widgets and the landing page live here; `web` and `desktop`
//! only launch it.

pub mod content;
pub mod core;
pub mod i18n;
pub mod locale;
pub mod sections;
pub mod theme;
pub mod views;
pub mod widgets;

pub mod components {
    // Fixed header with anchor links and language switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NAVBAR_SHADE_OFFSET_PX;

    mod language_switcher;
    pub use language_switcher::LanguageSwitcher;

    mod footer;
    pub use footer::Footer;

    mod floating_whatsapp;
    pub use floating_whatsapp::FloatingWhatsApp;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
