//! Shared stylesheet. The web build links it as a bundled asset; the desktop
//! build inlines the same file so packaged binaries carry no loose CSS.

use dioxus::prelude::*;

pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub const THEME_CSS_INLINE: &str = include_str!("../assets/theme/main.css");
