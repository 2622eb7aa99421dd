//! Platform-facing helpers shared by the widgets and sections.

pub mod format;
pub mod platform;
pub mod timing;
