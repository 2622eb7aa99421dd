//! Page sections, top to bottom.

mod about;
mod contact;
mod gallery;
mod hero;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use gallery::Gallery;
pub use hero::Hero;
pub use services::Services;
pub use testimonials::Testimonials;
