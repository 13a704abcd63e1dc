//! Static landing-page sections.

mod about;
mod faq;
mod footer;
mod hero;
mod plans;
mod services;

pub use about::About;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use plans::Plans;
pub use services::{Services, Skills};
