//! Lead capture: shared visitor state, contact form submission and WhatsApp links.

mod lead;
mod submission;
mod view;
pub mod whatsapp;

pub use lead::{use_lead_state, use_provide_lead_state, LeadState, DEFAULT_MESSAGE, DEFAULT_SERVICE};
pub use submission::{
    prepare, rejection_from_body, submit, ContactError, ContactStatus, ContactSubmission,
};
pub use view::ContactSection;
