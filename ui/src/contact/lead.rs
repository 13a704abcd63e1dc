use dioxus::prelude::*;

use crate::scheduling::ScheduleRequest;

pub const DEFAULT_SERVICE: &str = "Onboarding SaaS";
pub const DEFAULT_MESSAGE: &str = "Olá, Guilherme! Quero um orçamento.";

/// Visitor-entered values shared by the contact form, the service selector,
/// WhatsApp and scheduling actions. Provided once per landing page.
#[derive(Clone, Copy, PartialEq)]
pub struct LeadState {
    pub name: Signal<String>,
    pub email: Signal<String>,
    pub service: Signal<String>,
    pub message: Signal<String>,
}

impl LeadState {
    /// Snapshot for the scheduling bridge. Reads without subscribing.
    pub fn schedule_request(&self) -> ScheduleRequest {
        ScheduleRequest::new(self.service.peek().as_str(), self.message.peek().as_str())
            .with_visitor(self.name.peek().as_str(), self.email.peek().as_str())
    }

    pub fn clear_visitor(&self) {
        let (mut name, mut email) = (self.name, self.email);
        name.set(String::new());
        email.set(String::new());
    }
}

pub fn use_provide_lead_state() -> LeadState {
    use_context_provider(|| LeadState {
        name: Signal::new(String::new()),
        email: Signal::new(String::new()),
        service: Signal::new(DEFAULT_SERVICE.to_string()),
        message: Signal::new(DEFAULT_MESSAGE.to_string()),
    })
}

pub fn use_lead_state() -> LeadState {
    use_context::<LeadState>()
}
