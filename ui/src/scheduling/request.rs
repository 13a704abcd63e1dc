//! Prefilled scheduling links.

use url::form_urlencoded;

use crate::core::config::ANNOTATION_SLOTS;

/// Values captured at the moment a visitor asks to schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub selected_service: String,
    pub free_text_message: String,
    pub visitor_name: Option<String>,
    pub visitor_email: Option<String>,
}

impl ScheduleRequest {
    pub fn new(selected_service: impl Into<String>, free_text_message: impl Into<String>) -> Self {
        Self {
            selected_service: selected_service.into(),
            free_text_message: free_text_message.into(),
            visitor_name: None,
            visitor_email: None,
        }
    }

    /// Attach the visitor's name and e-mail; empty values are left out.
    pub fn with_visitor(mut self, name: &str, email: &str) -> Self {
        self.visitor_name = non_empty(name);
        self.visitor_email = non_empty(email);
        self
    }

    /// `name`, `email` (when present), then the two annotation slots, encoded
    /// as `application/x-www-form-urlencoded`.
    pub fn query_string(&self) -> String {
        let (service_slot, message_slot) = ANNOTATION_SLOTS;
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(name) = &self.visitor_name {
            query.append_pair("name", name);
        }
        if let Some(email) = &self.visitor_email {
            query.append_pair("email", email);
        }
        query.append_pair(service_slot, &self.selected_service);
        query.append_pair(message_slot, &self.free_text_message);
        query.finish()
    }

    /// Scheduling base URL plus this request's query.
    pub fn to_url(&self, base_url: &str) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{separator}{}", self.query_string())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://calendly.com/gui-gomes-aschi/30min";

    #[test]
    fn omits_missing_visitor_fields() {
        let request =
            ScheduleRequest::new("Criação de site", "Quero um site").with_visitor("", "ana@x.com");
        assert_eq!(
            request.query_string(),
            "email=ana%40x.com&a1=Cria%C3%A7%C3%A3o+de+site&a2=Quero+um+site"
        );
    }

    #[test]
    fn full_request_keeps_parameter_order() {
        let request = ScheduleRequest::new("Onboarding SaaS", "Olá!").with_visitor("Ana Lima", "a@b.co");
        assert_eq!(
            request.to_url(BASE),
            format!("{BASE}?name=Ana+Lima&email=a%40b.co&a1=Onboarding+SaaS&a2=Ol%C3%A1%21")
        );
    }

    #[test]
    fn annotation_slots_are_always_present() {
        let url = ScheduleRequest::new("", "").to_url(BASE);
        assert_eq!(url, format!("{BASE}?a1=&a2="));
    }

    #[test]
    fn appends_to_existing_query() {
        let url = ScheduleRequest::new("x", "y").to_url("https://cal.example/slot?month=2025-01");
        assert_eq!(url, "https://cal.example/slot?month=2025-01&a1=x&a2=y");
    }

    #[test]
    fn composed_link_parses_back() {
        let request = ScheduleRequest::new("Suporte & Treinamento", "a=b&c")
            .with_visitor("Zé", "ze@example.com");
        let parsed = url::Url::parse(&request.to_url(BASE)).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("name".into(), "Zé".into()),
                ("email".into(), "ze@example.com".into()),
                ("a1".into(), "Suporte & Treinamento".into()),
                ("a2".into(), "a=b&c".into()),
            ]
        );
    }
}
