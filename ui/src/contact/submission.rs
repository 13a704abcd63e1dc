//! Contact form delivery to the hosted form processor (Formspree).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Honeypot: hidden from people, filled in by bots.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("form endpoint is not configured")]
    NotConfigured,
    #[error("form rejected the submission: {0}")]
    Rejected(String),
    #[error("form endpoint refused the submission")]
    EndpointRefused,
    #[error("network failure: {0}")]
    Network(String),
    #[error("form submission needs a browser")]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

/// Validate the endpoint and screen out bot submissions.
///
/// `Ok(None)` means the honeypot was filled: drop the submission silently.
pub fn prepare(
    endpoint: &str,
    submission: ContactSubmission,
) -> Result<Option<ContactSubmission>, ContactError> {
    if !endpoint.contains("/f/") {
        return Err(ContactError::NotConfigured);
    }
    if !submission.company.is_empty() {
        tracing::debug!("honeypot filled; dropping contact submission");
        return Ok(None);
    }
    Ok(Some(submission))
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    message: Option<String>,
}

/// Map a non-2xx response body to an error, preferring the processor's own
/// first message.
pub fn rejection_from_body(body: &str) -> ContactError {
    serde_json::from_str::<ErrorBody>(body)
        .unwrap_or_default()
        .errors
        .into_iter()
        .find_map(|item| item.message.filter(|m| !m.trim().is_empty()))
        .map(ContactError::Rejected)
        .unwrap_or(ContactError::EndpointRefused)
}

/// POST the submission as JSON.
#[cfg(target_arch = "wasm32")]
pub async fn submit(endpoint: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|err| ContactError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ContactError::Network(err.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status, "contact form rejected");
    Err(rejection_from_body(&body))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn submit(endpoint: &str, submission: &ContactSubmission) -> Result<(), ContactError> {
    let _ = (endpoint, submission);
    Err(ContactError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ENDPOINT: &str = "https://formspree.io/f/abc123";

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            subject: "VoIP".into(),
            message: "Preciso de ajuda".into(),
            company: String::new(),
        }
    }

    #[test]
    fn rejects_unconfigured_endpoint() {
        assert_eq!(
            prepare("https://formspree.io/", filled()),
            Err(ContactError::NotConfigured)
        );
    }

    #[test]
    fn honeypot_drops_submission() {
        let mut bot = filled();
        bot.company = "ACME".into();
        assert_eq!(prepare(ENDPOINT, bot), Ok(None));
    }

    #[test]
    fn genuine_submission_passes_through() {
        assert_eq!(prepare(ENDPOINT, filled()), Ok(Some(filled())));
    }

    #[test]
    fn honeypot_is_not_serialized_when_empty() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ana",
                "email": "ana@x.com",
                "subject": "VoIP",
                "message": "Preciso de ajuda",
            })
        );
    }

    #[test]
    fn uses_first_processor_message() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"},{"message":"second"}]}"#;
        assert_eq!(
            rejection_from_body(body),
            ContactError::Rejected("should be an email".into())
        );
    }

    #[test]
    fn unparseable_body_is_generic_refusal() {
        assert_eq!(rejection_from_body("<html>404</html>"), ContactError::EndpointRefused);
        assert_eq!(rejection_from_body(r#"{"errors":[]}"#), ContactError::EndpointRefused);
    }

    #[test]
    fn host_submit_is_unsupported() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        assert_eq!(
            rt.block_on(submit(ENDPOINT, &filled())),
            Err(ContactError::Unsupported)
        );
    }
}
