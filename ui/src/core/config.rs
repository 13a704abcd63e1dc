//! Site configuration: third-party endpoints and contact identifiers.
//!
//! Every value has a compiled-in default. Deployments may override a field at
//! build time by exporting the matching environment variable before running
//! `dx build` (values are captured with `option_env!`, so nothing is read at
//! runtime):
//!
//! | Field                | Variable                      |
//! |----------------------|-------------------------------|
//! | `scheduling_url`     | `PORTFOLIO_SCHEDULING_URL`    |
//! | `form_endpoint`      | `PORTFOLIO_FORM_ENDPOINT`     |
//! | `whatsapp_number`    | `PORTFOLIO_WHATSAPP_NUMBER`   |
//! | `contact_email`      | `PORTFOLIO_CONTACT_EMAIL`     |

use once_cell::sync::Lazy;

const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/gui-gomes-aschi/30min";
const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xrbazgvo";
const DEFAULT_WHATSAPP_NUMBER: &str = "5551995739787";
const DEFAULT_CONTACT_EMAIL: &str = "gui.gomes.aschi@gmail.com";

/// Public stylesheet of the scheduling widget.
pub const WIDGET_CSS_URL: &str = "https://assets.calendly.com/assets/external/widget.css";
/// Substring used to detect an already-present widget stylesheet.
pub const WIDGET_CSS_MARKER: &str = "calendly.com/assets/external/widget.css";
/// Public script of the scheduling widget.
pub const WIDGET_JS_URL: &str = "https://assets.calendly.com/assets/external/widget.js";
/// Global object the widget script registers on `window`.
pub const WIDGET_GLOBAL: &str = "Calendly";
/// Popup entry point exposed on [`WIDGET_GLOBAL`].
pub const WIDGET_POPUP_FN: &str = "initPopupWidget";

/// Annotation slots understood by the scheduling service, in the order its
/// invitee questions are configured there. `a1` carries the selected service,
/// `a2` the free-text message.
pub const ANNOTATION_SLOTS: (&str, &str) = ("a1", "a2");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub scheduling_url: String,
    pub form_endpoint: String,
    pub whatsapp_number: String,
    pub contact_email: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl SiteConfig {
    /// Resolve the configuration from build-time overrides and defaults.
    pub fn from_build_env() -> Self {
        Self {
            scheduling_url: option_env!("PORTFOLIO_SCHEDULING_URL")
                .unwrap_or(DEFAULT_SCHEDULING_URL)
                .to_string(),
            form_endpoint: option_env!("PORTFOLIO_FORM_ENDPOINT")
                .unwrap_or(DEFAULT_FORM_ENDPOINT)
                .to_string(),
            whatsapp_number: option_env!("PORTFOLIO_WHATSAPP_NUMBER")
                .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
                .to_string(),
            contact_email: option_env!("PORTFOLIO_CONTACT_EMAIL")
                .unwrap_or(DEFAULT_CONTACT_EMAIL)
                .to_string(),
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheduling_url: DEFAULT_SCHEDULING_URL.to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            linkedin_url: "https://www.linkedin.com/in/guilhermeaschi/".to_string(),
            github_url: "https://github.com/".to_string(),
        }
    }
}

static CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::from_build_env);

/// Process-wide configuration.
pub fn site() -> &'static SiteConfig {
    &CONFIG
}
