use dioxus::prelude::*;

use crate::contact::{whatsapp, LeadState};
use crate::core::{config, platform};
use crate::i18n;
use crate::scheduling;
use crate::t;

/// Floating chat button plus the bottom action bar shown on small screens.
#[component]
pub fn FloatingActions() -> Element {
    let _lang = i18n::use_active_language();
    let lead = use_context::<LeadState>();
    let cfg = config::site();
    let chat = whatsapp::chat_link(&cfg.whatsapp_number, whatsapp::FLOATING_GREETING);

    rsx! {
        a {
            class: "floating-chat",
            href: "{chat}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "WhatsApp",
            span { class: "floating-chat__inner", "💬" }
        }

        div { class: "mobile-actions",
            button {
                r#type: "button",
                class: "mobile-actions__primary",
                onclick: move |_| {
                    scheduling::open_schedule(&lead);
                },
                {t!("mobile-schedule")}
            }
            button {
                r#type: "button",
                class: "mobile-actions__secondary",
                onclick: move |_| open_service_chat(&lead),
                "WhatsApp"
            }
        }
    }
}

/// Open WhatsApp with `[service] message` from the lead state.
pub(crate) fn open_service_chat(lead: &LeadState) {
    let number = &config::site().whatsapp_number;
    let link = whatsapp::service_chat_link(
        number,
        lead.service.peek().as_str(),
        lead.message.peek().as_str(),
    );
    if let Err(err) = platform::open_new_context(&link) {
        tracing::warn!(%err, "could not open WhatsApp");
    }
}
