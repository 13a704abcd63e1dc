use dioxus::prelude::*;

use crate::components::{
    floating_actions::open_service_chat, use_toast, GradientButton, ToastTone,
};
use crate::content::SERVICE_OPTIONS;
use crate::core::{config, platform};
use crate::i18n;
use crate::scheduling;
use crate::t;

use super::lead::use_lead_state;
use super::submission::{prepare, submit, ContactError, ContactStatus, ContactSubmission};

#[component]
pub fn ContactSection() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { id: "contato", class: "section section--bordered",
            h2 { class: "section__title", {t!("contact-title")} }
            p { class: "section__lead", {t!("contact-lead")} }
            div { class: "contact__grid",
                QuickActions {}
                ContactForm {}
            }
        }
    }
}

/// Schedule, e-mail, profiles and the service/message pair feeding WhatsApp
/// and the scheduling prefill.
#[component]
fn QuickActions() -> Element {
    let lead = use_lead_state();
    let toast = use_toast();
    let email = config::site().contact_email.clone();
    let (mut service, mut message) = (lead.service, lead.message);

    let copy_email = {
        let email = email.clone();
        move |_| match platform::copy_text(&email) {
            Ok(()) => toast.show(t!("toast-email-copied"), ToastTone::Info),
            Err(err) => {
                tracing::warn!(%err, "copy e-mail failed");
                toast.show(t!("toast-copy-failed"), ToastTone::Error);
            }
        }
    };

    rsx! {
        div { class: "card-frame",
            div { class: "card contact__actions",
                GradientButton {
                    onclick: move |_| {
                        scheduling::open_schedule(&lead);
                    },
                    "📅 "
                    {t!("contact-schedule")}
                }

                div { class: "contact__details",
                    p { class: "contact__detail", "✉️ {email}" }
                    GradientButton { onclick: copy_email, "📋 " {t!("contact-copy-email")} }
                    p { class: "contact__detail", "in · linkedin.com/in/guilhermeaschi" }
                    p { class: "contact__detail", "GH · github.com/seuusuario" }
                }

                div { class: "contact__whatsapp",
                    select {
                        class: "field",
                        aria_label: t!("contact-service-label"),
                        value: "{service}",
                        oninput: move |evt| service.set(evt.value()),
                        for choice in SERVICE_OPTIONS.iter() {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button--whatsapp",
                        onclick: move |_| open_service_chat(&lead),
                        {t!("contact-whatsapp")}
                    }
                }
                textarea {
                    class: "field",
                    rows: 3,
                    placeholder: t!("contact-whatsapp-placeholder"),
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let lead = use_lead_state();
    let (mut name, mut email) = (lead.name, lead.email);
    let mut subject = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut status = use_signal(ContactStatus::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if matches!(*status.peek(), ContactStatus::Sending) {
            return;
        }

        let submission = ContactSubmission {
            name: name(),
            email: email(),
            subject: subject(),
            message: body(),
            company: company(),
        };

        let endpoint = config::site().form_endpoint.clone();
        let submission = match prepare(&endpoint, submission) {
            Ok(Some(submission)) => submission,
            Ok(None) => {
                status.set(ContactStatus::Idle);
                return;
            }
            Err(err) => {
                status.set(ContactStatus::Failed(err));
                return;
            }
        };

        status.set(ContactStatus::Sending);
        spawn(async move {
            match submit(&endpoint, &submission).await {
                Ok(()) => {
                    tracing::info!("contact form delivered");
                    lead.clear_visitor();
                    subject.set(String::new());
                    body.set(String::new());
                    status.set(ContactStatus::Sent);
                }
                Err(err) => {
                    tracing::warn!(%err, "contact form failed");
                    status.set(ContactStatus::Failed(err));
                }
            }
        });
    };

    let current = status();
    let sending = matches!(current, ContactStatus::Sending);

    rsx! {
        form { class: "card-frame", onsubmit: on_submit,
            div { class: "card contact__form",
                input {
                    r#type: "text",
                    name: "company",
                    class: "visually-hidden",
                    tabindex: -1,
                    autocomplete: "off",
                    value: "{company}",
                    oninput: move |evt| company.set(evt.value()),
                }

                label { class: "field-label", r#for: "contact-name", {t!("form-name")} }
                input {
                    id: "contact-name",
                    class: "field",
                    name: "name",
                    required: true,
                    placeholder: t!("form-name"),
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }

                label { class: "field-label", r#for: "contact-email", {t!("form-email")} }
                input {
                    id: "contact-email",
                    class: "field",
                    r#type: "email",
                    name: "email",
                    required: true,
                    placeholder: "voce@empresa.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "field-label", r#for: "contact-subject", {t!("form-subject")} }
                input {
                    id: "contact-subject",
                    class: "field",
                    name: "subject",
                    placeholder: "Onboarding SaaS / VoIP / Automação",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }

                label { class: "field-label", r#for: "contact-message", {t!("form-message")} }
                textarea {
                    id: "contact-message",
                    class: "field",
                    name: "message",
                    required: true,
                    rows: 5,
                    placeholder: t!("form-message-placeholder"),
                    value: "{body}",
                    oninput: move |evt| body.set(evt.value()),
                }

                {status_line(&current)}

                div { class: "contact__submit",
                    GradientButton { kind: "submit", disabled: sending,
                        if sending {
                            {t!("form-sending")}
                        } else {
                            {t!("form-send")}
                            " →"
                        }
                    }
                }
            }
        }
    }
}

fn status_line(status: &ContactStatus) -> Element {
    match status {
        ContactStatus::Idle | ContactStatus::Sending => rsx! {},
        ContactStatus::Sent => rsx! {
            p { class: "form-status form-status--ok", {t!("form-sent")} }
        },
        ContactStatus::Failed(err) => {
            let message = match err {
                ContactError::NotConfigured => t!("form-error-not-configured"),
                ContactError::Rejected(reason) => reason.clone(),
                ContactError::EndpointRefused => t!("form-error-endpoint"),
                ContactError::Network(_) | ContactError::Unsupported => t!("form-error-network"),
            };
            rsx! {
                p { class: "form-status form-status--error", "{message}" }
            }
        }
    }
}
