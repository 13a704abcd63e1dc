use dioxus::prelude::*;

use crate::content::{SERVICES, SKILLS};
use crate::i18n;
use crate::t;

#[component]
pub fn Services() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { id: "servicos", class: "section",
            h2 { class: "section__title", {t!("services-title")} }
            p { class: "section__lead", {t!("services-lead")} }
            div { class: "services__grid",
                for service in SERVICES.iter() {
                    article { key: "{service.title}", class: "card-frame",
                        div { class: "card",
                            div { class: "card__title",
                                span { class: "card__icon", {service.icon.glyph()} }
                                "{service.title}"
                            }
                            ul { class: "bullet-list",
                                for bullet in service.bullets.iter() {
                                    li { key: "{bullet}", "▹ {bullet}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { id: "skills", class: "section section--bordered",
            h2 { class: "section__title", {t!("skills-title")} }
            div { class: "skills__chips",
                for skill in SKILLS.iter() {
                    span { key: "{skill}", class: "chip", "{skill}" }
                }
            }
        }
    }
}
