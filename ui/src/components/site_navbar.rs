use crate::contact::LeadState;
use crate::core::{config, platform};
use crate::i18n;
use crate::scheduling;
use crate::t;
use dioxus::prelude::*;

use super::GradientButton;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Sticky header: brand, in-page anchors, profile links, schedule action and
/// the locale picker.
///
/// The picker switches the Fluent loader and, when the shell provides a
/// `Signal<String>` language context, updates it so every subscribed section
/// re-renders with fresh strings.
#[component]
pub fn SiteNavbar() -> Element {
    i18n::init();

    let lead = use_context::<LeadState>();
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang = i18n::use_active_language();
    let github_url = config::site().github_url.clone();
    let linkedin_url = config::site().linkedin_url.clone();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-mark", aria_hidden: "true", "</>" }
                    span { class: "navbar__brand-name", "Guilherme Suporte TI" }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#servicos", {t!("nav-services")} }
                    a { class: "navbar__link", href: "#skills", {t!("nav-skills")} }
                    a { class: "navbar__link", href: "#sobre", {t!("nav-about")} }
                    a {
                        class: "navbar__link",
                        href: "#contato",
                        onclick: move |evt| {
                            evt.prevent_default();
                            platform::scroll_to_section("contato");
                        },
                        {t!("nav-contact")}
                    }
                }

                div { class: "navbar__actions",
                    a {
                        class: "navbar__icon",
                        href: "{github_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "GitHub",
                        "GH"
                    }
                    a {
                        class: "navbar__icon",
                        href: "{linkedin_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "LinkedIn",
                        "in"
                    }
                    GradientButton {
                        onclick: move |_| {
                            scheduling::open_schedule(&lead);
                        },
                        "📅 "
                        {t!("nav-schedule")}
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    let label = i18n::language_label(code).to_string();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{label}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
