use dioxus::prelude::*;

use crate::core::config;
use crate::i18n;
use crate::sections::Footer;
use crate::t;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
fn LegalPage(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div { class: "page page--legal",
            main { class: "legal",
                a { class: "legal__back", href: "/", "← " {t!("legal-back")} }
                h1 { class: "section__title", "{title}" }
                {children}
            }
            Footer {}
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    let _lang = i18n::use_active_language();
    let email = config::site().contact_email.clone();

    rsx! {
        LegalPage { title: t!("privacy-title"),
            p { {t!("privacy-collected")} }
            p { {t!("privacy-usage")} }
            p { {t!("privacy-processors")} }
            p {
                {t!("privacy-contact")}
                " "
                a { href: "mailto:{email}", "{email}" }
            }
        }
    }
}

#[component]
pub fn Terms() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        LegalPage { title: t!("terms-title"),
            p { {t!("terms-scope")} }
            p { {t!("terms-quotes")} }
            p { {t!("terms-liability")} }
        }
    }
}
