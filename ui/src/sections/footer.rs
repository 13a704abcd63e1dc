use dioxus::prelude::*;

use crate::core::platform;
use crate::i18n;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let _lang = i18n::use_active_language();
    let year = platform::current_year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                p { "© {year} Guilherme Suporte TI. " {t!("footer-rights")} }
                div { class: "footer__links",
                    a { class: "footer__link", href: "/privacidade", {t!("footer-privacy")} }
                    a { class: "footer__link", href: "/termos", {t!("footer-terms")} }
                }
            }
        }
    }
}
