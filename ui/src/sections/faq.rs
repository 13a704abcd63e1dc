use dioxus::prelude::*;

use crate::content::FAQ;
use crate::i18n;
use crate::t;

#[component]
pub fn Faq() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { id: "faq", class: "section section--bordered",
            h2 { class: "section__title", {t!("faq-title")} }
            div { class: "faq__list",
                for entry in FAQ.iter() {
                    details { key: "{entry.question}", class: "faq__item",
                        summary { class: "faq__question",
                            "{entry.question}"
                            span { class: "faq__chevron", "›" }
                        }
                        p { class: "faq__answer", "{entry.answer}" }
                    }
                }
            }
        }
    }
}
