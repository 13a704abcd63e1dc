use dioxus::prelude::*;

use crate::content::ABOUT_HIGHLIGHTS;
use crate::i18n;
use crate::t;

#[component]
pub fn About() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { id: "sobre", class: "section section--bordered",
            h2 { class: "section__title", {t!("about-title")} }
            div { class: "about__grid",
                p { class: "about__bio",
                    {t!("about-intro")}
                    " "
                    strong { "Guilherme Gomes Aschi" }
                    ", "
                    {t!("about-role")}
                }
                ul { class: "bullet-list",
                    for item in ABOUT_HIGHLIGHTS.iter() {
                        li { key: "{item}", class: "check-item", "✓ {item}" }
                    }
                }
            }
        }
    }
}
