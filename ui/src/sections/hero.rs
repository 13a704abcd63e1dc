use dioxus::prelude::*;

use crate::components::{GradientButton, GradientLink};
use crate::contact::whatsapp;
use crate::content::HERO_HIGHLIGHTS;
use crate::core::{config, platform};
use crate::i18n;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let _lang = i18n::use_active_language();
    let chat = whatsapp::chat_link(&config::site().whatsapp_number, whatsapp::HERO_GREETING);

    rsx! {
        section { id: "home", class: "section hero",
            h1 { class: "hero__title",
                {t!("hero-title")}
                " "
                span { class: "text-gradient", {t!("hero-title-highlight")} }
                "."
            }
            p { class: "hero__lead", {t!("hero-lead")} }
            div { class: "hero__actions",
                GradientLink { href: chat, new_tab: true, "💬 WhatsApp" }
                GradientButton {
                    onclick: move |_| platform::scroll_to_section("servicos"),
                    {t!("hero-see-services")}
                    " →"
                }
            }
            ul { class: "hero__highlights",
                for item in HERO_HIGHLIGHTS.iter() {
                    li { key: "{item}", class: "check-item", "✓ {item}" }
                }
            }
        }
    }
}
