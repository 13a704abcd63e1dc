use dioxus::prelude::*;

use crate::components::GradientButton;
use crate::contact::use_lead_state;
use crate::content::PLANS;
use crate::i18n;
use crate::scheduling;
use crate::t;

#[component]
pub fn Plans() -> Element {
    let _lang = i18n::use_active_language();
    let lead = use_lead_state();

    rsx! {
        section { id: "planos", class: "section section--bordered",
            h2 { class: "section__title", {t!("plans-title")} }
            div { class: "plans__grid",
                for plan in PLANS.iter() {
                    div {
                        key: "{plan.name}",
                        class: if plan.featured { "card-frame card-frame--featured" } else { "card-frame" },
                        div { class: "card plan",
                            div { class: "plan__header",
                                h3 { class: "plan__name", "{plan.name}" }
                                if plan.featured {
                                    span { class: "badge", {t!("plans-popular")} }
                                }
                            }
                            div { class: "plan__price", "{plan.price}" }
                            ul { class: "bullet-list plan__items",
                                for item in plan.items.iter() {
                                    li { key: "{item}", "▹ {item}" }
                                }
                            }
                            GradientButton {
                                class: "plan__cta",
                                onclick: move |_| {
                                    scheduling::open_schedule(&lead);
                                },
                                {t!("plans-hire")}
                            }
                        }
                    }
                }
            }
        }
    }
}
