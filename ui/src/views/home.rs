use dioxus::prelude::*;

use crate::components::{use_provide_toast, FloatingActions, SiteNavbar, ToastOutlet};
use crate::contact::{use_provide_lead_state, ContactSection};
use crate::i18n;
use crate::metrics::MetricsSection;
use crate::scheduling::use_widget_preload;
use crate::sections::{About, Faq, Footer, Hero, Plans, Services, Skills};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Landing page. Owns the lead state shared by navbar, plans, quick actions
/// and the scheduling bridge, plus the page-wide toast slot.
#[component]
pub fn Home() -> Element {
    let lang = i18n::use_active_language();
    use_provide_lead_state();
    use_provide_toast();
    use_widget_preload();

    tracing::debug!(lang = %lang, "landing render");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div { class: "page",
            SiteNavbar {}
            main { class: "page__main",
                Hero {}
                Services {}
                Skills {}
                MetricsSection {}
                Plans {}
                About {}
                ContactSection {}
                Faq {}
            }
            Footer {}
            FloatingActions {}
            ToastOutlet {}
        }
    }
}
