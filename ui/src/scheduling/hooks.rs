use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::contact::LeadState;
use crate::core::config;

use super::bridge::{open_prefilled_schedule, BrowserHost, ScheduleOutcome};
use super::widget::{BrowserDocument, PreloadedWidget, WIDGET_STATE};

/// Preload the widget's stylesheet and script once per mount of the calling
/// component. The script element is released when the component unmounts.
pub fn use_widget_preload() {
    let slot: Rc<RefCell<Option<PreloadedWidget>>> = use_hook(Default::default);

    {
        let slot = slot.clone();
        use_effect(move || {
            let mut current = slot.borrow_mut();
            if current.is_some() {
                return;
            }
            match BrowserDocument::current() {
                Ok(document) => {
                    *current = PreloadedWidget::inject(document, BrowserHost, &WIDGET_STATE);
                }
                Err(err) => tracing::debug!(%err, "no document to preload the widget into"),
            }
        });
    }

    use_drop(move || {
        slot.borrow_mut().take();
    });
}

/// Open the scheduling flow prefilled from the visitor's current lead state.
pub fn open_schedule(lead: &LeadState) -> ScheduleOutcome {
    let request = lead.schedule_request();
    open_prefilled_schedule(
        &BrowserHost,
        &WIDGET_STATE,
        &config::site().scheduling_url,
        &request,
    )
}
