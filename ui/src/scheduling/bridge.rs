//! "Open prefilled schedule": popup when the widget is ready, new browsing
//! context otherwise.

use thiserror::Error;

use super::request::ScheduleRequest;
use super::widget::WidgetLoadCell;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("scheduling widget is not registered")]
    WidgetUnavailable,
    #[error("scheduling popup failed: {0}")]
    PopupFailed(String),
}

/// Which path [`open_prefilled_schedule`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Popup,
    NewContext,
}

/// Browser capabilities the bridge relies on.
pub trait SchedulingHost {
    /// Whether the widget's popup entry point is registered right now.
    fn popup_available(&self) -> bool;
    fn open_popup(&self, url: &str) -> Result<(), BridgeError>;
    fn open_new_context(&self, url: &str);
}

/// Compose the prefilled link for `request` and open it.
///
/// Never fails: when the popup is unavailable or throws, the link is opened
/// in a new browsing context instead. Observing the popup entry point also
/// promotes `widget` to `Ready`.
pub fn open_prefilled_schedule<H>(
    host: &H,
    widget: &WidgetLoadCell,
    base_url: &str,
    request: &ScheduleRequest,
) -> ScheduleOutcome
where
    H: SchedulingHost + ?Sized,
{
    let url = request.to_url(base_url);

    if host.popup_available() {
        widget.mark_ready();
        match host.open_popup(&url) {
            Ok(()) => {
                tracing::info!("scheduling popup opened");
                return ScheduleOutcome::Popup;
            }
            Err(err) => tracing::warn!(%err, "falling back to a new tab"),
        }
    } else {
        tracing::debug!(state = ?widget.get(), "scheduling widget not ready; opening new tab");
    }

    host.open_new_context(&url);
    ScheduleOutcome::NewContext
}

/// The real `window`, talking to the widget through its global object.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
impl BrowserHost {
    fn popup_entry() -> Option<(wasm_bindgen::JsValue, js_sys::Function)> {
        use js_sys::{Function, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        use crate::core::config::{WIDGET_GLOBAL, WIDGET_POPUP_FN};

        let window = web_sys::window()?;
        let global = Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL)).ok()?;
        if !global.is_object() {
            return None;
        }
        let popup = Reflect::get(&global, &JsValue::from_str(WIDGET_POPUP_FN))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some((global, popup))
    }
}

#[cfg(target_arch = "wasm32")]
impl SchedulingHost for BrowserHost {
    fn popup_available(&self) -> bool {
        Self::popup_entry().is_some()
    }

    fn open_popup(&self, url: &str) -> Result<(), BridgeError> {
        use js_sys::{Object, Reflect};
        use wasm_bindgen::JsValue;

        let (global, popup) = Self::popup_entry().ok_or(BridgeError::WidgetUnavailable)?;
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("url"), &JsValue::from_str(url))
            .map_err(|err| BridgeError::PopupFailed(format!("{err:?}")))?;
        popup
            .call1(&global, &options)
            .map(|_| ())
            .map_err(|err| BridgeError::PopupFailed(format!("{err:?}")))
    }

    fn open_new_context(&self, url: &str) {
        if let Err(err) = crate::core::platform::open_new_context(url) {
            tracing::warn!(%err, "could not open scheduling link");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SchedulingHost for BrowserHost {
    fn popup_available(&self) -> bool {
        false
    }

    fn open_popup(&self, _url: &str) -> Result<(), BridgeError> {
        Err(BridgeError::WidgetUnavailable)
    }

    fn open_new_context(&self, url: &str) {
        let _ = crate::core::platform::open_new_context(url);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::scheduling::WidgetLoadState;

    const BASE: &str = "https://calendly.com/demo/30min";

    #[derive(Default)]
    struct FakeHost {
        popup_registered: bool,
        popup_throws: bool,
        popups: RefCell<Vec<String>>,
        new_contexts: RefCell<Vec<String>>,
    }

    impl SchedulingHost for FakeHost {
        fn popup_available(&self) -> bool {
            self.popup_registered
        }

        fn open_popup(&self, url: &str) -> Result<(), BridgeError> {
            if self.popup_throws {
                return Err(BridgeError::PopupFailed("TypeError".into()));
            }
            self.popups.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn open_new_context(&self, url: &str) {
            self.new_contexts.borrow_mut().push(url.to_string());
        }
    }

    fn request() -> ScheduleRequest {
        ScheduleRequest::new("Onboarding SaaS", "Quero um orçamento").with_visitor("Ana", "")
    }

    #[test]
    fn ready_widget_opens_popup_only() {
        let host = FakeHost {
            popup_registered: true,
            ..Default::default()
        };
        let cell = WidgetLoadCell::new();
        cell.begin_loading();

        let outcome = open_prefilled_schedule(&host, &cell, BASE, &request());

        assert_eq!(outcome, ScheduleOutcome::Popup);
        assert_eq!(host.popups.borrow().as_slice(), &[request().to_url(BASE)]);
        assert!(host.new_contexts.borrow().is_empty());
        assert_eq!(cell.get(), WidgetLoadState::Ready);
    }

    #[test]
    fn missing_widget_opens_exactly_one_tab() {
        let host = FakeHost::default();
        let cell = WidgetLoadCell::new();

        let outcome = open_prefilled_schedule(&host, &cell, BASE, &request());

        assert_eq!(outcome, ScheduleOutcome::NewContext);
        assert_eq!(host.new_contexts.borrow().as_slice(), &[request().to_url(BASE)]);
        assert!(host.popups.borrow().is_empty());
        assert_eq!(cell.get(), WidgetLoadState::NotLoaded);
    }

    #[test]
    fn throwing_popup_falls_back_to_one_tab() {
        let host = FakeHost {
            popup_registered: true,
            popup_throws: true,
            ..Default::default()
        };
        let cell = WidgetLoadCell::new();

        let outcome = open_prefilled_schedule(&host, &cell, BASE, &request());

        assert_eq!(outcome, ScheduleOutcome::NewContext);
        assert_eq!(host.new_contexts.borrow().len(), 1);
    }

    #[test]
    fn link_always_carries_annotation_slots() {
        let host = FakeHost::default();
        let cell = WidgetLoadCell::new();
        let req = ScheduleRequest::new("Telefonia SIP/VoIP", "");
        open_prefilled_schedule(&host, &cell, BASE, &req);

        let opened = host.new_contexts.borrow()[0].clone();
        let parsed = url::Url::parse(&opened).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("a1".into(), "Telefonia SIP/VoIP".into()),
                ("a2".into(), String::new()),
            ]
        );
    }

    #[test]
    fn host_browser_never_has_popup() {
        assert!(!BrowserHost.popup_available());
        assert_eq!(
            BrowserHost.open_popup("https://x"),
            Err(BridgeError::WidgetUnavailable)
        );
    }
}
