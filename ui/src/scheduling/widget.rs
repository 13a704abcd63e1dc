//! Widget asset preload and load-state tracking.

use std::sync::atomic::{AtomicU8, Ordering};

use super::bridge::SchedulingHost;
use crate::core::config::{WIDGET_CSS_MARKER, WIDGET_CSS_URL, WIDGET_JS_URL};
use crate::core::platform::PlatformError;

/// Load progress of the external widget script for this page load.
///
/// Transitions only move forward: `NotLoaded → Loading → Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum WidgetLoadState {
    NotLoaded = 0,
    Loading = 1,
    Ready = 2,
}

impl WidgetLoadState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::NotLoaded,
            1 => Self::Loading,
            _ => Self::Ready,
        }
    }
}

/// Monotonic cell holding a [`WidgetLoadState`].
#[derive(Debug)]
pub struct WidgetLoadCell(AtomicU8);

impl WidgetLoadCell {
    pub const fn new() -> Self {
        Self(AtomicU8::new(WidgetLoadState::NotLoaded as u8))
    }

    pub fn get(&self) -> WidgetLoadState {
        WidgetLoadState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Record that the script was requested. No effect once ready.
    pub fn begin_loading(&self) -> WidgetLoadState {
        self.advance(WidgetLoadState::Loading)
    }

    /// Record that the widget registered its global capability.
    pub fn mark_ready(&self) -> WidgetLoadState {
        self.advance(WidgetLoadState::Ready)
    }

    fn advance(&self, to: WidgetLoadState) -> WidgetLoadState {
        let previous = WidgetLoadState::from_u8(self.0.fetch_max(to as u8, Ordering::AcqRel));
        if previous < to {
            tracing::debug!(from = ?previous, ?to, "scheduling widget state");
        }
        previous.max(to)
    }
}

impl Default for WidgetLoadCell {
    fn default() -> Self {
        Self::new()
    }
}

/// The page's widget state.
pub static WIDGET_STATE: WidgetLoadCell = WidgetLoadCell::new();

/// Document operations the widget preload needs. [`BrowserDocument`] is the
/// real page.
pub trait WidgetDocument {
    /// Handle of an inserted script element.
    type Script;

    /// Whether a stylesheet whose `href` contains `marker` is already linked.
    fn has_stylesheet(&self, marker: &str) -> bool;
    fn append_stylesheet(&self, href: &str) -> Result<(), PlatformError>;
    /// Append an async script; `on_load` runs once it has loaded.
    fn append_script(
        &self,
        src: &str,
        on_load: Box<dyn FnMut()>,
    ) -> Result<Self::Script, PlatformError>;
    /// Detach `script` and forget its load handler.
    fn remove_script(&self, script: &Self::Script) -> Result<(), PlatformError>;
}

/// Link the widget stylesheet unless one matching `marker` is present.
/// Returns whether a link was appended.
pub fn ensure_stylesheet<D>(document: &D, marker: &str, href: &str) -> bool
where
    D: WidgetDocument + ?Sized,
{
    if document.has_stylesheet(marker) {
        return false;
    }
    match document.append_stylesheet(href) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "widget stylesheet not linked");
            false
        }
    }
}

/// Script element inserted for the widget. Dropping it detaches the script
/// (best effort) and abandons a load still in flight.
pub struct PreloadedWidget<D: WidgetDocument = BrowserDocument> {
    document: D,
    script: D::Script,
}

impl<D: WidgetDocument> PreloadedWidget<D> {
    /// Ensure the widget stylesheet is present and append the async widget
    /// script, moving `state` to `Loading`. The script's load event promotes
    /// `state` to `Ready` once `host` reports the popup entry point.
    pub fn inject<H>(document: D, host: H, state: &'static WidgetLoadCell) -> Option<Self>
    where
        H: SchedulingHost + 'static,
    {
        ensure_stylesheet(&document, WIDGET_CSS_MARKER, WIDGET_CSS_URL);

        let on_load = Box::new(move || {
            if host.popup_available() {
                state.mark_ready();
            } else {
                tracing::warn!("widget script loaded without registering its popup");
            }
        });
        let script = match document.append_script(WIDGET_JS_URL, on_load) {
            Ok(script) => script,
            Err(err) => {
                tracing::debug!(%err, state = ?state.get(), "widget preload skipped");
                return None;
            }
        };
        state.begin_loading();

        Some(Self { document, script })
    }
}

impl<D: WidgetDocument> Drop for PreloadedWidget<D> {
    fn drop(&mut self) {
        if let Err(err) = self.document.remove_script(&self.script) {
            tracing::debug!(%err, "widget script already detached");
        }
    }
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    #[cfg(target_arch = "wasm32")]
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn current() -> Result<Self, PlatformError> {
        #[cfg(target_arch = "wasm32")]
        {
            Ok(Self {
                document: crate::core::platform::document()?,
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Self {})
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserScript {
    element: web_sys::HtmlScriptElement,
    _onload: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl WidgetDocument for BrowserDocument {
    type Script = BrowserScript;

    fn has_stylesheet(&self, marker: &str) -> bool {
        let selector = format!("link[href*=\"{marker}\"]");
        matches!(self.document.query_selector(&selector), Ok(Some(_)))
    }

    fn append_stylesheet(&self, href: &str) -> Result<(), PlatformError> {
        use wasm_bindgen::JsCast;

        let link = self
            .document
            .create_element("link")
            .map_err(|_| PlatformError::Dom("create link"))?
            .dyn_into::<web_sys::HtmlLinkElement>()
            .map_err(|_| PlatformError::Dom("link cast"))?;
        link.set_rel("stylesheet");
        link.set_href(href);
        let head = self.document.head().ok_or(PlatformError::Dom("missing head"))?;
        head.append_child(&link)
            .map(|_| ())
            .map_err(|_| PlatformError::Dom("append link"))
    }

    fn append_script(
        &self,
        src: &str,
        on_load: Box<dyn FnMut()>,
    ) -> Result<BrowserScript, PlatformError> {
        use wasm_bindgen::{closure::Closure, JsCast};

        let element = self
            .document
            .create_element("script")
            .map_err(|_| PlatformError::Dom("create script"))?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| PlatformError::Dom("script cast"))?;
        element.set_src(src);
        element.set_async(true);

        let onload = Closure::wrap(on_load);
        element.set_onload(Some(onload.as_ref().unchecked_ref()));

        let body = self.document.body().ok_or(PlatformError::Dom("missing body"))?;
        body.append_child(&element)
            .map_err(|_| PlatformError::Dom("append script"))?;

        Ok(BrowserScript {
            element,
            _onload: onload,
        })
    }

    fn remove_script(&self, script: &BrowserScript) -> Result<(), PlatformError> {
        script.element.set_onload(None);
        let body = self.document.body().ok_or(PlatformError::Dom("missing body"))?;
        body.remove_child(&script.element)
            .map(|_| ())
            .map_err(|_| PlatformError::Dom("remove script"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl WidgetDocument for BrowserDocument {
    type Script = std::convert::Infallible;

    fn has_stylesheet(&self, _marker: &str) -> bool {
        false
    }

    fn append_stylesheet(&self, _href: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn append_script(
        &self,
        _src: &str,
        _on_load: Box<dyn FnMut()>,
    ) -> Result<Self::Script, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn remove_script(&self, script: &Self::Script) -> Result<(), PlatformError> {
        match *script {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scheduling::{BridgeError, BrowserHost};

    #[test]
    fn starts_not_loaded() {
        assert_eq!(WidgetLoadCell::new().get(), WidgetLoadState::NotLoaded);
    }

    #[test]
    fn moves_forward_only() {
        let cell = WidgetLoadCell::new();
        assert_eq!(cell.begin_loading(), WidgetLoadState::Loading);
        assert_eq!(cell.mark_ready(), WidgetLoadState::Ready);
        // A remount re-requesting the script must not regress readiness.
        assert_eq!(cell.begin_loading(), WidgetLoadState::Ready);
        assert_eq!(cell.get(), WidgetLoadState::Ready);
    }

    #[test]
    fn ready_may_be_observed_before_loading_is_recorded() {
        let cell = WidgetLoadCell::new();
        assert_eq!(cell.mark_ready(), WidgetLoadState::Ready);
        assert_eq!(cell.begin_loading(), WidgetLoadState::Ready);
    }

    #[test]
    fn host_preload_is_inert() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = BrowserDocument::current().unwrap();
        assert!(PreloadedWidget::inject(document, BrowserHost, &CELL).is_none());
        assert_eq!(CELL.get(), WidgetLoadState::NotLoaded);
    }

    #[derive(Default)]
    struct Page {
        stylesheets: Vec<String>,
        scripts: Vec<String>,
        removed: usize,
        on_load: Option<Box<dyn FnMut()>>,
    }

    #[derive(Clone, Default)]
    struct FakeDocument {
        page: Rc<RefCell<Page>>,
        preexisting_marker: bool,
        removal_fails: bool,
    }

    impl WidgetDocument for FakeDocument {
        type Script = usize;

        fn has_stylesheet(&self, marker: &str) -> bool {
            self.preexisting_marker
                || self.page.borrow().stylesheets.iter().any(|href| href.contains(marker))
        }

        fn append_stylesheet(&self, href: &str) -> Result<(), PlatformError> {
            self.page.borrow_mut().stylesheets.push(href.to_string());
            Ok(())
        }

        fn append_script(
            &self,
            src: &str,
            on_load: Box<dyn FnMut()>,
        ) -> Result<usize, PlatformError> {
            let mut page = self.page.borrow_mut();
            page.scripts.push(src.to_string());
            page.on_load = Some(on_load);
            Ok(page.scripts.len() - 1)
        }

        fn remove_script(&self, _script: &usize) -> Result<(), PlatformError> {
            if self.removal_fails {
                return Err(PlatformError::Dom("remove script"));
            }
            let mut page = self.page.borrow_mut();
            page.removed += 1;
            page.on_load = None;
            Ok(())
        }
    }

    struct Popup(bool);

    impl SchedulingHost for Popup {
        fn popup_available(&self) -> bool {
            self.0
        }

        fn open_popup(&self, _url: &str) -> Result<(), BridgeError> {
            Ok(())
        }

        fn open_new_context(&self, _url: &str) {}
    }

    fn fire_load(page: &Rc<RefCell<Page>>) {
        let mut handler = page.borrow_mut().on_load.take().expect("script has a load handler");
        handler();
    }

    #[test]
    fn preload_links_stylesheet_and_requests_script() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = FakeDocument::default();
        let page = document.page.clone();

        let widget = PreloadedWidget::inject(document, Popup(true), &CELL);
        assert!(widget.is_some());
        assert_eq!(page.borrow().stylesheets, vec![WIDGET_CSS_URL.to_string()]);
        assert_eq!(page.borrow().scripts, vec![WIDGET_JS_URL.to_string()]);
        assert_eq!(CELL.get(), WidgetLoadState::Loading);

        fire_load(&page);
        assert_eq!(CELL.get(), WidgetLoadState::Ready);
    }

    #[test]
    fn existing_marker_stylesheet_is_not_linked_twice() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = FakeDocument {
            preexisting_marker: true,
            ..FakeDocument::default()
        };
        let page = document.page.clone();

        let _widget = PreloadedWidget::inject(document.clone(), Popup(false), &CELL);
        assert!(page.borrow().stylesheets.is_empty());
        assert!(!ensure_stylesheet(&document, WIDGET_CSS_MARKER, WIDGET_CSS_URL));
        assert!(page.borrow().stylesheets.is_empty());
    }

    #[test]
    fn second_preload_reuses_the_linked_stylesheet() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = FakeDocument::default();
        let page = document.page.clone();

        drop(PreloadedWidget::inject(document.clone(), Popup(false), &CELL));
        let _again = PreloadedWidget::inject(document, Popup(false), &CELL);
        assert_eq!(page.borrow().stylesheets.len(), 1);
        assert_eq!(page.borrow().scripts.len(), 2);
    }

    #[test]
    fn load_without_popup_entry_stays_loading() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = FakeDocument::default();
        let page = document.page.clone();

        let _widget = PreloadedWidget::inject(document, Popup(false), &CELL);
        fire_load(&page);
        assert_eq!(CELL.get(), WidgetLoadState::Loading);
    }

    #[test]
    fn unmount_detaches_script_and_its_handler() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = FakeDocument::default();
        let page = document.page.clone();

        let widget = PreloadedWidget::inject(document, Popup(true), &CELL);
        drop(widget);
        assert_eq!(page.borrow().removed, 1);
        assert!(page.borrow().on_load.is_none());
        assert_eq!(CELL.get(), WidgetLoadState::Loading);
    }

    #[test]
    fn failed_script_removal_is_swallowed() {
        static CELL: WidgetLoadCell = WidgetLoadCell::new();
        let document = FakeDocument {
            removal_fails: true,
            ..FakeDocument::default()
        };
        let page = document.page.clone();

        let widget = PreloadedWidget::inject(document, Popup(false), &CELL);
        assert_eq!(CELL.get(), WidgetLoadState::Loading);
        drop(widget);
        assert_eq!(page.borrow().removed, 0);
        assert_eq!(CELL.get(), WidgetLoadState::Loading);
    }
}
