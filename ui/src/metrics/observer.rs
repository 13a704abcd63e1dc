//! Viewport visibility reports for a single element.

use super::animator::Visibility;

/// An armed `IntersectionObserver` on one element. Dropping the watch
/// disconnects the observer and releases its callback.
pub struct VisibilityWatch {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl VisibilityWatch {
    /// Observe the element with `element_id`, reporting every threshold
    /// crossing to `on_report`.
    ///
    /// Returns `None` when the element is absent or the observer cannot be
    /// created; callers treat that as "never visible".
    #[cfg(target_arch = "wasm32")]
    pub fn arm<F>(element_id: &str, threshold: f64, mut on_report: F) -> Option<Self>
    where
        F: FnMut(Visibility) + 'static,
    {
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let document = crate::core::platform::document().ok()?;
        let Some(target) = document.get_element_by_id(element_id) else {
            tracing::debug!(%element_id, "visibility target missing; counters stay idle");
            return None;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_report(Visibility::new(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ));
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| tracing::warn!(?err, "IntersectionObserver unavailable"))
                .ok()?;
        observer.observe(&target);
        tracing::debug!(%element_id, threshold, "visibility observer armed");

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn arm<F>(element_id: &str, threshold: f64, on_report: F) -> Option<Self>
    where
        F: FnMut(Visibility) + 'static,
    {
        let _ = on_report;
        tracing::debug!(%element_id, threshold, "no viewport outside a browser");
        None
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
        tracing::debug!("visibility observer disconnected");
    }
}
