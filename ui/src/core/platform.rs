//! Browser glue shared by the page sections.
//!
//! Everything that touches `window`/`document` lives behind
//! `cfg(target_arch = "wasm32")`. Native builds get inert fallbacks that log
//! and report [`PlatformError::Unsupported`], which keeps the pure logic
//! testable on the host.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(&'static str),
    #[error("clipboard copy blocked")]
    ClipboardBlocked,
    #[error("not supported on this platform")]
    Unsupported,
}

#[cfg(target_arch = "wasm32")]
pub fn document() -> Result<web_sys::Document, PlatformError> {
    web_sys::window()
        .ok_or(PlatformError::NoWindow)?
        .document()
        .ok_or(PlatformError::NoDocument)
}

/// Open `url` in a new browsing context without giving it a handle back to
/// this page.
pub fn open_new_context(url: &str) -> Result<(), PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        // With `noopener` the returned handle is always null.
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|_| PlatformError::Dom("window.open"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(%url, "no browser available to open link");
        Err(PlatformError::Unsupported)
    }
}

/// Smoothly scroll the element with `id` into view. Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Ok(document) = document() else {
            return;
        };
        if let Some(target) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            tracing::debug!(%id, "scroll target not found");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(%id, "scroll requested outside a browser");
    }
}

/// Copy `payload` to the clipboard.
///
/// Uses a detached textarea and `execCommand("copy")`, which works without the
/// async Clipboard API permission prompt.
pub fn copy_text(payload: &str) -> Result<(), PlatformError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = document()?;
        let body = document.body().ok_or(PlatformError::Dom("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| PlatformError::Dom("create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| PlatformError::Dom("textarea cast"))?;
        textarea.set_value(payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(PlatformError::ClipboardBlocked)
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = payload;
        Err(PlatformError::Unsupported)
    }
}

/// Calendar year on the visitor's clock (UTC on native).
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_only_operations_degrade_on_host() {
        assert_eq!(
            open_new_context("https://example.com"),
            Err(PlatformError::Unsupported)
        );
        assert_eq!(copy_text("x"), Err(PlatformError::Unsupported));
    }

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
