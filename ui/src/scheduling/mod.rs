//! Bridge to the hosted scheduling widget.
//!
//! - [`widget`]: asset preload and the process-wide [`WidgetLoadState`].
//! - [`request`]: prefilled deep links built from a [`ScheduleRequest`].
//! - [`bridge`]: "open prefilled schedule" with popup → new-tab fallback.

mod bridge;
mod hooks;
mod request;
mod widget;

pub use bridge::{open_prefilled_schedule, BridgeError, BrowserHost, ScheduleOutcome, SchedulingHost};
pub use hooks::{open_schedule, use_widget_preload};
pub use request::ScheduleRequest;
pub use widget::{
    ensure_stylesheet, BrowserDocument, PreloadedWidget, WidgetDocument, WidgetLoadCell,
    WidgetLoadState, WIDGET_STATE,
};
