// Shared navigation bar with anchors, schedule action and locale picker.
pub mod site_navbar;
pub use site_navbar::SiteNavbar;

mod buttons;
pub use buttons::{GradientButton, GradientLink};

pub mod toast;
pub use toast::{use_provide_toast, use_toast, ToastHandle, ToastOutlet, ToastTone};

pub(crate) mod floating_actions;
pub use floating_actions::FloatingActions;
