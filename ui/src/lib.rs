//! Shared UI crate for the portfolio site: landing sections, the metrics
//! counter animator and the scheduling bridge. Platform shells only mount
//! the router around these views.

pub mod components;
pub mod contact;
pub mod content;
pub mod core;
pub mod i18n;
pub mod metrics;
pub mod scheduling;
pub mod sections;
pub mod views;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
