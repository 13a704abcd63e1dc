//! Cross-cutting building blocks: configuration, clocks, browser glue and formatting.

pub mod config;
pub mod format;
pub mod platform;
pub mod timing;
