//! "Resultados em números": scroll-triggered, once-only counter animation.

mod animator;
mod observer;
mod view;

pub use animator::{
    CounterAnimator, FrameStep, Metric, Visibility, ANIMATION_DURATION_MS, VISIBILITY_THRESHOLD,
};
pub use observer::VisibilityWatch;
pub use view::{MetricsSection, COUNTERS_CONTAINER_ID};
