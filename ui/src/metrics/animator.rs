//! Counter animation state machine.
//!
//! The animator is armed at mount, starts on the first sufficiently visible
//! report and then interpolates every counter with one shared progress value:
//!
//! ```text
//! p = min(1, (now - started_at) / ANIMATION_DURATION_MS)
//! displayed[i] = round(target[i] * p)
//! ```
//!
//! Once started it never re-arms, so visibility toggles after the first
//! trigger are ignored for the rest of the page view.

use crate::core::timing::InstantStamp;

/// Fraction of the container that must be visible to start the animation.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;
/// Slack for ratios the browser reports just under a threshold it crossed
/// (0.2999… for 0.3).
const RATIO_TOLERANCE: f64 = 1e-6;
/// Length of the count-up.
pub const ANIMATION_DURATION_MS: f64 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub target: u32,
    /// Presentation-only unit appended to the number (e.g. `%`).
    pub suffix: &'static str,
}

impl Metric {
    pub const fn new(label: &'static str, target: u32, suffix: &'static str) -> Self {
        Self {
            label,
            target,
            suffix,
        }
    }
}

/// One visibility report from the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(intersecting: bool, ratio: f64) -> Self {
        Self {
            intersecting,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }

    fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Armed,
    Running { started_at: InstantStamp },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Progress is below 1; request another frame.
    Continue,
    /// All counters reached their targets.
    Finished,
    /// The animation has not been triggered; nothing to draw.
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    metrics: Vec<Metric>,
    displayed: Vec<u32>,
    phase: Phase,
    threshold: f64,
    duration_ms: f64,
}

impl CounterAnimator {
    pub fn new(metrics: &[Metric]) -> Self {
        Self {
            metrics: metrics.to_vec(),
            displayed: vec![0; metrics.len()],
            phase: Phase::Armed,
            threshold: VISIBILITY_THRESHOLD,
            duration_ms: ANIMATION_DURATION_MS,
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn displayed(&self) -> &[u32] {
        &self.displayed
    }

    /// Latched guard: true once the animation has been triggered.
    pub fn has_triggered(&self) -> bool {
        !matches!(self.phase, Phase::Armed)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Feed a visibility report. Returns `true` only for the report that
    /// starts the animation.
    pub fn observe(&mut self, visibility: Visibility, now: InstantStamp) -> bool {
        if self.has_triggered() || !visibility.meets(self.threshold) {
            return false;
        }
        self.phase = Phase::Running { started_at: now };
        true
    }

    /// Recompute the displayed values for a frame at `now`.
    pub fn advance(&mut self, now: InstantStamp) -> FrameStep {
        let started_at = match self.phase {
            Phase::Armed => return FrameStep::Idle,
            Phase::Finished => return FrameStep::Finished,
            Phase::Running { started_at } => started_at,
        };

        let p = progress(now - started_at, self.duration_ms);
        for (shown, metric) in self.displayed.iter_mut().zip(&self.metrics) {
            // Frames can arrive with timestamps slightly older than the
            // trigger; never move a counter backwards.
            *shown = (*shown).max(interpolate(metric.target, p));
        }

        if p >= 1.0 {
            self.phase = Phase::Finished;
            FrameStep::Finished
        } else {
            FrameStep::Continue
        }
    }
}

/// Progress fraction clamped to `[0, 1]`.
pub(crate) fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

fn interpolate(target: u32, p: f64) -> u32 {
    (target as f64 * p).round() as u32
}
