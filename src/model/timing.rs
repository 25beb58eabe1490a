//! Scroll timing values produced by the timing planner.

use std::fmt;

/// Constant scroll speed plus the fixed pause length used at sentence ends.
///
/// # Invariants
/// - `pixels_per_second > 0` and finite
/// - `pause_duration_seconds >= 0`
///
/// Derived once per run and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingPlan {
    pixels_per_second: f64,
    pause_duration_seconds: f64,
}

impl TimingPlan {
    pub(crate) fn new(pixels_per_second: f64, pause_duration_seconds: f64) -> Self {
        debug_assert!(pixels_per_second > 0.0 && pixels_per_second.is_finite());
        debug_assert!(pause_duration_seconds >= 0.0);
        Self {
            pixels_per_second,
            pause_duration_seconds,
        }
    }

    /// Scroll speed in layout units per second.
    pub fn pixels_per_second(&self) -> f64 {
        self.pixels_per_second
    }

    /// Length of each sentence-end pause in seconds.
    pub fn pause_duration_seconds(&self) -> f64 {
        self.pause_duration_seconds
    }
}

/// Warning raised when the pauses alone use up the requested duration.
///
/// Playback still proceeds: scroll time is clamped to
/// [`DegradedTiming::clamped_scroll_seconds`] and the session runs longer
/// than requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradedTiming {
    /// Total duration the caller asked for.
    pub requested_seconds: f64,
    /// Time consumed by sentence-end pauses.
    pub pause_budget_seconds: f64,
    /// Scroll time actually used.
    pub clamped_scroll_seconds: f64,
}

impl fmt::Display for DegradedTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duration {:.1}s is too short for {:.1}s of pauses; scrolling over {:.1}s instead",
            self.requested_seconds, self.pause_budget_seconds, self.clamped_scroll_seconds
        )
    }
}

/// Result of planning: the plan and whether it had to degrade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanReport {
    /// The scroll plan to drive playback with.
    pub plan: TimingPlan,
    /// Present when the requested duration could not be honored.
    pub degraded: Option<DegradedTiming>,
}
