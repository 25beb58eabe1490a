//! Timing planner: one constant scroll speed that leaves room for every pause.
//!
//! Pause count and length are known before playback starts, so the whole
//! duration is budgeted up front instead of corrected while scrolling.

use crate::model::{DegradedTiming, PlanReport, TimingError, TimingPlan};

/// Scroll time used when the pauses alone consume the requested duration.
pub const MIN_SCROLL_SECONDS: f64 = 1.0;

/// Compute the scroll speed for a session.
///
/// `scroll budget = total - sentences * pause` and
/// `speed = content height / scroll budget`. When the scroll budget is not
/// positive it is clamped to [`MIN_SCROLL_SECONDS`] and the report carries a
/// [`DegradedTiming`] warning.
///
/// # Errors
///
/// Returns [`TimingError`] when no positive, finite speed can be produced.
pub fn plan(
    total_duration_seconds: f64,
    pause_duration_seconds: f64,
    sentence_line_count: usize,
    total_content_height: f64,
) -> Result<PlanReport, TimingError> {
    if !total_duration_seconds.is_finite() || total_duration_seconds <= 0.0 {
        return Err(TimingError::InvalidDuration(total_duration_seconds));
    }
    if !pause_duration_seconds.is_finite() || pause_duration_seconds < 0.0 {
        return Err(TimingError::InvalidPauseDuration(pause_duration_seconds));
    }
    if !total_content_height.is_finite() || total_content_height <= 0.0 {
        return Err(TimingError::EmptyContent(total_content_height));
    }

    let pause_budget = sentence_line_count as f64 * pause_duration_seconds;
    let mut scroll_budget = total_duration_seconds - pause_budget;
    let mut degraded = None;

    if scroll_budget <= 0.0 {
        scroll_budget = MIN_SCROLL_SECONDS;
        degraded = Some(DegradedTiming {
            requested_seconds: total_duration_seconds,
            pause_budget_seconds: pause_budget,
            clamped_scroll_seconds: scroll_budget,
        });
    }

    let pixels_per_second = total_content_height / scroll_budget;
    if !pixels_per_second.is_finite() {
        return Err(TimingError::SpeedOverflow(pixels_per_second));
    }

    Ok(PlanReport {
        plan: TimingPlan::new(pixels_per_second, pause_duration_seconds),
        degraded,
    })
}
