//! One prompter run: the layout and plan computed up front plus the live scroll state.

use super::layout::build_layout;
use super::scroll::{ScrollPhase, ScrollState};
use super::timing::plan;
use super::wrap::{wrap, TextMeasurer};
use crate::model::{AppError, DegradedTiming, Layout, LineIndex, TimingPlan};
use tracing::{debug, info, warn};

/// Geometry and timing inputs for building a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionParams {
    /// Widest a display line may measure.
    pub max_width: f64,
    /// Vertical distance between display lines.
    pub line_height: f64,
    /// Total time the text should take, pauses included.
    pub total_duration_seconds: f64,
    /// Length of each sentence-end pause.
    pub pause_duration_seconds: f64,
    /// How far below the origin the content starts.
    pub focus_inset: f64,
}

/// Layout, plan and scroll state for a single run.
///
/// Layout and plan are read-only after construction; only [`Session::tick`] and
/// [`Session::toggle_manual_pause`] mutate the scroll state.
#[derive(Debug, Clone)]
pub struct Session {
    layout: Layout,
    plan: TimingPlan,
    degraded: Option<DegradedTiming>,
    state: ScrollState,
    total_duration_seconds: f64,
    played_seconds: f64,
}

impl Session {
    /// Wrap, lay out and plan `text`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Measure`] if the measurer fails.
    /// - [`AppError::Timing`] if durations are invalid or there is nothing to scroll.
    pub fn build<M>(text: &str, params: &SessionParams, measurer: &M) -> Result<Self, AppError>
    where
        M: TextMeasurer + ?Sized,
    {
        let lines = wrap(text, params.max_width, measurer)?;
        let layout = build_layout(&lines, params.line_height);
        let sentence_lines = layout.sentence_line_count();

        let report = plan(
            params.total_duration_seconds,
            params.pause_duration_seconds,
            sentence_lines,
            layout.total_height(),
        )?;

        if let Some(warning) = &report.degraded {
            warn!(%warning, "Duration is very short relative to pauses. Speed adjusted.");
        }

        info!(
            display_lines = layout.len(),
            sentence_lines,
            total_height = layout.total_height(),
            pixels_per_second = report.plan.pixels_per_second(),
            "Session planned"
        );

        Ok(Self {
            layout,
            plan: report.plan,
            degraded: report.degraded,
            state: ScrollState::new(params.focus_inset),
            total_duration_seconds: params.total_duration_seconds,
            played_seconds: 0.0,
        })
    }

    /// Advance one frame. Returns the line that started a pause, if any.
    pub fn tick(&mut self, elapsed_seconds: f64, focus_y: f64) -> Option<LineIndex> {
        if self.state.phase() != ScrollPhase::Idle && elapsed_seconds.is_finite() {
            self.played_seconds += elapsed_seconds.max(0.0);
        }

        let triggered = self
            .state
            .advance(elapsed_seconds, &self.layout, &self.plan, focus_y);

        if let Some(line) = triggered {
            debug!(
                line = line.get(),
                scroll_y = self.state.scroll_y(),
                "Sentence pause triggered"
            );
        }

        triggered
    }

    /// Flip manual pause. Returns `true` when now paused.
    pub fn toggle_manual_pause(&mut self) -> bool {
        let paused = self.state.toggle_manual_pause();
        debug!(paused, scroll_y = self.state.scroll_y(), "Manual pause toggled");
        paused
    }

    /// The immutable layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The immutable plan.
    pub fn plan(&self) -> &TimingPlan {
        &self.plan
    }

    /// Present when the requested duration could not be honored.
    pub fn degraded(&self) -> Option<&DegradedTiming> {
        self.degraded.as_ref()
    }

    /// The live scroll state.
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Requested total duration.
    pub fn total_duration_seconds(&self) -> f64 {
        self.total_duration_seconds
    }

    /// Time spent outside manual pause, auto-pauses included.
    pub fn played_seconds(&self) -> f64 {
        self.played_seconds
    }

    /// Whether all content has scrolled past the origin.
    pub fn is_finished(&self) -> bool {
        self.state.is_past_end(&self.layout)
    }
}
