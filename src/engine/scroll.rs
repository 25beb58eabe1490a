//! Scroll driver: per-frame advance of the prompt position.
//!
//! # States
//! - `Idle`: the user has manual pause on. Nothing moves.
//! - `AutoPaused`: a sentence-ending line reached the focus line; waiting out the pause.
//! - `Scrolling`: position grows at the planned speed.
//!
//! Playback starts `Idle` with the content below the focus line so the reader gets a
//! lead-in. There is no terminal state here; the caller decides when a session is over.

use crate::model::{Layout, LineIndex, TimingPlan};
use std::collections::BTreeSet;

/// Which of the three driver states a [`ScrollState`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Manually paused (also the initial state).
    Idle,
    /// Moving at the planned speed.
    Scrolling,
    /// Holding on a sentence end.
    AutoPaused,
}

/// Mutable playback state, advanced once per rendered frame.
///
/// Manual pause overrides everything: while it is on, an active auto-pause keeps
/// its remaining time untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    scroll_y: f64,
    is_paused: bool,
    pause_remaining: f64,
    manually_paused: bool,
    /// Lines that already paused once. Only ever grows.
    triggered_pause_lines: BTreeSet<LineIndex>,
}

impl ScrollState {
    /// Initial state: manually paused, content `focus_inset` below the origin.
    pub fn new(focus_inset: f64) -> Self {
        Self {
            scroll_y: -focus_inset,
            is_paused: false,
            pause_remaining: 0.0,
            manually_paused: true,
            triggered_pause_lines: BTreeSet::new(),
        }
    }

    /// Current scroll position. Negative during the lead-in.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Whether a sentence-end pause is active.
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Seconds left in the active sentence-end pause.
    pub fn pause_remaining(&self) -> f64 {
        self.pause_remaining
    }

    /// Whether the user has paused playback.
    pub fn manually_paused(&self) -> bool {
        self.manually_paused
    }

    /// Flip manual pause. Returns the new value.
    pub fn toggle_manual_pause(&mut self) -> bool {
        self.manually_paused = !self.manually_paused;
        self.manually_paused
    }

    /// Lines that have already triggered their pause.
    pub fn triggered_pause_lines(&self) -> &BTreeSet<LineIndex> {
        &self.triggered_pause_lines
    }

    /// Whether `line` has already paused playback.
    pub fn has_triggered(&self, line: LineIndex) -> bool {
        self.triggered_pause_lines.contains(&line)
    }

    /// Current driver state.
    pub fn phase(&self) -> ScrollPhase {
        if self.manually_paused {
            ScrollPhase::Idle
        } else if self.is_paused {
            ScrollPhase::AutoPaused
        } else {
            ScrollPhase::Scrolling
        }
    }

    /// Whether the last line has scrolled past the origin.
    pub fn is_past_end(&self, layout: &Layout) -> bool {
        self.scroll_y >= layout.total_height()
    }

    /// Advance by one frame.
    ///
    /// At most one pause triggers per call: sentence lines are scanned in document
    /// order and the first untriggered line whose distance to the current position
    /// is within `focus_y` wins. Returns that line when a pause started.
    ///
    /// A fast scroll over a slow frame can jump a line past the threshold; it still
    /// triggers afterwards because the check is `<=`, but the pause happens late.
    pub fn advance(
        &mut self,
        elapsed_seconds: f64,
        layout: &Layout,
        plan: &TimingPlan,
        focus_y: f64,
    ) -> Option<LineIndex> {
        let elapsed = if elapsed_seconds.is_finite() {
            elapsed_seconds.max(0.0)
        } else {
            0.0
        };

        match self.phase() {
            ScrollPhase::Idle => None,
            ScrollPhase::AutoPaused => {
                self.pause_remaining -= elapsed;
                if self.pause_remaining <= 0.0 {
                    self.is_paused = false;
                    self.pause_remaining = 0.0;
                }
                None
            }
            ScrollPhase::Scrolling => {
                self.scroll_y += plan.pixels_per_second() * elapsed;
                self.check_pause_lines(layout, plan, focus_y)
            }
        }
    }

    fn check_pause_lines(
        &mut self,
        layout: &Layout,
        plan: &TimingPlan,
        focus_y: f64,
    ) -> Option<LineIndex> {
        let hit = layout
            .sentence_lines()
            .filter(|(index, _)| !self.triggered_pause_lines.contains(index))
            .find(|(_, line)| line.y_offset() - self.scroll_y <= focus_y)
            .map(|(index, _)| index)?;

        self.is_paused = true;
        self.pause_remaining = plan.pause_duration_seconds();
        self.triggered_pause_lines.insert(hit);
        Some(hit)
    }
}
