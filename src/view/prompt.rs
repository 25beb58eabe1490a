//! Prompt area widget: draws the layout at the current scroll position.

use super::constants::{FOCUS_MARKER, FOCUS_MARKER_WIDTH};
use super::styles::PrompterStyles;
use crate::model::{DisplayLine, Layout};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Vertical geometry of the prompt area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptGeometry {
    /// Rows available for text.
    pub height: u16,
    /// Row the reader follows; sentence pauses land here.
    pub focus_row: u16,
}

impl PromptGeometry {
    /// Place the focus row at `focus_ratio` of `height`, kept inside the area.
    pub fn new(height: u16, focus_ratio: f64) -> Self {
        let focus_row = (f64::from(height) * focus_ratio).floor() as u16;
        Self {
            height,
            focus_row: focus_row.min(height.saturating_sub(1)),
        }
    }

    /// Focus threshold handed to the scroll driver.
    pub fn focus_y(&self) -> f64 {
        f64::from(self.focus_row)
    }

    /// Lead-in distance for a fresh session.
    pub fn lead_in(&self, lead_in_ratio: f64) -> f64 {
        f64::from(self.height) * lead_in_ratio
    }
}

/// Reverse a line for mirror mode.
///
/// Terminals cannot flip glyphs, so the character order is reversed instead.
/// Zero-width characters such as combining accents stay after the character they
/// modify.
pub fn mirror_text(text: &str) -> String {
    let mut clusters = Vec::new();
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if index > start && ch.width() != Some(0) {
            clusters.push(&text[start..index]);
            start = index;
        }
    }
    clusters.push(&text[start..]);
    clusters.into_iter().rev().collect()
}

/// Indices of lines that may intersect a viewport of `height` rows at `scroll_y`.
pub fn visible_range(layout: &Layout, scroll_y: f64, height: u16) -> Range<usize> {
    let line_height = layout.line_height();
    if line_height <= 0.0 {
        return 0..layout.len();
    }

    let first = (scroll_y / line_height).floor().max(0.0) as usize;
    let last = (((scroll_y + f64::from(height)) / line_height).ceil() + 1.0).max(0.0) as usize;
    first.min(layout.len())..last.min(layout.len())
}

/// Row of `line` relative to the top of the prompt area, if it is on screen.
fn screen_row(line: &DisplayLine, scroll_y: f64, height: u16) -> Option<u16> {
    let row = (line.y_offset() - scroll_y).floor();
    if row >= 0.0 && row < f64::from(height) {
        Some(row as u16)
    } else {
        None
    }
}

/// Widget drawing the visible slice of a [`Layout`] plus the focus markers.
#[derive(Debug, Clone, Copy)]
pub struct PromptView<'a> {
    layout: &'a Layout,
    scroll_y: f64,
    focus_row: u16,
    margin: u16,
    mirror: bool,
    styles: &'a PrompterStyles,
}

impl<'a> PromptView<'a> {
    /// Create the widget for one frame.
    pub fn new(layout: &'a Layout, scroll_y: f64, styles: &'a PrompterStyles) -> Self {
        Self {
            layout,
            scroll_y,
            focus_row: 0,
            margin: 0,
            mirror: false,
            styles,
        }
    }

    /// Row to mark as the focus line.
    pub fn focus_row(mut self, focus_row: u16) -> Self {
        self.focus_row = focus_row;
        self
    }

    /// Blank columns on each side.
    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Flip horizontally.
    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    fn render_line(&self, text: &str, y: u16, area: Rect, buf: &mut Buffer) {
        let right_edge = area.width.saturating_sub(self.margin);
        if right_edge <= self.margin || text.is_empty() {
            return;
        }

        if self.mirror {
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            let start = right_edge.saturating_sub(width);
            buf.set_stringn(
                area.x + start,
                y,
                mirror_text(text),
                usize::from(right_edge - start),
                self.styles.text,
            );
        } else {
            buf.set_stringn(
                area.x + self.margin,
                y,
                text,
                usize::from(right_edge - self.margin),
                self.styles.text,
            );
        }
    }

    fn render_focus_markers(&self, area: Rect, buf: &mut Buffer) {
        if self.focus_row >= area.height {
            return;
        }
        let y = area.y + self.focus_row;
        buf.set_string(area.x, y, FOCUS_MARKER, self.styles.focus);
        if area.width >= FOCUS_MARKER_WIDTH * 2 {
            buf.set_string(
                area.x + area.width - FOCUS_MARKER_WIDTH,
                y,
                FOCUS_MARKER,
                self.styles.focus,
            );
        }
    }
}

impl Widget for PromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.styles.background);

        let lines = self.layout.lines();
        for index in visible_range(self.layout, self.scroll_y, area.height) {
            let line = &lines[index];
            if let Some(row) = screen_row(line, self.scroll_y, area.height) {
                self.render_line(line.text(), area.y + row, area, buf);
            }
        }

        self.render_focus_markers(area, buf);
    }
}
