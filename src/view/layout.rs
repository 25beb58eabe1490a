//! Screen layout: prompt area on top, optional status bar at the bottom.

use super::constants::STATUS_BAR_HEIGHT;
use super::prompt::{PromptGeometry, PromptView};
use super::status::render_status_bar;
use super::styles::PrompterStyles;
use crate::config::ResolvedConfig;
use crate::engine::Session;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Display settings that can change while the prompter runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Mirror mode, toggled with `m`.
    pub mirror: bool,
    /// Whether the status bar takes the bottom row.
    pub show_status: bool,
    /// Blank columns on each side of the text.
    pub margin: u16,
    /// Focus row as a fraction of the prompt height.
    pub focus_ratio: f64,
    /// Colors.
    pub styles: PrompterStyles,
}

impl ViewSettings {
    /// Settings from the resolved configuration.
    pub fn from_config(config: &ResolvedConfig, styles: PrompterStyles) -> Self {
        Self {
            mirror: config.mirror,
            show_status: config.show_status,
            margin: config.margin,
            focus_ratio: config.focus_ratio,
            styles,
        }
    }

    /// Rows left for the prompt once the status bar is taken out of `height`.
    pub fn prompt_height(&self, height: u16) -> u16 {
        if self.show_status {
            height.saturating_sub(STATUS_BAR_HEIGHT)
        } else {
            height
        }
    }

    /// Prompt geometry for a terminal `height` rows tall.
    pub fn geometry(&self, height: u16) -> PromptGeometry {
        PromptGeometry::new(self.prompt_height(height), self.focus_ratio)
    }
}

/// Split `area` into prompt and status areas.
pub fn split_areas(area: Rect, show_status: bool) -> (Rect, Option<Rect>) {
    if !show_status || area.height <= STATUS_BAR_HEIGHT {
        return (area, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Prompt
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], Some(chunks[1]))
}

/// Render one full frame.
pub fn render_layout(frame: &mut Frame, session: &Session, settings: &ViewSettings) {
    let (prompt_area, status_area) = split_areas(frame.area(), settings.show_status);
    let geometry = PromptGeometry::new(prompt_area.height, settings.focus_ratio);

    let prompt = PromptView::new(session.layout(), session.state().scroll_y(), &settings.styles)
        .focus_row(geometry.focus_row)
        .margin(settings.margin)
        .mirror(settings.mirror);
    frame.render_widget(prompt, prompt_area);

    if let Some(area) = status_area {
        render_status_bar(frame, area, session, settings.mirror, &settings.styles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(show_status: bool) -> ViewSettings {
        ViewSettings {
            show_status,
            ..ViewSettings::from_config(&ResolvedConfig::default(), PrompterStyles::default())
        }
    }

    #[test]
    fn split_reserves_bottom_row_for_status() {
        let (prompt, status) = split_areas(Rect::new(0, 0, 40, 10), true);
        assert_eq!(prompt, Rect::new(0, 0, 40, 9));
        assert_eq!(status, Some(Rect::new(0, 9, 40, 1)));
    }

    #[test]
    fn split_without_status_uses_whole_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(split_areas(area, false), (area, None));
    }

    #[test]
    fn split_drops_status_on_single_row_terminal() {
        let area = Rect::new(0, 0, 40, 1);
        assert_eq!(split_areas(area, true), (area, None));
    }

    #[test]
    fn geometry_matches_rendered_prompt_area() {
        let with_status = settings(true);
        assert_eq!(with_status.prompt_height(24), 23);
        assert_eq!(with_status.geometry(24), PromptGeometry::new(23, 0.3));

        let without = settings(false);
        assert_eq!(without.prompt_height(24), 24);
    }
}
