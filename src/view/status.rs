//! Status bar: playback state, clock and key hints.

use super::styles::PrompterStyles;
use crate::engine::{ScrollPhase, Session};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str = "Space start/pause · m mirror · Esc quit";

/// What the status bar reports as the playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Not started yet.
    Ready,
    /// Scrolling.
    Playing,
    /// Holding on a sentence end.
    Holding,
    /// Paused by the user.
    Paused,
    /// All text has scrolled past; still running until quit.
    Finished,
}

impl PlaybackStatus {
    /// Derive the status from a session.
    pub fn of(session: &Session) -> Self {
        match session.state().phase() {
            ScrollPhase::Idle if session.played_seconds() == 0.0 => Self::Ready,
            ScrollPhase::Idle => Self::Paused,
            _ if session.is_finished() => Self::Finished,
            ScrollPhase::AutoPaused => Self::Holding,
            ScrollPhase::Scrolling => Self::Playing,
        }
    }

    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Playing => "PLAYING",
            Self::Holding => "HOLD",
            Self::Paused => "PAUSED",
            Self::Finished => "END",
        }
    }
}

/// Format seconds as `mm:ss`, or `h:mm:ss` past an hour.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Build the status line for `session`.
pub fn status_line(session: &Session, mirror: bool, styles: &PrompterStyles) -> Line<'static> {
    let status = PlaybackStatus::of(session);
    let mut spans = vec![
        Span::styled(format!(" {} ", status.label()), styles.status_flag),
        Span::styled(
            format!(
                " {} / {} ",
                format_clock(session.played_seconds()),
                format_clock(session.total_duration_seconds())
            ),
            styles.status,
        ),
    ];

    if mirror {
        spans.push(Span::styled(" MIRROR ", styles.status_flag));
    }
    if session.degraded().is_some() {
        spans.push(Span::styled(" DEGRADED ", styles.status_flag));
    }

    spans.push(Span::styled(format!(" {KEY_HINTS}"), styles.status));
    Line::from(spans)
}

/// Render the status bar into `area`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    mirror: bool,
    styles: &PrompterStyles,
) {
    let paragraph = Paragraph::new(status_line(session, mirror, styles)).style(styles.status);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SessionParams;

    fn session(text: &str, duration: f64) -> Session {
        let params = SessionParams {
            max_width: 80.0,
            line_height: 1.0,
            total_duration_seconds: duration,
            pause_duration_seconds: 0.8,
            focus_inset: 2.0,
        };
        Session::build(text, &params, &|s: &str| s.chars().count() as f64).unwrap()
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn format_clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(9.99), "00:09");
        assert_eq!(format_clock(125.0), "02:05");
        assert_eq!(format_clock(3725.0), "1:02:05");
        assert_eq!(format_clock(-4.0), "00:00");
    }

    #[test]
    fn fresh_session_is_ready() {
        assert_eq!(PlaybackStatus::of(&session("Hi.", 10.0)), PlaybackStatus::Ready);
    }

    #[test]
    fn status_follows_phase() {
        let mut s = session("intro\nEnd.", 10.0);
        s.toggle_manual_pause();
        s.tick(0.01, 0.0);
        assert_eq!(PlaybackStatus::of(&s), PlaybackStatus::Playing);

        s.toggle_manual_pause();
        assert_eq!(PlaybackStatus::of(&s), PlaybackStatus::Paused);
    }

    #[test]
    fn status_reports_end_once_past_content() {
        let mut s = session("only", 1.0);
        s.toggle_manual_pause();
        for _ in 0..40 {
            s.tick(0.1, 0.0);
        }
        assert_eq!(PlaybackStatus::of(&s), PlaybackStatus::Finished);
        assert_eq!(PlaybackStatus::Finished.label(), "END");
    }

    #[test]
    fn status_line_shows_clock_and_flags() {
        let s = session("A.\nB.\nC.", 1.0);
        let text = line_text(&status_line(&s, true, &PrompterStyles::default()));
        assert!(text.contains("READY"));
        assert!(text.contains("00:00 / 00:01"));
        assert!(text.contains("MIRROR"));
        assert!(text.contains("DEGRADED"));
        assert!(text.contains("Esc quit"));
    }

    #[test]
    fn status_line_omits_flags_when_not_set() {
        let s = session("Plain text", 60.0);
        let text = line_text(&status_line(&s, false, &PrompterStyles::default()));
        assert!(!text.contains("MIRROR"));
        assert!(!text.contains("DEGRADED"));
        assert!(text.contains("01:00"));
    }
}
