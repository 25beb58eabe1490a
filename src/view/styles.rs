//! Prompter color styling.

use crate::config::ResolvedConfig;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PrompterStyles =====

/// Styles for the prompt area, focus markers and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrompterStyles {
    /// Prompt text over the background.
    pub text: Style,
    /// Empty prompt area.
    pub background: Style,
    /// Focus line markers.
    pub focus: Style,
    /// Status bar.
    pub status: Style,
    /// Highlighted flags in the status bar (DEGRADED, MIRROR).
    pub status_flag: Style,
}

impl PrompterStyles {
    /// Build styles from the resolved colors.
    ///
    /// Without colors, text keeps the terminal defaults and markers fall back to bold.
    pub fn from_config(config: &ResolvedConfig, colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            let background = Style::default().bg(config.background_color);
            Self {
                text: background.fg(config.text_color),
                background,
                focus: background.fg(config.focus_color),
                status: Style::default().fg(Color::Gray).bg(Color::DarkGray),
                status_flag: Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                text: Style::default(),
                background: Style::default(),
                focus: Style::default().add_modifier(Modifier::BOLD),
                status: Style::default().add_modifier(Modifier::REVERSED),
                status_flag: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            }
        }
    }
}

impl Default for PrompterStyles {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default(), ColorConfig::new(true))
    }
}

// ===== Tests =====
