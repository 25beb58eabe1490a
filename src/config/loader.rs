//! Configuration file loading with precedence handling.

use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "TPROMPT_CONFIG";
/// Environment variable overriding the sentence pause length.
pub const ENV_PAUSE_DURATION: &str = "TPROMPT_PAUSE_DURATION";
/// Environment variable overriding mirror mode.
pub const ENV_MIRROR: &str = "TPROMPT_MIRROR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {}: {reason}", .path.display())]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {}: {reason}", .path.display())]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config key that was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tprompt/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Seconds to hold on each sentence-ending line.
    #[serde(default)]
    pub pause_duration: Option<f64>,

    /// Focus line position as a fraction of prompt height.
    #[serde(default)]
    pub focus_ratio: Option<f64>,

    /// Initial distance below the origin as a fraction of prompt height.
    #[serde(default)]
    pub lead_in_ratio: Option<f64>,

    /// Blank columns on each side of the text.
    #[serde(default)]
    pub margin: Option<u16>,

    /// Blank rows between display lines.
    #[serde(default)]
    pub line_spacing: Option<u16>,

    /// Frames per second for the scroll loop.
    #[serde(default)]
    pub frame_rate: Option<u32>,

    /// Start mirrored.
    #[serde(default)]
    pub mirror: Option<bool>,

    /// Show the status bar.
    #[serde(default)]
    pub show_status: Option<bool>,

    /// Text color (name, `#rrggbb` or palette index).
    #[serde(default)]
    pub text_color: Option<String>,

    /// Background color.
    #[serde(default)]
    pub background_color: Option<String>,

    /// Focus marker color.
    #[serde(default)]
    pub focus_color: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Sentence pause length in seconds.
    pub pause_duration: f64,
    /// Focus line position, 0.0 (top) to 1.0 (bottom).
    pub focus_ratio: f64,
    /// Lead-in distance, 0.0 to 1.0 of the prompt height.
    pub lead_in_ratio: f64,
    /// Blank columns on each side.
    pub margin: u16,
    /// Blank rows between lines.
    pub line_spacing: u16,
    /// Scroll loop frame rate.
    pub frame_rate: u32,
    /// Mirror mode at startup.
    pub mirror: bool,
    /// Status bar visibility.
    pub show_status: bool,
    /// Text color.
    pub text_color: Color,
    /// Background color.
    pub background_color: Color,
    /// Focus marker color.
    pub focus_color: Color,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pause_duration: 0.8,
            focus_ratio: 0.3,
            lead_in_ratio: 0.65,
            margin: 4,
            line_spacing: 1,
            frame_rate: 60,
            mirror: false,
            show_status: true,
            text_color: Color::White,
            background_color: Color::Black,
            focus_color: Color::Red,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check ranges that TOML types alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pause_duration.is_finite() || self.pause_duration < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "pause_duration",
                reason: format!("must be zero or more seconds, got {}", self.pause_duration),
            });
        }
        check_ratio("focus_ratio", self.focus_ratio)?;
        check_ratio("lead_in_ratio", self.lead_in_ratio)?;
        if !(1..=240).contains(&self.frame_rate) {
            return Err(ConfigError::InvalidValue {
                field: "frame_rate",
                reason: format!("must be between 1 and 240, got {}", self.frame_rate),
            });
        }
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be between 0.0 and 1.0, got {value}"),
        })
    }
}

fn parse_color(
    field: &'static str,
    raw: Option<String>,
    default: Color,
) -> Result<Color, ConfigError> {
    match raw {
        None => Ok(default),
        Some(raw) => Color::from_str(&raw).map_err(|_| ConfigError::InvalidValue {
            field,
            reason: format!("unknown color {raw:?}"),
        }),
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tprompt/tprompt.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tprompt").join("tprompt.log")
    } else {
        PathBuf::from("tprompt.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tprompt/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tprompt").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TPROMPT_CONFIG` environment variable
/// 3. Default path `~/.config/tprompt/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for color names ratatui cannot parse.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    Ok(ResolvedConfig {
        pause_duration: config.pause_duration.unwrap_or(defaults.pause_duration),
        focus_ratio: config.focus_ratio.unwrap_or(defaults.focus_ratio),
        lead_in_ratio: config.lead_in_ratio.unwrap_or(defaults.lead_in_ratio),
        margin: config.margin.unwrap_or(defaults.margin),
        line_spacing: config.line_spacing.unwrap_or(defaults.line_spacing),
        frame_rate: config.frame_rate.unwrap_or(defaults.frame_rate),
        mirror: config.mirror.unwrap_or(defaults.mirror),
        show_status: config.show_status.unwrap_or(defaults.show_status),
        text_color: parse_color("text_color", config.text_color, defaults.text_color)?,
        background_color: parse_color(
            "background_color",
            config.background_color,
            defaults.background_color,
        )?,
        focus_color: parse_color("focus_color", config.focus_color, defaults.focus_color)?,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TPROMPT_PAUSE_DURATION`: Override sentence pause length
/// - `TPROMPT_MIRROR`: Override mirror mode
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_env_overrides_with(config, |key| std::env::var(key).ok())
}

/// Apply environment overrides read through `lookup`.
///
/// Values that do not parse are ignored with a warning.
pub fn apply_env_overrides_with<F>(mut config: ResolvedConfig, lookup: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_PAUSE_DURATION) {
        match raw.trim().parse::<f64>() {
            Ok(pause) => config.pause_duration = pause,
            Err(_) => warn!(value = %raw, "Ignoring unparsable {ENV_PAUSE_DURATION}"),
        }
    }

    if let Some(raw) = lookup(ENV_MIRROR) {
        match parse_flag(&raw) {
            Some(mirror) => config.mirror = mirror,
            None => warn!(value = %raw, "Ignoring unparsable {ENV_MIRROR}"),
        }
    }

    config
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `mirror_override` - `Some(true)` when `--mirror` was passed
/// * `pause_override` - Pause length from `--pause`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    mirror_override: Option<bool>,
    pause_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(mirror) = mirror_override {
        config.mirror = mirror;
    }

    if let Some(pause) = pause_override {
        config.pause_duration = pause;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
