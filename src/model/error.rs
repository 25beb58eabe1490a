//! Error types for tprompt.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for building and running a prompter session
//!   - [`InputError`] - The prompt text could not be loaded (fatal, before any layout work)
//!   - [`MeasureError`] - The injected width measurement failed (fatal, layout cannot proceed)
//!   - [`TimingError`] - Durations or content height make a positive scroll speed impossible
//!
//! Terminal failures stay in the view layer as `TuiError::Io`, which wraps [`AppError`]
//! rather than the other way around.
//!
//! A duration that is too short for the pause budget is not an error: the planner
//! degrades and reports it through [`crate::model::DegradedTiming`].
//!
//! No variant is retried anywhere. Layout and timing are pure and deterministic, so a
//! failure means the input is structurally bad rather than transiently unavailable.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use tprompt::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _text = read_prompt()?;
///     Ok(())
/// }
/// # fn read_prompt() -> Result<String, InputError> { Ok(String::new()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the prompt text.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Text measurement failed while wrapping.
    #[error("Failed to lay out text: {0}")]
    Measure(#[from] MeasureError),

    /// A scroll plan could not be derived.
    #[error("Failed to plan timing: {0}")]
    Timing(#[from] TimingError),
}

/// Errors encountered when loading the prompt text.
///
/// All variants are fatal: the process reports the message and exits with a non-zero
/// status before any layout work happens.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified text file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tprompt::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("The file '{}' was not found", .path.display())]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// Text was requested from stdin, but stdin is an interactive terminal.
    ///
    /// **Recovery**: Show both invocation modes and exit:
    /// - `tprompt script.txt 60`
    /// - `cat script.txt | tprompt - 60`
    #[error("No input on stdin: provide a file path or pipe text to stdin")]
    NoInput,

    /// The source contained no lines to prompt.
    #[error("No text to prompt in {source_name}")]
    Empty {
        /// Display name of the source (file path or `<stdin>`).
        source_name: String,
    },

    /// Generic I/O error, including text that is not valid UTF-8.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The injected text-width measurement failed.
///
/// Not handled inside the wrapper; it propagates to whoever builds the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to measure {text:?}: {reason}")]
pub struct MeasureError {
    /// The candidate text that was being measured.
    pub text: String,
    /// Backend-supplied description of the failure.
    pub reason: String,
}

impl MeasureError {
    /// Create a measurement error for `text`.
    pub fn new(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// Inputs for which no positive, finite scroll speed exists.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimingError {
    /// Total duration was negative, zero, NaN or infinite.
    #[error("Total duration must be a positive number of seconds (got {0})")]
    InvalidDuration(f64),

    /// Pause duration was negative, NaN or infinite.
    #[error("Pause duration must be zero or more seconds (got {0})")]
    InvalidPauseDuration(f64),

    /// There is no content to scroll through.
    #[error("Content height must be positive (got {0})")]
    EmptyContent(f64),

    /// The duration is so short that the speed is not a finite number.
    #[error("Duration too short to scroll the text (speed would be {0})")]
    SpeedOverflow(f64),
}
