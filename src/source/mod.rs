//! Prompt text sources.
//!
//! This module loads the raw text to be prompted:
//! - File loading for a path argument
//! - Stdin for piped input (`-`)
//! - Unified InputSource enum for both
//!
//! Sources are read completely before any layout work happens.

use crate::engine::paragraphs;
use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Path argument that selects stdin.
pub const STDIN_ARG: &str = "-";

/// Raw prompt text plus a display name for messages and the window title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    /// File path or `<stdin>`.
    pub name: String,
    /// Text exactly as read.
    pub text: String,
}

/// Unified input source for prompt text.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Read a file from disk.
    File(FileSource),
    /// Read piped stdin to EOF.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read the whole source.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Empty` if the text has no lines at all, or an I/O error
    /// from the underlying source.
    pub fn load(self) -> Result<LoadedText, InputError> {
        let loaded = match self {
            InputSource::File(f) => f.read()?,
            InputSource::Stdin(s) => s.read()?,
        };
        ensure_not_empty(loaded)
    }
}

/// Detect and create the appropriate input source.
///
/// # Logic:
/// 1. `-` selects stdin (must be piped)
/// 2. Anything else is a file path (must exist)
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if stdin was selected but is a terminal.
pub fn detect_input_source(arg: PathBuf) -> Result<InputSource, InputError> {
    if arg.as_os_str() == STDIN_ARG {
        Ok(InputSource::Stdin(StdinSource::new()?))
    } else {
        Ok(InputSource::File(FileSource::new(arg)?))
    }
}

/// Detect the source for `arg` and read it.
///
/// # Errors
///
/// Any [`InputError`] from detection or reading.
pub fn load_text(arg: PathBuf) -> Result<LoadedText, InputError> {
    detect_input_source(arg)?.load()
}

fn ensure_not_empty(loaded: LoadedText) -> Result<LoadedText, InputError> {
    if paragraphs(&loaded.text).next().is_none() {
        return Err(InputError::Empty {
            source_name: loaded.name,
        });
    }
    Ok(loaded)
}
