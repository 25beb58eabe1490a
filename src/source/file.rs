//! File-based text source.

use super::LoadedText;
use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// A text file on disk, checked for existence at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a FileSource for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and invalid UTF-8.
    pub fn read(&self) -> Result<LoadedText, InputError> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(LoadedText {
            name: self.path.display().to_string(),
            text,
        })
    }
}
