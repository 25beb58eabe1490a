//! Stdin text source for piped input.

use super::LoadedText;
use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Display name used for stdin in messages.
pub const STDIN_NAME: &str = "<stdin>";

/// Piped stdin, read to EOF.
///
/// Detects TTY vs piped input at construction so the prompter never blocks
/// waiting for the user to type a script.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader (for testing).
    ///
    /// Bypasses the TTY check.
    #[cfg(test)]
    pub(crate) fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read everything until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors and invalid UTF-8.
    pub fn read(mut self) -> Result<LoadedText, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(LoadedText {
            name: STDIN_NAME.to_string(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_consumes_until_eof() {
        let data = b"First line.\nSecond line\n";
        let source = StdinSource::from_reader(&data[..]);
        let loaded = source.read().unwrap();
        assert_eq!(loaded.text, "First line.\nSecond line\n");
        assert_eq!(loaded.name, STDIN_NAME);
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let data = [0xc3u8, 0x28];
        let source = StdinSource::from_reader(&data[..]);
        assert!(matches!(source.read(), Err(InputError::Io(_))));
    }
}
