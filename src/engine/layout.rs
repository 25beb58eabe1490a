//! Layout builder: wrapped lines to positioned display lines.

use crate::model::{DisplayLine, Layout};

/// Position wrapped lines at fixed row intervals.
///
/// Each line sits at `index * line_height` and is marked as ending a sentence when
/// its trimmed text ends with a period. The reported height is the raw content
/// height; any padding for short texts is up to the caller.
pub fn build_layout<S>(lines: &[S], line_height: f64) -> Layout
where
    S: AsRef<str>,
{
    let display_lines = lines
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let text = text.as_ref();
            DisplayLine::new(
                text.to_string(),
                i as f64 * line_height,
                ends_sentence(text),
            )
        })
        .collect();

    Layout::new(display_lines, line_height)
}

/// Whether a display line finishes a sentence.
pub fn ends_sentence(text: &str) -> bool {
    text.trim().ends_with('.')
}
