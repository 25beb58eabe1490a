//! Line wrapping against an injected width measurement.
//!
//! Text is split into paragraphs on explicit line breaks, then each paragraph is
//! greedily filled word by word. Paragraphs are never merged or reordered.

use crate::model::MeasureError;

/// Measures the rendered width of arbitrary strings.
///
/// The presentation backend supplies this; the wrapper only compares widths
/// against the limit it is given, so any consistent unit works.
pub trait TextMeasurer {
    /// Width of `text` as it would be drawn.
    fn measure(&self, text: &str) -> Result<f64, MeasureError>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> Result<f64, MeasureError> {
        Ok(self(text))
    }
}

/// Split `text` into display lines no wider than `max_width`.
///
/// - Every explicit line break starts a new paragraph.
/// - An empty paragraph becomes exactly one empty line.
/// - A word is appended to the current line only while the measured result
///   stays strictly below `max_width`.
/// - A word that is too wide on its own still gets its own line.
///
/// # Errors
///
/// Returns the first [`MeasureError`] raised by `measurer`.
pub fn wrap<M>(text: &str, max_width: f64, measurer: &M) -> Result<Vec<String>, MeasureError>
where
    M: TextMeasurer + ?Sized,
{
    let mut lines = Vec::new();
    for paragraph in paragraphs(text) {
        wrap_paragraph(paragraph, max_width, measurer, &mut lines)?;
    }
    Ok(lines)
}

fn wrap_paragraph<M>(
    paragraph: &str,
    max_width: f64,
    measurer: &M,
    out: &mut Vec<String>,
) -> Result<(), MeasureError>
where
    M: TextMeasurer + ?Sized,
{
    if paragraph.is_empty() {
        out.push(String::new());
        return Ok(());
    }

    let mut current = String::new();
    let mut has_words = false;

    for word in paragraph.split(' ') {
        if !has_words {
            current.push_str(word);
            has_words = true;
            continue;
        }

        let candidate_len = current.len();
        current.push(' ');
        current.push_str(word);

        if measurer.measure(&current)? >= max_width {
            current.truncate(candidate_len);
            out.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    out.push(current);
    Ok(())
}

/// Iterate paragraphs using universal-newline rules.
///
/// `\r\n` counts as one break. A break at the very end of the text does not
/// open another paragraph.
pub fn paragraphs(text: &str) -> Paragraphs<'_> {
    Paragraphs { rest: text }
}

/// Iterator returned by [`paragraphs`].
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|(_, c)| is_line_break(*c)) {
            Some((at, c)) => {
                let paragraph = &self.rest[..at];
                let mut next = at + c.len_utf8();
                if c == '\r' && self.rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &self.rest[next..];
                Some(paragraph)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
