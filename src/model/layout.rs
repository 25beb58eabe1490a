//! Display lines and the vertical layout they are drawn from.

/// Position of a display line within a [`Layout`]. 0-indexed.
///
/// Used as the identity of a line for pause bookkeeping so that dedup never
/// depends on comparing floating point offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineIndex(usize);

impl LineIndex {
    /// Create a new LineIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for LineIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// One wrapped, screen-ready row of text.
///
/// Blank rows from the source text are kept as display lines with empty text
/// so that paragraph spacing survives layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    text: String,
    y_offset: f64,
    ends_sentence: bool,
}

impl DisplayLine {
    pub(crate) fn new(text: String, y_offset: f64, ends_sentence: bool) -> Self {
        Self {
            text,
            y_offset,
            ends_sentence,
        }
    }

    /// The text drawn for this row.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distance from the top of the content to the top of this row.
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Whether this row ends a sentence and should pause playback.
    pub fn ends_sentence(&self) -> bool {
        self.ends_sentence
    }
}

/// Immutable vertical arrangement of display lines.
///
/// # Invariants
/// - `lines[i].y_offset() == i * line_height`
/// - `total_height == lines.len() * line_height`
///
/// Units are whatever the measuring backend uses (pixels, terminal rows).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    lines: Vec<DisplayLine>,
    line_height: f64,
    total_height: f64,
}

impl Layout {
    pub(crate) fn new(lines: Vec<DisplayLine>, line_height: f64) -> Self {
        let total_height = lines.len() as f64 * line_height;
        Self {
            lines,
            line_height,
            total_height,
        }
    }

    /// All display lines in document order.
    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    /// Look up a line by index.
    pub fn line(&self, index: LineIndex) -> Option<&DisplayLine> {
        self.lines.get(index.get())
    }

    /// Height of one display row.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Raw content height, without any viewport padding.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Number of display lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the layout contains no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sentence-ending lines, in document order.
    pub fn sentence_lines(&self) -> impl Iterator<Item = (LineIndex, &DisplayLine)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.ends_sentence)
            .map(|(i, line)| (LineIndex::new(i), line))
    }

    /// Count of sentence-ending lines (each schedules one pause).
    pub fn sentence_line_count(&self) -> usize {
        self.sentence_lines().count()
    }
}
