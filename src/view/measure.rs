//! Text measurement in terminal cells.

use crate::engine::TextMeasurer;
use crate::model::MeasureError;
use unicode_width::UnicodeWidthStr;

/// Measures strings in display columns, so wide CJK glyphs count as two.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str) -> Result<f64, MeasureError> {
        Ok(text.width() as f64)
    }
}
