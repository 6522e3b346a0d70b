//! Font metrics for measuring text during layout

use crate::constants::AVG_CHAR_WIDTH_RATIO;

/// Trait for measuring text dimensions.
///
/// Layout only needs widths; glyph selection is left to the PDF viewer's
/// base-font handling.
pub trait FontMetrics: std::fmt::Debug {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Fixed-ratio metrics used when no font file is supplied.
///
/// Every glyph is assumed to be half the font size wide, which slightly
/// over-wraps dense text but never overflows a column.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl FontMetrics for HeuristicMetrics {
    fn char_width(&self, _ch: char, font_size: f32) -> f32 {
        font_size * AVG_CHAR_WIDTH_RATIO
    }
}

/// TrueType metrics backed by ttf-parser for accurate glyph advances.
///
/// Owns the raw font data and parses it on demand. The caller keeps
/// responsibility for any font embedding; this type only measures.
#[cfg(feature = "ttf-parser")]
pub struct TtfMetrics {
    font_data: Vec<u8>,
    units_per_em: f32,
}

#[cfg(feature = "ttf-parser")]
impl TtfMetrics {
    /// Create metrics from raw TTF/TTC font data, validating the font.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0)
            .map_err(|e| crate::error::ExportError::Text(format!("failed to parse font: {e}")))?;
        let units_per_em = face.units_per_em() as f32;
        Ok(Self {
            font_data,
            units_per_em,
        })
    }

    fn advance(&self, ch: char) -> Option<f32> {
        let face = ttf_parser::Face::parse(&self.font_data, 0).ok()?;
        let gid = face.glyph_index(ch)?;
        face.glyph_hor_advance(gid)
            .map(|advance| advance as f32 / self.units_per_em)
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        match self.advance(ch) {
            Some(advance) => advance * font_size,
            None => font_size * AVG_CHAR_WIDTH_RATIO,
        }
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}
