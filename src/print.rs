//! Print configuration derived from the paper-size selection
//!
//! Browsers default to non-zero print margins, a possibly different page
//! size, and stripped background colors. The configuration built here
//! overrides all three so the exported page is pixel-faithful to the
//! on-screen preview.

use crate::paper::{PaperSize, mm_to_pt};
use lopdf::Object;

/// Page-size, margin, and color-adjustment directives for one export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintConfig {
    /// Physical page width in millimetres
    pub page_width_mm: f32,
    /// Physical page height in millimetres
    pub page_height_mm: f32,
    /// Page margin in millimetres, always zero
    pub margin_mm: f32,
    /// Keep theme background colors in the exported output
    pub force_background_colors: bool,
}

impl PrintConfig {
    /// Build the print configuration for a paper size.
    ///
    /// Pure and total: the dimensions are exactly the physical dimensions
    /// of the selected paper, the margin is zero, and background colors
    /// are always preserved.
    pub fn for_paper(paper: PaperSize) -> Self {
        let (width, height) = paper.size_mm();
        Self {
            page_width_mm: width,
            page_height_mm: height,
            margin_mm: 0.0,
            force_background_colors: true,
        }
    }

    /// Page size in PDF points as (width, height)
    pub fn page_size_pt(&self) -> (f32, f32) {
        (mm_to_pt(self.page_width_mm), mm_to_pt(self.page_height_mm))
    }

    /// Page margin in PDF points
    pub fn margin_pt(&self) -> f32 {
        mm_to_pt(self.margin_mm)
    }

    /// The PDF MediaBox array for a page of this size
    pub fn media_box(&self) -> Vec<Object> {
        let (width, height) = self.page_size_pt();
        vec![0.into(), 0.into(), width.into(), height.into()]
    }
}
