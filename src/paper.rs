//! Paper sizes offered by the size picker

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// PDF points per inch
pub const PT_PER_INCH: f32 = 72.0;

/// CSS reference pixels per inch, fixed by the platform
pub const PX_PER_INCH: f32 = 96.0;

/// Convert millimetres to PDF points
pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_INCH * PT_PER_INCH
}

/// Convert millimetres to CSS pixels at the fixed platform ratio
pub fn mm_to_px(mm: f32) -> f32 {
    mm / MM_PER_INCH * PX_PER_INCH
}

/// Physical page dimension class selected for export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    /// US Letter, 215.9mm x 279.4mm
    #[default]
    Letter,
    /// ISO A4, 210mm x 297mm
    A4,
}

impl PaperSize {
    /// Physical page size in millimetres as (width, height)
    pub fn size_mm(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::A4 => (210.0, 297.0),
        }
    }

    /// Page size in PDF points as (width, height)
    pub fn size_pt(self) -> (f32, f32) {
        let (w, h) = self.size_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// On-screen preview size in CSS pixels as (width, height)
    ///
    /// The printable region is shown at exactly these dimensions so the
    /// preview matches the exported page.
    pub fn preview_px(self) -> (f32, f32) {
        let (w, h) = self.size_mm();
        (mm_to_px(w), mm_to_px(h))
    }

    /// Label displayed on the size-picker control
    pub fn label(self) -> &'static str {
        match self {
            PaperSize::Letter => "US Letter",
            PaperSize::A4 => "A4",
        }
    }
}
