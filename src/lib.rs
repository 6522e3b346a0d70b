//! A single-page résumé renderer with themed, paper-accurate PDF export
//!
//! The library mirrors a printable résumé page: a page root owns a
//! dark/light theme flag and a paper-size selection (US Letter or A4),
//! and an export controller turns that state into a print configuration
//! (exact physical page dimensions, zero margins, backgrounds forced on)
//! before handing the printable region to a print facility built on lopdf.

use tracing::{debug, instrument};

mod constants;
mod drawing;

pub mod content;
pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod page;
pub mod paper;
pub mod print;
pub mod text;
pub mod theme;

pub use content::{Entry, EntryVariant, Header, Resume, Section};
pub use error::{ExportError, Result};
pub use export::{ExportController, ExportOutcome, ExportState, PdfFileFacility, PrintFacility};
pub use font::{FontMetrics, HeuristicMetrics};
#[cfg(feature = "ttf-parser")]
pub use font::TtfMetrics;
pub use page::ResumePage;
pub use paper::PaperSize;
pub use print::PrintConfig;
pub use theme::{Color, Palette, Theme};

/// Render the printable region to a single-page PDF document.
///
/// The page size, margin, and background handling come from the print
/// configuration; the colors come from the theme's palette. Control UI is
/// not part of the region type, so only résumé content is captured.
#[instrument(skip(resume, metrics), fields(
    page_width_mm = config.page_width_mm,
    page_height_mm = config.page_height_mm,
))]
pub fn render(
    resume: &Resume,
    theme: Theme,
    config: &PrintConfig,
    metrics: &dyn FontMetrics,
) -> Result<lopdf::Document> {
    debug!(theme = ?theme, "rendering printable region");
    let region_layout = layout::layout_region(resume, config, metrics)?;
    drawing::build_document(&region_layout, &theme.palette(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_a_document() {
        let region = Resume::new(Header::new("Ada Lovelace"))
            .with_left_section(Section::new("Experience").with_entry(
                Entry::new("Programmer", "1842").with_bullet("First published algorithm."),
            ));
        let config = PrintConfig::for_paper(PaperSize::Letter);
        let doc = render(&region, Theme::Light, &config, &HeuristicMetrics).unwrap();
        assert_eq!(doc.page_iter().count(), 1);
    }

    #[test]
    fn test_render_rejects_empty_region() {
        let config = PrintConfig::for_paper(PaperSize::A4);
        let result = render(&Resume::default(), Theme::Light, &config, &HeuristicMetrics);
        assert!(matches!(result, Err(ExportError::RegionNotMounted)));
    }
}
