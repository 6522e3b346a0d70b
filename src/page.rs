//! The page root: single owner of the theme flag and paper-size selection

use crate::content::Resume;
use crate::export::{ExportController, ExportOutcome, ExportState, PrintFacility};
use crate::font::{FontMetrics, HeuristicMetrics};
use crate::paper::PaperSize;
use crate::print::PrintConfig;
use crate::theme::Theme;
use tracing::debug;

/// Owns the two pieces of UI state and composes the printable region with
/// the export controller. Descendants read state through accessors; only
/// the two operations below mutate it.
#[derive(Debug)]
pub struct ResumePage {
    theme: Theme,
    paper: PaperSize,
    region: Resume,
    controller: ExportController,
    metrics: Box<dyn FontMetrics>,
}

impl ResumePage {
    /// Create a page around a printable region.
    ///
    /// Starts light-themed on US Letter, with heuristic font metrics.
    pub fn new(region: Resume) -> Self {
        Self {
            theme: Theme::default(),
            paper: PaperSize::default(),
            region,
            controller: ExportController::new(),
            metrics: Box::new(HeuristicMetrics),
        }
    }

    /// Use real font metrics for layout measurement
    pub fn with_metrics<M: FontMetrics + 'static>(mut self, metrics: M) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn paper_size(&self) -> PaperSize {
        self.paper
    }

    /// Label currently displayed on the size-picker control
    pub fn paper_label(&self) -> &'static str {
        self.paper.label()
    }

    pub fn region(&self) -> &Resume {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut Resume {
        &mut self.region
    }

    pub fn export_state(&self) -> ExportState {
        self.controller.state()
    }

    /// Flip the theme flag. Preview colors and export colors change
    /// together, since both read the same palette.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "theme toggled");
    }

    /// Set the paper-size selection. The preview dimensions and the
    /// derived print configuration change immediately, before any export,
    /// so the user always previews exactly what will be exported.
    pub fn select_paper_size(&mut self, size: PaperSize) {
        self.paper = size;
        debug!(paper = ?self.paper, "paper size selected");
    }

    /// On-screen dimensions of the printable region in CSS pixels
    pub fn preview_size_px(&self) -> (f32, f32) {
        self.paper.preview_px()
    }

    /// The print configuration the next export will use, derived from the
    /// current paper-size selection
    pub fn print_config(&self) -> PrintConfig {
        PrintConfig::for_paper(self.paper)
    }

    /// Trigger an export of the region through the given print facility.
    ///
    /// The configuration is recomputed from the current selection on
    /// every invocation; it is never stored. Printing mutates neither the
    /// theme flag nor the paper-size selection.
    pub fn export(&mut self, facility: &mut dyn PrintFacility) -> ExportOutcome {
        let config = self.print_config();
        self.controller.trigger_export(
            &self.region,
            self.theme,
            &config,
            self.metrics.as_ref(),
            facility,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::content::{Entry, Header, Section};
    use crate::error::ExportError;
    use lopdf::Document;

    fn page() -> ResumePage {
        ResumePage::new(
            Resume::new(Header::new("Ada Lovelace")).with_left_section(
                Section::new("Experience")
                    .with_entry(Entry::new("Programmer", "1842").with_bullet("First algorithm.")),
            ),
        )
    }

    struct CancellingFacility;

    impl PrintFacility for CancellingFacility {
        fn print(&mut self, _document: &mut Document, _config: &PrintConfig) -> Result<()> {
            Err(ExportError::Cancelled)
        }
    }

    /// Captures the configuration and the first fill color of the export
    #[derive(Default)]
    struct CapturingFacility {
        config: Option<PrintConfig>,
        first_fill: Option<(f32, f32, f32)>,
    }

    impl PrintFacility for CapturingFacility {
        fn print(&mut self, document: &mut Document, config: &PrintConfig) -> Result<()> {
            self.config = Some(*config);
            let page_id = document.page_iter().next().expect("one page");
            let content = document.get_and_decode_page_content(page_id)?;
            let fill = content
                .operations
                .iter()
                .find(|op| op.operator == "rg")
                .map(|op| {
                    (
                        op.operands[0].as_float().unwrap(),
                        op.operands[1].as_float().unwrap(),
                        op.operands[2].as_float().unwrap(),
                    )
                });
            self.first_fill = fill;
            Ok(())
        }
    }

    #[test]
    fn test_initial_state() {
        let page = page();
        assert_eq!(page.theme(), Theme::Light);
        assert_eq!(page.paper_size(), PaperSize::Letter);
        assert_eq!(page.paper_label(), "US Letter");
        assert_eq!(page.export_state(), ExportState::Idle);
    }

    #[test]
    fn test_double_toggle_restores_theme() {
        let mut page = page();
        page.toggle_theme();
        assert_eq!(page.theme(), Theme::Dark);
        page.toggle_theme();
        assert_eq!(page.theme(), Theme::Light);
    }

    #[test]
    fn test_selection_updates_preview_before_any_export() {
        let mut page = page();
        assert_eq!(page.preview_size_px(), PaperSize::Letter.preview_px());

        page.select_paper_size(PaperSize::A4);
        assert_eq!(page.paper_label(), "A4");
        assert_eq!(page.preview_size_px(), PaperSize::A4.preview_px());
        assert_eq!(page.print_config(), PrintConfig::for_paper(PaperSize::A4));
    }

    #[test]
    fn test_cancelled_export_leaves_state_unchanged() {
        let mut page = page();
        page.select_paper_size(PaperSize::A4);
        page.toggle_theme();

        let outcome = page.export(&mut CancellingFacility);
        assert!(matches!(
            outcome,
            ExportOutcome::Failed(ExportError::Cancelled)
        ));

        assert_eq!(page.theme(), Theme::Dark);
        assert_eq!(page.paper_size(), PaperSize::A4);
        assert_eq!(page.export_state(), ExportState::Idle);
    }

    #[test]
    fn test_end_to_end_a4_dark_export() {
        let mut page = page();
        page.select_paper_size(PaperSize::A4);
        page.toggle_theme();

        let mut facility = CapturingFacility::default();
        let outcome = page.export(&mut facility);
        assert!(outcome.is_completed());

        let config = facility.config.expect("facility saw a config");
        assert_eq!(config.page_width_mm, 210.0);
        assert_eq!(config.page_height_mm, 297.0);
        assert_eq!(config.margin_mm, 0.0);
        assert!(config.force_background_colors);

        let dark_bg = Theme::Dark.palette().background;
        let (r, g, b) = facility.first_fill.expect("a background fill");
        assert!((r - dark_bg.r).abs() < 0.001);
        assert!((g - dark_bg.g).abs() < 0.001);
        assert!((b - dark_bg.b).abs() < 0.001);
    }
}
