//! The print/export controller and the platform print facility boundary
//!
//! The controller guarantees that an export renders the region at exactly
//! the configured physical page size, with zero margins and theme
//! backgrounds preserved, regardless of preview viewport or facility
//! defaults. Failures (including user cancellation) are logged and
//! carried in the outcome; they never escalate.

use crate::Result;
use crate::content::Resume;
use crate::error::ExportError;
use crate::font::FontMetrics;
use crate::print::PrintConfig;
use crate::theme::Theme;
use lopdf::Document;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Controller state: Idle -> Printing -> Idle on either outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Printing,
}

/// Tagged result of one export attempt
#[derive(Debug)]
pub enum ExportOutcome {
    Completed,
    Failed(ExportError),
}

impl ExportOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ExportOutcome::Completed)
    }
}

/// The platform print/export collaborator.
///
/// Consumes a rendered document and the print configuration; blocks until
/// the platform completes or the user cancels. Cancellation surfaces as
/// `ExportError::Cancelled`.
pub trait PrintFacility {
    fn print(&mut self, document: &mut Document, config: &PrintConfig) -> Result<()>;
}

/// A facility that writes the rendered document to a PDF file
#[derive(Debug, Clone)]
pub struct PdfFileFacility {
    path: PathBuf,
}

impl PdfFileFacility {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PrintFacility for PdfFileFacility {
    fn print(&mut self, document: &mut Document, _config: &PrintConfig) -> Result<()> {
        document.save(&self.path)?;
        debug!(path = %self.path.display(), "wrote exported document");
        Ok(())
    }
}

/// The print/export controller
#[derive(Debug, Default)]
pub struct ExportController {
    state: ExportState,
}

impl ExportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    /// Render the region with the current configuration and hand it to
    /// the print facility.
    ///
    /// Each call is a fresh, independent attempt; no retries. A trigger
    /// while a previous export is still printing is rejected without
    /// disturbing the in-flight export.
    pub fn trigger_export(
        &mut self,
        region: &Resume,
        theme: Theme,
        config: &PrintConfig,
        metrics: &dyn FontMetrics,
        facility: &mut dyn PrintFacility,
    ) -> ExportOutcome {
        if self.state == ExportState::Printing {
            warn!("export trigger ignored: already printing");
            return ExportOutcome::Failed(ExportError::ExportInProgress);
        }

        self.state = ExportState::Printing;
        let outcome = match self.run_export(region, theme, config, metrics, facility) {
            Ok(()) => {
                info!(
                    page_width_mm = config.page_width_mm,
                    page_height_mm = config.page_height_mm,
                    "printed successfully"
                );
                ExportOutcome::Completed
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                ExportOutcome::Failed(err)
            }
        };
        self.state = ExportState::Idle;
        outcome
    }

    fn run_export(
        &self,
        region: &Resume,
        theme: Theme,
        config: &PrintConfig,
        metrics: &dyn FontMetrics,
        facility: &mut dyn PrintFacility,
    ) -> Result<()> {
        let mut document = crate::render(region, theme, config, metrics)?;
        facility.print(&mut document, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Entry, Header, Resume, Section};
    use crate::font::HeuristicMetrics;
    use crate::paper::PaperSize;

    fn region() -> Resume {
        Resume::new(Header::new("Ada Lovelace")).with_left_section(
            Section::new("Experience")
                .with_entry(Entry::new("Programmer", "1842").with_bullet("First algorithm.")),
        )
    }

    /// Facility that records what it received and can simulate cancellation
    #[derive(Default)]
    struct RecordingFacility {
        cancel: bool,
        printed: Vec<(f32, f32)>,
    }

    impl PrintFacility for RecordingFacility {
        fn print(&mut self, document: &mut Document, config: &PrintConfig) -> Result<()> {
            if self.cancel {
                return Err(ExportError::Cancelled);
            }
            assert_eq!(document.page_iter().count(), 1);
            self.printed
                .push((config.page_width_mm, config.page_height_mm));
            Ok(())
        }
    }

    #[test]
    fn test_successful_export_returns_to_idle() {
        let mut controller = ExportController::new();
        let mut facility = RecordingFacility::default();
        let config = PrintConfig::for_paper(PaperSize::Letter);

        let outcome = controller.trigger_export(
            &region(),
            Theme::Light,
            &config,
            &HeuristicMetrics,
            &mut facility,
        );

        assert!(outcome.is_completed());
        assert_eq!(controller.state(), ExportState::Idle);
        assert_eq!(facility.printed, vec![(215.9, 279.4)]);
    }

    #[test]
    fn test_cancellation_is_reported_not_fatal() {
        let mut controller = ExportController::new();
        let mut facility = RecordingFacility {
            cancel: true,
            ..Default::default()
        };
        let config = PrintConfig::for_paper(PaperSize::A4);

        let outcome = controller.trigger_export(
            &region(),
            Theme::Dark,
            &config,
            &HeuristicMetrics,
            &mut facility,
        );

        assert!(matches!(
            outcome,
            ExportOutcome::Failed(ExportError::Cancelled)
        ));
        assert_eq!(controller.state(), ExportState::Idle);

        // The controller stays usable: a fresh attempt succeeds.
        facility.cancel = false;
        let outcome = controller.trigger_export(
            &region(),
            Theme::Dark,
            &config,
            &HeuristicMetrics,
            &mut facility,
        );
        assert!(outcome.is_completed());
    }

    #[test]
    fn test_empty_region_fails_at_the_controller_boundary() {
        let mut controller = ExportController::new();
        let mut facility = RecordingFacility::default();
        let config = PrintConfig::for_paper(PaperSize::Letter);

        let outcome = controller.trigger_export(
            &Resume::default(),
            Theme::Light,
            &config,
            &HeuristicMetrics,
            &mut facility,
        );

        assert!(matches!(
            outcome,
            ExportOutcome::Failed(ExportError::RegionNotMounted)
        ));
        assert!(facility.printed.is_empty());
    }

    #[test]
    fn test_facility_receives_selected_paper_dimensions() {
        let mut controller = ExportController::new();
        let mut facility = RecordingFacility::default();
        let config = PrintConfig::for_paper(PaperSize::A4);

        let outcome = controller.trigger_export(
            &region(),
            Theme::Light,
            &config,
            &HeuristicMetrics,
            &mut facility,
        );

        assert!(outcome.is_completed());
        assert_eq!(facility.printed, vec![(210.0, 297.0)]);
    }
}
