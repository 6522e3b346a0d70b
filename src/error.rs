//! Error types for the resume-press library

use thiserror::Error;

/// Result type alias using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while laying out or exporting the résumé
#[derive(Debug, Error)]
pub enum ExportError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// I/O failure while writing the exported document
    #[error("I/O failure during export: {0}")]
    Io(#[from] std::io::Error),

    /// The user cancelled the export at the print facility
    #[error("export cancelled at the print facility")]
    Cancelled,

    /// The platform print facility could not be reached
    #[error("print facility unavailable: {0}")]
    FacilityUnavailable(String),

    /// The printable region holds no content
    #[error("printable region is empty, nothing to export")]
    RegionNotMounted,

    /// A previous export has not finished yet
    #[error("an export is already in progress")]
    ExportInProgress,

    /// Layout calculation error
    #[error("layout calculation failed: {0}")]
    Layout(String),

    /// Text measurement or rendering error
    #[error("text rendering failed: {0}")]
    Text(String),
}
