//! Typography and frame constants for the printable region
//!
//! Values are in PDF points and mirror the on-screen stylesheet at the
//! fixed 72/96 point-per-pixel ratio.

/// Interior padding of the printable region (the card's p-16, 64px)
pub const REGION_PADDING: f32 = 48.0;

/// Gap between the two body columns (64px on screen)
pub const COLUMN_GAP: f32 = 48.0;

/// Font size of the name line (36px on screen)
pub const NAME_SIZE: f32 = 27.0;

/// Font size of section headings (16px on screen)
pub const HEADING_SIZE: f32 = 12.0;

/// Font size of body text (14px on screen)
pub const BODY_SIZE: f32 = 10.5;

/// Line height as a multiple of font size
pub const LINE_HEIGHT_MULTIPLIER: f32 = 1.4;

/// Average character width as a fraction of font size, used when no
/// font metrics are available
pub const AVG_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Maximum width of the tagline under the name (450px on screen)
pub const TAGLINE_MAX_WIDTH: f32 = 337.5;

/// Vertical space under the header block before the divider
pub const HEADER_GAP: f32 = 24.0;

/// Vertical space under a section heading (16px on screen)
pub const HEADING_GAP: f32 = 12.0;

/// Vertical space between entries within a section
pub const ENTRY_GAP: f32 = 15.0;

/// Vertical space between sections and under section headings
pub const SECTION_GAP: f32 = 24.0;

/// Horizontal indent of bullet text past the glyph
pub const BULLET_INDENT: f32 = 12.0;

/// Glyph drawn in front of list-variant bullets (WinAnsi 0x95)
pub const BULLET_GLYPH: &str = "\u{2022}";

/// Width of the divider rule under the header
pub const DIVIDER_WIDTH: f32 = 0.75;

/// Minimum usable column width before layout gives up
pub const MIN_COLUMN_WIDTH: f32 = 60.0;
