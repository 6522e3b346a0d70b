//! Layout calculation for the printable region
//!
//! Pure computation: given the region content, a print configuration,
//! and font metrics, produce positioned text blocks and rules in PDF
//! coordinates (origin bottom-left, y increasing upward).

use crate::Result;
use crate::constants::*;
use crate::content::{Entry, EntryVariant, Resume, Section};
use crate::error::ExportError;
use crate::font::FontMetrics;
use crate::print::PrintConfig;
use crate::text;
use tracing::{debug, trace, warn};

/// The content frame inside the region padding
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Left edge in points
    pub x: f32,
    /// Top edge in points
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// Bottom edge in points
    pub fn bottom(&self) -> f32 {
        self.y - self.height
    }
}

/// A positioned run of wrapped lines sharing one style
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub x: f32,
    /// Baseline of the first line
    pub y: f32,
    pub font_size: f32,
    pub bold: bool,
    pub muted: bool,
    pub lines: Vec<String>,
}

/// A horizontal rule
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub width: f32,
}

/// Calculated layout for one export of the region
#[derive(Debug, Clone)]
pub struct RegionLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub frame: Frame,
    pub blocks: Vec<TextBlock>,
    pub rules: Vec<Rule>,
}

/// Calculate the layout for the printable region.
///
/// The frame fills the whole physical page minus the configured margin
/// (zero) and the region's interior padding, so the exported page matches
/// the on-screen preview exactly.
pub fn layout_region(
    resume: &Resume,
    config: &PrintConfig,
    metrics: &dyn FontMetrics,
) -> Result<RegionLayout> {
    resume.validate()?;

    let (page_width, page_height) = config.page_size_pt();
    debug!(
        "laying out region on {:.1}x{:.1}pt page",
        page_width, page_height
    );

    let inset = config.margin_pt() + REGION_PADDING;
    let frame = Frame {
        x: inset,
        y: page_height - inset,
        width: page_width - 2.0 * inset,
        height: page_height - 2.0 * inset,
    };

    let column_width = (frame.width - COLUMN_GAP) / 2.0;
    if column_width < MIN_COLUMN_WIDTH {
        return Err(ExportError::Layout(format!(
            "column width {column_width:.1}pt is below the {MIN_COLUMN_WIDTH}pt minimum"
        )));
    }

    let mut blocks = Vec::new();
    let mut rules = Vec::new();

    let top = layout_header(resume, &frame, metrics, &mut blocks, &mut rules);

    let left_x = frame.x;
    let right_x = frame.x + column_width + COLUMN_GAP;
    let left_bottom = layout_column(&resume.left, left_x, top, column_width, metrics, &mut blocks);
    let right_bottom = layout_column(
        &resume.right,
        right_x,
        top,
        column_width,
        metrics,
        &mut blocks,
    );

    let bottom = left_bottom.min(right_bottom);
    if bottom < frame.bottom() {
        warn!(
            overflow_pt = frame.bottom() - bottom,
            "region content overflows the selected paper size"
        );
    }

    trace!(
        "layout produced {} blocks and {} rules",
        blocks.len(),
        rules.len()
    );

    Ok(RegionLayout {
        page_width,
        page_height,
        frame,
        blocks,
        rules,
    })
}

/// Lay out the name, tagline, links, and divider. Returns the y where the
/// two body columns start.
fn layout_header(
    resume: &Resume,
    frame: &Frame,
    metrics: &dyn FontMetrics,
    blocks: &mut Vec<TextBlock>,
    rules: &mut Vec<Rule>,
) -> f32 {
    let header = &resume.header;
    let mut top = frame.y;

    if !header.name.is_empty() {
        top = place_text(
            blocks,
            frame.x,
            top,
            frame.width,
            NAME_SIZE,
            true,
            false,
            &header.name,
            metrics,
        );
        top -= 6.0;
    }

    if !header.tagline.is_empty() {
        let tagline_width = TAGLINE_MAX_WIDTH.min(frame.width);
        top = place_text(
            blocks,
            frame.x,
            top,
            tagline_width,
            BODY_SIZE,
            false,
            false,
            &header.tagline,
            metrics,
        );
        top -= 3.0;
    }

    if !header.links.is_empty() {
        let joined = header.links.join(" | ");
        top = place_text(
            blocks,
            frame.x,
            top,
            frame.width,
            BODY_SIZE,
            false,
            false,
            &joined,
            metrics,
        );
    }

    top -= HEADER_GAP;
    rules.push(Rule {
        x: frame.x,
        y: top,
        length: frame.width,
        width: DIVIDER_WIDTH,
    });
    top - HEADER_GAP
}

/// Lay out one column of sections. Returns the final bottom y.
fn layout_column(
    sections: &[Section],
    x: f32,
    mut top: f32,
    width: f32,
    metrics: &dyn FontMetrics,
    blocks: &mut Vec<TextBlock>,
) -> f32 {
    for section in sections {
        if !section.heading.is_empty() {
            top = place_text(
                blocks,
                x,
                top,
                width,
                HEADING_SIZE,
                true,
                false,
                &section.heading,
                metrics,
            );
            top -= HEADING_GAP;
        }

        for (i, entry) in section.entries.iter().enumerate() {
            if i > 0 {
                top -= ENTRY_GAP;
            }
            top = layout_entry(entry, x, top, width, metrics, blocks);
        }

        top -= SECTION_GAP;
    }
    top
}

fn layout_entry(
    entry: &Entry,
    x: f32,
    mut top: f32,
    width: f32,
    metrics: &dyn FontMetrics,
    blocks: &mut Vec<TextBlock>,
) -> f32 {
    let line_height = BODY_SIZE * LINE_HEIGHT_MULTIPLIER;

    if !entry.title.is_empty() {
        let title_lines = text::wrap(&entry.title, width, BODY_SIZE, metrics);
        let baseline = top - BODY_SIZE;
        let last_line = title_lines.last().cloned().unwrap_or_default();
        let last_baseline = baseline - (title_lines.len() - 1) as f32 * line_height;
        let line_count = title_lines.len() as f32;

        blocks.push(TextBlock {
            x,
            y: baseline,
            font_size: BODY_SIZE,
            bold: true,
            muted: false,
            lines: title_lines,
        });
        top -= line_count * line_height;

        if !entry.period.is_empty() {
            // The period trails the title on the same baseline, muted; if
            // it would overflow the column it drops to its own line.
            let title_width = metrics.text_width(&last_line, BODY_SIZE);
            let period_width = metrics.text_width(&entry.period, BODY_SIZE);
            let space_width = metrics.char_width(' ', BODY_SIZE);
            if title_width + space_width + period_width <= width {
                blocks.push(TextBlock {
                    x: x + title_width + space_width,
                    y: last_baseline,
                    font_size: BODY_SIZE,
                    bold: false,
                    muted: true,
                    lines: vec![entry.period.clone()],
                });
            } else {
                blocks.push(TextBlock {
                    x,
                    y: top - BODY_SIZE,
                    font_size: BODY_SIZE,
                    bold: false,
                    muted: true,
                    lines: vec![entry.period.clone()],
                });
                top -= line_height;
            }
        }
    } else if !entry.period.is_empty() {
        top = place_text(
            blocks, x, top, width, BODY_SIZE, false, true, &entry.period, metrics,
        );
    }

    match entry.variant {
        EntryVariant::List => {
            for bullet in &entry.bullets {
                if bullet.is_empty() {
                    continue;
                }
                blocks.push(TextBlock {
                    x,
                    y: top - BODY_SIZE,
                    font_size: BODY_SIZE,
                    bold: false,
                    muted: false,
                    lines: vec![BULLET_GLYPH.to_string()],
                });
                top = place_text(
                    blocks,
                    x + BULLET_INDENT,
                    top,
                    width - BULLET_INDENT,
                    BODY_SIZE,
                    false,
                    false,
                    bullet,
                    metrics,
                );
            }
        }
        EntryVariant::Paragraph => {
            let joined = entry.bullets.join(" ");
            if !joined.is_empty() {
                top = place_text(
                    blocks, x, top, width, BODY_SIZE, false, false, &joined, metrics,
                );
            }
        }
    }

    top
}

/// Wrap text into a block at the given top edge. Returns the new top edge.
#[allow(clippy::too_many_arguments)]
fn place_text(
    blocks: &mut Vec<TextBlock>,
    x: f32,
    top: f32,
    width: f32,
    font_size: f32,
    bold: bool,
    muted: bool,
    content: &str,
    metrics: &dyn FontMetrics,
) -> f32 {
    let lines = text::wrap(content, width, font_size, metrics);
    let line_height = font_size * LINE_HEIGHT_MULTIPLIER;
    let consumed = lines.len() as f32 * line_height;
    blocks.push(TextBlock {
        x,
        y: top - font_size,
        font_size,
        bold,
        muted,
        lines,
    });
    top - consumed
}
