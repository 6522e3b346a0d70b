//! PDF drawing operations for the printable region

use crate::Result;
use crate::constants::LINE_HEIGHT_MULTIPLIER;
use crate::layout::{RegionLayout, Rule, TextBlock};
use crate::print::PrintConfig;
use crate::theme::{Color, Palette};
use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};
use tracing::{debug, trace};

/// Generate content-stream operations for one export of the region.
///
/// The page background is painted first, edge to edge; this is what the
/// force-background-colors directive guarantees. On-screen-only cosmetics
/// (the card border and shadow) are never drawn here.
pub fn region_operations(
    layout: &RegionLayout,
    palette: &Palette,
    config: &PrintConfig,
) -> Vec<Operation> {
    let mut operations = Vec::new();

    if config.force_background_colors {
        operations.extend(fill_rectangle(
            0.0,
            0.0,
            layout.page_width,
            layout.page_height,
            palette.background,
        ));
    }

    for rule in &layout.rules {
        operations.extend(stroke_rule(rule, palette.divider));
    }

    for block in &layout.blocks {
        operations.extend(text_operations(block, palette));
    }

    trace!("generated {} operations", operations.len());
    operations
}

/// Build a complete single-page PDF document for the region
pub fn build_document(
    layout: &RegionLayout,
    palette: &Palette,
    config: &PrintConfig,
) -> Result<Document> {
    debug!(
        "building {}mm x {}mm export document",
        config.page_width_mm, config.page_height_mm
    );

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F1-Bold" => font_bold_id,
        },
    });

    let content = Content {
        operations: region_operations(layout, palette, config),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => config.media_box(),
        "Resources" => resources_id,
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Draw a filled rectangle
fn fill_rectangle(x: f32, y: f32, width: f32, height: f32, color: Color) -> Vec<Operation> {
    vec![
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]),
        Operation::new("f", vec![]),
    ]
}

/// Stroke a horizontal rule
fn stroke_rule(rule: &Rule, color: Color) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![rule.width.into()]),
        Operation::new("m", vec![rule.x.into(), rule.y.into()]),
        Operation::new("l", vec![(rule.x + rule.length).into(), rule.y.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Draw one text block, advancing through its lines with the text leading
fn text_operations(block: &TextBlock, palette: &Palette) -> Vec<Operation> {
    if block.lines.is_empty() {
        return Vec::new();
    }

    let color = if block.muted {
        palette.muted
    } else {
        palette.foreground
    };
    let font_name = if block.bold { "F1-Bold" } else { "F1" };
    let leading = block.font_size * LINE_HEIGHT_MULTIPLIER;

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(font_name.as_bytes().to_vec()),
                block.font_size.into(),
            ],
        ),
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("TL", vec![leading.into()]),
        Operation::new("Td", vec![block.x.into(), block.y.into()]),
    ];

    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("T*", vec![]));
        }
        if !line.is_empty() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_winansi(line))],
            ));
        }
    }

    operations.push(Operation::new("ET", vec![]));
    operations
}

/// Encode text as WinAnsi (CP1252) bytes for the Type1 font dictionaries.
///
/// The page fonts declare WinAnsiEncoding, so text must reach the content
/// stream as single WinAnsi bytes, not raw UTF-8. Latin-1 maps through
/// directly, the CP1252 0x80-0x9F block covers the typographic extras,
/// and anything unmappable degrades to '?'.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

fn winansi_byte(ch: char) -> u8 {
    match ch {
        '\u{0020}'..='\u{007e}' => ch as u8,
        '\u{00a0}'..='\u{00ff}' => ch as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Entry, Header, Resume, Section};
    use crate::font::HeuristicMetrics;
    use crate::layout::layout_region;
    use crate::paper::PaperSize;
    use crate::theme::Theme;

    fn small_layout(paper: PaperSize) -> (RegionLayout, PrintConfig) {
        let region = Resume::new(Header::new("Ada Lovelace")).with_left_section(
            Section::new("Experience")
                .with_entry(Entry::new("Programmer", "1842").with_bullet("First algorithm.")),
        );
        let config = PrintConfig::for_paper(paper);
        let layout = layout_region(&region, &config, &HeuristicMetrics).unwrap();
        (layout, config)
    }

    #[test]
    fn test_background_is_painted_first_with_theme_color() {
        let (layout, config) = small_layout(PaperSize::A4);
        let palette = Theme::Dark.palette();
        let ops = region_operations(&layout, &palette, &config);

        assert_eq!(ops[0].operator, "rg");
        let r = ops[0].operands[0].as_float().unwrap();
        assert!((r - palette.background.r).abs() < 0.001);

        assert_eq!(ops[1].operator, "re");
        let w = ops[1].operands[2].as_float().unwrap();
        assert!((w - layout.page_width).abs() < 0.01, "fill spans the page");
    }

    #[test]
    fn test_background_skipped_when_not_forced() {
        let (layout, mut config) = small_layout(PaperSize::Letter);
        config.force_background_colors = false;
        let ops = region_operations(&layout, &Theme::Light.palette(), &config);
        assert_ne!(ops[0].operator, "re");
    }

    #[test]
    fn test_bold_blocks_use_the_bold_font() {
        let (layout, config) = small_layout(PaperSize::Letter);
        let ops = region_operations(&layout, &Theme::Light.palette(), &config);
        let has_bold = ops.iter().any(|op| {
            op.operator == "Tf"
                && matches!(&op.operands[0], Object::Name(n) if n == b"F1-Bold")
        });
        assert!(has_bold, "the name block should select F1-Bold");
    }

    #[test]
    fn test_accented_text_reaches_the_stream_as_winansi_bytes() {
        let region = Resume::new(Header::new("Jos\u{e9} \u{c1}lvarez"));
        let config = PrintConfig::for_paper(PaperSize::Letter);
        let layout = layout_region(&region, &config, &HeuristicMetrics).unwrap();
        let ops = region_operations(&layout, &Theme::Light.palette(), &config);

        let name_bytes = ops
            .iter()
            .find_map(|op| {
                if op.operator != "Tj" {
                    return None;
                }
                match &op.operands[0] {
                    Object::String(bytes, _) => Some(bytes.clone()),
                    _ => None,
                }
            })
            .expect("a Tj operand");

        assert_eq!(name_bytes, b"Jos\xe9 \xc1lvarez".to_vec());
        assert!(
            !name_bytes.windows(2).any(|w| w == [0xc3, 0xa9]),
            "raw UTF-8 sequences must not reach the WinAnsi text stream"
        );
    }

    #[test]
    fn test_unmappable_chars_degrade_to_question_mark() {
        assert_eq!(encode_winansi("\u{4f60}a\u{2014}"), vec![b'?', b'a', 0x97]);
    }

    #[test]
    fn test_document_media_box_matches_config() {
        let (layout, config) = small_layout(PaperSize::A4);
        let doc = build_document(&layout, &Theme::Light.palette(), &config).unwrap();

        let page_id = doc.page_iter().next().expect("one page");
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let width = media_box[2].as_float().unwrap();
        let height = media_box[3].as_float().unwrap();
        assert!((width - 595.28).abs() < 0.01);
        assert!((height - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_document_has_exactly_one_page() {
        let (layout, config) = small_layout(PaperSize::Letter);
        let doc = build_document(&layout, &Theme::Light.palette(), &config).unwrap();
        assert_eq!(doc.page_iter().count(), 1);
    }
}
