//! Print the palette and preview dimensions for every theme/paper pair

use resume_press::{PaperSize, PrintConfig, Theme};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    for theme in [Theme::Light, Theme::Dark] {
        let palette = theme.palette();
        println!(
            "{theme:?}: background rgb({:.2}, {:.2}, {:.2})",
            palette.background.r, palette.background.g, palette.background.b
        );
    }

    for paper in [PaperSize::Letter, PaperSize::A4] {
        let config = PrintConfig::for_paper(paper);
        let (px_w, px_h) = paper.preview_px();
        let (pt_w, pt_h) = config.page_size_pt();
        println!(
            "{}: {}x{}mm, preview {px_w:.0}x{px_h:.0}px, page {pt_w:.1}x{pt_h:.1}pt, \
             margin {}mm, backgrounds {}",
            paper.label(),
            config.page_width_mm,
            config.page_height_mm,
            config.margin_mm,
            if config.force_background_colors {
                "forced"
            } else {
                "default"
            },
        );
    }
}
