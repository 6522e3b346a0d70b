//! Build a sample résumé page and export it on both paper sizes

use resume_press::{
    Entry, Header, PaperSize, PdfFileFacility, Resume, ResumePage, Section,
};
use tracing_subscriber::EnvFilter;

fn sample_resume() -> Resume {
    Resume::new(
        Header::new("Morgan Reyes")
            .with_tagline(
                "I'm a design engineer. I craft human interfaces that conform \
                 necessary function into intuitive form.",
            )
            .with_link("morganreyes.dev")
            .with_link("morgan@morganreyes.dev"),
    )
    .with_left_section(
        Section::new("Education").with_entry(
            Entry::new("State University", "2015 - 2018")
                .with_bullet("B.S. in Information Systems")
                .paragraph(),
        ),
    )
    .with_left_section(
        Section::new("Experience")
            .with_entry(
                Entry::new("Design Engineer at Canopy", "2024 - Present")
                    .with_bullet("Ship features across three products with a four-person team.")
                    .with_bullet("Build designs directly in the editor, deployed to millions."),
            )
            .with_entry(
                Entry::new("UI/UX Designer at Fieldnote", "2023 - 2025")
                    .with_bullet("Led design for every user-facing surface of the platform.")
                    .with_bullet("Advised on product design and brand architecture."),
            )
            .with_entry(
                Entry::new("Product Designer at La Forma", "2022 - 2023")
                    .with_bullet("Designed digital products focused on brand identity.")
                    .with_bullet("Clients included two national sports leagues."),
            ),
    )
    .with_right_section(
        Section::new("Skills & Tools").with_entry(
            Entry::new("", "")
                .with_bullet("Figma, Blender, v0,\nNext, React, Tailwind")
                .paragraph(),
        ),
    )
    .with_right_section(
        Section::new("Projects")
            .with_entry(
                Entry::new("Marketplace Redesign", "2024")
                    .with_bullet(
                        "Designed and shipped a complete redesign of the discovery \
                         marketplace to improve product findability.",
                    )
                    .paragraph(),
            )
            .with_entry(
                Entry::new("Open Source Design System", "2024")
                    .with_bullet("Published the company design system to the public.")
                    .paragraph(),
            ),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let mut page = ResumePage::new(sample_resume());

    // Default selection: light theme on US Letter
    let (w, h) = page.preview_size_px();
    println!("previewing {} at {w:.0}x{h:.0}px", page.paper_label());
    let mut letter = PdfFileFacility::new("resume_letter.pdf");
    let outcome = page.export(&mut letter);
    if !outcome.is_completed() {
        return Err(format!("letter export failed: {outcome:?}").into());
    }

    // Switch to dark A4; the preview and the next export change together
    page.toggle_theme();
    page.select_paper_size(PaperSize::A4);
    let (w, h) = page.preview_size_px();
    println!("previewing {} at {w:.0}x{h:.0}px", page.paper_label());
    let mut a4 = PdfFileFacility::new("resume_a4_dark.pdf");
    let outcome = page.export(&mut a4);
    if !outcome.is_completed() {
        return Err(format!("a4 export failed: {outcome:?}").into());
    }

    println!("wrote resume_letter.pdf and resume_a4_dark.pdf");
    Ok(())
}
