//! Theme flag and the color palettes it selects

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Colors used by both the on-screen preview and the exported page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background, filled edge to edge on export
    pub background: Color,
    /// Primary text
    pub foreground: Color,
    /// Secondary text (periods, skill lists)
    pub muted: Color,
    /// Horizontal rule under the header
    pub divider: Color,
}

/// Dark/light theme flag owned by the page root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme. Toggling twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Palette applied to the printable region under this theme
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::white(),
                foreground: Color::rgb(0.01, 0.03, 0.07),
                muted: Color::rgb(0.42, 0.45, 0.50),
                divider: Color::rgb(0.82, 0.84, 0.86),
            },
            Theme::Dark => Palette {
                background: Color::rgb(0.01, 0.03, 0.07),
                foreground: Color::rgb(0.97, 0.98, 0.99),
                muted: Color::rgb(0.58, 0.64, 0.72),
                divider: Color::rgb(0.12, 0.16, 0.23),
            },
        }
    }
}
