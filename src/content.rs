//! Content blocks and the printable document region
//!
//! These are purely declarative structures: prop-driven text with no
//! internal state. Control UI (theme toggle, size picker, export button)
//! is never part of the region, so it can never leak into the export.

use crate::Result;
use crate::error::ExportError;
use tracing::trace;

/// Display style for an entry's bullets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryVariant {
    /// One bulleted line block per item
    #[default]
    List,
    /// Items joined into a flowing paragraph
    Paragraph,
}

/// A single experience/project entry
#[derive(Debug, Clone)]
pub struct Entry {
    pub title: String,
    pub period: String,
    pub bullets: Vec<String>,
    pub variant: EntryVariant,
}

impl Entry {
    /// Create a new entry with a title and period
    pub fn new<S: Into<String>, P: Into<String>>(title: S, period: P) -> Self {
        Self {
            title: title.into(),
            period: period.into(),
            bullets: Vec::new(),
            variant: EntryVariant::default(),
        }
    }

    /// Append one bullet
    pub fn with_bullet<S: Into<String>>(mut self, bullet: S) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    /// Replace all bullets
    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the display variant
    pub fn with_variant(mut self, variant: EntryVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Shorthand for the paragraph variant
    pub fn paragraph(self) -> Self {
        self.with_variant(EntryVariant::Paragraph)
    }
}

/// A headed group of entries
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new<S: Into<String>>(heading: S) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        trace!("adding entry with {} bullets", entry.bullets.len());
        self.entries.push(entry);
        self
    }
}

/// Name, tagline, and contact links shown at the top of the region
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub name: String,
    pub tagline: String,
    pub links: Vec<String>,
}

impl Header {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            tagline: String::new(),
            links: Vec::new(),
        }
    }

    pub fn with_tagline<S: Into<String>>(mut self, tagline: S) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_link<S: Into<String>>(mut self, link: S) -> Self {
        self.links.push(link.into());
        self
    }
}

/// The printable document region: header plus a two-column body.
///
/// This is the exact subtree captured by the export; everything in it
/// renders both on screen and on the exported page.
#[derive(Debug, Clone, Default)]
pub struct Resume {
    pub header: Header,
    pub left: Vec<Section>,
    pub right: Vec<Section>,
}

impl Resume {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Add a section to the left body column
    pub fn with_left_section(mut self, section: Section) -> Self {
        self.left.push(section);
        self
    }

    /// Add a section to the right body column
    pub fn with_right_section(mut self, section: Section) -> Self {
        self.right.push(section);
        self
    }

    /// Whether the region holds anything to print
    pub fn is_empty(&self) -> bool {
        self.header.name.is_empty() && self.left.is_empty() && self.right.is_empty()
    }

    /// Reject an empty region before an export is attempted
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ExportError::RegionNotMounted);
        }
        Ok(())
    }
}
