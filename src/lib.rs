//! # resume-docx
//!
//! Render structured resume data into formatted Word documents.
//!
//! The library turns a [`ResumeData`] record into a [`Document`]: an ordered
//! list of paragraphs made of styled runs, laid out according to a
//! [`StyleProfile`]. Output writers then serialize the document as DOCX or
//! as a JSON dump of the layout.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_docx::{convert_file, StyleProfile};
//!
//! fn main() -> resume_docx::Result<()> {
//!     convert_file("resume.json", "resume.docx", &StyleProfile::enhanced())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two presets**: Basic (single font, list bullets) and Enhanced
//!   (header/body fonts, ruled section headers, hanging-indent bullets)
//! - **Right-aligned dates** through a tab stop at the right margin
//! - **Bold lead-ins** for bullets, explicit or inferred from a short
//!   leading clause ending in a colon
//! - **Deterministic**: the same input always produces the same layout
//! - **Batch rendering** across resumes with Rayon

pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use loader::load_file;
pub use model::{
    Alignment, Block, Bullet, Contact, Document, Education, EducationEntry, Experience, Metadata,
    PageSetup, ParagraphProperties, ResumeData, Run, TabAlignment, TabStop,
};
pub use output::{JsonFormat, OutputFormat, OutputWriter, WriterRegistry};
pub use render::{render, render_batch, BulletLabel, DocumentBuilder, RenderStats, Section};
pub use style::{BulletMode, JobLineOrder, Preset, StyleProfile};

use chrono::{DateTime, Utc};
use std::path::Path;

/// Load and render a resume file.
///
/// # Example
///
/// ```no_run
/// use resume_docx::{render_file, StyleProfile};
///
/// let doc = render_file("resume.json", &StyleProfile::basic()).unwrap();
/// println!("{}", doc.plain_text());
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, profile: &StyleProfile) -> Result<Document> {
    let data = load_file(path)?;
    Ok(render(&data, profile))
}

/// Render a resume straight to DOCX bytes.
pub fn to_docx_bytes(data: &ResumeData, profile: &StyleProfile) -> Result<Vec<u8>> {
    output::to_docx(&render(data, profile))
}

/// Render a resume file and save it; the output format follows the output
/// file's extension (`.docx` or `.json`).
///
/// Nothing is written when loading or rendering fails.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    profile: &StyleProfile,
) -> Result<Document> {
    let doc = render_file(input, profile)?;
    WriterRegistry::with_defaults().save(&doc, output.as_ref())?;
    Ok(doc)
}

/// Builder for loading, rendering and saving resumes.
///
/// # Example
///
/// ```no_run
/// use resume_docx::{Preset, ResumeFormatter};
///
/// ResumeFormatter::new()
///     .preset(Preset::Enhanced)
///     .with_clearance(true)
///     .load("resume.json")?
///     .save("resume.docx")?;
/// # Ok::<(), resume_docx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResumeFormatter {
    profile: StyleProfile,
    created: Option<DateTime<Utc>>,
}

impl ResumeFormatter {
    /// Create a formatter with the Basic profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preset profile.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.profile = StyleProfile::from_preset(preset);
        self
    }

    /// Use a custom profile.
    pub fn with_profile(mut self, profile: StyleProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Show or hide the clearance in the header.
    pub fn with_clearance(mut self, show: bool) -> Self {
        self.profile = self.profile.with_header_clearance(show);
        self
    }

    /// Stamp the document's creation time.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// The profile in use.
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Load and render a resume file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<FormattedResume> {
        let data = load_file(path)?;
        Ok(self.format(&data))
    }

    /// Render resume data that is already in memory.
    pub fn format(&self, data: &ResumeData) -> FormattedResume {
        let mut document = render(data, &self.profile);
        if let Some(created) = self.created {
            document.metadata.created = Some(created);
        }
        FormattedResume { document }
    }
}

/// A rendered resume ready to be written.
#[derive(Debug, Clone)]
pub struct FormattedResume {
    /// The rendered document
    pub document: Document,
}

impl FormattedResume {
    /// Serialize as DOCX.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        output::to_docx(&self.document)
    }

    /// Serialize the layout as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        output::to_json(&self.document, format)
    }

    /// Save using the writer matching the path's extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        WriterRegistry::with_defaults().save(&self.document, path.as_ref())
    }

    /// Layout statistics.
    pub fn stats(&self) -> RenderStats {
        RenderStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
