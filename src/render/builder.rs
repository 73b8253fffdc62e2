//! Document builder: runs the section renderers in order.

use log::debug;
use rayon::prelude::*;

use crate::model::{Block, Document, Metadata, ResumeData};
use crate::style::StyleProfile;

use super::{
    render_contact, render_education, render_experience, render_header, render_skills,
    render_summary,
};

/// Resume sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Name line
    Header,
    /// Contact line
    Contact,
    /// Summary paragraph
    Summary,
    /// Technical skills
    Skills,
    /// Professional experience
    Experience,
    /// Education and certificates
    Education,
}

impl Section {
    /// All sections in the order they appear in the document.
    pub const ORDER: [Section; 6] = [
        Section::Header,
        Section::Contact,
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Education,
    ];

    /// Section name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Contact => "contact",
            Section::Summary => "summary",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }

    /// Render this section from its part of the resume.
    pub fn render(self, resume: &ResumeData, profile: &StyleProfile) -> Vec<Block> {
        match self {
            Section::Header => render_header(resume, profile),
            Section::Contact => render_contact(&resume.contact, profile),
            Section::Summary => render_summary(&resume.summary, profile),
            Section::Skills => render_skills(&resume.skills, profile),
            Section::Experience => render_experience(&resume.experiences, profile),
            Section::Education => render_education(&resume.education, profile),
        }
    }
}

/// Builds a [`Document`] from resume data with one style profile.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    profile: StyleProfile,
}

impl DocumentBuilder {
    /// Create a builder for the given profile.
    pub fn new(profile: StyleProfile) -> Self {
        Self { profile }
    }

    /// The profile used by this builder.
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Render a resume.
    pub fn build(&self, resume: &ResumeData) -> Document {
        let mut doc = Document::new(self.profile.page);
        doc.metadata = Metadata {
            title: Some(format!("{} - Resume", resume.name)),
            author: Some(resume.name.clone()),
            created: None,
        };

        for section in Section::ORDER {
            let blocks = section.render(resume, &self.profile);
            debug!("Section {}: {} paragraphs", section.name(), blocks.len());
            doc.extend_blocks(blocks);
        }

        debug!(
            "Rendered {} paragraphs with {} preset",
            doc.block_count(),
            self.profile.preset.name()
        );
        doc
    }

    /// Render several resumes in parallel. Output order matches input order.
    pub fn build_all(&self, resumes: &[ResumeData]) -> Vec<Document> {
        resumes.par_iter().map(|resume| self.build(resume)).collect()
    }
}

/// Render a resume with the given profile.
pub fn render(resume: &ResumeData, profile: &StyleProfile) -> Document {
    DocumentBuilder::new(profile.clone()).build(resume)
}

/// Render independent resumes in parallel.
pub fn render_batch(resumes: &[ResumeData], profile: &StyleProfile) -> Vec<Document> {
    DocumentBuilder::new(profile.clone()).build_all(resumes)
}
