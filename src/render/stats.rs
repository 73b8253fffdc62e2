//! Summary statistics for a rendered document.

use serde::{Deserialize, Serialize};

use crate::model::Document;

use super::{EDUCATION_HEADER, EXPERIENCE_HEADER, SKILLS_HEADER};

/// Counts collected from a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of text runs
    pub run_count: u32,

    /// Number of bullet paragraphs
    pub bullet_count: u32,

    /// Number of section headers
    pub section_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            stats.paragraph_count += 1;
            stats.run_count += block.runs.len() as u32;
            if block.is_bullet() {
                stats.bullet_count += 1;
            }
            let text = block.plain_text();
            if matches!(
                text.as_str(),
                SKILLS_HEADER | EXPERIENCE_HEADER | EDUCATION_HEADER
            ) {
                stats.section_count += 1;
            }
            stats.count_text(&text);
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.paragraph_count += other.paragraph_count;
        self.run_count += other.run_count;
        self.bullet_count += other.bullet_count;
        self.section_count += other.section_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
