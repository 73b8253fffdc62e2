//! Education and certificates section.

use crate::model::{Block, EducationEntry};
use crate::style::StyleProfile;

use super::common::{body_run, bullet, section_header};

/// Section header text.
pub const EDUCATION_HEADER: &str = "EDUCATION & CERTIFICATES";

/// Render the education section, one bullet per entry.
pub fn render_education(entries: &[EducationEntry], profile: &StyleProfile) -> Vec<Block> {
    if entries.is_empty() && !profile.always_emit_sections {
        return Vec::new();
    }

    let mut blocks = Vec::with_capacity(entries.len() + 1);
    blocks.push(section_header(
        profile,
        EDUCATION_HEADER,
        profile.spacing.section_before,
        profile.spacing.education_header_after,
    ));
    blocks.extend(
        entries
            .iter()
            .map(|entry| bullet(profile, vec![body_run(profile, entry.display_text())])),
    );
    blocks
}
