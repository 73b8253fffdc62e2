//! Technical skills section.

use indexmap::IndexMap;

use crate::model::Block;
use crate::style::StyleProfile;

use super::common::{body_run, bullet, section_header};

/// Section header text.
pub const SKILLS_HEADER: &str = "TECHNICAL SKILLS";

/// Render the skills section: header, then one paragraph per category in
/// input order with a bold `"Category: "` label and the skills joined by
/// `", "`.
pub fn render_skills(skills: &IndexMap<String, Vec<String>>, profile: &StyleProfile) -> Vec<Block> {
    if skills.is_empty() && !profile.always_emit_sections {
        return Vec::new();
    }

    let mut blocks = Vec::with_capacity(skills.len() + 1);
    blocks.push(section_header(
        profile,
        SKILLS_HEADER,
        0.0,
        profile.spacing.section_after,
    ));

    for (category, items) in skills {
        blocks.push(bullet(
            profile,
            vec![
                body_run(profile, format!("{category}: ")).bold(),
                body_run(profile, items.join(", ")),
            ],
        ));
    }

    blocks
}
