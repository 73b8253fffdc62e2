//! Name line, contact line and summary.

use crate::model::{non_blank, Alignment, Block, Contact, ParagraphProperties, ResumeData};
use crate::style::StyleProfile;

use super::common::{body_run, header_run, push_merged, sized_body_run};

/// Separator between header and contact components.
pub const SEPARATOR: &str = " | ";

/// Render the centered name line.
///
/// The name is always bold. Title and clearance follow as `" | "`-prefixed
/// runs whose weight comes from the profile; under Basic every piece shares
/// one format and collapses into a single run.
pub fn render_header(resume: &ResumeData, profile: &StyleProfile) -> Vec<Block> {
    let props = ParagraphProperties::new()
        .aligned(Alignment::Center)
        .spacing(0.0, profile.spacing.header_after);
    let mut block = Block::new(props);

    let mut lead = "";
    if !resume.name.trim().is_empty() {
        let name = if profile.uppercase_name {
            resume.name.to_uppercase()
        } else {
            resume.name.clone()
        };
        block.add_run(header_run(profile, name, profile.name_size).bold());
        lead = SEPARATOR;
    }

    let mut trailing = Vec::new();
    if let Some(title) = non_blank(&resume.title) {
        trailing.push(title.to_string());
    }
    if profile.header_clearance {
        if let Some(clearance) = non_blank(&resume.clearance) {
            trailing.push(format!("({clearance})"));
        }
    }

    for part in trailing {
        let run = header_run(profile, format!("{lead}{part}"), profile.name_size)
            .with_bold(profile.header_title_bold);
        push_merged(&mut block, run);
        lead = SEPARATOR;
    }

    vec![block]
}

/// Render the centered contact line. Empty fields are dropped; when every
/// field is empty no paragraph is produced.
pub fn render_contact(contact: &Contact, profile: &StyleProfile) -> Vec<Block> {
    let parts = contact.parts();
    if parts.is_empty() {
        return Vec::new();
    }

    let props = ParagraphProperties::new()
        .aligned(Alignment::Center)
        .spacing(0.0, profile.spacing.contact_after);
    let run = sized_body_run(profile, parts.join(SEPARATOR), profile.contact_size);
    vec![Block::new(props).with_run(run)]
}

/// Render the summary paragraph if there is one.
pub fn render_summary(summary: &Option<String>, profile: &StyleProfile) -> Vec<Block> {
    match non_blank(summary) {
        Some(text) => {
            let props = ParagraphProperties::new()
                .aligned(Alignment::Left)
                .spacing(0.0, profile.spacing.summary_after);
            vec![Block::new(props).with_run(body_run(profile, text))]
        }
        None => Vec::new(),
    }
}
