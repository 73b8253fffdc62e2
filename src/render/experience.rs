//! Professional experience section and the bullet label heuristic.

use log::{trace, warn};

use crate::model::{non_blank, Block, Bullet, Experience, Run};
use crate::style::{JobLineOrder, StyleProfile};

use super::common::{body_run, bullet, dated_line, header_run, push_dates, section_header};
use super::header::SEPARATOR;

/// Section header text.
pub const EXPERIENCE_HEADER: &str = "PROFESSIONAL EXPERIENCE";

/// A colon at this character index or later is not treated as a label.
pub const LABEL_COLON_LIMIT: usize = 50;

/// A bullet split into an optional bold label and regular text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletLabel {
    /// Bold lead-in, including its trailing space
    pub label: Option<String>,
    /// Regular-weight text
    pub remainder: String,
}

impl BulletLabel {
    /// Resolve the bold label of a bullet.
    ///
    /// An explicit title always wins and is rendered as `"Title: "`.
    /// Otherwise the text is split at its first colon when that colon sits
    /// before [`LABEL_COLON_LIMIT`] characters; this is a heuristic, so text
    /// such as `"Met at 9:30 to plan"` splits at the time.
    pub fn resolve(bullet: &Bullet) -> Self {
        if let Some(title) = non_blank(&bullet.title) {
            let label = if title.ends_with(':') {
                format!("{title} ")
            } else {
                format!("{title}: ")
            };
            return Self {
                label: Some(label),
                remainder: bullet.text.trim().to_string(),
            };
        }

        Self::infer(&bullet.text)
    }

    /// Apply the colon heuristic to unlabelled text.
    pub fn infer(text: &str) -> Self {
        let colon = text
            .char_indices()
            .enumerate()
            .find(|(_, (_, c))| *c == ':')
            .map(|(char_index, (byte_index, _))| (char_index, byte_index));

        match colon {
            Some((char_index, byte_index)) if char_index < LABEL_COLON_LIMIT => Self {
                label: Some(format!("{} ", &text[..=byte_index])),
                remainder: text[byte_index + 1..].trim().to_string(),
            },
            _ => Self {
                label: None,
                remainder: text.to_string(),
            },
        }
    }

    /// Runs for this label in the profile's body font.
    fn into_runs(self, profile: &StyleProfile) -> Vec<Run> {
        let mut runs = Vec::with_capacity(2);
        if let Some(label) = self.label {
            runs.push(body_run(profile, label).bold());
        }
        if !self.remainder.is_empty() {
            runs.push(body_run(profile, self.remainder));
        }
        runs
    }
}

/// Render the experience section: header, then per entry a job line, an
/// optional previous-role line and the bullets.
pub fn render_experience(experiences: &[Experience], profile: &StyleProfile) -> Vec<Block> {
    if experiences.is_empty() && !profile.always_emit_sections {
        return Vec::new();
    }

    let mut blocks = vec![section_header(
        profile,
        EXPERIENCE_HEADER,
        profile.spacing.section_before,
        profile.spacing.section_after,
    )];

    for experience in experiences {
        blocks.push(job_line(experience, profile));
        if let Some(previous) = previous_role_line(experience, profile) {
            blocks.push(previous);
        }
        for item in &experience.bullets {
            if item.text.trim().is_empty() && non_blank(&item.title).is_none() {
                warn!("Empty bullet under {}", experience.company);
            }
            blocks.push(bullet_block(item, profile));
        }
        trace!(
            "Rendered {} with {} bullets",
            experience.company,
            experience.bullets.len()
        );
    }

    blocks
}

fn job_line(experience: &Experience, profile: &StyleProfile) -> Block {
    let spacing = &profile.spacing;
    let mut block = Block::new(dated_line(profile, spacing.job_before, spacing.job_after));
    let title = non_blank(&experience.title);
    let size = profile.job_title_size;

    match profile.job_line {
        JobLineOrder::CompanyFirst => {
            let text = match title {
                Some(title) => format!("{}{SEPARATOR}{title}", experience.company),
                None => experience.company.clone(),
            };
            block.add_run(body_run(profile, text).bold());
        }
        JobLineOrder::TitleFirst => {
            if let Some(title) = title {
                block.add_run(header_run(profile, title, size).bold());
                block.add_run(header_run(profile, SEPARATOR, size));
            }
            block.add_run(header_run(profile, experience.company.to_uppercase(), size).bold());
        }
    }

    push_dates(profile, &mut block, non_blank_str(&experience.dates));
    block
}

fn previous_role_line(experience: &Experience, profile: &StyleProfile) -> Option<Block> {
    if !profile.previous_role {
        return None;
    }
    let title = non_blank(&experience.previous_title)?;

    let mut block = Block::new(dated_line(profile, 0.0, profile.spacing.job_after));
    block.add_run(header_run(profile, title, profile.job_title_size).bold());
    push_dates(profile, &mut block, non_blank(&experience.previous_dates));
    Some(block)
}

fn bullet_block(item: &Bullet, profile: &StyleProfile) -> Block {
    bullet(profile, BulletLabel::resolve(item).into_runs(profile))
}

fn non_blank_str(value: &str) -> Option<&str> {
    Some(value).filter(|s| !s.trim().is_empty())
}
