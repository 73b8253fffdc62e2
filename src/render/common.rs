//! Run and paragraph constructors shared by the section renderers.

use crate::model::{Block, ParagraphProperties, Run, TabAlignment};
use crate::style::{BulletMode, StyleProfile};

/// Regular-weight run in the body font at body size.
pub(crate) fn body_run(profile: &StyleProfile, text: impl Into<String>) -> Run {
    sized_body_run(profile, text, profile.body_size)
}

/// Regular-weight run in the body font.
pub(crate) fn sized_body_run(profile: &StyleProfile, text: impl Into<String>, size: f32) -> Run {
    Run::new(text, profile.body_font.as_str(), size).with_compat_fonts(profile.compat_fonts)
}

/// Regular-weight run in the header font.
pub(crate) fn header_run(profile: &StyleProfile, text: impl Into<String>, size: f32) -> Run {
    Run::new(text, profile.header_font.as_str(), size).with_compat_fonts(profile.compat_fonts)
}

/// A section header paragraph such as `TECHNICAL SKILLS`.
pub(crate) fn section_header(profile: &StyleProfile, title: &str, before: f32, after: f32) -> Block {
    let props = ParagraphProperties::new()
        .spacing(before, after)
        .with_bottom_border(profile.section_border);
    let run = header_run(profile, title, profile.section_size)
        .bold()
        .with_underline(profile.section_underline);
    Block::new(props).with_run(run)
}

/// A bullet paragraph holding `runs`, drawn according to the profile's
/// bullet mode.
pub(crate) fn bullet(profile: &StyleProfile, runs: Vec<Run>) -> Block {
    let after = profile.spacing.bullet_after;
    let mut block = match profile.bullet_mode {
        BulletMode::List => Block::new(
            ParagraphProperties::new()
                .spacing(0.0, after)
                .indent(profile.bullet_indent, 0.0)
                .with_list_bullet(true),
        ),
        BulletMode::Manual { glyph } => Block::new(
            ParagraphProperties::new()
                .spacing(0.0, after)
                .indent(profile.bullet_indent, -profile.bullet_indent),
        )
        .with_run(body_run(profile, format!("{glyph}\t"))),
    };
    block.runs.extend(runs);
    block
}

/// Paragraph properties for a line that ends in right-aligned dates.
pub(crate) fn dated_line(profile: &StyleProfile, before: f32, after: f32) -> ParagraphProperties {
    ParagraphProperties::new()
        .spacing(before, after)
        .tab_stop(profile.date_tab, TabAlignment::Right)
}

/// Append a tab and the dates, if there are any.
pub(crate) fn push_dates(profile: &StyleProfile, block: &mut Block, dates: Option<&str>) {
    if let Some(dates) = dates {
        block.add_run(body_run(profile, "\t"));
        block.add_run(body_run(profile, dates));
    }
}

/// Append `run`, folding it into the previous run when both share the same
/// character formatting.
pub(crate) fn push_merged(block: &mut Block, run: Run) {
    if let Some(last) = block.runs.last_mut() {
        if last.bold == run.bold
            && last.underline == run.underline
            && last.font_family == run.font_family
            && last.size_pt == run.size_pt
            && last.compat_fonts == run.compat_fonts
        {
            last.text.push_str(&run.text);
            return;
        }
    }
    block.add_run(run);
}
