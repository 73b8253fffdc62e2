//! Style profiles: typography and spacing constants for rendering.
//!
//! A [`StyleProfile`] holds every font, size, spacing and policy value the
//! section renderers consult. Two presets exist: [`Preset::Basic`], a single
//! font with list-style bullets and underlined section headers, and
//! [`Preset::Enhanced`], with separate header/body fonts, ruled section
//! headers and hanging-indent glyph bullets.

use crate::model::PageSetup;
use serde::{Deserialize, Serialize};

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points.
pub fn inches(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// Named style presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Single font, list-style bullets
    #[default]
    Basic,
    /// Header/body fonts, ruled headers, manual bullets
    Enhanced,
}

impl Preset {
    /// Lowercase preset name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Basic => "basic",
            Preset::Enhanced => "enhanced",
        }
    }

    /// Parse a preset name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Preset::Basic),
            "enhanced" => Ok(Preset::Enhanced),
            other => Err(format!("Unknown preset: {other}")),
        }
    }
}

/// How bullet paragraphs are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletMode {
    /// The document's built-in bullet list style
    List,
    /// A literal glyph and tab inside a hanging-indent paragraph
    Manual {
        /// Bullet character
        glyph: char,
    },
}

/// Order of the company and title on a job line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobLineOrder {
    /// `Company | Title` as one bold run
    CompanyFirst,
    /// Bold title, separator, then the bold uppercased company
    TitleFirst,
}

/// Paragraph spacing in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// After the name line
    pub header_after: f32,
    /// After the contact line
    pub contact_after: f32,
    /// After the summary paragraph
    pub summary_after: f32,
    /// Before a section header that follows other content
    pub section_before: f32,
    /// After a section header
    pub section_after: f32,
    /// After the education section header
    pub education_header_after: f32,
    /// Before a job title line
    pub job_before: f32,
    /// After a job title or previous-role line
    pub job_after: f32,
    /// After each bullet or skills paragraph
    pub bullet_after: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            header_after: 2.0,
            contact_after: 12.0,
            summary_after: 12.0,
            section_before: 12.0,
            section_after: 8.0,
            education_header_after: 4.0,
            job_before: 8.0,
            job_after: 4.0,
            bullet_after: 4.0,
        }
    }
}

/// Typography, spacing and policy constants for one rendering style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Preset this profile was derived from
    pub preset: Preset,

    /// Font for the name, section headers and job titles
    pub header_font: String,

    /// Font for everything else
    pub body_font: String,

    /// Body text size in points
    pub body_size: f32,

    /// Name line size in points
    pub name_size: f32,

    /// Contact line size in points
    pub contact_size: f32,

    /// Section header size in points
    pub section_size: f32,

    /// Job title line size in points
    pub job_title_size: f32,

    /// Page size and margins
    pub page: PageSetup,

    /// Right-aligned tab stop for trailing dates, in points from the left margin
    pub date_tab: f32,

    /// Bullet left indent in points
    pub bullet_indent: f32,

    /// Bullet drawing mode
    pub bullet_mode: BulletMode,

    /// Paragraph spacing
    pub spacing: Spacing,

    /// Uppercase the name in the header
    pub uppercase_name: bool,

    /// Show the clearance in the header
    pub header_clearance: bool,

    /// Render the title and clearance in the header in bold
    pub header_title_bold: bool,

    /// Company/title order on job lines
    pub job_line: JobLineOrder,

    /// Underline section headers
    pub section_underline: bool,

    /// Rule under section headers
    pub section_border: bool,

    /// Apply fonts to every script slot
    pub compat_fonts: bool,

    /// Render the previous-role line under a job
    pub previous_role: bool,

    /// Emit section headers for empty sections
    pub always_emit_sections: bool,
}

impl StyleProfile {
    /// The Basic preset.
    pub fn basic() -> Self {
        Self {
            preset: Preset::Basic,
            header_font: "Calibri".to_string(),
            body_font: "Calibri".to_string(),
            body_size: 10.5,
            name_size: 11.0,
            contact_size: 11.0,
            section_size: 10.5,
            job_title_size: 10.5,
            page: PageSetup::letter(inches(0.5)),
            date_tab: inches(7.5),
            bullet_indent: inches(0.25),
            bullet_mode: BulletMode::List,
            spacing: Spacing::default(),
            uppercase_name: false,
            header_clearance: true,
            header_title_bold: true,
            job_line: JobLineOrder::CompanyFirst,
            section_underline: true,
            section_border: false,
            compat_fonts: false,
            previous_role: false,
            always_emit_sections: true,
        }
    }

    /// The Enhanced preset.
    pub fn enhanced() -> Self {
        Self {
            preset: Preset::Enhanced,
            header_font: "Cambria".to_string(),
            body_font: "Calibri".to_string(),
            body_size: 10.5,
            name_size: 16.0,
            contact_size: 10.0,
            section_size: 11.0,
            job_title_size: 10.5,
            page: PageSetup::letter(inches(0.5)),
            date_tab: inches(7.5),
            bullet_indent: inches(0.25),
            bullet_mode: BulletMode::Manual { glyph: '•' },
            spacing: Spacing::default(),
            uppercase_name: true,
            header_clearance: false,
            header_title_bold: false,
            job_line: JobLineOrder::TitleFirst,
            section_underline: false,
            section_border: true,
            compat_fonts: true,
            previous_role: true,
            always_emit_sections: false,
        }
    }

    /// Profile for a named preset.
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Basic => Self::basic(),
            Preset::Enhanced => Self::enhanced(),
        }
    }

    /// Show or hide the clearance in the header.
    pub fn with_header_clearance(mut self, show: bool) -> Self {
        self.header_clearance = show;
        self
    }

    /// Override the header and body fonts.
    pub fn with_fonts(mut self, header: impl Into<String>, body: impl Into<String>) -> Self {
        self.header_font = header.into();
        self.body_font = body.into();
        self
    }

    /// Override the body text size.
    pub fn with_body_size(mut self, size: f32) -> Self {
        self.body_size = size;
        self
    }

    /// Override the page setup.
    pub fn with_page(mut self, page: PageSetup) -> Self {
        self.page = page;
        self
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::basic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(0.5), 36.0);
        assert_eq!(inches(7.5), 540.0);
        assert_eq!(inches(0.25), 18.0);
    }

    #[test]
    fn test_shared_layout_constants() {
        for profile in [StyleProfile::basic(), StyleProfile::enhanced()] {
            assert_eq!(profile.page.margins.left, 36.0);
            assert_eq!(profile.page.margins.top, 36.0);
            assert_eq!(profile.date_tab, 540.0);
            assert_eq!(profile.bullet_indent, 18.0);
            assert_eq!(profile.date_tab, profile.page.text_width());
        }
    }

    #[test]
    fn test_preset_differences() {
        let basic = StyleProfile::basic();
        let enhanced = StyleProfile::enhanced();

        assert_eq!(basic.header_font, basic.body_font);
        assert_ne!(enhanced.header_font, enhanced.body_font);
        assert!(basic.header_clearance && !enhanced.header_clearance);
        assert!(basic.section_underline && !basic.section_border);
        assert!(enhanced.section_border);
        assert_eq!(basic.bullet_mode, BulletMode::List);
        assert!(matches!(enhanced.bullet_mode, BulletMode::Manual { .. }));
        assert!(enhanced.compat_fonts && !basic.compat_fonts);
    }

    #[test]
    fn test_from_preset_and_toggles() {
        let profile = StyleProfile::from_preset(Preset::Enhanced).with_header_clearance(true);
        assert_eq!(profile.preset, Preset::Enhanced);
        assert!(profile.header_clearance);

        let profile = StyleProfile::default().with_fonts("Georgia", "Arial");
        assert_eq!(profile.preset, Preset::Basic);
        assert_eq!(profile.header_font, "Georgia");
        assert_eq!(profile.body_font, "Arial");
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(Preset::parse("Enhanced"), Ok(Preset::Enhanced));
        assert_eq!(Preset::parse(" basic "), Ok(Preset::Basic));
        assert!(Preset::parse("fancy").is_err());
        assert_eq!(Preset::Enhanced.name(), "enhanced");
    }
}
