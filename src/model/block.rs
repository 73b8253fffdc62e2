//! Paragraph and run-level layout types.

use serde::{Deserialize, Serialize};

/// One paragraph of styled content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Text runs in reading order
    pub runs: Vec<Run>,

    /// Paragraph properties
    pub properties: ParagraphProperties,
}

impl Block {
    /// Create an empty paragraph with the given properties.
    pub fn new(properties: ParagraphProperties) -> Self {
        Self {
            runs: Vec::new(),
            properties,
        }
    }

    /// Append a run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Append a run, builder style.
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.trim().is_empty())
    }

    /// Runs rendered in bold.
    pub fn bold_runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter().filter(|run| run.bold)
    }

    /// Check if this paragraph is a bullet item, either list-styled or
    /// drawn with a manual glyph.
    pub fn is_bullet(&self) -> bool {
        self.properties.list_bullet || self.properties.first_line_indent < 0.0
    }
}

/// A run of text with one set of character properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content; `\t` advances to the next tab stop
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Underlined text
    pub underline: bool,

    /// Font family name
    pub font_family: String,

    /// Font size in points
    pub size_pt: f32,

    /// Apply the font to every script slot, not only Latin text
    pub compat_fonts: bool,
}

impl Run {
    /// Create a regular-weight run.
    pub fn new(text: impl Into<String>, font_family: impl Into<String>, size_pt: f32) -> Self {
        Self {
            text: text.into(),
            bold: false,
            underline: false,
            font_family: font_family.into(),
            size_pt,
            compat_fonts: false,
        }
    }

    /// Make the run bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set bold explicitly.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set underline.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set the font compatibility override.
    pub fn with_compat_fonts(mut self, compat: bool) -> Self {
        self.compat_fonts = compat;
        self
    }
}

/// Paragraph layout properties. Lengths are in points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphProperties {
    /// Horizontal alignment
    pub alignment: Alignment,

    /// Space before paragraph in points
    pub space_before: f32,

    /// Space after paragraph in points
    pub space_after: f32,

    /// Left indent in points
    pub left_indent: f32,

    /// First line indent in points; negative values hang
    pub first_line_indent: f32,

    /// Custom tab stops
    pub tab_stops: Vec<TabStop>,

    /// Draw a rule under the paragraph
    pub bottom_border: bool,

    /// Use the built-in bullet list style
    pub list_bullet: bool,
}

impl ParagraphProperties {
    /// Create default (left aligned, no spacing) properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set space before and after, in points.
    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Set left and first-line indents, in points.
    pub fn indent(mut self, left: f32, first_line: f32) -> Self {
        self.left_indent = left;
        self.first_line_indent = first_line;
        self
    }

    /// Add a tab stop.
    pub fn tab_stop(mut self, position: f32, alignment: TabAlignment) -> Self {
        self.tab_stops.push(TabStop {
            position,
            alignment,
        });
        self
    }

    /// Enable or disable the bottom border rule.
    pub fn with_bottom_border(mut self, border: bool) -> Self {
        self.bottom_border = border;
        self
    }

    /// Mark the paragraph as a list-style bullet.
    pub fn with_list_bullet(mut self, bullet: bool) -> Self {
        self.list_bullet = bullet;
        self
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// A tab stop at an absolute position from the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    /// Position in points
    pub position: f32,

    /// How text aligns against the stop
    pub alignment: TabAlignment,
}

/// Tab stop alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlignment {
    /// Text starts at the stop
    #[default]
    Left,
    /// Text is centered on the stop
    Center,
    /// Text ends at the stop
    Right,
}
