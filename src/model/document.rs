//! Document-level types.

use super::Block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rendered resume: page setup plus paragraphs in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page size and margins
    pub page: PageSetup,

    /// Document properties
    pub metadata: Metadata,

    /// Paragraphs in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document with the given page setup.
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append several blocks, keeping their order.
    pub fn extend_blocks(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Number of paragraphs.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Find the first paragraph whose text equals `text`.
    pub fn find_block(&self, text: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.plain_text() == text)
    }

    /// Get plain text content of the entire document, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(PageSetup::default())
    }
}

/// Page size and margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Page margins
    pub margins: Margins,
}

impl PageSetup {
    /// US Letter (8.5 x 11 inches) with the given uniform margin.
    pub fn letter(margin: f32) -> Self {
        Self {
            width: 612.0,  // 8.5 * 72
            height: 792.0, // 11 * 72
            margins: Margins::all(margin),
        }
    }

    /// Width available between the left and right margins.
    pub fn text_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter(72.0)
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// Same margin on all four sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Document properties written to the package metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Creation timestamp, stamped by the caller at save time
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Set the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}
