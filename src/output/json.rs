//! JSON dump of the rendered layout.

use crate::error::{Error, Result};
use crate::model::Document;

use super::OutputWriter;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Writes the block model as JSON, for inspection and golden tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    format: JsonFormat,
}

impl JsonWriter {
    /// Create a writer with the given format.
    pub fn new(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for JsonWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, doc: &Document) -> Result<Vec<u8>> {
        to_json(doc, self.format).map(String::into_bytes)
    }
}
