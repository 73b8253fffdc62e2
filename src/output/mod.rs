//! Output writers and extension-based dispatch.
//!
//! A writer turns a rendered [`Document`] into bytes. Writers are registered
//! by file extension so callers can save to whatever the output path names.
//!
//! # Example
//!
//! ```no_run
//! use resume_docx::output::WriterRegistry;
//! use resume_docx::{render, ResumeData, StyleProfile};
//! use std::path::Path;
//!
//! fn main() -> resume_docx::Result<()> {
//!     let doc = render(&ResumeData::new("Ada Lovelace"), &StyleProfile::enhanced());
//!     WriterRegistry::with_defaults().save(&doc, Path::new("resume.docx"))?;
//!     Ok(())
//! }
//! ```

mod docx;
mod json;

pub use docx::{to_docx, DocxWriter, PACKAGE_PARTS};
pub use json::{to_json, JsonFormat, JsonWriter};

use crate::error::{Error, Result};
use crate::model::Document;
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Output format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Word document
    #[default]
    Docx,

    /// JSON block dump
    Json,
}

impl OutputFormat {
    /// Writer for this format.
    pub fn writer(self) -> Arc<dyn OutputWriter> {
        match self {
            OutputFormat::Docx => Arc::new(DocxWriter::new()),
            OutputFormat::Json => Arc::new(JsonWriter::default()),
        }
    }
}

/// Trait for output writers.
///
/// Implement this trait to add support for a new output format.
pub trait OutputWriter: Send + Sync {
    /// Get the supported file extensions for this writer.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this writer.
    fn name(&self) -> &str;

    /// MIME type of the produced bytes.
    fn mime_type(&self) -> &'static str;

    /// Serialize a document.
    fn write(&self, doc: &Document) -> Result<Vec<u8>>;

    /// Check if this writer supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for output writers.
///
/// The registry maps file extensions to writers.
pub struct WriterRegistry {
    writers: HashMap<String, Arc<dyn OutputWriter>>,
    by_name: HashMap<String, Arc<dyn OutputWriter>>,
}

impl WriterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            writers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the DOCX and JSON writers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(OutputFormat::Docx.writer());
        registry.register(OutputFormat::Json.writer());
        registry
    }

    /// Register a writer for all its supported extensions.
    pub fn register(&mut self, writer: Arc<dyn OutputWriter>) {
        for ext in writer.supported_extensions() {
            self.writers.insert(ext.to_lowercase(), writer.clone());
        }
        self.by_name.insert(writer.name().to_lowercase(), writer);
    }

    /// Get a writer by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn OutputWriter>> {
        self.writers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a writer by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn OutputWriter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.writers.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.writers.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Pick the writer for an output path from its extension.
    pub fn writer_for(&self, path: &Path) -> Result<Arc<dyn OutputWriter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedOutput(format!("{} has no extension", path.display())))?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedOutput(format!("no writer for extension: {}", ext)))
    }

    /// Serialize `doc` with the writer matching `path` and write the file.
    ///
    /// The bytes are produced before the file is created, so a failed
    /// serialization leaves nothing on disk.
    pub fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let writer = self.writer_for(path)?;
        let bytes = writer.write(doc)?;
        fs::write(path, &bytes)?;
        info!(
            "Wrote {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            writer.name()
        );
        Ok(())
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_registry_with_defaults() {
        let registry = WriterRegistry::with_defaults();
        assert!(registry.supports("docx"));
        assert!(registry.supports("DOCX"));
        assert!(registry.supports("json"));
        assert!(!registry.supports("pdf"));
        assert_eq!(registry.supported_extensions(), vec!["docx", "json"]);
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = WriterRegistry::with_defaults();
        let writer = registry.get_by_name("DOCX");
        assert!(writer.is_some());
        assert_eq!(writer.unwrap().name(), "docx");
    }

    #[test]
    fn test_writer_for_path() {
        let registry = WriterRegistry::with_defaults();
        let writer = registry.writer_for(&PathBuf::from("out/resume.Json")).unwrap();
        assert_eq!(writer.name(), "json");

        let err = registry.writer_for(&PathBuf::from("resume")).err().unwrap();
        assert!(matches!(err, Error::UnsupportedOutput(_)));

        let err = registry.writer_for(&PathBuf::from("resume.pdf")).err().unwrap();
        assert!(matches!(err, Error::UnsupportedOutput(_)));
    }

    #[test]
    fn test_output_format_writer() {
        assert_eq!(OutputFormat::default(), OutputFormat::Docx);
        assert_eq!(OutputFormat::Json.writer().mime_type(), "application/json");
    }
}
