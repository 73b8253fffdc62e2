//! DOCX (OOXML) package writer.
//!
//! The package is assembled in memory; nothing touches the filesystem here.

mod parts;
mod xml;

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::Document;

use super::OutputWriter;

/// Part names in the order they are stored in the package.
pub const PACKAGE_PARTS: [&str; 8] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "word/document.xml",
    "word/_rels/document.xml.rels",
    "word/styles.xml",
    "word/numbering.xml",
    "docProps/core.xml",
    "docProps/app.xml",
];

/// Writes documents as `.docx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxWriter;

impl DocxWriter {
    /// Create a new DOCX writer.
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for DocxWriter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn write(&self, doc: &Document) -> Result<Vec<u8>> {
        to_docx(doc)
    }
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Serialize a document to DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    let document = xml::document_xml(doc)?;
    let core = xml::core_properties_xml(&doc.metadata)?;
    let app = xml::app_properties_xml()?;

    let contents: [&[u8]; 8] = [
        parts::CONTENT_TYPES.as_bytes(),
        parts::PACKAGE_RELS.as_bytes(),
        &document,
        parts::DOCUMENT_RELS.as_bytes(),
        parts::STYLES.as_bytes(),
        parts::NUMBERING.as_bytes(),
        &core,
        &app,
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in PACKAGE_PARTS.iter().zip(contents) {
        zip.start_file(*name, file_options())?;
        zip.write_all(data)?;
    }
    let cursor = zip.finish()?;

    log::debug!(
        "Packaged {} paragraphs into {} bytes",
        doc.block_count(),
        cursor.get_ref().len()
    );
    Ok(cursor.into_inner())
}
