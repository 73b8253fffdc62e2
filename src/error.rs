//! Error types for resume-docx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resume-docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, rendering or writing a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The input could not be parsed into resume data.
    #[error("Invalid resume data in {source_name}: {message}")]
    MalformedInput {
        /// File name or other label of the input
        source_name: String,
        /// Parser diagnostic, including line and column when known
        message: String,
    },

    /// Error producing an XML part.
    #[error("XML writing error: {0}")]
    Xml(String),

    /// Error assembling the document package.
    #[error("Package error: {0}")]
    Package(String),

    /// Error during rendering (DOCX, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No writer is registered for the requested output.
    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),
}

impl Error {
    /// Build a `MalformedInput` error from a JSON parse failure.
    pub(crate) fn malformed(source_name: impl Into<String>, err: &serde_json::Error) -> Self {
        Error::MalformedInput {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(e) => Error::Io(io::Error::new(e.kind(), e.to_string())),
            _ => Error::Xml(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Package(err.to_string()),
        }
    }
}
