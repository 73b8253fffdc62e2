//! Loading resume data from JSON.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::model::ResumeData;

/// Load resume data from a JSON file.
///
/// Returns [`Error::MissingInput`] when the file does not exist and
/// [`Error::MalformedInput`] when it is not valid resume JSON.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ResumeData> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let source_name = path.display().to_string();
    let data = parse(&decode(bytes, &source_name)?, &source_name)?;
    debug!(
        "Loaded {}: {} experiences, {} skill categories",
        source_name,
        data.experiences.len(),
        data.skills.len()
    );
    Ok(data)
}

/// Parse resume data from a JSON string.
pub fn from_str(json: &str) -> Result<ResumeData> {
    parse(json, "<string>")
}

/// Parse resume data from a reader.
pub fn from_reader<R: Read>(mut reader: R) -> Result<ResumeData> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&decode(bytes, "<reader>")?, "<reader>")
}

fn decode(bytes: Vec<u8>, source_name: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::MalformedInput {
        source_name: source_name.to_string(),
        message: format!("input is not valid UTF-8: {}", e.utf8_error()),
    })
}

fn parse(json: &str, source_name: &str) -> Result<ResumeData> {
    serde_json::from_str(json).map_err(|e| Error::malformed(source_name, &e))
}
