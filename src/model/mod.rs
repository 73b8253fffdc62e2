//! Data model types for resume rendering.
//!
//! `resume` holds the input record handed over by the loader. `block` and
//! `document` hold the layout representation produced by the renderers and
//! consumed by the output writers. The layout model is format-agnostic: it
//! describes paragraphs and runs, not OOXML.

mod block;
mod document;
mod resume;

pub use block::{Alignment, Block, ParagraphProperties, Run, TabAlignment, TabStop};
pub use document::{Document, Margins, Metadata, PageSetup};
pub use resume::{
    non_blank, Bullet, Contact, Education, EducationEntry, Experience, ResumeData, DEFAULT_NAME,
};
