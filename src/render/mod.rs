//! Layout rendering: turns resume data into paragraphs and runs.
//!
//! Each section renderer is a pure function of its slice of the resume and
//! the [`StyleProfile`](crate::style::StyleProfile). The [`DocumentBuilder`]
//! calls them in [`Section::ORDER`] and concatenates the results.

mod builder;
mod common;
mod education;
mod experience;
mod header;
mod skills;
mod stats;

pub use builder::{render, render_batch, DocumentBuilder, Section};
pub use education::{render_education, EDUCATION_HEADER};
pub use experience::{render_experience, BulletLabel, EXPERIENCE_HEADER, LABEL_COLON_LIMIT};
pub use header::{render_contact, render_header, render_summary, SEPARATOR};
pub use skills::{render_skills, SKILLS_HEADER};
pub use stats::RenderStats;
