//! Resume input record.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Name used when the input has no `name` key.
pub const DEFAULT_NAME: &str = "YOUR NAME";

/// Return the value of an optional field if it holds non-whitespace text.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// A complete resume as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    /// Candidate name
    #[serde(default = "default_name")]
    pub name: String,

    /// Professional title shown next to the name
    #[serde(default)]
    pub title: Option<String>,

    /// Security clearance or credential
    #[serde(default)]
    pub clearance: Option<String>,

    /// Contact line fields
    #[serde(default)]
    pub contact: Contact,

    /// Professional summary paragraph
    #[serde(default)]
    pub summary: Option<String>,

    /// Skill categories in input order
    #[serde(default, deserialize_with = "skill_map")]
    pub skills: IndexMap<String, Vec<String>>,

    /// Employment history, most recent first
    #[serde(default)]
    pub experiences: Vec<Experience>,

    /// Degrees and certificates
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl ResumeData {
    /// Create an empty resume for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: None,
            clearance: None,
            contact: Contact::default(),
            summary: None,
            skills: IndexMap::new(),
            experiences: Vec::new(),
            education: Vec::new(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// Contact line fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// City, region
    #[serde(default)]
    pub location: Option<String>,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

impl Contact {
    /// Non-empty fields in display order (location, phone, email).
    pub fn parts(&self) -> Vec<&str> {
        [&self.location, &self.phone, &self.email]
            .into_iter()
            .filter_map(non_blank)
            .collect()
    }
}

/// One position, optionally with an earlier role at the same employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Employer name
    pub company: String,

    /// Current or final job title
    #[serde(default)]
    pub title: Option<String>,

    /// Earlier title held at the same employer
    #[serde(default)]
    pub previous_title: Option<String>,

    /// Date range of the earlier title
    #[serde(default)]
    pub previous_dates: Option<String>,

    /// Date range, placed flush right
    #[serde(default)]
    pub dates: String,

    /// Accomplishment bullets
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

impl Experience {
    /// Create an experience entry with no bullets.
    pub fn new(company: impl Into<String>, title: Option<&str>, dates: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            title: title.map(str::to_string),
            previous_title: None,
            previous_dates: None,
            dates: dates.into(),
            bullets: Vec::new(),
        }
    }
}

/// An accomplishment bullet.
///
/// Accepts either `{"title": ..., "text": ...}` or a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BulletRepr")]
pub struct Bullet {
    /// Explicit bold label
    pub title: Option<String>,

    /// Bullet body
    pub text: String,
}

impl Bullet {
    /// Bullet without an explicit label.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }

    /// Bullet with an explicit bold label.
    pub fn titled(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: text.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BulletRepr {
    Plain(String),
    Full {
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
}

impl From<BulletRepr> for Bullet {
    fn from(repr: BulletRepr) -> Self {
        match repr {
            BulletRepr::Plain(text) => Bullet::text(text),
            BulletRepr::Full { title, text } => Bullet { title, text },
        }
    }
}

/// An education line: either free text or a structured entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EducationEntry {
    /// Rendered verbatim
    Plain(String),
    /// Rendered as `school, degree (year)`
    Detailed(Education),
}

impl EducationEntry {
    /// Text of the education bullet.
    pub fn display_text(&self) -> String {
        match self {
            EducationEntry::Plain(text) => text.clone(),
            EducationEntry::Detailed(edu) => {
                let mut text = edu.school.clone();
                if let Some(degree) = non_blank(&edu.degree) {
                    text.push_str(", ");
                    text.push_str(degree);
                }
                if let Some(year) = non_blank(&edu.year) {
                    text.push_str(" (");
                    text.push_str(year);
                    text.push(')');
                }
                text
            }
        }
    }
}

/// Structured education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Institution
    pub school: String,

    /// Degree or certificate name
    #[serde(default)]
    pub degree: Option<String>,

    /// Completion year; numbers are accepted
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn skill_map<'de, D>(deserializer: D) -> Result<IndexMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, OneOrMany>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(category, skills)| {
            let skills = match skills {
                OneOrMany::One(skill) => vec![skill],
                OneOrMany::Many(skills) => skills,
            };
            (category, skills)
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.name, DEFAULT_NAME);
        assert!(data.skills.is_empty());
        assert!(data.experiences.is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&Some("x".to_string())), Some("x"));
    }

    #[test]
    fn test_contact_parts_skip_empty() {
        let contact = Contact {
            location: Some("Austin, TX".to_string()),
            phone: Some(String::new()),
            email: Some("a@b.c".to_string()),
        };
        assert_eq!(contact.parts(), vec!["Austin, TX", "a@b.c"]);
    }

    #[test]
    fn test_skills_preserve_order() {
        let data: ResumeData = serde_json::from_str(
            r#"{"skills": {"Zeta": ["b", "a"], "Alpha": "solo", "Mid": []}}"#,
        )
        .unwrap();
        let categories: Vec<&str> = data.skills.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(data.skills["Zeta"], vec!["b", "a"]);
        assert_eq!(data.skills["Alpha"], vec!["solo"]);
    }

    #[test]
    fn test_bullet_forms() {
        let bullets: Vec<Bullet> =
            serde_json::from_str(r#"["plain text", {"title": "Scope", "text": "body"}]"#).unwrap();
        assert_eq!(bullets[0], Bullet::text("plain text"));
        assert_eq!(bullets[1], Bullet::titled("Scope", "body"));
    }

    #[test]
    fn test_experience_camel_case() {
        let exp: Experience = serde_json::from_str(
            r#"{"company": "Acme", "previousTitle": "Intern", "previousDates": "2019"}"#,
        )
        .unwrap();
        assert_eq!(exp.previous_title.as_deref(), Some("Intern"));
        assert_eq!(exp.previous_dates.as_deref(), Some("2019"));
        assert_eq!(exp.dates, "");
    }

    #[test]
    fn test_education_display_text() {
        let entries: Vec<EducationEntry> = serde_json::from_str(
            r#"[
                "B.S. Computer Science",
                {"school": "MIT", "degree": "M.S.", "year": 2015},
                {"school": "Stanford", "year": "2010"},
                {"school": "Self-taught"}
            ]"#,
        )
        .unwrap();
        let texts: Vec<String> = entries.iter().map(EducationEntry::display_text).collect();
        assert_eq!(
            texts,
            vec![
                "B.S. Computer Science",
                "MIT, M.S. (2015)",
                "Stanford (2010)",
                "Self-taught",
            ]
        );
    }
}
