//! Integration tests for resume rendering.

use resume_docx::loader;
use resume_docx::render::{EDUCATION_HEADER, EXPERIENCE_HEADER, SKILLS_HEADER};
use resume_docx::{render, render_batch, Document, ResumeData, StyleProfile, TabAlignment};

fn load(json: &str) -> ResumeData {
    loader::from_str(json).unwrap()
}

fn texts(doc: &Document) -> Vec<String> {
    doc.blocks.iter().map(|b| b.plain_text()).collect()
}

#[test]
fn test_enhanced_job_line_and_bullet() {
    let data = load(
        r#"{
            "name": "J. Doe",
            "experiences": [{
                "company": "Acme",
                "title": "Engineer",
                "dates": "2020–2023",
                "bullets": [{"text": "Led infra: cut latency 40%"}]
            }]
        }"#,
    );
    let doc = render(&data, &StyleProfile::enhanced());

    let job = doc.find_block("Engineer | ACME\t2020–2023").unwrap();
    let runs: Vec<(&str, bool)> = job.runs.iter().map(|r| (r.text.as_str(), r.bold)).collect();
    assert_eq!(
        runs,
        vec![
            ("Engineer", true),
            (" | ", false),
            ("ACME", true),
            ("\t", false),
            ("2020–2023", false),
        ]
    );
    assert_eq!(job.properties.tab_stops.len(), 1);
    assert_eq!(job.properties.tab_stops[0].position, 540.0);
    assert_eq!(job.properties.tab_stops[0].alignment, TabAlignment::Right);

    let bullets: Vec<_> = doc.blocks.iter().filter(|b| b.is_bullet()).collect();
    assert_eq!(bullets.len(), 1);
    let bold: Vec<&str> = bullets[0].bold_runs().map(|r| r.text.as_str()).collect();
    assert_eq!(bold, vec!["Led infra: "]);
    assert_eq!(bullets[0].runs.last().unwrap().text, "cut latency 40%");
    assert!(!bullets[0].runs.last().unwrap().bold);
}

#[test]
fn test_education_plain_entry_is_verbatim() {
    let data = load(r#"{"education": ["B.S. Computer Science"]}"#);
    let doc = render(&data, &StyleProfile::basic());

    let bullets: Vec<_> = doc.blocks.iter().filter(|b| b.is_bullet()).collect();
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].runs.len(), 1);
    assert_eq!(bullets[0].runs[0].text, "B.S. Computer Science");
    assert!(!bullets[0].runs[0].bold);
}

#[test]
fn test_empty_skills_per_preset() {
    let data = ResumeData::new("Ada");

    let basic = texts(&render(&data, &StyleProfile::basic()));
    assert!(basic.iter().any(|t| t == SKILLS_HEADER));
    assert!(basic.iter().any(|t| t == EXPERIENCE_HEADER));
    assert!(basic.iter().any(|t| t == EDUCATION_HEADER));

    let enhanced = texts(&render(&data, &StyleProfile::enhanced()));
    assert!(!enhanced.iter().any(|t| t == SKILLS_HEADER));
    assert!(!enhanced.iter().any(|t| t == EXPERIENCE_HEADER));
    assert!(!enhanced.iter().any(|t| t == EDUCATION_HEADER));
}

#[test]
fn test_section_order() {
    let data = load(
        r#"{
            "name": "Ada",
            "title": "Engineer",
            "contact": {"email": "ada@example.com"},
            "summary": "Builds engines.",
            "skills": {"Languages": ["Rust"]},
            "experiences": [{"company": "Analytical", "dates": "1840"}],
            "education": ["Home tutoring"]
        }"#,
    );

    for profile in [StyleProfile::basic(), StyleProfile::enhanced()] {
        let lines = texts(&render(&data, &profile));
        let pos = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();
        assert_eq!(pos("Engineer"), 0);
        assert!(pos("ada@example.com") < pos("Builds engines."));
        assert!(pos("Builds engines.") < pos(SKILLS_HEADER));
        assert!(pos(SKILLS_HEADER) < pos(EXPERIENCE_HEADER));
        assert!(pos(EXPERIENCE_HEADER) < pos(EDUCATION_HEADER));
        assert!(pos(EDUCATION_HEADER) < pos("Home tutoring"));
    }
}

#[test]
fn test_colon_heuristic_threshold() {
    let short = format!("{}: rest of the line", "a".repeat(10));
    let long = format!("{}: rest of the line", "b".repeat(60));
    let data = load(&format!(
        r#"{{"experiences": [{{"company": "Acme", "bullets": ["{short}", "{long}"]}}]}}"#
    ));
    let doc = render(&data, &StyleProfile::basic());
    let bullets: Vec<_> = doc.blocks.iter().filter(|b| b.is_bullet()).collect();
    assert_eq!(bullets.len(), 2);

    assert_eq!(bullets[0].runs[0].text, format!("{}: ", "a".repeat(10)));
    assert!(bullets[0].runs[0].bold);
    assert_eq!(bullets[0].runs[1].text, "rest of the line");

    assert_eq!(bullets[1].runs.len(), 1);
    assert_eq!(bullets[1].runs[0].text, long);
    assert!(!bullets[1].runs[0].bold);
}

#[test]
fn test_single_contact_field_has_no_separator() {
    let data = load(r#"{"name": "Ada", "contact": {"phone": "555-0100"}}"#);
    for profile in [StyleProfile::basic(), StyleProfile::enhanced()] {
        let doc = render(&data, &profile);
        assert_eq!(doc.blocks[1].plain_text(), "555-0100");
    }
}

#[test]
fn test_header_clearance_toggle() {
    let data = load(r#"{"name": "Ada", "title": "Engineer", "clearance": "TS/SCI"}"#);

    let basic = render(&data, &StyleProfile::basic());
    assert_eq!(basic.blocks[0].plain_text(), "Ada | Engineer | (TS/SCI)");

    let enhanced = render(&data, &StyleProfile::enhanced());
    assert_eq!(enhanced.blocks[0].plain_text(), "ADA | Engineer");

    let shown = render(&data, &StyleProfile::enhanced().with_header_clearance(true));
    assert_eq!(shown.blocks[0].plain_text(), "ADA | Engineer | (TS/SCI)");
}

#[test]
fn test_rendering_is_idempotent() {
    let data = load(
        r#"{
            "name": "Ada",
            "skills": {"Languages": ["Rust", "Go"], "Cloud": "AWS"},
            "experiences": [{"company": "Acme", "title": "Engineer", "dates": "2020",
                             "bullets": [{"title": "Scale", "text": "Served users"}]}]
        }"#,
    );
    for profile in [StyleProfile::basic(), StyleProfile::enhanced()] {
        assert_eq!(render(&data, &profile), render(&data, &profile));
    }
}

#[test]
fn test_batch_matches_single_renders() {
    let resumes: Vec<ResumeData> = (0..8).map(|i| ResumeData::new(format!("Person {i}"))).collect();
    let profile = StyleProfile::enhanced();

    let batch = render_batch(&resumes, &profile);
    assert_eq!(batch.len(), resumes.len());
    for (doc, data) in batch.iter().zip(&resumes) {
        assert_eq!(doc, &render(data, &profile));
    }
}

#[test]
fn test_enhanced_fonts_cover_every_run() {
    let data = load(
        r#"{
            "name": "Ada",
            "title": "Engineer",
            "contact": {"location": "London", "email": "ada@example.com"},
            "summary": "Builds engines.",
            "skills": {"Languages": ["Rust"]},
            "experiences": [{"company": "Analytical", "title": "Lead", "dates": "1840",
                             "previousTitle": "Assistant", "previousDates": "1835",
                             "bullets": ["Notes: first program", {"title": "Scale", "text": "Bernoulli"}]}],
            "education": [{"school": "Home", "degree": "Tutoring", "year": 1830}]
        }"#,
    );

    let enhanced = render(&data, &StyleProfile::enhanced());
    let runs: Vec<_> = enhanced.blocks.iter().flat_map(|b| &b.runs).collect();
    assert!(runs.len() > 20);
    for run in &runs {
        assert!(run.compat_fonts, "run {:?} lacks the font override", run.text);
    }

    let basic = render(&data, &StyleProfile::basic());
    assert!(basic.blocks.iter().flat_map(|b| &b.runs).all(|r| !r.compat_fonts));
}
