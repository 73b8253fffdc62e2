//! Benchmarks for resume rendering and packaging.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_docx::{render, render_batch, to_docx_bytes, Bullet, Experience, ResumeData, StyleProfile};

/// Creates a synthetic resume with the given number of jobs.
fn create_test_resume(job_count: usize) -> ResumeData {
    let mut data = ResumeData::new("Bench Mark");
    data.title = Some("Staff Engineer".to_string());
    data.summary = Some("Benchmark summary paragraph for render timing.".to_string());
    data.skills.insert(
        "Languages".to_string(),
        vec!["Rust".to_string(), "Go".to_string(), "Python".to_string()],
    );

    for i in 0..job_count {
        let mut job = Experience::new(format!("Company {}", i), Some("Engineer"), "2020 - 2023");
        job.bullets = (0..5)
            .map(|j| Bullet::text(format!("Item {}: delivered result number {}", j, i * 5 + j)))
            .collect();
        data.experiences.push(job);
    }

    data
}

/// Benchmark rendering at various sizes.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for job_count in [1, 5, 20].iter() {
        let data = create_test_resume(*job_count);

        group.bench_function(format!("{}_jobs_basic", job_count), |b| {
            let profile = StyleProfile::basic();
            b.iter(|| render(black_box(&data), &profile));
        });
        group.bench_function(format!("{}_jobs_enhanced", job_count), |b| {
            let profile = StyleProfile::enhanced();
            b.iter(|| render(black_box(&data), &profile));
        });
    }

    group.finish();
}

/// Benchmark the full DOCX package.
fn bench_docx(c: &mut Criterion) {
    let data = create_test_resume(5);
    let profile = StyleProfile::enhanced();

    c.bench_function("docx_5_jobs", |b| {
        b.iter(|| to_docx_bytes(black_box(&data), &profile).unwrap());
    });
}

/// Benchmark parallel batch rendering.
fn bench_batch(c: &mut Criterion) {
    let resumes: Vec<ResumeData> = (0..32).map(|_| create_test_resume(5)).collect();
    let profile = StyleProfile::basic();

    c.bench_function("batch_32_resumes", |b| {
        b.iter(|| render_batch(black_box(&resumes), &profile));
    });
}

criterion_group!(benches, bench_render, bench_docx, bench_batch);
criterion_main!(benches);
