// Criterion benchmarks for the resume search filter

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resume_rag_client::core::filters::{filter_resumes, matches_query};
use resume_rag_client::models::ResumeSummary;

fn create_resumes(count: usize) -> Vec<ResumeSummary> {
    (0..count)
        .map(|i| ResumeSummary {
            name: format!("Candidate {} Resume {}.pdf", i % 97, i),
            filename: format!("candidate_{}.pdf", i),
        })
        .collect()
}

fn bench_matches_query(c: &mut Criterion) {
    c.bench_function("matches_query", |b| {
        b.iter(|| matches_query(black_box("Jane Doe - Senior Engineer.pdf"), black_box("SENIOR")));
    });
}

fn bench_filter_resumes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_resumes");

    for size in [100, 1_000, 10_000] {
        let resumes = create_resumes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &resumes, |b, resumes| {
            b.iter(|| filter_resumes(black_box(resumes), black_box("resume 4")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matches_query, bench_filter_resumes);
criterion_main!(benches);
