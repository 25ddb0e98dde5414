use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;
use survey_insights::distribution::compute_distribution;
use survey_insights::utils::filter_non_missing;
use survey_insights::DistributionOptions;

const LANGUAGES: &[&str] = &[
    "Python", "Java", "C++", "Rust", "Go", "JavaScript", "TypeScript", "C#", "Kotlin", "SQL",
];

/// Synthetic survey: every 7th answer missing, 1-4 selections otherwise
fn synthetic_survey(rows: usize) -> DataFrame {
    let answers: Vec<Option<String>> = (0..rows)
        .map(|i| {
            if i % 7 == 0 {
                return None;
            }
            let picks = 1 + i % 4;
            let tokens: Vec<&str> = (0..picks)
                .map(|k| LANGUAGES[(i * 3 + k * 5) % LANGUAGES.len()])
                .collect();
            Some(tokens.join(";"))
        })
        .collect();

    DataFrame::new(vec![Column::new("languages".into(), answers)]).unwrap()
}

fn bench_distribution(c: &mut Criterion) {
    let df = synthetic_survey(50_000);
    let options = DistributionOptions::default();

    c.bench_function("filter_and_distribution_50k", |b| {
        b.iter(|| {
            let filtered = filter_non_missing(black_box(&df), "languages").unwrap();
            compute_distribution(&filtered, "languages", &options).unwrap()
        })
    });
}

criterion_group!(benches, bench_distribution);
criterion_main!(benches);
