use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nextsem::prelude::*;

fn version_inputs() -> Vec<&'static str> {
    vec![
        "1.2.3",
        "1.2.3-0",
        "1.2.3-alpha.10.0.beta",
        "1.0.0-rc.1+build.5114f85",
        "10.20.30-x-y-z.--+exp.sha",
    ]
}

fn parse_ok(inputs: &[&str]) {
    for input in inputs {
        let res = input.parse::<Version>();
        assert!(res.is_ok());
    }
}

fn increment_all(versions: &[Version], options: &IncrementOptions) {
    for version in versions {
        for release_type in ReleaseType::ALL {
            let next = version.increment(release_type, options);
            black_box(next);
        }
    }
}

fn format_all(versions: &[Version]) {
    for version in versions {
        black_box(version.to_string());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let versions: Vec<Version> = version_inputs()
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let no_base = IncrementOptions::new();
    let with_base = IncrementOptions::new().with_prerelease_base("alpha").with_build("");

    c.bench_function("parse_ok", |b| b.iter(|| parse_ok(black_box(&version_inputs()))));
    c.bench_function("increment_no_base", |b| {
        b.iter(|| increment_all(black_box(&versions), black_box(&no_base)))
    });
    c.bench_function("increment_with_base", |b| {
        b.iter(|| increment_all(black_box(&versions), black_box(&with_base)))
    });
    c.bench_function("format", |b| b.iter(|| format_all(black_box(&versions))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
