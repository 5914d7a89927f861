use criterion::{criterion_group, criterion_main, Criterion};
use harness_relay::args::parse_args;
use harness_relay::filter::parse_filter_lines;
use std::fmt::Write;

/// Builds a synthetic filter file: alternating positive/negative tokens with
/// interleaved comments and blank lines.
fn synthetic_filter_file(lines: usize) -> String {
    let mut contents = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => writeln!(contents, "suite{i}.Case{i}").unwrap(),
            1 => writeln!(contents, "-suite{i}.SlowCase{i} # skipped").unwrap(),
            2 => writeln!(contents, "# a comment line").unwrap(),
            _ => writeln!(contents).unwrap(),
        }
    }
    contents
}

fn bench_parse_filter_lines(c: &mut Criterion) {
    let contents = synthetic_filter_file(2000);

    c.bench_function("parse_filter_lines", |b| {
        b.iter(|| parse_filter_lines(&contents));
    });
}

fn bench_parse_args(c: &mut Criterion) {
    let mut argv = Vec::new();
    for i in 0..200 {
        argv.push("--gtest-filter".to_string());
        argv.push(format!("suite{i}.Case{i}"));
        argv.push("--package-filter".to_string());
        argv.push(format!("org.example.pkg{i}"));
    }
    argv.push("--json-config".to_string());
    argv.push("cfg.json".to_string());

    c.bench_function("parse_args", |b| {
        b.iter(|| parse_args(&argv).unwrap());
    });
}

criterion_group!(benches, bench_parse_filter_lines, bench_parse_args);
criterion_main!(benches);
