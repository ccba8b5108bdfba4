use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use logmend::batch::process_batch;
use logmend::config::Config;
use logmend::normalize::clean_message;
use logmend::parser::parse_line;

/// Build a realistic batch: mostly valid lines, some needing the
/// cluster repair, a few unparseable.
fn make_batch(lines: usize) -> String {
    let mut out = Vec::with_capacity(lines);
    for i in 0..lines {
        match i % 10 {
            9 => out.push("not a json line".to_string()),
            7 | 8 => out.push(format!(
                r#"{{"time":{},"msg":"job done::req{} ok","cluster":{},"level":"info"}}"#,
                (i * 7919) % 1_000_000,
                i,
                i % 2
            )),
            _ => out.push(format!(
                r#"{{"time":{},"msg":"job done::req{} ok","cluster":"{}","level":"info","data":{{"seq":{}}}}}"#,
                (i * 7919) % 1_000_000,
                i,
                i % 8,
                i
            )),
        }
    }
    out.join("\n")
}

fn bench_parse_line(c: &mut Criterion) {
    let valid = r#"{"time":1700000000000,"msg":"ok","cluster":"3","level":"info"}"#;
    let repairable = r#"{"time":1700000000000,"msg":"ok","cluster":0,"level":"info"}"#;

    c.bench_function("parse_line_strict", |b| {
        b.iter(|| black_box(parse_line(black_box(valid), 1)));
    });
    c.bench_function("parse_line_repaired", |b| {
        b.iter(|| black_box(parse_line(black_box(repairable), 1)));
    });
}

fn bench_clean_message(c: &mut Criterion) {
    let message = "request finished::req42::trace9 in 12ms";
    c.bench_function("clean_message", |b| {
        b.iter(|| black_box(clean_message(black_box(message))));
    });
}

fn bench_process_batch(c: &mut Criterion) {
    let input = make_batch(10_000);

    let mut single = Config::default();
    single.performance.threads = 1;
    let parallel = Config::default();

    c.bench_function("process_batch_10k_single", |b| {
        b.iter(|| black_box(process_batch(black_box(&input), &single).unwrap()));
    });
    c.bench_function("process_batch_10k_parallel", |b| {
        b.iter(|| black_box(process_batch(black_box(&input), &parallel).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_parse_line,
    bench_clean_message,
    bench_process_batch
);
criterion_main!(benches);
