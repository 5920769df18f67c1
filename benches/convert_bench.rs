//! Benchmarks for po2lmo hashing, parsing and encoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use po2lmo::{lmo, po, sfh_hash, Config};

/// A synthetic catalog of `count` entries with continuations and escapes
fn synthetic_po(count: usize) -> String {
    let mut out = String::from("msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n\n");
    for i in 0..count {
        out.push_str(&format!(
            "#: src/view_{i}.js:{i}\nmsgid \"Label number {i}\\n\"\n\"with continuation\"\nmsgstr \"Beschriftung Nummer {i}\\t(übersetzt)\"\n\n"
        ));
    }
    out
}

fn hash_benchmarks(c: &mut Criterion) {
    let short = b"Save";
    let long = "Dies ist eine lange Beschreibung, die über mehrere Zeilen verteilt ist.".repeat(8);

    c.bench_function("sfh_hash/short", |b| b.iter(|| sfh_hash(black_box(short))));
    c.bench_function("sfh_hash/long", |b| {
        b.iter(|| sfh_hash(black_box(long.as_bytes())))
    });
}

fn convert_benchmarks(c: &mut Criterion) {
    let source = synthetic_po(5_000);
    let catalog = po::parse_str(&source).unwrap();
    let config = Config::default();

    c.bench_function("parse/5000", |b| {
        b.iter(|| po::parse_str(black_box(&source)).unwrap())
    });
    c.bench_function("encode/5000", |b| {
        b.iter(|| lmo::encode(black_box(&catalog), &config).unwrap())
    });
}

criterion_group!(benches, hash_benchmarks, convert_benchmarks);
criterion_main!(benches);
