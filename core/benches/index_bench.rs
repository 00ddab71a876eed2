use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use tweetdex_core::tokenizer::tokenize;
use tweetdex_core::{intersect_sorted, IndexBuilder, IndexConfig};

const WORDS: &[&str] = &["stuttgart", "bahn", "streik", "heute", "wieder", "#s21", "zug", "verspätung"];

fn corpus(lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        let text: Vec<&str> = (0..12).map(|k| WORDS[(i * 7 + k * 3) % WORDS.len()]).collect();
        out.push_str(&format!("2017-01-01\t{i}\tuser\tname\t{}\n", text.join(" ")));
    }
    out
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus(1_000);
    c.bench_function("tokenize_corpus", |b| b.iter(|| tokenize(&text).count()));
}

fn bench_build(c: &mut Criterion) {
    let text = corpus(10_000);
    c.bench_function("build_10k_records", |b| {
        b.iter(|| {
            let mut builder = IndexBuilder::new(IndexConfig::default());
            builder.ingest_reader(Cursor::new(text.as_bytes())).unwrap();
            builder.finish()
        })
    });
}

fn bench_intersect(c: &mut Criterion) {
    let a: Vec<u64> = (0..100_000).step_by(2).collect();
    let b: Vec<u64> = (0..100_000).step_by(3).collect();
    c.bench_function("intersect_50k_33k", |bench| bench.iter(|| intersect_sorted(&a, &b)));
}

criterion_group!(benches, bench_tokenize, bench_build, bench_intersect);
criterion_main!(benches);
