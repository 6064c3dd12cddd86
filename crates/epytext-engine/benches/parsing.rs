use criterion::{Criterion, criterion_group, criterion_main};
use epytext_engine::{ParseOptions, parse, render, to_html};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_docstring(50);
    let options = ParseOptions::unlimited();
    group.bench_function("parse", |b| {
        b.iter(|| {
            let outcome = parse(std::hint::black_box(&content), &options);
            std::hint::black_box(outcome);
        });
    });

    let nested = common::generate_nested_lists(60);
    group.bench_function("parse_nested_lists", |b| {
        b.iter(|| {
            let outcome = parse(std::hint::black_box(&nested), &options);
            std::hint::black_box(outcome);
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    let content = common::generate_docstring(50);
    let options = ParseOptions::unlimited();
    let document = parse(&content, &options).into_result().unwrap();
    group.bench_function("render", |b| {
        b.iter(|| {
            let html = render(std::hint::black_box(&document)).to_html_string();
            std::hint::black_box(html);
        });
    });

    group.bench_function("to_html", |b| {
        b.iter(|| {
            let html = to_html(std::hint::black_box(&content), &options);
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
