//! Benchmarks for document composition and export.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reportkit::compose::Composer;
use reportkit::content::compose_customer_stories;
use reportkit::{flow, render, store, RenderOptions, Theme};

fn bench_compose(c: &mut Criterion) {
    let theme = Theme::default();

    c.bench_function("compose_overview", |b| {
        b.iter(|| flow::overview_document(black_box(&theme)).unwrap())
    });

    let base = flow::overview_document(&theme).unwrap();
    c.bench_function("append_customer_stories", |b| {
        b.iter(|| {
            let mut doc = base.clone();
            compose_customer_stories(&mut Composer::new(&mut doc, &theme)).unwrap();
            doc
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::default();
    let mut doc = flow::overview_document(&theme).unwrap();
    compose_customer_stories(&mut Composer::new(&mut doc, &theme)).unwrap();
    let options = RenderOptions::default();

    c.bench_function("container_encode", |b| {
        b.iter(|| store::to_bytes(black_box(&doc)).unwrap())
    });

    let bytes = store::to_bytes(&doc).unwrap();
    c.bench_function("container_decode", |b| {
        b.iter(|| store::from_bytes(black_box(&bytes)).unwrap())
    });

    c.bench_function("render_markdown", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap())
    });

    c.bench_function("render_docx", |b| {
        b.iter(|| render::to_docx(black_box(&doc)).unwrap())
    });
}

criterion_group!(benches, bench_compose, bench_render);
criterion_main!(benches);
