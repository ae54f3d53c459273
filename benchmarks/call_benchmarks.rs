#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Routed call rendering benchmarks
use criterion::{Criterion, criterion_group, criterion_main};
use routecall::{FixedToken, RandomTokens, RoutedCall};
use std::hint::black_box;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let call = RoutedCall::get("/users/42/posts?page=3&sort=recent").with_fragment("comments");

    group.bench_function("path", |b| {
        b.iter(|| black_box(&call).path());
    });

    group.bench_function("absolute_url", |b| {
        b.iter(|| black_box(&call).absolute_url(true, black_box("example.com:8443")));
    });

    group.bench_function("web_socket_url", |b| {
        b.iter(|| black_box(&call).web_socket_url(true, black_box("example.com:8443")));
    });

    group.finish();
}

fn bench_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique");
    let without_query = RoutedCall::get("/assets/app.css");
    let with_query = RoutedCall::get("/assets/app.css?v=12");

    group.bench_function("random_without_query", |b| {
        b.iter(|| black_box(&without_query).unique_with(&RandomTokens));
    });

    group.bench_function("random_with_query", |b| {
        b.iter(|| black_box(&with_query).unique_with(&RandomTokens));
    });

    group.bench_function("fixed", |b| {
        b.iter(|| black_box(&with_query).unique_with(&FixedToken(i64::MIN)));
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_unique);
criterion_main!(benches);
