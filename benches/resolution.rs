// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the hot i18n paths.
//!
//! Measures the performance of:
//! - Locale resolution and path rewriting (run on every route change)
//! - Catalog key lookup and interpolation (run per rendered string)
//! - Typed record deserialization (run per list-shaped section)

use criterion::{criterion_group, criterion_main, Criterion};
use folio_intl::content::JobRecord;
use folio_intl::diagnostics::DiagnosticsLog;
use folio_intl::i18n::Catalog;
use folio_intl::locale::{resolve_locale, Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use folio_intl::route::{switch_path, Route};
use std::hint::black_box;
use std::path::PathBuf;

/// Load the embedded Vietnamese catalog from the source tree.
fn vietnamese_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/i18n/vi.json");
    let bytes = std::fs::read(path).unwrap();
    Catalog::from_bytes(Locale::Vi, &bytes, DiagnosticsLog::default()).unwrap()
}

/// Benchmark the pure routing functions.
fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    group.bench_function("resolve_locale_hit", |b| {
        b.iter(|| {
            black_box(resolve_locale(
                black_box("/en/experience"),
                SUPPORTED_LOCALES,
                DEFAULT_LOCALE,
            ));
        });
    });

    group.bench_function("resolve_locale_fallback", |b| {
        b.iter(|| {
            black_box(resolve_locale(
                black_box("/fr/some/deep/path"),
                SUPPORTED_LOCALES,
                DEFAULT_LOCALE,
            ));
        });
    });

    group.bench_function("switch_path", |b| {
        b.iter(|| {
            black_box(switch_path(
                black_box("/vi/experience"),
                Locale::En,
                SUPPORTED_LOCALES,
            ));
        });
    });

    group.bench_function("route_parse", |b| {
        b.iter(|| {
            black_box(Route::parse(black_box("/vi/contact")));
        });
    });

    group.finish();
}

/// Benchmark catalog lookups through a namespace handle.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let catalog = vietnamese_catalog();

    group.bench_function("tr_shallow", |b| {
        let nav = catalog.section("nav");
        b.iter(|| {
            black_box(nav.tr(black_box("home")));
        });
    });

    group.bench_function("tr_nested", |b| {
        let form = catalog.section("contact.form");
        b.iter(|| {
            black_box(form.tr(black_box("message_placeholder")));
        });
    });

    group.bench_function("tr_with_interpolation", |b| {
        let hero = catalog.section("hero");
        b.iter(|| {
            black_box(hero.tr_with(black_box("greeting"), &[("name", "Hoài Thư")]));
        });
    });

    group.finish();
}

/// Benchmark typed deserialization of list-shaped content.
fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let catalog = vietnamese_catalog();

    group.bench_function("job_records", |b| {
        let experience = catalog.section("experience");
        b.iter(|| {
            let jobs = experience.records::<JobRecord>("jobs");
            black_box(jobs);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_lookup, bench_records);
criterion_main!(benches);
