// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use page_i18n::config::Config;
use page_i18n::i18n::{resolve_active_locale, LocaleTag, TranslationRegistry};
use std::hint::black_box;

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let mut registry = TranslationRegistry::from_config(&Config::default());
    registry.set_active_locale(LocaleTag::default());

    group.bench_function("active_hit", |b| {
        b.iter(|| black_box(registry.lookup(black_box("TAGLINE"))));
    });

    group.bench_function("placeholder_miss", |b| {
        b.iter(|| black_box(registry.lookup(black_box("NOT_A_KEY"))));
    });

    let supported = registry.locales();
    let default = LocaleTag::default();
    group.bench_function("resolve_regional_tag", |b| {
        b.iter(|| black_box(resolve_active_locale(&[black_box("es-MX")], &supported, &default)));
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
