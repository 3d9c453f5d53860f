//! Benchmarks for tint conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tint_color::adapt::adapt_rgb;
use tint_color::cam02::Cam02Conditions;
use tint_color::{gamut, profiles, stats, Color, Model, ViewingConditions};
use tint_math::Vec3;
use tint_transfer::TransferCurve;

fn device_colors(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            [255.0 * t, 255.0 * (1.0 - t), 255.0 * (0.5 + 0.5 * (t * 7.0).sin())]
        })
        .collect()
}

/// Benchmark transfer curve encode/decode.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        for (name, curve) in [
            ("srgb_decode", TransferCurve::Srgb),
            ("hlg_decode", TransferCurve::Hlg),
            ("gamma_2.2_decode", TransferCurve::Gamma(2.2)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &values, |b, v| {
                b.iter(|| v.iter().map(|&x| curve.decode(black_box(x))).collect::<Vec<_>>())
            });
        }

        group.bench_with_input(BenchmarkId::new("srgb_encode", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| TransferCurve::Srgb.encode(black_box(x)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark device RGB to each model family and back.
fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("models");
    let p = &profiles::SRGB;
    let colors = device_colors(1000);
    group.throughput(Throughput::Elements(colors.len() as u64));

    for model in [
        Model::Hsl,
        Model::Lab,
        Model::LchUv,
        Model::Hsluv,
        Model::Labk,
        Model::Labksl,
    ] {
        group.bench_with_input(BenchmarkId::new("roundtrip", model), &colors, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&rgb| Color::from_rgb(model, black_box(rgb), p).to_rgb(p))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark CIECAM02 forward and inverse.
fn bench_cam02(c: &mut Criterion) {
    let mut group = c.benchmark_group("cam02");
    let white = profiles::SRGB.white_xyz() * 100.0;
    let cond = Cam02Conditions::new(white, &ViewingConditions::default());
    let xyz = Vec3::new(19.31, 23.93, 10.14);
    let corr = cond.forward(xyz);

    group.bench_function("conditions", |b| {
        b.iter(|| Cam02Conditions::new(black_box(white), &ViewingConditions::default()))
    });
    group.bench_function("forward", |b| b.iter(|| cond.forward(black_box(xyz))));
    group.bench_function("from_jch", |b| {
        b.iter(|| cond.from_jch(black_box(corr.j), black_box(corr.c), black_box(corr.h)))
    });

    group.finish();
}

/// Benchmark the HSLuv gamut search.
fn bench_gamut(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamut");

    group.bench_function("max_chroma", |b| b.iter(|| gamut::max_chroma(black_box(55.0))));
    group.bench_function("max_chroma_for_hue", |b| {
        b.iter(|| gamut::max_chroma_for_hue(black_box(55.0), black_box(123.0)))
    });

    group.finish();
}

/// Benchmark adaptation and batch statistics.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [1000, 100000].iter() {
        let colors = device_colors(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("adapt_srgb_prophoto", size), &colors, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&rgb| adapt_rgb(black_box(rgb), &profiles::SRGB, &profiles::PROPHOTO_RGB))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("stats_sample_all", size), &colors, |b, v| {
            b.iter(|| stats::sample_all(black_box(v), &profiles::SRGB))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_models, bench_cam02, bench_gamut, bench_batch);
criterion_main!(benches);
