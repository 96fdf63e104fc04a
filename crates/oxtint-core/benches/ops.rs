//! Color operation benchmarks
//!
//! Scalar per-value calls against the multiversioned batch kernels.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxtint_core::{RGBAb, RGBAf, Rgba, batch, brighten, lineary_interpolate, pixels};

fn generate_rgba8_data(count: usize) -> Vec<u8> {
    (0..count * 4).map(|i| ((i * 37) % 256) as u8).collect()
}

fn generate_rgbaf_data(count: usize) -> Vec<RGBAf> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            RGBAf::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0, 1.0).unwrap()
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    let byte = RGBAb::mauve();
    let float = RGBAf::mauve();

    group.bench_function("brighten_rgbab", |b| {
        b.iter(|| brighten(black_box(byte), black_box(0.25)))
    });
    group.bench_function("brighten_rgbaf", |b| {
        b.iter(|| brighten(black_box(float), black_box(0.25)))
    });
    group.bench_function("lerp_rgbaf", |b| {
        b.iter(|| lineary_interpolate(black_box(float), black_box(RGBAf::white()), black_box(0.3)))
    });
    group.bench_function("convert_rgbab_to_rgbaf", |b| {
        b.iter(|| RGBAf::convert_from(black_box(byte)))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100, 1000, 10000, 100000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        let mut bytes = generate_rgba8_data(*size);
        group.bench_with_input(BenchmarkId::new("invert_rgbab", size), size, |b, _| {
            b.iter(|| {
                let colors = pixels::cast_pixels_mut::<Rgba>(&mut bytes).unwrap();
                batch::invert_batch(black_box(colors));
            })
        });

        let floats = generate_rgbaf_data(*size);
        let mut work = floats.clone();
        group.bench_with_input(BenchmarkId::new("brighten_rgbaf", size), size, |b, _| {
            b.iter(|| {
                work.copy_from_slice(&floats);
                batch::brighten_batch(black_box(&mut work), 0.25);
            })
        });

        let mut out = vec![RGBAf::default(); *size];
        group.bench_with_input(BenchmarkId::new("lerp_rgbaf", size), size, |b, _| {
            b.iter(|| batch::lerp_batch(black_box(&floats), black_box(&work), 0.5, &mut out))
        });

        let mut converted = vec![RGBAb::default(); *size];
        group.bench_with_input(BenchmarkId::new("convert_rgbaf_to_rgbab", size), size, |b, _| {
            b.iter(|| batch::convert_batch(black_box(&floats), &mut converted))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
