//! Benchmarks for rewebp decode/encode steps.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use rewebp::{load_from_memory, EncoderConfig, Preset};
use std::hint::black_box;
use std::io::Cursor;

/// Generate a gradient image, encoded as PNG.
fn generate_gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            (((x + y) * 127) / (width + height).max(1)) as u8,
        ])
    });
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for &(width, height) in &[(64, 64), (256, 256), (512, 512)] {
        let png = generate_gradient_png(width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::new("png", format!("{}x{}", width, height)),
            &png,
            |b, png| {
                b.iter(|| load_from_memory(black_box(png)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &(width, height) in &[(64, 64), (256, 256), (512, 512)] {
        let source = load_from_memory(&generate_gradient_png(width, height)).unwrap();
        group.throughput(Throughput::Elements((width * height) as u64));

        for quality in [75.0, 95.0] {
            let config = EncoderConfig::new().quality(quality);
            group.bench_with_input(
                BenchmarkId::new(format!("q{}", quality), format!("{}x{}", width, height)),
                &source,
                |b, source| {
                    b.iter(|| config.encode(black_box(source)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");

    let source = load_from_memory(&generate_gradient_png(256, 256)).unwrap();
    group.throughput(Throughput::Elements(256 * 256));

    for preset in [
        Preset::Default,
        Preset::Photo,
        Preset::Picture,
        Preset::Drawing,
        Preset::Icon,
        Preset::Text,
    ] {
        let config = EncoderConfig::new().preset(preset).quality(95.0);
        group.bench_with_input(
            BenchmarkId::new("encode", format!("{:?}", preset)),
            &source,
            |b, source| {
                b.iter(|| config.encode(black_box(source)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_encode, bench_presets);
criterion_main!(benches);
