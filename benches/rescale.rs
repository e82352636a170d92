// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_peek::domain::image::{BitmapSize, ColorModel, SourceImage};
use iced_peek::viewport::render;
use std::hint::black_box;

fn gradient(width: u32, height: u32) -> SourceImage {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128, 255]);
        }
    }
    SourceImage::from_rgba(BitmapSize::new(width, height), pixels, 24, ColorModel::Rgb)
        .expect("valid buffer")
}

fn rescale_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescale");
    let source = gradient(1920, 1080);

    // Zoom steps around literal size plus a typical fit-to-window shrink.
    for (label, target) in [
        ("fit_960", BitmapSize::new(960, 540)),
        ("zoom_out_0.8", BitmapSize::new(1536, 864)),
        ("zoom_in_1.25", BitmapSize::new(2400, 1350)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &target, |b, &target| {
            b.iter(|| black_box(render::rescale(&source, target)));
        });
    }

    group.finish();
}

criterion_group!(benches, rescale_benchmark);
criterion_main!(benches);
