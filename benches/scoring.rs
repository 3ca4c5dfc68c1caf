//! Performance measurement for the two per-image scoring primitives

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use hybridcollage::analysis::descriptor::edge_descriptor;
use hybridcollage::analysis::histogram::rgb_histogram;
use hybridcollage::math::statistics::{chebyshev_distance, variance};
use image::{Rgb, RgbImage};
use std::hint::black_box;

fn synthetic(width: u32, height: u32, period: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let shade = (((x / period + y / period) % 2) * 200 + x % 55) as u8;
        Rgb([shade, shade.wrapping_add(40), shade.wrapping_add(80)])
    })
}

/// Measures descriptor extraction plus variance for a typical photo size
fn bench_edge_variance(c: &mut Criterion) {
    let image = synthetic(320, 240, 6);

    c.bench_function("edge_variance_320x240", |b| {
        b.iter(|| {
            let descriptor =
                edge_descriptor("bench.jpg", black_box(&image)).unwrap_or_default();
            let values: Vec<f64> = descriptor.iter().map(|&v| f64::from(v)).collect();
            black_box(variance(&values));
        });
    });
}

/// Measures histogram extraction and the Chebyshev comparison
fn bench_histogram_distance(c: &mut Criterion) {
    let reference = rgb_histogram(&synthetic(320, 240, 6));
    let image = synthetic(240, 320, 9);

    c.bench_function("histogram_chebyshev_240x320", |b| {
        b.iter(|| {
            let histogram = rgb_histogram(black_box(&image));
            black_box(chebyshev_distance(&reference, &histogram));
        });
    });
}

criterion_group!(benches, bench_edge_variance, bench_histogram_distance);
criterion_main!(benches);
