//! Test pattern generation
//!
//! Byte patterns are interleaved RGBA8 buffers; float patterns are
//! generated directly as `RGBAf` values. All random patterns are seeded.

use oxtint_core::{RGBAb, RGBAf, Rgba, pixels};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Grey ramp 0-255, opaque
    Grayscale,
    /// Alpha ramp 0-255 over white
    AlphaRamp,
    /// RGB cube corners, opaque (8 colors)
    ColorCube,
    /// The named colors
    Named,
    /// Random pixels with seed
    Random(u64),
}

/// Generate a test pattern as an RGBA8 buffer of `count` pixels
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<u8> {
    let mut data = vec![0u8; count * 4];

    match pattern {
        TestPattern::Grayscale => {
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                let v = (i % 256) as u8;
                chunk.copy_from_slice(&[v, v, v, 255]);
            }
        }
        TestPattern::AlphaRamp => {
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                chunk.copy_from_slice(&[255, 255, 255, (i % 256) as u8]);
            }
        }
        TestPattern::ColorCube => {
            let corners: [[u8; 4]; 8] = [
                [0, 0, 0, 255],
                [255, 0, 0, 255],
                [0, 255, 0, 255],
                [0, 0, 255, 255],
                [255, 255, 0, 255],
                [255, 0, 255, 255],
                [0, 255, 255, 255],
                [255, 255, 255, 255],
            ];
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                chunk.copy_from_slice(&corners[i % 8]);
            }
        }
        TestPattern::Named => {
            let named = named_colors();
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                chunk.copy_from_slice(named[i % named.len()].as_slice());
            }
        }
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.fill_bytes(&mut data);
        }
    }

    data
}

/// Generate a pattern as byte colors
pub fn generate_colors(pattern: TestPattern, count: usize) -> Vec<RGBAb> {
    let data = generate_pattern(pattern, count);
    pixels::cast_pixels::<Rgba>(&data)
        .map(<[RGBAb]>::to_vec)
        .unwrap_or_default()
}

/// Every named RGBA color
pub fn named_colors() -> [RGBAb; 11] {
    [
        RGBAb::red(),
        RGBAb::green(),
        RGBAb::blue(),
        RGBAb::white(),
        RGBAb::black(),
        RGBAb::cyan(),
        RGBAb::magenta(),
        RGBAb::yellow(),
        RGBAb::mauve(),
        RGBAb::purple(),
        RGBAb::grey(),
    ]
}

/// Random float colors, every component uniform in [0, 1]
pub fn random_float_colors(seed: u64, count: usize) -> Vec<RGBAf> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            RGBAf::try_from_slice(&[
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            ])
            .unwrap_or_default()
        })
        .collect()
}

/// Random factors in `range`, for brighten/darken and interpolation
pub fn random_factors(seed: u64, count: usize, range: std::ops::RangeInclusive<f64>) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(range.clone())).collect()
}
