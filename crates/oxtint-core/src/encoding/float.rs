//! Clamped floating-point encodings (0.0-1.0)

use super::{ColorEncoding, Encoding};

/// Single-precision component clamped to 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Float;

/// Double-precision component clamped to 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Double;

const fn float_levels() -> [f32; 256] {
    let mut table = [0.0f32; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as f32 / 255.0;
        i += 1;
    }
    table
}

impl Encoding for Float {
    type Value = f32;

    const NAME: &'static str = "float";
    const MIN: f32 = 0.0;
    const MAX: f32 = 1.0;

    #[inline]
    fn from_f64_clamped(v: f64) -> f32 {
        if v.is_nan() {
            Self::MIN
        } else {
            v.clamp(0.0, 1.0) as f32
        }
    }

    #[inline]
    fn add(u: f32, v: f32) -> f32 {
        Self::range().clamp(u + v)
    }

    #[inline]
    fn subtract(u: f32, v: f32) -> f32 {
        Self::range().clamp(u - v)
    }

    #[inline]
    fn invert(v: f32) -> f32 {
        Self::MAX - v
    }
}

impl ColorEncoding for Float {
    const SUFFIX: &'static str = "f";
    const LEVELS: [f32; 256] = float_levels();
}

impl Encoding for Double {
    type Value = f64;

    const NAME: &'static str = "double";
    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;

    #[inline]
    fn from_f64_clamped(v: f64) -> f64 {
        Self::range().clamp(v)
    }

    #[inline]
    fn add(u: f64, v: f64) -> f64 {
        Self::range().clamp(u + v)
    }

    #[inline]
    fn subtract(u: f64, v: f64) -> f64 {
        Self::range().clamp(u - v)
    }

    #[inline]
    fn invert(v: f64) -> f64 {
        Self::MAX - v
    }
}
