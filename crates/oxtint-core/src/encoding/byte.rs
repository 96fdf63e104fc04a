//! 8-bit unsigned encoding (0-255)

use super::{ColorEncoding, Encoding};

/// 8-bit unsigned component, range 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Byte;

const fn byte_levels() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
}

impl Encoding for Byte {
    type Value = u8;

    const NAME: &'static str = "byte";
    const MIN: u8 = 0;
    const MAX: u8 = u8::MAX;

    #[inline]
    fn from_f64_clamped(v: f64) -> u8 {
        if v.is_nan() {
            Self::MIN
        } else {
            v.round().clamp(0.0, 255.0) as u8
        }
    }

    #[inline]
    fn add(u: u8, v: u8) -> u8 {
        u.saturating_add(v)
    }

    #[inline]
    fn subtract(u: u8, v: u8) -> u8 {
        u.saturating_sub(v)
    }

    #[inline]
    fn invert(v: u8) -> u8 {
        Self::MAX - v
    }
}

impl ColorEncoding for Byte {
    const SUFFIX: &'static str = "b";
    const LEVELS: [u8; 256] = byte_levels();
}
