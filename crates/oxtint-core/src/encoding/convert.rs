//! Conversions between encodings
//!
//! Only the documented pairs exist: Byte <-> Float and Byte <-> Double.
//! Any other pair fails to compile:
//!
//! ```compile_fail
//! use oxtint_core::encoding::{convert, Double, Float};
//!
//! let v = convert::<Float, Double>(0.5);
//! ```

use super::{Byte, Double, Encoding, Float};

/// Conversion of a single component value from encoding `Src`
pub trait ConvertFrom<Src: Encoding>: Encoding {
    /// Convert `v` into this encoding
    fn convert(v: Src::Value) -> Self::Value;
}

/// Convert a component value from encoding `S` to encoding `T`
#[inline]
pub fn convert<T, S>(v: S::Value) -> T::Value
where
    T: ConvertFrom<S>,
    S: Encoding,
{
    T::convert(v)
}

impl ConvertFrom<Byte> for Float {
    #[inline]
    fn convert(v: u8) -> f32 {
        f32::from(v) / 255.0
    }
}

impl ConvertFrom<Float> for Byte {
    #[inline]
    fn convert(v: f32) -> u8 {
        Byte::from_f64_clamped(f64::from(v) * 255.0)
    }
}

impl ConvertFrom<Byte> for Double {
    #[inline]
    fn convert(v: u8) -> f64 {
        f64::from(v) / 255.0
    }
}

impl ConvertFrom<Double> for Byte {
    #[inline]
    fn convert(v: f64) -> u8 {
        Byte::from_f64_clamped(v * 255.0)
    }
}
