//! Numeric encodings for color components
//!
//! An encoding fixes the storage type of a component, its inclusive valid
//! range, and the primitive operations the color layer builds on:
//! - saturating `add` / `subtract` (clamp, never wrap)
//! - `scale` (multiply, then clamp)
//! - `invert` (`max - v`)
//! - `lerp` (mix, then clamp)
//!
//! Only [`Byte`] and [`Float`] are [`ColorEncoding`]s. [`Double`] exists at
//! this layer for callers that need a wider intermediate format.

mod byte;
mod convert;
mod float;

use std::fmt;

pub use byte::Byte;
pub use convert::{ConvertFrom, convert};
pub use float::{Double, Float};

/// Inclusive range of valid component values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<V> {
    /// Smallest valid value
    pub min: V,
    /// Largest valid value
    pub max: V,
}

impl<V: Copy + PartialOrd> Range<V> {
    /// Create a new range
    #[inline]
    pub const fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    /// Check if `v` lies within the range (NaN never does)
    #[inline]
    pub fn contains(&self, v: V) -> bool {
        v >= self.min && v <= self.max
    }

    /// Check if `v` lies outside the range
    #[inline]
    pub fn outside(&self, v: V) -> bool {
        !self.contains(v)
    }

    /// Clamp `v` into the range; unordered values (NaN) map to `min`
    #[inline]
    pub fn clamp(&self, v: V) -> V {
        if v > self.max {
            self.max
        } else if v >= self.min {
            v
        } else {
            self.min
        }
    }
}

/// A numeric component encoding
pub trait Encoding: Copy + Send + Sync + 'static {
    /// Storage type of one component
    type Value: Copy
        + PartialEq
        + PartialOrd
        + fmt::Debug
        + fmt::Display
        + Into<f64>
        + Send
        + Sync
        + 'static;

    /// Human-readable encoding name
    const NAME: &'static str;
    /// Smallest valid value
    const MIN: Self::Value;
    /// Largest valid value
    const MAX: Self::Value;

    /// Valid range of this encoding
    #[inline]
    fn range() -> Range<Self::Value> {
        Range::new(Self::MIN, Self::MAX)
    }

    /// Map an arbitrary real number to the nearest valid value
    ///
    /// NaN maps to `MIN`.
    fn from_f64_clamped(v: f64) -> Self::Value;

    /// Saturating addition
    fn add(u: Self::Value, v: Self::Value) -> Self::Value;

    /// Saturating subtraction
    fn subtract(u: Self::Value, v: Self::Value) -> Self::Value;

    /// Multiply by `factor`, then clamp to the range
    #[inline]
    fn scale(v: Self::Value, factor: f64) -> Self::Value {
        Self::from_f64_clamped(v.into() * factor)
    }

    /// Mirror `v` within the range (`max - v` for a zero-based range)
    fn invert(v: Self::Value) -> Self::Value;

    /// Linear mix `x * (1 - mu) + y * mu`, clamped to the range
    ///
    /// `mu` is not validated: values outside [0, 1] extrapolate and the
    /// result saturates at the range bounds.
    #[inline]
    fn lerp(x: Self::Value, y: Self::Value, mu: f64) -> Self::Value {
        Self::from_f64_clamped(x.into() * (1.0 - mu) + y.into() * mu)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// An encoding usable by color values
///
/// Implemented by [`Byte`] and [`Float`] only.
pub trait ColorEncoding: Encoding + sealed::Sealed {
    /// Suffix used in color space names (`RGBAb`, `RGBAf`)
    const SUFFIX: &'static str;

    /// The 256 byte levels expressed in this encoding
    ///
    /// Named color constants are built from this table at compile time.
    const LEVELS: [Self::Value; 256];
}

impl sealed::Sealed for Byte {}
impl sealed::Sealed for Float {}
