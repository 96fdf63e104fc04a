//! RGBA colors
//!
//! Named colors (`red()`, `mauve()`, ...) are generated alongside RGB's in
//! [`rgb`](super::rgb) and are all opaque.

use super::Color;
use crate::encoding::ColorEncoding;
use crate::error::Result;
use crate::space::{LumaAlpha, Rgba};

impl<E: ColorEncoding> Color<Rgba, E> {
    /// Create from raw values
    ///
    /// Checked in red, green, blue, alpha order; the first failure is
    /// reported.
    #[track_caller]
    pub fn new(r: E::Value, g: E::Value, b: E::Value, a: E::Value) -> Result<Self> {
        Self::validated([r, g, b, a])
    }

    /// Replicate luminance into r, g, b and keep alpha
    #[inline]
    pub fn from_luma_alpha(luma_alpha: Color<LumaAlpha, E>) -> Self {
        let [l, a] = luma_alpha.components;
        Self::from_storage([l, l, l, a])
    }

    /// Transparent black
    pub const fn transparent() -> Self {
        Self::from_storage([E::MIN, E::MIN, E::MIN, E::MIN])
    }

    /// Opaque black
    pub const fn opaque() -> Self {
        Self::from_storage([E::MIN, E::MIN, E::MIN, E::MAX])
    }
}

impl<E: ColorEncoding> Default for Color<Rgba, E> {
    /// Opaque black
    fn default() -> Self {
        Self::opaque()
    }
}
