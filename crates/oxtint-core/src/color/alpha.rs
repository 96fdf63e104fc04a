//! A: alpha-only colors

use super::Color;
use crate::encoding::ColorEncoding;
use crate::error::Result;
use crate::space::Alpha;

impl<E: ColorEncoding> Color<Alpha, E> {
    /// Create an opacity value, failing with `OutOfBounds` outside the range
    #[track_caller]
    pub fn new(a: E::Value) -> Result<Self> {
        Self::validated([a])
    }

    /// Fully transparent (`a = min`)
    pub const fn transparent() -> Self {
        Self::from_storage([E::MIN])
    }

    /// Fully opaque (`a = max`)
    pub const fn opaque() -> Self {
        Self::from_storage([E::MAX])
    }
}

impl<E: ColorEncoding> Default for Color<Alpha, E> {
    /// Opaque
    fn default() -> Self {
        Self::opaque()
    }
}
