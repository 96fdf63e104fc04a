//! L: luminance-only colors

use super::{Color, level};
use crate::encoding::ColorEncoding;
use crate::error::Result;
use crate::space::Luma;

impl<E: ColorEncoding> Color<Luma, E> {
    /// Create a luminance value, failing with `OutOfBounds` outside the range
    #[track_caller]
    pub fn new(l: E::Value) -> Result<Self> {
        Self::validated([l])
    }

    pub const fn black() -> Self {
        Self::from_storage([E::MIN])
    }

    pub const fn white() -> Self {
        Self::from_storage([E::MAX])
    }

    /// Byte level 75, kept for compatibility (not a perceptual mid-grey)
    pub const fn grey() -> Self {
        Self::from_storage([level::<E>(75)])
    }
}

impl<E: ColorEncoding> Default for Color<Luma, E> {
    /// Black
    fn default() -> Self {
        Self::black()
    }
}
