//! LA: luminance plus alpha

use super::{Color, level};
use crate::encoding::ColorEncoding;
use crate::error::Result;
use crate::space::LumaAlpha;

impl<E: ColorEncoding> Color<LumaAlpha, E> {
    /// Create from raw values
    ///
    /// Luminance is checked before alpha; the first failure is reported.
    #[track_caller]
    pub fn new(l: E::Value, a: E::Value) -> Result<Self> {
        Self::validated([l, a])
    }

    pub const fn black() -> Self {
        Self::from_storage([E::MIN, E::MAX])
    }

    pub const fn grey() -> Self {
        Self::from_storage([level::<E>(75), E::MAX])
    }

    pub const fn white() -> Self {
        Self::from_storage([E::MAX, E::MAX])
    }
}

impl<E: ColorEncoding> Default for Color<LumaAlpha, E> {
    /// Opaque black
    fn default() -> Self {
        Self::black()
    }
}
