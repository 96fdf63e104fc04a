//! RGB colors and the named color table shared with RGBA

use super::{Color, level};
use crate::encoding::ColorEncoding;
use crate::error::Result;
use crate::space::{Luma, Rgb, Rgba};

impl<E: ColorEncoding> Color<Rgb, E> {
    /// Create from raw values
    ///
    /// Checked in red, green, blue order; the first failure is reported.
    #[track_caller]
    pub fn new(r: E::Value, g: E::Value, b: E::Value) -> Result<Self> {
        Self::validated([r, g, b])
    }

    /// Grey of the given luminance (`l` replicated into r, g, b)
    #[inline]
    pub fn from_luma(luma: Color<Luma, E>) -> Self {
        let [l] = luma.components;
        Self::from_storage([l, l, l])
    }
}

impl<E: ColorEncoding> Default for Color<Rgb, E> {
    /// Black
    fn default() -> Self {
        Self::black()
    }
}

/// Named colors as byte triples; RGBA gets the same names, opaque
macro_rules! named_colors {
    ($($name:ident = [$r:literal, $g:literal, $b:literal];)+) => {
        impl<E: ColorEncoding> Color<Rgb, E> {
            $(
                pub const fn $name() -> Self {
                    Self::from_storage([level::<E>($r), level::<E>($g), level::<E>($b)])
                }
            )+
        }

        impl<E: ColorEncoding> Color<Rgba, E> {
            $(
                pub const fn $name() -> Self {
                    Self::from_storage([level::<E>($r), level::<E>($g), level::<E>($b), E::MAX])
                }
            )+
        }
    };
}

named_colors! {
    red = [255, 0, 0];
    green = [0, 255, 0];
    blue = [0, 0, 255];
    white = [255, 255, 255];
    black = [0, 0, 0];
    cyan = [0, 255, 255];
    magenta = [255, 0, 255];
    yellow = [255, 255, 0];
    mauve = [224, 176, 255];
    purple = [128, 0, 128];
    grey = [75, 75, 75];
}
