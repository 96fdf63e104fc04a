//! Named component accessors
//!
//! Getters are `get_`-prefixed because the unprefixed names (`red()`,
//! `green()`, ...) are named color constants. They exist only for
//! components the shape has. Setters are compiled in
//! with the `setters` feature; one-letter aliases with `short-accessors`.

use super::Color;
use crate::encoding::ColorEncoding;
#[cfg(feature = "setters")]
use crate::error::Result;
use crate::space::{HasAlpha, HasLuma, HasRgb};

macro_rules! accessors {
    ($bound:ident: $($desc:ident => $get:ident, $set:ident, $short:ident, $short_set:ident);+ $(;)?) => {
        impl<Sh: $bound, E: ColorEncoding> Color<Sh, E> {
            $(
                #[inline]
                pub fn $get(&self) -> E::Value {
                    self.get(Sh::$desc)
                }

                /// Fails with `OutOfBounds` (leaving the color unchanged) if
                /// `value` is outside the encoding's range
                #[cfg(feature = "setters")]
                #[track_caller]
                pub fn $set(&mut self, value: E::Value) -> Result<()> {
                    self.set(Sh::$desc, value)
                }

                #[cfg(feature = "short-accessors")]
                #[inline]
                pub fn $short(&self) -> E::Value {
                    self.$get()
                }

                #[cfg(all(feature = "short-accessors", feature = "setters"))]
                #[track_caller]
                pub fn $short_set(&mut self, value: E::Value) -> Result<()> {
                    self.$set(value)
                }
            )+
        }
    };
}

accessors!(HasRgb:
    RED => get_red, set_red, r, set_r;
    GREEN => get_green, set_green, g, set_g;
    BLUE => get_blue, set_blue, b, set_b;
);

accessors!(HasLuma:
    LUMINANCE => get_luminance, set_luminance, l, set_l;
);

accessors!(HasAlpha:
    ALPHA => get_alpha, set_alpha, a, set_a;
);
