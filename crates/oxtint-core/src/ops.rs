//! Color operations
//!
//! - [`invert`]: every component, every shape
//! - [`brighten`] / [`darken`]: shapes with luminance or RGB; alpha is
//!   never modified
//! - [`lineary_interpolate`]: component-wise mix with one shared parameter
//!
//! `brighten(c, f)` scales the color components by `1 + f` and
//! `darken(c, f)` by `1 - f`, so `darken(c, f) == brighten(c, -f)`. A
//! negative factor performs the opposite operation; this is intended.

use crate::color::Color;
use crate::encoding::ColorEncoding;
use crate::error::{Error, Result};
use crate::space::{Luma, LumaAlpha, Rgb, Rgba, Shape};

/// Brighten and darken, defined per shape
pub trait Brightness: Sized {
    /// Scale the color components by `1 + factor`, clamping each
    fn brighten(self, factor: f64) -> Self;

    /// Scale the color components by `1 - factor`, clamping each
    fn darken(self, factor: f64) -> Self;
}

/// Scale every component of a pure color by `factor`, clamping each
#[inline]
fn scale_components<Sh: Shape, E: ColorEncoding>(color: Color<Sh, E>, factor: f64) -> Color<Sh, E> {
    color.map(|v| E::scale(v, factor))
}

macro_rules! pure_brightness {
    ($($shape:ty),+) => {
        $(
            impl<E: ColorEncoding> Brightness for Color<$shape, E> {
                #[inline]
                fn brighten(self, factor: f64) -> Self {
                    scale_components(self, 1.0 + factor)
                }

                #[inline]
                fn darken(self, factor: f64) -> Self {
                    scale_components(self, 1.0 - factor)
                }
            }
        )+
    };
}

// RGB channels saturate independently
pure_brightness!(Luma, Rgb);

/// Composites brighten their color part and keep their opacity part
macro_rules! composite_brightness {
    ($($shape:ty),+) => {
        $(
            impl<E: ColorEncoding> Brightness for Color<$shape, E> {
                #[inline]
                fn brighten(self, factor: f64) -> Self {
                    Self::compose(self.pure_color().brighten(factor), self.pure_opacity())
                }

                #[inline]
                fn darken(self, factor: f64) -> Self {
                    Self::compose(self.pure_color().darken(factor), self.pure_opacity())
                }
            }
        )+
    };
}

composite_brightness!(LumaAlpha, Rgba);

#[inline]
pub fn brighten<C: Brightness>(color: C, factor: f64) -> C {
    color.brighten(factor)
}

#[inline]
pub fn darken<C: Brightness>(color: C, factor: f64) -> C {
    color.darken(factor)
}

/// Mirror every component within its range (`max - v`)
#[inline]
pub fn invert<Sh: Shape, E: ColorEncoding>(color: Color<Sh, E>) -> Color<Sh, E> {
    color.invert()
}

/// Component-wise `x * (1 - mu) + y * mu`, one `mu` for all components
///
/// `mu` is not validated. Outside [0, 1] the mix extrapolates and each
/// component saturates at its range bound; use
/// [`checked_lineary_interpolate`] to reject such parameters instead.
#[inline]
pub fn lineary_interpolate<Sh: Shape, E: ColorEncoding>(
    x: Color<Sh, E>,
    y: Color<Sh, E>,
    mu: f64,
) -> Color<Sh, E> {
    x.lerp(y, mu)
}

/// As [`lineary_interpolate`], but fails with `ParameterOutOfBounds` when
/// `mu` is outside [0, 1] (or NaN)
pub fn checked_lineary_interpolate<Sh: Shape, E: ColorEncoding>(
    x: Color<Sh, E>,
    y: Color<Sh, E>,
    mu: f64,
) -> Result<Color<Sh, E>> {
    if !(0.0..=1.0).contains(&mu) {
        return Err(Error::ParameterOutOfBounds(mu));
    }
    Ok(x.lerp(y, mu))
}
