//! Batch operations over color slices
//!
//! Each function is compiled for several instruction sets with the
//! `multiversion` crate and dispatches to the best one at runtime; the
//! scalar version is always available.

use multiversion::multiversion;

use crate::color::Color;
use crate::encoding::{ColorEncoding, ConvertFrom};
use crate::ops::Brightness;
use crate::space::Shape;

/// Invert every color in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn invert_batch<Sh, E>(colors: &mut [Color<Sh, E>])
where
    Sh: Shape,
    E: ColorEncoding,
{
    for color in colors.iter_mut() {
        *color = color.invert();
    }
}

/// Brighten every color in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn brighten_batch<C>(colors: &mut [C], factor: f64)
where
    C: Brightness + Copy,
{
    for color in colors.iter_mut() {
        *color = color.brighten(factor);
    }
}

/// Darken every color in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn darken_batch<C>(colors: &mut [C], factor: f64)
where
    C: Brightness + Copy,
{
    for color in colors.iter_mut() {
        *color = color.darken(factor);
    }
}

/// Interpolate pairwise between `x` and `y` into `dst`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn lerp_batch<Sh, E>(x: &[Color<Sh, E>], y: &[Color<Sh, E>], mu: f64, dst: &mut [Color<Sh, E>])
where
    Sh: Shape,
    E: ColorEncoding,
{
    assert!(x.len() == y.len());
    assert!(dst.len() >= x.len());

    for ((a, b), out) in x.iter().zip(y).zip(dst.iter_mut()) {
        *out = a.lerp(*b, mu);
    }
}

/// Re-encode a slice of colors into `dst`
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn convert_batch<Sh, E, F>(src: &[Color<Sh, F>], dst: &mut [Color<Sh, E>])
where
    Sh: Shape,
    E: ColorEncoding + ConvertFrom<F>,
    F: ColorEncoding,
{
    assert!(dst.len() >= src.len());

    for (color, out) in src.iter().zip(dst.iter_mut()) {
        *out = Color::convert_from(*color);
    }
}
