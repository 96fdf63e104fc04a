//! Zero-copy views between raw buffers and color slices
//!
//! Every byte pattern is a valid byte-encoded color, so `&[u8]` can be
//! reinterpreted as `&[RGBAb]` (or any other byte color) in place. Float
//! buffers have a range invariant and are decoded with validation instead.

use std::panic::Location;

use bytemuck::{NoUninit, Pod, Zeroable};

use crate::color::Color;
use crate::encoding::{Byte, Float};
use crate::error::{Error, Result};
use crate::space::Shape;

// SAFETY: `Color` is `repr(transparent)` over `[u8; N]`, which is `Pod`,
// and every `u8` lies inside the byte range.
unsafe impl<Sh: Shape> Zeroable for Color<Sh, Byte> where Sh::Storage<u8>: Zeroable {}
unsafe impl<Sh: Shape> Pod for Color<Sh, Byte> where Sh::Storage<u8>: Pod {}

// SAFETY: `repr(transparent)` over `[f32; N]`, which has no padding.
unsafe impl<Sh: Shape> NoUninit for Color<Sh, Float> where Sh::Storage<f32>: NoUninit {}

const _: () = {
    use std::mem::size_of;

    use crate::space::{Alpha, Luma, LumaAlpha, Rgb, Rgba};

    assert!(size_of::<Color<Alpha, Byte>>() == 1);
    assert!(size_of::<Color<Luma, Byte>>() == 1);
    assert!(size_of::<Color<LumaAlpha, Byte>>() == 2);
    assert!(size_of::<Color<Rgb, Byte>>() == 3);
    assert!(size_of::<Color<Rgba, Byte>>() == 4);
    assert!(size_of::<Color<Rgba, Float>>() == 16);
};

/// View interleaved bytes as byte colors
pub fn cast_pixels<Sh: Shape>(bytes: &[u8]) -> Result<&[Color<Sh, Byte>]>
where
    Color<Sh, Byte>: Pod,
{
    bytemuck::try_cast_slice(bytes).map_err(|_| Error::PixelBuffer {
        len: bytes.len(),
        components: Sh::COUNT,
    })
}

/// Mutable variant of [`cast_pixels`]
pub fn cast_pixels_mut<Sh: Shape>(bytes: &mut [u8]) -> Result<&mut [Color<Sh, Byte>]>
where
    Color<Sh, Byte>: Pod,
{
    let len = bytes.len();
    bytemuck::try_cast_slice_mut(bytes).map_err(|_| Error::PixelBuffer {
        len,
        components: Sh::COUNT,
    })
}

/// View a color slice as its raw bytes (native endianness for floats)
pub fn pixel_bytes<T: NoUninit>(pixels: &[T]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

/// Decode interleaved floats into float colors, validating every component
///
/// Rejections report the location of the call to this function.
#[track_caller]
pub fn decode_float_pixels<Sh: Shape>(values: &[f32]) -> Result<Vec<Color<Sh, Float>>> {
    if values.len() % Sh::COUNT != 0 {
        return Err(Error::PixelBuffer {
            len: values.len(),
            components: Sh::COUNT,
        });
    }
    let location = Location::caller();
    values
        .chunks_exact(Sh::COUNT)
        .map(|chunk| Color::try_from_slice_at(chunk, location))
        .collect()
}
