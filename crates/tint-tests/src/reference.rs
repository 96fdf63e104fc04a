//! Reference implementation wrappers
//!
//! Unified interfaces to `palette` for the operations oxtint shares with
//! it: component format conversion and linear mixing.

use oxtint_core::{Lf, RGBAb, RGBAf};
use palette::{Mix, SrgbLuma, Srgba};

/// Convert byte components to float using palette
pub fn byte_to_float_palette(c: RGBAb) -> [f32; 4] {
    let converted: Srgba<f32> =
        Srgba::<u8>::new(c.r(), c.g(), c.b(), c.a()).into_format();
    [converted.red, converted.green, converted.blue, converted.alpha]
}

/// Convert float components to byte using palette
pub fn float_to_byte_palette(c: RGBAf) -> [u8; 4] {
    let converted: Srgba<u8> = Srgba::new(c.r(), c.g(), c.b(), c.a()).into_format();
    [converted.red, converted.green, converted.blue, converted.alpha]
}

/// Mix two colors using palette; `mu` is clamped to [0, 1] by palette
pub fn mix_palette(x: RGBAf, y: RGBAf, mu: f32) -> [f32; 4] {
    let x = Srgba::new(x.r(), x.g(), x.b(), x.a());
    let y = Srgba::new(y.r(), y.g(), y.b(), y.a());
    let mixed = x.mix(y, mu);
    [mixed.red, mixed.green, mixed.blue, mixed.alpha]
}

/// Mix two luminance values using palette
pub fn mix_luma_palette(x: Lf, y: Lf, mu: f32) -> f32 {
    SrgbLuma::new(x.l()).mix(SrgbLuma::new(y.l()), mu).luma
}

/// Largest absolute component difference
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// Largest absolute component difference, byte components
pub fn max_byte_diff(a: &[u8], b: &[u8]) -> u8 {
    a.iter().zip(b).map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wrappers_agree_on_extremes() {
        assert_eq!(byte_to_float_palette(RGBAb::red()), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(float_to_byte_palette(RGBAf::mauve()), [224, 176, 255, 255]);
        assert_eq!(mix_palette(RGBAf::black(), RGBAf::white(), 1.0), [1.0; 4]);
    }

    #[test]
    fn test_max_diff() {
        assert_eq!(max_abs_diff(&[0.0, 0.5], &[0.25, 0.5]), 0.25);
        assert_eq!(max_byte_diff(&[3, 9], &[5, 9]), 2);
    }
}
