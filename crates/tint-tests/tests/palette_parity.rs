//! Parity tests against palette
//!
//! Encoding conversion and interpolation are compared component by
//! component with the palette crate.

use oxtint_core::{Lf, RGBAb, RGBAf, lineary_interpolate};
use tint_tests::patterns::{TestPattern, generate_colors, random_factors, random_float_colors};
use tint_tests::reference::{
    byte_to_float_palette, float_to_byte_palette, max_abs_diff, max_byte_diff, mix_luma_palette,
    mix_palette,
};

/// Float results may differ from palette's by a few ulps
const FLOAT_TOLERANCE: f32 = 1e-6;

#[test]
fn test_byte_to_float_matches_palette() {
    tint_tests::init_tracing();

    for pattern in [
        TestPattern::Grayscale,
        TestPattern::AlphaRamp,
        TestPattern::ColorCube,
        TestPattern::Named,
        TestPattern::Random(42),
    ] {
        for c in generate_colors(pattern, 1024) {
            let ours = RGBAf::convert_from(c);
            let theirs = byte_to_float_palette(c);
            let diff = max_abs_diff(ours.as_slice(), &theirs);
            assert!(
                diff <= FLOAT_TOLERANCE,
                "{pattern:?}: {c} -> {ours:?}, palette {theirs:?}"
            );
        }
    }
}

#[test]
fn test_byte_levels_survive_both_round_trips() {
    for c in generate_colors(TestPattern::Grayscale, 256) {
        let ours = RGBAf::convert_from(c);
        assert_eq!(RGBAb::convert_from(ours), c);
        assert_eq!(float_to_byte_palette(ours), [c.r(), c.g(), c.b(), c.a()]);
    }
}

#[test]
fn test_float_to_byte_matches_palette() {
    tint_tests::init_tracing();

    let colors = random_float_colors(7, 4096);
    let mut exact = 0usize;
    for c in &colors {
        let ours = RGBAb::convert_from(*c);
        let theirs = float_to_byte_palette(*c);
        let diff = max_byte_diff(ours.as_slice(), &theirs);
        // Rounding ties computed in f32 vs f64 may land one level apart
        assert!(diff <= 1, "{c:?} -> {ours}, palette {theirs:?}");
        if diff == 0 {
            exact += 1;
        }
    }
    tracing::info!(exact, total = colors.len(), "float to byte parity");
}

#[test]
fn test_interpolation_matches_palette_mix() {
    tint_tests::init_tracing();

    let xs = random_float_colors(1, 512);
    let ys = random_float_colors(2, 512);
    let mus = random_factors(3, 512, 0.0..=1.0);

    for ((x, y), mu) in xs.iter().zip(&ys).zip(&mus) {
        let ours = lineary_interpolate(*x, *y, *mu);
        let theirs = mix_palette(*x, *y, *mu as f32);
        let diff = max_abs_diff(ours.as_slice(), &theirs);
        assert!(
            diff <= FLOAT_TOLERANCE,
            "mix({x:?}, {y:?}, {mu}) = {ours:?}, palette {theirs:?}"
        );
    }
}

#[test]
fn test_luma_interpolation_matches_palette_mix() {
    for (i, mu) in random_factors(9, 256, 0.0..=1.0).into_iter().enumerate() {
        let x = Lf::try_from_slice(&[(i % 17) as f32 / 16.0]).unwrap();
        let y = Lf::white() - x;
        let ours = lineary_interpolate(x, y, mu);
        let theirs = mix_luma_palette(x, y, mu as f32);
        assert!((ours.l() - theirs).abs() <= FLOAT_TOLERANCE);
    }
}

#[test]
fn test_interpolation_endpoints_match_exactly() {
    for (x, y) in [
        (RGBAf::red(), RGBAf::green()),
        (RGBAf::red(), RGBAf::blue()),
        (RGBAf::black(), RGBAf::white()),
    ] {
        assert_eq!(lineary_interpolate(x, y, 0.0).as_slice(), &mix_palette(x, y, 0.0));
        assert_eq!(lineary_interpolate(x, y, 1.0).as_slice(), &mix_palette(x, y, 1.0));
    }
}
