//! # oxtint - strongly typed color values
//!
//! Alpha, luminance, luminance+alpha, RGB and RGBA colors in 8-bit and
//! 32-bit float encodings. Every component of a value is always inside its
//! encoding's range: constructors and setters validate, arithmetic
//! saturates.
//!
//! ## Color spaces
//!
//! | Alias   | Shape | Encoding | Components |
//! |---------|-------|----------|------------|
//! | `Ab`    | A     | `u8`     | alpha |
//! | `Lb`    | L     | `u8`     | luminance |
//! | `LAb`   | LA    | `u8`     | luminance, alpha |
//! | `RGBb`  | RGB   | `u8`     | red, green, blue |
//! | `RGBAb` | RGBA  | `u8`     | red, green, blue, alpha |
//!
//! The `f` suffix (`Af`, `Lf`, ...) is the same shape in `f32` with range
//! [0, 1].
//!
//! ## Quick Start
//!
//! ```
//! use oxtint_core::{brighten, lineary_interpolate, LAb, RGBAb, RGBAf};
//!
//! // Named colors are const
//! const RED: RGBAb = RGBAb::red();
//!
//! // Re-encode
//! let red = RGBAf::convert_from(RED);
//! assert_eq!(red.get_red(), 1.0);
//!
//! // Brightening leaves alpha alone
//! let grey = LAb::new(75, 128).unwrap();
//! assert_eq!(brighten(grey, 1.0), LAb::new(150, 128).unwrap());
//!
//! // One parameter for all components
//! let mid = lineary_interpolate(RGBAf::black(), RGBAf::white(), 0.5);
//! assert_eq!(mid.get_green(), 0.5);
//!
//! // Out-of-range components are rejected
//! assert!(RGBAf::new(1.5, 0.0, 0.0, 1.0).is_err());
//! ```
//!
//! ## Features
//!
//! - `setters` (default): validated `set_*` methods
//! - `short-accessors`: `r()`, `set_r()`, ... aliases
//! - `serde`: serialize colors as component sequences

pub mod batch;
pub mod color;
pub mod encoding;
pub mod error;
pub mod ops;
pub mod pixels;
#[cfg(feature = "serde")]
mod serialize;
pub mod space;

pub use color::Color;
pub use encoding::{Byte, ColorEncoding, ConvertFrom, Double, Encoding, Float};
pub use error::{Error, Result};
pub use ops::{Brightness, brighten, checked_lineary_interpolate, darken, invert, lineary_interpolate};
pub use space::{Alpha, ComponentTag, Composite, Luma, LumaAlpha, Rgb, Rgba, Shape};

/// Alpha, 8-bit
pub type Ab = Color<Alpha, Byte>;
/// Alpha, float
pub type Af = Color<Alpha, Float>;
/// Luminance, 8-bit
pub type Lb = Color<Luma, Byte>;
/// Luminance, float
pub type Lf = Color<Luma, Float>;
/// Luminance and alpha, 8-bit
pub type LAb = Color<LumaAlpha, Byte>;
/// Luminance and alpha, float
pub type LAf = Color<LumaAlpha, Float>;
/// RGB, 8-bit
pub type RGBb = Color<Rgb, Byte>;
/// RGB, float
pub type RGBf = Color<Rgb, Float>;
/// RGBA, 8-bit
pub type RGBAb = Color<Rgba, Byte>;
/// RGBA, float
pub type RGBAf = Color<Rgba, Float>;

/// Version of oxtint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
