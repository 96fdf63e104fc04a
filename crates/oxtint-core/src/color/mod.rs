//! Color value types
//!
//! [`Color<Sh, E>`] holds one value per component of shape `Sh`, each in
//! encoding `E` and each always inside `E::range()`. The shape-specific
//! modules add constructors and named constants:
//! - [`alpha`]: A
//! - [`luma`]: L
//! - [`luma_alpha`]: LA
//! - [`rgb`]: RGB
//! - [`rgba`]: RGBA
//!
//! Narrowing and re-encoding conversions are always named calls
//! ([`Color::convert_from`], [`Color::color_of`], [`Color::opacity_of`]).

mod access;
pub mod alpha;
pub mod luma;
pub mod luma_alpha;
pub mod rgb;
pub mod rgba;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::panic::Location;

use crate::encoding::{Byte, ColorEncoding, ConvertFrom};
use crate::error::{Error, Result};
use crate::space::{Component, Composite, Shape};

/// A color value of shape `Sh` in encoding `E`
#[repr(transparent)]
pub struct Color<Sh: Shape, E: ColorEncoding> {
    components: Sh::Storage<E::Value>,
}

/// Value of byte level `byte` in encoding `E`
#[inline]
pub(crate) const fn level<E: ColorEncoding>(byte: u8) -> E::Value {
    E::LEVELS[byte as usize]
}

impl<Sh: Shape, E: ColorEncoding> Color<Sh, E> {
    /// Wrap storage that is already known to be in range
    #[inline]
    pub(crate) const fn from_storage(components: Sh::Storage<E::Value>) -> Self {
        Self { components }
    }

    /// Validate every component, in slot order, and wrap the storage
    ///
    /// The first out-of-range component is reported.
    #[track_caller]
    pub(crate) fn validated(components: Sh::Storage<E::Value>) -> Result<Self> {
        Self::validated_at(components, Location::caller())
    }

    /// As [`validated`](Self::validated), reporting `location` on failure
    pub(crate) fn validated_at(
        components: Sh::Storage<E::Value>,
        location: &'static Location<'static>,
    ) -> Result<Self> {
        let range = E::range();
        for (component, &value) in Sh::COMPONENTS.iter().zip(components.as_ref()) {
            if range.outside(value) {
                return Err(Error::out_of_bounds(
                    component.tag,
                    value.into(),
                    (range.min.into(), range.max.into()),
                    location,
                ));
            }
        }
        Ok(Self { components })
    }

    /// Build a color from component values in slot order
    #[track_caller]
    pub fn try_from_slice(values: &[E::Value]) -> Result<Self> {
        Self::try_from_slice_at(values, Location::caller())
    }

    pub(crate) fn try_from_slice_at(
        values: &[E::Value],
        location: &'static Location<'static>,
    ) -> Result<Self> {
        if values.len() != Sh::COUNT {
            return Err(Error::ComponentCount {
                expected: Sh::COUNT,
                actual: values.len(),
            });
        }
        Self::validated_at(Sh::storage_from_fn(|slot| values[slot]), location)
    }

    /// Component values in slot order
    #[inline]
    pub fn as_slice(&self) -> &[E::Value] {
        self.components.as_ref()
    }

    #[inline]
    pub(crate) fn get(&self, component: Component) -> E::Value {
        self.as_slice()[component.slot]
    }

    /// Replace one component after checking its bound; untouched on error
    #[cfg(feature = "setters")]
    #[track_caller]
    pub(crate) fn set(&mut self, component: Component, value: E::Value) -> Result<()> {
        let range = E::range();
        if range.outside(value) {
            return Err(Error::out_of_bounds(
                component.tag,
                value.into(),
                (range.min.into(), range.max.into()),
                Location::caller(),
            ));
        }
        self.components.as_mut()[component.slot] = value;
        Ok(())
    }

    /// Component-wise equality
    #[inline]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }

    /// Apply `f` to every component
    #[inline]
    pub(crate) fn map(self, f: impl Fn(E::Value) -> E::Value) -> Self {
        let values = self.as_slice();
        Self::from_storage(Sh::storage_from_fn(|slot| f(values[slot])))
    }

    /// Combine two colors slot by slot
    #[inline]
    pub(crate) fn zip_map(self, other: Self, f: impl Fn(E::Value, E::Value) -> E::Value) -> Self {
        let (lhs, rhs) = (self.as_slice(), other.as_slice());
        Self::from_storage(Sh::storage_from_fn(|slot| f(lhs[slot], rhs[slot])))
    }

    /// Re-encode a color of the same shape
    ///
    /// # Example
    /// ```
    /// use oxtint_core::{RGBb, RGBf};
    ///
    /// let red = RGBf::convert_from(RGBb::red());
    /// assert_eq!(red, RGBf::red());
    /// ```
    #[inline]
    pub fn convert_from<F>(other: Color<Sh, F>) -> Self
    where
        F: ColorEncoding,
        E: ConvertFrom<F>,
    {
        let values = other.as_slice();
        Self::from_storage(Sh::storage_from_fn(|slot| E::convert(values[slot])))
    }

    /// Mirror every component within its range
    #[inline]
    pub fn invert(self) -> Self {
        self.map(E::invert)
    }

    /// Component-wise mix with a single shared parameter, clamped to range
    #[inline]
    pub fn lerp(self, other: Self, mu: f64) -> Self {
        self.zip_map(other, |x, y| E::lerp(x, y, mu))
    }

    /// Color space name (`"RGBAb"`)
    pub fn space_name() -> String {
        format!("{}{}", Sh::NAME, E::SUFFIX)
    }

    /// Build this pure color value from a composite value's color part
    #[inline]
    pub fn color_of<Sup>(composite: &Color<Sup, E>) -> Self
    where
        Sup: Composite<PureColor = Sh>,
    {
        composite.pure_color()
    }

    /// Build this pure opacity value from a composite value's opacity part
    #[inline]
    pub fn opacity_of<Sup>(composite: &Color<Sup, E>) -> Self
    where
        Sup: Composite<PureOpacity = Sh>,
    {
        composite.pure_opacity()
    }
}

impl<Sh: Composite, E: ColorEncoding> Color<Sh, E> {
    /// Assemble from a pure color part and a pure opacity part
    ///
    /// Both parts are already valid, so nothing is re-checked.
    #[inline]
    pub fn compose(color: Color<Sh::PureColor, E>, opacity: Color<Sh::PureOpacity, E>) -> Self {
        let split = <Sh::PureColor as Shape>::COUNT;
        let (color, opacity) = (color.as_slice(), opacity.as_slice());
        Self::from_storage(Sh::storage_from_fn(|slot| {
            if slot < split {
                color[slot]
            } else {
                opacity[slot - split]
            }
        }))
    }

    /// Assemble from a pure color part and a raw alpha value
    ///
    /// The alpha value is validated before anything is built.
    #[track_caller]
    pub fn with_opacity(color: Color<Sh::PureColor, E>, alpha: E::Value) -> Result<Self> {
        let opacity = Color::<Sh::PureOpacity, E>::validated(
            <Sh::PureOpacity as Shape>::storage_from_fn(|_| alpha),
        )?;
        Ok(Self::compose(color, opacity))
    }

    /// The color components without alpha
    #[inline]
    pub fn pure_color(&self) -> Color<Sh::PureColor, E> {
        let values = self.as_slice();
        Color::from_storage(<Sh::PureColor as Shape>::storage_from_fn(|slot| values[slot]))
    }

    /// The alpha component alone
    #[inline]
    pub fn pure_opacity(&self) -> Color<Sh::PureOpacity, E> {
        let split = <Sh::PureColor as Shape>::COUNT;
        let values = self.as_slice();
        Color::from_storage(<Sh::PureOpacity as Shape>::storage_from_fn(|slot| {
            values[split + slot]
        }))
    }

    /// Split into pure color and pure opacity parts
    #[inline]
    pub fn decompose(&self) -> (Color<Sh::PureColor, E>, Color<Sh::PureOpacity, E>) {
        (self.pure_color(), self.pure_opacity())
    }
}

impl<Sh: Shape, E: ColorEncoding> Clone for Color<Sh, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Sh: Shape, E: ColorEncoding> Copy for Color<Sh, E> {}

impl<Sh: Shape, E: ColorEncoding> PartialEq for Color<Sh, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl<Sh: Shape> Eq for Color<Sh, Byte> {}

impl<Sh: Shape> Hash for Color<Sh, Byte> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<Sh: Shape, E: ColorEncoding> Add for Color<Sh, E> {
    type Output = Self;

    /// Saturating component-wise addition
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, E::add)
    }
}

impl<Sh: Shape, E: ColorEncoding> Sub for Color<Sh, E> {
    type Output = Self;

    /// Saturating component-wise subtraction
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, E::subtract)
    }
}

impl<Sh: Shape, E: ColorEncoding> Color<Sh, E> {
    fn write_components(
        &self,
        f: &mut fmt::Formatter<'_>,
        write_value: impl Fn(&mut fmt::Formatter<'_>, &E::Value) -> fmt::Result,
    ) -> fmt::Result {
        write!(f, "{}{}(", Sh::NAME, E::SUFFIX)?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_value(f, value)?;
        }
        f.write_str(")")
    }
}

impl<Sh: Shape, E: ColorEncoding> fmt::Display for Color<Sh, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_components(f, |f, v| write!(f, "{}", v))
    }
}

impl<Sh: Shape, E: ColorEncoding> fmt::Debug for Color<Sh, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_components(f, |f, v| write!(f, "{:?}", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Float;
    use crate::space::{ComponentTag, Rgb, Rgba};
    use crate::{Ab, LAb, LAf, Lb, RGBAb, RGBAf, RGBb};

    #[test]
    fn test_try_from_slice() {
        let c = RGBAf::try_from_slice(&[0.25, 0.5, 0.75, 1.0]).unwrap();
        assert_eq!(c.as_slice(), &[0.25, 0.5, 0.75, 1.0]);

        let err = RGBAf::try_from_slice(&[0.25, 0.5]).unwrap_err();
        assert_eq!(err, Error::ComponentCount { expected: 4, actual: 2 });

        let err = RGBAf::try_from_slice(&[0.25, 1.5, -1.0, 1.0]).unwrap_err();
        assert_eq!(err.component(), Some(ComponentTag::Green));
    }

    #[test]
    fn test_error_location_points_at_caller() {
        let err = Color::<Rgb, Float>::try_from_slice(&[2.0, 0.0, 0.0]).unwrap_err();
        match err {
            Error::OutOfBounds { location, .. } => assert_eq!(location.file(), file!()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compose_decompose() {
        let rgba = RGBAb::new(10, 20, 30, 40).unwrap();
        let (color, opacity) = rgba.decompose();
        assert_eq!(color, RGBb::new(10, 20, 30).unwrap());
        assert_eq!(opacity, Ab::new(40).unwrap());
        assert_eq!(RGBAb::compose(color, opacity), rgba);

        let la = LAb::new(7, 9).unwrap();
        assert_eq!(Lb::color_of(&la), Lb::new(7).unwrap());
        assert_eq!(Ab::opacity_of(&la), Ab::new(9).unwrap());
        assert_eq!(Ab::opacity_of(&rgba), Ab::new(40).unwrap());
    }

    #[test]
    fn test_with_opacity_validates_alpha() {
        let err = Color::<Rgba, Float>::with_opacity(crate::RGBf::red(), 1.5).unwrap_err();
        assert_eq!(err.component(), Some(ComponentTag::Alpha));

        let c = LAf::with_opacity(crate::Lf::white(), 0.5).unwrap();
        assert_eq!(c.as_slice(), &[1.0, 0.5]);
    }

    #[test]
    fn test_saturating_operators() {
        let white = RGBAb::white();
        assert_eq!(white + white, white);
        assert_eq!(RGBAb::transparent() - white, RGBAb::new(0, 0, 0, 0).unwrap());
        let a = RGBb::new(100, 200, 50).unwrap();
        let b = RGBb::new(100, 100, 100).unwrap();
        assert_eq!(a + b, RGBb::new(200, 255, 150).unwrap());
        assert_eq!(a - b, RGBb::new(0, 100, 0).unwrap());
    }

    #[test]
    fn test_convert_from() {
        let c = RGBAf::convert_from(RGBAb::new(255, 0, 51, 255).unwrap());
        assert_eq!(c.as_slice(), &[1.0, 0.0, 0.2, 1.0]);
        assert_eq!(RGBAb::convert_from(c), RGBAb::new(255, 0, 51, 255).unwrap());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(RGBAb::red().to_string(), "RGBAb(255, 0, 0, 255)");
        assert_eq!(format!("{:?}", LAf::black()), "LAf(0.0, 1.0)");
        assert_eq!(RGBAf::space_name(), "RGBAf");
    }

    #[test]
    fn test_byte_colors_hash() {
        use std::collections::HashSet;

        let set: HashSet<RGBb> = [RGBb::red(), RGBb::red(), RGBb::blue()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
