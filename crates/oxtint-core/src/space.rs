//! Component algebra
//!
//! A color space is a [`Shape`] (which components exist, and in which
//! slot) paired with an [`Encoding`](crate::encoding::Encoding). Shapes are
//! uninhabited marker types: they are only ever used as type parameters.
//!
//! Five shapes exist and each satisfies exactly one of [`is_a`], [`is_l`],
//! [`is_la`], [`is_rgb`], [`is_rgba`]. The composite shapes ([`LumaAlpha`],
//! [`Rgba`]) name their pure color and pure opacity sub-shapes; asking the
//! same of a non-composite shape does not compile:
//!
//! ```compile_fail
//! use oxtint_core::RGBb;
//!
//! let (color, opacity) = RGBb::red().decompose();
//! ```

use std::fmt;

/// Semantic tag of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTag {
    Red,
    Green,
    Blue,
    Alpha,
    Luminance,
}

impl ComponentTag {
    /// Lowercase component name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
            Self::Luminance => "luminance",
        }
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component descriptor: semantic tag plus storage slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub tag: ComponentTag,
    pub slot: usize,
}

impl Component {
    pub const fn new(tag: ComponentTag, slot: usize) -> Self {
        Self { tag, slot }
    }
}

/// The five component-presence patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Alpha,
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ShapeKind {
    /// Classify a set of presence flags; `None` for combinations that are
    /// not a valid shape (e.g. RGB together with luminance)
    pub const fn classify(has_rgb: bool, has_l: bool, has_a: bool) -> Option<Self> {
        match (has_rgb, has_l, has_a) {
            (false, false, true) => Some(Self::Alpha),
            (false, true, false) => Some(Self::Luma),
            (false, true, true) => Some(Self::LumaAlpha),
            (true, false, false) => Some(Self::Rgb),
            (true, false, true) => Some(Self::Rgba),
            _ => None,
        }
    }
}

const fn find(components: &[Component], tag: ComponentTag) -> Option<Component> {
    let mut i = 0;
    while i < components.len() {
        if components[i].tag as u8 == tag as u8 {
            return Some(components[i]);
        }
        i += 1;
    }
    None
}

const fn has(components: &[Component], tag: ComponentTag) -> bool {
    find(components, tag).is_some()
}

const fn require(components: &[Component], tag: ComponentTag) -> Component {
    match find(components, tag) {
        Some(component) => component,
        None => panic!("shape lacks the requested component"),
    }
}

/// Slots are zero-based, contiguous and carry unique tags
const fn is_well_formed(components: &[Component]) -> bool {
    if components.is_empty() || components.len() > 4 {
        return false;
    }
    let mut i = 0;
    while i < components.len() {
        if components[i].slot != i {
            return false;
        }
        let mut j = i + 1;
        while j < components.len() {
            if components[i].tag as u8 == components[j].tag as u8 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// A composite is laid out as its pure color slots followed by its pure
/// opacity slots
const fn composes<Sh: Composite>() -> bool {
    let whole = Sh::COMPONENTS;
    let color = <Sh::PureColor as Shape>::COMPONENTS;
    let opacity = <Sh::PureOpacity as Shape>::COMPONENTS;
    if whole.len() != color.len() + opacity.len() {
        return false;
    }
    let mut i = 0;
    while i < whole.len() {
        let tag = if i < color.len() {
            color[i].tag
        } else {
            opacity[i - color.len()].tag
        };
        if whole[i].tag as u8 != tag as u8 {
            return false;
        }
        i += 1;
    }
    true
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time description of which components a color has
pub trait Shape: sealed::Sealed + 'static {
    /// Per-component storage, one value per slot
    type Storage<V: Copy + 'static>: Copy + AsRef<[V]> + AsMut<[V]> + 'static;

    /// Shape name (`"RGBA"`)
    const NAME: &'static str;
    /// Components in slot order
    const COMPONENTS: &'static [Component];

    const COUNT: usize = Self::COMPONENTS.len();
    const HAS_RGB: bool = has(Self::COMPONENTS, ComponentTag::Red)
        && has(Self::COMPONENTS, ComponentTag::Green)
        && has(Self::COMPONENTS, ComponentTag::Blue);
    const HAS_L: bool = has(Self::COMPONENTS, ComponentTag::Luminance);
    const HAS_A: bool = has(Self::COMPONENTS, ComponentTag::Alpha);
    const KIND: ShapeKind = match ShapeKind::classify(Self::HAS_RGB, Self::HAS_L, Self::HAS_A) {
        Some(kind) => kind,
        None => panic!("invalid component combination"),
    };

    /// Build storage by computing the value of each slot in order
    fn storage_from_fn<V: Copy + 'static>(f: impl FnMut(usize) -> V) -> Self::Storage<V>;
}

/// Shapes with red, green and blue components
pub trait HasRgb: Shape {
    const RED: Component = require(Self::COMPONENTS, ComponentTag::Red);
    const GREEN: Component = require(Self::COMPONENTS, ComponentTag::Green);
    const BLUE: Component = require(Self::COMPONENTS, ComponentTag::Blue);
}

/// Shapes with a luminance component
pub trait HasLuma: Shape {
    const LUMINANCE: Component = require(Self::COMPONENTS, ComponentTag::Luminance);
}

/// Shapes with an alpha component
pub trait HasAlpha: Shape {
    const ALPHA: Component = require(Self::COMPONENTS, ComponentTag::Alpha);
}

/// Shapes made of a pure color part and a pure opacity part
pub trait Composite: HasAlpha {
    /// The shape without its alpha component
    type PureColor: Shape;
    /// The alpha-only shape
    type PureOpacity: HasAlpha;
}

pub const fn is_a<Sh: Shape>() -> bool {
    !Sh::HAS_RGB && !Sh::HAS_L && Sh::HAS_A
}

pub const fn is_l<Sh: Shape>() -> bool {
    !Sh::HAS_RGB && Sh::HAS_L && !Sh::HAS_A
}

pub const fn is_la<Sh: Shape>() -> bool {
    !Sh::HAS_RGB && Sh::HAS_L && Sh::HAS_A
}

pub const fn is_rgb<Sh: Shape>() -> bool {
    Sh::HAS_RGB && !Sh::HAS_L && !Sh::HAS_A
}

pub const fn is_rgba<Sh: Shape>() -> bool {
    Sh::HAS_RGB && !Sh::HAS_L && Sh::HAS_A
}

macro_rules! shape {
    ($(#[$doc:meta])* $name:ident, $label:literal, [$($tag:ident = $slot:literal),+], $n:literal) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub enum $name {}

        impl sealed::Sealed for $name {}

        impl Shape for $name {
            type Storage<V: Copy + 'static> = [V; $n];

            const NAME: &'static str = $label;
            const COMPONENTS: &'static [Component] =
                &[$(Component::new(ComponentTag::$tag, $slot)),+];

            #[inline]
            fn storage_from_fn<V: Copy + 'static>(f: impl FnMut(usize) -> V) -> [V; $n] {
                std::array::from_fn(f)
            }
        }
    };
}

shape!(
    /// Alpha only
    Alpha, "A", [Alpha = 0], 1
);
shape!(
    /// Luminance only
    Luma, "L", [Luminance = 0], 1
);
shape!(
    /// Luminance and alpha
    LumaAlpha, "LA", [Luminance = 0, Alpha = 1], 2
);
shape!(
    /// Red, green, blue
    Rgb, "RGB", [Red = 0, Green = 1, Blue = 2], 3
);
shape!(
    /// Red, green, blue, alpha
    Rgba, "RGBA", [Red = 0, Green = 1, Blue = 2, Alpha = 3], 4
);

impl HasAlpha for Alpha {}
impl HasAlpha for LumaAlpha {}
impl HasAlpha for Rgba {}

impl HasLuma for Luma {}
impl HasLuma for LumaAlpha {}

impl HasRgb for Rgb {}
impl HasRgb for Rgba {}

impl Composite for LumaAlpha {
    type PureColor = Luma;
    type PureOpacity = Alpha;
}

impl Composite for Rgba {
    type PureColor = Rgb;
    type PureOpacity = Alpha;
}

const _: () = {
    assert!(is_well_formed(Alpha::COMPONENTS));
    assert!(is_well_formed(Luma::COMPONENTS));
    assert!(is_well_formed(LumaAlpha::COMPONENTS));
    assert!(is_well_formed(Rgb::COMPONENTS));
    assert!(is_well_formed(Rgba::COMPONENTS));

    assert!(matches!(Alpha::KIND, ShapeKind::Alpha));
    assert!(matches!(Luma::KIND, ShapeKind::Luma));
    assert!(matches!(LumaAlpha::KIND, ShapeKind::LumaAlpha));
    assert!(matches!(Rgb::KIND, ShapeKind::Rgb));
    assert!(matches!(Rgba::KIND, ShapeKind::Rgba));

    assert!(composes::<LumaAlpha>());
    assert!(composes::<Rgba>());
};

#[cfg(test)]
mod tests {
    use super::*;

    fn predicates<Sh: Shape>() -> [bool; 5] {
        [is_a::<Sh>(), is_l::<Sh>(), is_la::<Sh>(), is_rgb::<Sh>(), is_rgba::<Sh>()]
    }

    #[test]
    fn test_exactly_one_predicate_holds() {
        let all = [
            predicates::<Alpha>(),
            predicates::<Luma>(),
            predicates::<LumaAlpha>(),
            predicates::<Rgb>(),
            predicates::<Rgba>(),
        ];
        for (i, row) in all.iter().enumerate() {
            assert_eq!(row.iter().filter(|p| **p).count(), 1);
            assert!(row[i]);
        }
    }

    #[test]
    fn test_presence_flags() {
        assert!(Rgba::HAS_RGB && Rgba::HAS_A && !Rgba::HAS_L);
        assert!(LumaAlpha::HAS_L && LumaAlpha::HAS_A && !LumaAlpha::HAS_RGB);
        assert!(!Alpha::HAS_L && !Alpha::HAS_RGB);
        assert_eq!(Alpha::COUNT, 1);
        assert_eq!(LumaAlpha::COUNT, 2);
        assert_eq!(Rgb::COUNT, 3);
        assert_eq!(Rgba::COUNT, 4);
    }

    #[test]
    fn test_component_slots() {
        assert_eq!(Rgba::RED, Component::new(ComponentTag::Red, 0));
        assert_eq!(Rgba::BLUE.slot, 2);
        assert_eq!(Rgba::ALPHA.slot, 3);
        assert_eq!(LumaAlpha::LUMINANCE.slot, 0);
        assert_eq!(LumaAlpha::ALPHA.slot, 1);
        assert_eq!(Alpha::ALPHA.slot, 0);
    }

    #[test]
    fn test_classify_rejects_mixed() {
        assert_eq!(ShapeKind::classify(true, true, false), None);
        assert_eq!(ShapeKind::classify(false, false, false), None);
        assert_eq!(ShapeKind::classify(true, false, true), Some(ShapeKind::Rgba));
    }

    #[test]
    fn test_component_names() {
        assert_eq!(ComponentTag::Luminance.to_string(), "luminance");
        assert_eq!(ComponentTag::Alpha.name(), "alpha");
    }
}
