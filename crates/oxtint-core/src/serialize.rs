//! Serde support (`serde` feature)
//!
//! Colors serialize as a sequence of component values in slot order.
//! Deserialization checks the component count and every bound. The
//! deserializer is driven by the format crate, so a rejected component
//! reports the location of the `Deserialize` impl in this file rather than
//! the user's call site.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::encoding::ColorEncoding;
use crate::space::Shape;

impl<Sh: Shape, E: ColorEncoding> Serialize for Color<Sh, E>
where
    E::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, Sh: Shape, E: ColorEncoding> Deserialize<'de> for Color<Sh, E>
where
    E::Value: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<E::Value>::deserialize(deserializer)?;
        Color::try_from_slice(&values).map_err(D::Error::custom)
    }
}
