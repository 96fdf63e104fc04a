//! Error types for oxtint

use std::panic::Location;

use thiserror::Error;

use crate::space::ComponentTag;

/// Result type for oxtint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or modifying color values
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A raw component value lies outside its encoding's range
    #[error("{component} component out of bounds: {value} not in [{min}, {max}] ({location})")]
    OutOfBounds {
        component: ComponentTag,
        value: f64,
        min: f64,
        max: f64,
        location: &'static Location<'static>,
    },

    /// Interpolation parameter outside [0, 1]
    #[error("interpolation parameter out of bounds: {0} not in [0, 1]")]
    ParameterOutOfBounds(f64),

    /// Wrong number of component values for the color space
    #[error("component count mismatch: expected {expected}, got {actual}")]
    ComponentCount { expected: usize, actual: usize },

    /// Buffer length is not a whole number of pixels
    #[error("pixel buffer of {len} values is not a multiple of {components} components")]
    PixelBuffer { len: usize, components: usize },
}

impl Error {
    pub(crate) fn out_of_bounds(
        component: ComponentTag,
        value: f64,
        (min, max): (f64, f64),
        location: &'static Location<'static>,
    ) -> Self {
        tracing::debug!(%component, value, min, max, %location, "component rejected");
        Self::OutOfBounds {
            component,
            value,
            min,
            max,
            location,
        }
    }

    /// The component that failed validation, if any
    pub fn component(&self) -> Option<ComponentTag> {
        match self {
            Self::OutOfBounds { component, .. } => Some(*component),
            _ => None,
        }
    }
}
