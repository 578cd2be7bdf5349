//! Error types for color parsing and conversion.

use crate::Component;
use thiserror::Error;

/// A channel value outside the domain of the requested conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// An RGB channel was outside [0, 255].
    #[error("RGB channel values must be in the range 0 to 255, got {0}")]
    Rgb(Component),

    /// A form color channel was outside [0, 1].
    #[error("form color channel values must be in the range 0 to 1, got {0}")]
    Form(Component),
}

/// A line of text that does not hold a comma-separated triple of numbers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// The input did not split into exactly three fields.
    #[error("expected three comma-separated values, got {0}")]
    FieldCount(usize),

    /// A field could not be parsed as a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
}
