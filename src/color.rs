//! The two representations of a color handled by the converter.

use std::fmt;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that normalized components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that normalized components are stored as.
pub type Component = f64;

/// Three raw channel values as parsed from user input, not yet checked
/// against the domain of either representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color in standard 8-bit channel form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red component of the color.
    pub red: u8,
    /// The green component of the color.
    pub green: u8,
    /// The blue component of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red, self.green, self.blue)
    }
}

/// A color scaled to the normalized [0, 1] range used by server forms.
///
/// Form fields keep three decimal digits per channel, so channels produced
/// by [`FormColor::from_rgb`] are stored already rounded to that precision,
/// and [`fmt::Display`] always renders all three digits (`0.000`, not `0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormColor {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
}

impl FormColor {
    /// Create a new color with normalized (red, green, blue) components.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for FormColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}, {:.3}", self.red, self.green, self.blue)
    }
}
