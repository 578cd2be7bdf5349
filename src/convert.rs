//! Conversions between 8-bit RGB channels and normalized form channels.

use crate::{Component, Components, FormColor, RangeError, Rgb};

/// The largest value of an 8-bit color channel.
const RGB_MAX: Component = 255.0;

#[allow(clippy::manual_range_contains)]
fn in_range(value: Component, min: Component, max: Component) -> bool {
    value >= min && value <= max
}

/// Round to the three decimal digits kept by form color fields.
fn round_form(value: Component) -> Component {
    (value * 1000.0).round() / 1000.0
}

impl FormColor {
    /// Convert 8-bit RGB channel values to a normalized form color.
    ///
    /// Each channel is divided by 255 and rounded to three decimal places.
    /// Fails if any channel is outside [0, 255].
    pub fn from_rgb(components: Components) -> Result<Self, RangeError> {
        let Components(red, green, blue) = components;
        for value in [red, green, blue] {
            if !in_range(value, 0.0, RGB_MAX) {
                return Err(RangeError::Rgb(value));
            }
        }

        let Components(red, green, blue) = components.map(|c| round_form(c / RGB_MAX));
        Ok(Self { red, green, blue })
    }
}

impl Rgb {
    /// Convert normalized form channel values back to 8-bit RGB.
    ///
    /// Each channel is multiplied by 255 and rounded to the nearest integer,
    /// halves away from zero. Fails if any channel is outside [0, 1].
    pub fn from_form(components: Components) -> Result<Self, RangeError> {
        let Components(red, green, blue) = components;
        for value in [red, green, blue] {
            if !in_range(value, 0.0, 1.0) {
                return Err(RangeError::Form(value));
            }
        }

        let Components(red, green, blue) = components.map(|c| (c * RGB_MAX).round());
        Ok(Self {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn rgb_to_form() {
        let form = FormColor::from_rgb(Components(255.0, 150.0, 0.0)).unwrap();
        assert_component_eq!(form.red, 1.0);
        assert_component_eq!(form.green, 0.588);
        assert_component_eq!(form.blue, 0.0);
        assert_eq!(form.to_string(), "1.000, 0.588, 0.000");
    }

    #[test]
    fn form_to_rgb() {
        let rgb = Rgb::from_form(Components(1.0, 0.588, 0.0)).unwrap();
        assert_eq!(rgb, Rgb::new(255, 150, 0));
    }

    #[test]
    fn rgb_channels_out_of_range() {
        assert_eq!(
            FormColor::from_rgb(Components(-1.0, 0.0, 0.0)),
            Err(RangeError::Rgb(-1.0))
        );
        assert_eq!(
            FormColor::from_rgb(Components(0.0, 256.0, 0.0)),
            Err(RangeError::Rgb(256.0))
        );
        assert_eq!(
            FormColor::from_rgb(Components(0.0, 0.0, 300.0)),
            Err(RangeError::Rgb(300.0))
        );
    }

    #[test]
    fn form_channels_out_of_range() {
        assert_eq!(
            Rgb::from_form(Components(-0.1, 0.0, 0.0)),
            Err(RangeError::Form(-0.1))
        );
        assert_eq!(
            Rgb::from_form(Components(0.0, 1.1, 0.0)),
            Err(RangeError::Form(1.1))
        );
    }

    #[test]
    fn non_finite_channels_never_convert() {
        assert!(FormColor::from_rgb(Components(Component::INFINITY, 0.0, 0.0)).is_err());
        assert!(Rgb::from_form(Components(0.0, Component::NAN, 0.0)).is_err());
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 0.5 * 255 = 127.5 resolves up, not to the even neighbour.
        let rgb = Rgb::from_form(Components(0.5, 0.5, 0.5)).unwrap();
        assert_eq!(rgb, Rgb::new(128, 128, 128));
    }

    #[test]
    fn round_trip_within_one() {
        for channel in 0..=255u16 {
            let form =
                FormColor::from_rgb(Components(channel as Component, 0.0, 0.0)).unwrap();
            let rgb = Rgb::from_form(Components(form.red, form.green, form.blue)).unwrap();
            assert!(
                (rgb.red as i16 - channel as i16).abs() <= 1,
                "channel {} came back as {}",
                channel,
                rgb.red
            );
        }
    }

    #[test]
    fn round_trip_exact_at_channel_bounds() {
        let form = FormColor::from_rgb(Components(0.0, 255.0, 0.0)).unwrap();
        let rgb = Rgb::from_form(Components(form.red, form.green, form.blue)).unwrap();
        assert_eq!(rgb, Rgb::new(0, 255, 0));
    }
}
