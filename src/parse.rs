//! Parsing of comma-separated color triples.

use crate::{Component, Components, ParseColorError};

/// Parse a line like `255, 150, 0` into its three numeric components.
///
/// Fields are split on commas and surrounding whitespace is ignored. The
/// values are not checked against either channel domain here; that is left
/// to the conversions.
pub fn parse_triple(input: &str) -> Result<Components, ParseColorError> {
    let fields: Vec<&str> = input.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ParseColorError::FieldCount(fields.len()));
    }

    let mut values: [Component; 3] = [0.0; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = match field.parse::<Component>() {
            Ok(parsed) if !parsed.is_nan() => parsed,
            _ => return Err(ParseColorError::NotANumber(field.to_string())),
        };
    }

    Ok(Components(values[0], values[1], values[2]))
}
