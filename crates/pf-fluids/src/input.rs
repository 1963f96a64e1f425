//! Text input boundary.
//!
//! Parses and range-checks operator-entered numbers before they reach the
//! engines. The engines themselves never re-validate: anything that gets past
//! this boundary is computed on as-is. Decimal commas are accepted because
//! cargo paperwork in much of the world uses them.

use pf_core::units::{Density, Mass, Temperature, Volume, celsius, kg, kgl, liters};
use thiserror::Error;

/// Valid cargo density range, kg/l.
pub const DENSITY_RANGE_KG_L: (f64, f64) = (0.60, 1.10);

/// Valid cargo temperature range, °C.
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-50.0, 80.0);

/// Errors surfaced while parsing operator-entered numbers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("field '{field}' is empty")]
    Empty { field: String },

    #[error("field '{field}' is not a number")]
    NotANumber { field: String },

    #[error("field '{field}' must be within {min} to {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    #[error("field '{field}' must be greater than zero")]
    NotPositive { field: String },
}

impl InputError {
    /// Name of the offending field, for presentation layers.
    pub fn field(&self) -> &str {
        match self {
            Self::Empty { field }
            | Self::NotANumber { field }
            | Self::OutOfRange { field, .. }
            | Self::NotPositive { field } => field,
        }
    }
}

impl From<InputError> for pf_core::PfError {
    fn from(err: InputError) -> Self {
        pf_core::PfError::InvalidInput {
            what: err.to_string(),
        }
    }
}

/// Parse a plain number, accepting a decimal comma.
pub fn parse_number(text: &str, field: &str) -> Result<f64, InputError> {
    let clean = text.trim().replace(',', ".");
    if clean.is_empty() {
        return Err(InputError::Empty {
            field: field.to_string(),
        });
    }

    let value: f64 = clean.parse().map_err(|_| InputError::NotANumber {
        field: field.to_string(),
    })?;

    // "NaN" and "inf" parse as f64 but are never a measurement.
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            field: field.to_string(),
        });
    }

    Ok(value)
}

fn parse_in_range(text: &str, field: &str, min: f64, max: f64) -> Result<f64, InputError> {
    let value = parse_number(text, field)?;
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }
    Ok(value)
}

fn parse_positive(text: &str, field: &str) -> Result<f64, InputError> {
    let value = parse_number(text, field)?;
    if value <= 0.0 {
        return Err(InputError::NotPositive {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Density in kg/l, checked against [`DENSITY_RANGE_KG_L`].
pub fn parse_density(text: &str, field: &str) -> Result<Density, InputError> {
    let (min, max) = DENSITY_RANGE_KG_L;
    parse_in_range(text, field, min, max).map(kgl)
}

/// Temperature in °C, checked against [`TEMPERATURE_RANGE_C`].
pub fn parse_temperature(text: &str, field: &str) -> Result<Temperature, InputError> {
    let (min, max) = TEMPERATURE_RANGE_C;
    parse_in_range(text, field, min, max).map(celsius)
}

/// Mass in kilograms, must be positive.
pub fn parse_mass(text: &str, field: &str) -> Result<Mass, InputError> {
    parse_positive(text, field).map(kg)
}

/// Volume in liters, must be positive.
pub fn parse_volume(text: &str, field: &str) -> Result<Volume, InputError> {
    parse_positive(text, field).map(liters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::mass::kilogram;
    use uom::si::mass_density::kilogram_per_cubic_meter;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn plain_number_parses() {
        assert_eq!(parse_number("0.85", "density").unwrap(), 0.85);
        assert_eq!(parse_number("  -12.5 ", "temperature").unwrap(), -12.5);
    }

    #[test]
    fn decimal_comma_accepted() {
        assert_eq!(parse_number("0,846", "density").unwrap(), 0.846);
    }

    #[test]
    fn empty_field_reported_by_name() {
        let err = parse_number("   ", "mass").unwrap_err();
        assert_eq!(err, InputError::Empty { field: "mass".into() });
        assert_eq!(err.field(), "mass");
    }

    #[test]
    fn garbage_is_not_a_number() {
        let err = parse_number("abc", "mass").unwrap_err();
        assert!(matches!(err, InputError::NotANumber { .. }));
    }

    #[test]
    fn non_finite_text_rejected() {
        assert!(matches!(
            parse_number("NaN", "mass").unwrap_err(),
            InputError::NotANumber { .. }
        ));
        assert!(matches!(
            parse_number("inf", "mass").unwrap_err(),
            InputError::NotANumber { .. }
        ));
    }

    #[test]
    fn density_range_enforced() {
        let rho = parse_density("0.846", "density").unwrap();
        assert!((rho.get::<kilogram_per_cubic_meter>() - 846.0).abs() < 1e-9);

        assert!(matches!(
            parse_density("0.5", "density").unwrap_err(),
            InputError::OutOfRange { .. }
        ));
        assert!(matches!(
            parse_density("1.2", "density").unwrap_err(),
            InputError::OutOfRange { .. }
        ));
    }

    #[test]
    fn temperature_range_enforced() {
        let t = parse_temperature("-40", "temperature").unwrap();
        assert!((t.get::<degree_celsius>() + 40.0).abs() < 1e-9);

        assert!(parse_temperature("-51", "temperature").is_err());
        assert!(parse_temperature("80.5", "temperature").is_err());
    }

    #[test]
    fn mass_must_be_positive() {
        let m = parse_mass("3200000", "mass").unwrap();
        assert!((m.get::<kilogram>() - 3_200_000.0).abs() < 1e-6);

        assert!(matches!(
            parse_mass("0", "mass").unwrap_err(),
            InputError::NotPositive { .. }
        ));
        assert!(matches!(
            parse_mass("-10", "mass").unwrap_err(),
            InputError::NotPositive { .. }
        ));
    }

    #[test]
    fn volume_must_be_positive() {
        assert!(parse_volume("50000", "volume").is_ok());
        assert!(parse_volume("0", "volume").is_err());
    }

    #[test]
    fn errors_convert_to_workspace_error() {
        let err: pf_core::PfError = parse_mass("", "mass").unwrap_err().into();
        assert!(err.to_string().contains("mass"));
    }
}
