//! Unit-aware text input for the engine's pressure and temperature.
//!
//! Parses values such as `"14.7 psi"`, `"2 bar"`, `"59F"` and converts them to
//! the engine's input units: PSI for pressure, °C for temperature. A bare
//! number is taken to already be in the input unit.
//!
//! Physical range checks (absolute zero) are left to the engine so there is one
//! place that decides what a valid state is. Negative absolute pressure is the
//! exception, since gauge units make it easy to produce by accident.

use gd_core::units::constants::{PSI_PER_ATM, ZERO_CELSIUS_K};
use gd_core::units::{atm_to_psi, ensure_absolute_pressure};
use std::fmt;

const PA_PER_ATM: f64 = 101_325.0;

/// Quantity family for a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Absolute pressure (canonical: PSI)
    Pressure,
    /// Temperature (canonical: °C)
    Temperature,
}

impl Quantity {
    pub fn canonical_unit(self) -> &'static str {
        match self {
            Self::Pressure => "psi",
            Self::Temperature => "°C",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "Pressure"),
            Self::Temperature => write!(f, "Temperature"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Value out of physical range
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Parse a quantity value from user input text into the engine's input unit.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Temperature => parse_temperature(trimmed),
    }
}

/// Parse pressure, return absolute PSI.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let psi = match unit.to_lowercase().as_str() {
        "" | "psi" | "psia" => value,
        "psig" => value + PSI_PER_ATM, // gauge -> absolute
        "atm" => atm_to_psi(value),
        "bar" => atm_to_psi(value * 1e5 / PA_PER_ATM),
        "mbar" => atm_to_psi(value * 100.0 / PA_PER_ATM),
        "kpa" => atm_to_psi(value * 1e3 / PA_PER_ATM),
        "pa" => atm_to_psi(value / PA_PER_ATM),
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    ensure_absolute_pressure(psi, "psi").map_err(|_| UnitError::OutOfRange {
        value: psi,
        reason: "Absolute pressure cannot be negative".to_string(),
    })
}

/// Parse temperature, return °C.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let celsius = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "degc" | "celsius" => value,
        "f" | "°f" | "degf" | "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "k" | "kelvin" => value - ZERO_CELSIUS_K,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    Ok(celsius)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "14.7 psi" -> (14.7, "psi")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Numeric part: digits, sign, decimal point, and an exponent marker only
    // when followed by a digit or sign (so "1e5" parses but "5 degC" does not
    // swallow the 'e').
    let bytes = trimmed.as_bytes();
    let mut split_idx = trimmed.len();
    for (i, &b) in bytes.iter().enumerate() {
        let is_num = b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+';
        let is_exp = (b == b'e' || b == b'E')
            && i > 0
            && bytes
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        if !is_num && !is_exp {
            split_idx = i;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}
