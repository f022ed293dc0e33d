//! Gas density errors.

use gd_core::CoreError;
use thiserror::Error;

/// Result type for gas density operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur while validating a mixture or computing a density.
///
/// Every variant except `Invariant` is a caller-input problem; none of them are
/// transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Gas name is not in the gas table.
    #[error("Unknown gas: {name}")]
    UnknownGas { name: String },

    /// Same gas listed more than once (aliases count as the same gas).
    #[error("Duplicate component: {name}")]
    DuplicateComponent { name: String },

    /// Shares do not add up to 100%.
    #[error("Composition shares sum to {sum}%, expected 100%")]
    CompositionSum { sum: f64 },

    /// No gases given.
    #[error("Composition is empty")]
    EmptyComposition,

    /// Share below zero.
    #[error("Negative share for {name}: {share}%")]
    NegativeShare { name: String, share: f64 },

    /// NaN or infinite input.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Temperature at or below absolute zero.
    #[error("Invalid temperature: {kelvin} K is at or below absolute zero")]
    InvalidTemperature { kelvin: f64 },

    /// Negative absolute pressure.
    #[error("Invalid pressure: {psi} PSI")]
    InvalidPressure { psi: f64 },

    /// Grid configuration cannot be sampled.
    #[error("Invalid grid: {what}")]
    InvalidGrid { what: String },

    /// Engine configuration out of range.
    #[error("Invalid engine config: {what}")]
    InvalidConfig { what: String },

    /// Programmer error (e.g. corrupted constant table).
    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

impl From<CoreError> for GasError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => GasError::NonFinite { what, value },
            CoreError::NonPositiveTemperature { kelvin } => GasError::InvalidTemperature { kelvin },
            CoreError::NegativePressure { value, .. } => GasError::InvalidPressure { psi: value },
            CoreError::Invariant { what } => GasError::Invariant { what },
        }
    }
}
