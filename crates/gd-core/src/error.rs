use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Absolute temperature must be > 0 K (got {kelvin} K)")]
    NonPositiveTemperature { kelvin: f64 },

    #[error("Absolute pressure cannot be negative (got {value} {unit})")]
    NegativePressure { value: f64, unit: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
