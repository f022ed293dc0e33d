//! Axis sampling for density sweeps and grids.
//!
//! An [`AxisRange`] is a closed interval in the engine's input units (PSI or
//! °C). Samples are linearly spaced and always include both endpoints.

use crate::error::{GasError, GasResult};
use crate::units::{Quantity, parse_quantity};
use gd_core::numeric::linspace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[start, end]` sampled at evenly spaced points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Default pressure axis [PSI].
    pub const fn default_pressure() -> Self {
        Self::new(0.0, 200.0)
    }

    /// Default temperature axis [°C].
    pub const fn default_temperature() -> Self {
        Self::new(0.0, 80.0)
    }

    /// Build a range from user text (e.g. `"0 psi"`, `"2 bar"`).
    pub fn from_text(start_raw: &str, end_raw: &str, quantity: Quantity) -> GasResult<Self> {
        let parse = |raw: &str, which: &str| {
            parse_quantity(raw, quantity).map_err(|e| GasError::InvalidGrid {
                what: format!("{which} value error: {e}"),
            })
        };
        let range = Self::new(parse(start_raw, "Start")?, parse(end_raw, "End")?);
        range.check(quantity_axis_name(quantity))?;
        Ok(range)
    }

    /// Reject non-finite bounds and empty or reversed intervals.
    pub fn check(&self, axis: &str) -> GasResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GasError::InvalidGrid {
                what: format!("{axis} range bounds must be finite"),
            });
        }
        if self.start >= self.end {
            return Err(GasError::InvalidGrid {
                what: format!(
                    "{axis} range start ({}) must be below end ({})",
                    self.start, self.end
                ),
            });
        }
        Ok(())
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.start..=self.end).contains(&v)
    }

    /// Generate `num_points` samples, endpoints included exactly.
    pub fn generate_points(&self, num_points: usize) -> Vec<f64> {
        linspace(self.start, self.end, num_points)
    }
}

fn quantity_axis_name(quantity: Quantity) -> &'static str {
    match quantity {
        Quantity::Pressure => "pressure",
        Quantity::Temperature => "temperature",
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Which input a 1D sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepAxis {
    /// Vary pressure at a fixed temperature.
    Pressure,
    /// Vary temperature at a fixed pressure.
    Temperature,
}

impl SweepAxis {
    pub fn quantity(self) -> Quantity {
        match self {
            Self::Pressure => Quantity::Pressure,
            Self::Temperature => Quantity::Temperature,
        }
    }
}

/// Definition of a single-parameter sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub axis: SweepAxis,
    pub range: AxisRange,
    pub num_points: usize,
}

impl SweepDefinition {
    pub fn new(axis: SweepAxis, range: AxisRange, num_points: usize) -> GasResult<Self> {
        if num_points < 2 {
            return Err(GasError::InvalidGrid {
                what: "Sweep must have at least 2 points".to_string(),
            });
        }
        range.check(quantity_axis_name(axis.quantity()))?;
        Ok(Self {
            axis,
            range,
            num_points,
        })
    }

    pub fn generate_points(&self) -> Vec<f64> {
        self.range.generate_points(self.num_points)
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} over {} {} ({} points)",
            self.axis.quantity(),
            self.range,
            self.axis.quantity().canonical_unit(),
            self.num_points
        )
    }
}
