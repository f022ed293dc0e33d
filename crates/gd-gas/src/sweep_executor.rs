//! 1D sweep execution: density along one axis with the other input held fixed.

use crate::composition::Composition;
use crate::engine::{Conditions, DensityEngine, MixingStrategy};
use crate::error::{GasError, GasResult};
use crate::species::Gas;
use crate::sweeps::{SweepAxis, SweepDefinition};
use serde::Serialize;

/// Result of a density sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepResult {
    pub definition: SweepDefinition,
    pub strategy: MixingStrategy,
    /// Value of the input that was held fixed (PSI or °C).
    pub fixed_value: f64,
    /// Swept input values, in sweep order.
    pub independent_values: Vec<f64>,
    /// Densities [kg/m³], one per independent value.
    pub density_kg_m3: Vec<f64>,
}

impl SweepResult {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.independent_values
            .iter()
            .copied()
            .zip(self.density_kg_m3.iter().copied())
    }
}

/// Run `sweep` for `composition`, holding the other input at `fixed_value`.
///
/// The composition is validated once. Any point failing conversion (e.g. a
/// temperature at or below absolute zero) fails the whole sweep.
pub fn execute_sweep(
    engine: &DensityEngine,
    composition: &Composition,
    sweep: &SweepDefinition,
    fixed_value: f64,
    strategy: MixingStrategy,
) -> GasResult<SweepResult> {
    let mixture = engine.validate(composition)?;
    let values = sweep.generate_points();

    let density_kg_m3 = values
        .iter()
        .map(|&v| {
            let conditions = match sweep.axis {
                SweepAxis::Pressure => Conditions::new(v, fixed_value),
                SweepAxis::Temperature => Conditions::new(fixed_value, v),
            };
            engine
                .density_of(&mixture, conditions, strategy)
                .map(|r| r.kg_per_m3())
        })
        .collect::<GasResult<Vec<f64>>>()?;

    tracing::debug!(%sweep, %strategy, fixed_value, "sweep executed");

    Ok(SweepResult {
        definition: *sweep,
        strategy,
        fixed_value,
        independent_values: values,
        density_kg_m3,
    })
}

/// Density along pressure at a fixed temperature [°C].
pub fn execute_pressure_sweep_at_temperature(
    engine: &DensityEngine,
    gas: Gas,
    sweep: &SweepDefinition,
    fixed_temperature_c: f64,
) -> GasResult<SweepResult> {
    expect_axis(sweep, SweepAxis::Pressure)?;
    execute_sweep(
        engine,
        &Composition::from(gas),
        sweep,
        fixed_temperature_c,
        MixingStrategy::default(),
    )
}

/// Density along temperature at a fixed pressure [PSI].
pub fn execute_temperature_sweep_at_pressure(
    engine: &DensityEngine,
    gas: Gas,
    sweep: &SweepDefinition,
    fixed_pressure_psi: f64,
) -> GasResult<SweepResult> {
    expect_axis(sweep, SweepAxis::Temperature)?;
    execute_sweep(
        engine,
        &Composition::from(gas),
        sweep,
        fixed_pressure_psi,
        MixingStrategy::default(),
    )
}

fn expect_axis(sweep: &SweepDefinition, axis: SweepAxis) -> GasResult<()> {
    if sweep.axis != axis {
        return Err(GasError::InvalidGrid {
            what: format!("expected a {axis:?} sweep, got {sweep}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweeps::AxisRange;

    #[test]
    fn pressure_sweep_is_linear_in_pressure() {
        let engine = DensityEngine::default();
        let sweep = SweepDefinition::new(SweepAxis::Pressure, AxisRange::new(0.0, 200.0), 5)
            .unwrap();
        let result =
            execute_pressure_sweep_at_temperature(&engine, Gas::Nitrogen, &sweep, 20.0).unwrap();

        assert_eq!(result.independent_values.len(), 5);
        assert_eq!(result.density_kg_m3[0], 0.0);
        let ratio = result.density_kg_m3[4] / result.density_kg_m3[2];
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn temperature_sweep_decreases() {
        let engine = DensityEngine::default();
        let sweep =
            SweepDefinition::new(SweepAxis::Temperature, AxisRange::new(0.0, 80.0), 10).unwrap();
        let result =
            execute_temperature_sweep_at_pressure(&engine, Gas::Methane, &sweep, 50.0).unwrap();

        assert!(result.density_kg_m3.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(result.points().count(), 10);
    }

    #[test]
    fn helpers_reject_the_wrong_axis() {
        let engine = DensityEngine::default();
        let temperature_sweep =
            SweepDefinition::new(SweepAxis::Temperature, AxisRange::new(0.0, 80.0), 3).unwrap();
        let err =
            execute_pressure_sweep_at_temperature(&engine, Gas::Nitrogen, &temperature_sweep, 20.0)
                .unwrap_err();
        assert!(matches!(err, GasError::InvalidGrid { .. }));

        let pressure_sweep =
            SweepDefinition::new(SweepAxis::Pressure, AxisRange::new(0.0, 200.0), 3).unwrap();
        let err =
            execute_temperature_sweep_at_pressure(&engine, Gas::Nitrogen, &pressure_sweep, 14.7)
                .unwrap_err();
        assert!(matches!(err, GasError::InvalidGrid { .. }));
    }

    #[test]
    fn sweep_below_absolute_zero_fails() {
        let engine = DensityEngine::default();
        let sweep = SweepDefinition::new(
            SweepAxis::Temperature,
            AxisRange::new(-400.0, 0.0),
            3,
        )
        .unwrap();
        let err = execute_temperature_sweep_at_pressure(&engine, Gas::Argon, &sweep, 14.7)
            .unwrap_err();
        assert!(matches!(err, GasError::InvalidTemperature { .. }));
    }
}
