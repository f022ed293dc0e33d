//! Pressure × temperature density lattice for surface plots.

use crate::composition::{Composition, Mixture};
use crate::engine::{Conditions, DensityEngine, MixingStrategy};
use crate::error::{GasError, GasResult};
use crate::result::DensityResult;
use crate::sweeps::AxisRange;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Grid domain and sampling, with the density calculator's slider bounds as
/// defaults: 0 to 200 PSI, 0 to 80 °C, 100 samples per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pressure axis [PSI].
    pub pressure_range: AxisRange,
    /// Temperature axis [°C].
    pub temperature_range: AxisRange,
    /// Samples per axis.
    pub resolution: usize,
    /// Fractional padding above the maximum density for plot axes.
    pub headroom: f64,
    /// Evaluate pressure rows on the rayon pool.
    pub parallel: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            pressure_range: AxisRange::default_pressure(),
            temperature_range: AxisRange::default_temperature(),
            resolution: 100,
            headroom: 0.1,
            parallel: true,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> GasResult<()> {
        if self.resolution < 2 {
            return Err(GasError::InvalidGrid {
                what: format!("resolution must be at least 2 (got {})", self.resolution),
            });
        }
        if !(self.headroom.is_finite() && self.headroom >= 0.0) {
            return Err(GasError::InvalidGrid {
                what: format!("headroom must be finite and >= 0 (got {})", self.headroom),
            });
        }
        self.pressure_range.check("pressure")?;
        self.temperature_range.check("temperature")?;
        Ok(())
    }
}

/// The caller's exact point on (or off) the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    pub pressure_psi: f64,
    pub temperature_c: f64,
    pub density: DensityResult,
}

/// Density lattice plus the highlighted point.
///
/// `values[i][j]` is the density [kg/m³] at `pressures_psi[i]`,
/// `temperatures_c[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityField {
    pub strategy: MixingStrategy,
    pub pressures_psi: Vec<f64>,
    pub temperatures_c: Vec<f64>,
    pub values: Vec<Vec<f64>>,
    pub highlight: GridPoint,
    /// Largest density in the lattice or at the highlighted point.
    pub max_value: f64,
    pub headroom: f64,
}

impl DensityField {
    /// Cell count (rows × columns).
    pub fn len(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn value_at(&self, pressure_idx: usize, temperature_idx: usize) -> Option<f64> {
        self.values.get(pressure_idx)?.get(temperature_idx).copied()
    }

    /// Upper bound for a density axis: `max_value` padded by `headroom`.
    pub fn axis_upper_bound(&self) -> f64 {
        self.max_value * (1.0 + self.headroom)
    }

    /// Iterate `(pressure_psi, temperature_c, density_kg_m3)` in row order.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.pressures_psi
            .iter()
            .zip(&self.values)
            .flat_map(move |(&p, row)| {
                self.temperatures_c
                    .iter()
                    .zip(row)
                    .map(move |(&t, &rho)| (p, t, rho))
            })
    }
}

/// Samples a [`DensityEngine`] over a [`GridConfig`] domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEvaluator {
    engine: DensityEngine,
    config: GridConfig,
}

impl GridEvaluator {
    pub fn new(engine: DensityEngine, config: GridConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Validate the composition once, then evaluate every lattice cell and the
    /// caller's `point`.
    pub fn evaluate(
        &self,
        composition: &Composition,
        point: Conditions,
        strategy: MixingStrategy,
    ) -> GasResult<DensityField> {
        self.config.validate()?;
        let mixture = self.engine.validate(composition)?;
        let highlight = self.engine.density_of(&mixture, point, strategy)?;

        let n = self.config.resolution;
        let pressures = self.config.pressure_range.generate_points(n);
        let temperatures = self.config.temperature_range.generate_points(n);

        let values = if self.config.parallel {
            pressures
                .par_iter()
                .map(|&p| self.row(&mixture, p, &temperatures, strategy))
                .collect::<GasResult<Vec<_>>>()?
        } else {
            pressures
                .iter()
                .map(|&p| self.row(&mixture, p, &temperatures, strategy))
                .collect::<GasResult<Vec<_>>>()?
        };

        let max_value = values
            .iter()
            .flatten()
            .copied()
            .fold(highlight.kg_per_m3(), f64::max);

        tracing::debug!(
            resolution = n,
            %strategy,
            parallel = self.config.parallel,
            max_value,
            "density grid evaluated"
        );

        Ok(DensityField {
            strategy,
            pressures_psi: pressures,
            temperatures_c: temperatures,
            values,
            highlight: GridPoint {
                pressure_psi: point.pressure_psi,
                temperature_c: point.temperature_c,
                density: highlight,
            },
            max_value,
            headroom: self.config.headroom,
        })
    }

    fn row(
        &self,
        mixture: &Mixture,
        pressure_psi: f64,
        temperatures: &[f64],
        strategy: MixingStrategy,
    ) -> GasResult<Vec<f64>> {
        temperatures
            .iter()
            .map(|&t| {
                self.engine
                    .density_of(mixture, Conditions::new(pressure_psi, t), strategy)
                    .map(|r| r.kg_per_m3())
            })
            .collect()
    }
}

/// One-shot grid evaluation over explicit ranges.
pub fn evaluate_grid(
    engine: &DensityEngine,
    composition: &Composition,
    pressure_range: AxisRange,
    temperature_range: AxisRange,
    resolution: usize,
    point: Conditions,
    strategy: MixingStrategy,
) -> GasResult<DensityField> {
    let config = GridConfig {
        pressure_range,
        temperature_range,
        resolution,
        ..GridConfig::default()
    };
    GridEvaluator::new(*engine, config).evaluate(composition, point, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(resolution: usize, parallel: bool) -> GridConfig {
        GridConfig {
            resolution,
            parallel,
            ..GridConfig::default()
        }
    }

    #[test]
    fn default_config_matches_calculator() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.pressure_range, AxisRange::new(0.0, 200.0));
        assert_eq!(cfg.temperature_range, AxisRange::new(0.0, 80.0));
        assert_eq!(cfg.resolution, 100);
        assert_eq!(cfg.headroom, 0.1);
    }

    #[test]
    fn field_shape_and_endpoints() {
        let eval = GridEvaluator::new(DensityEngine::default(), small_config(7, false));
        let field = eval
            .evaluate(
                &Composition::pure("Nitrogen"),
                Conditions::new(100.0, 25.0),
                MixingStrategy::PartialDensitySum,
            )
            .unwrap();

        assert_eq!(field.len(), 49);
        assert_eq!(field.values.len(), 7);
        assert!(field.values.iter().all(|row| row.len() == 7));
        assert_eq!(field.pressures_psi.first(), Some(&0.0));
        assert_eq!(field.pressures_psi.last(), Some(&200.0));
        assert_eq!(field.temperatures_c.first(), Some(&0.0));
        assert_eq!(field.temperatures_c.last(), Some(&80.0));
    }

    #[test]
    fn max_sits_at_high_pressure_low_temperature() {
        let eval = GridEvaluator::new(DensityEngine::default(), small_config(5, false));
        let field = eval
            .evaluate(
                &Composition::pure("Chlorine"),
                Conditions::new(10.0, 40.0),
                MixingStrategy::PartialDensitySum,
            )
            .unwrap();

        assert_eq!(field.value_at(4, 0), Some(field.max_value));
        assert!((field.axis_upper_bound() - field.max_value * 1.1).abs() < 1e-12);
        assert_eq!(field.value_at(5, 0), None);
    }

    #[test]
    fn parallel_matches_sequential() {
        let comp = Composition::new()
            .with("Methane", 90.0)
            .with("Carbon Dioxide", 10.0);
        let point = Conditions::new(55.0, 12.0);
        let seq = GridEvaluator::new(DensityEngine::default(), small_config(9, false))
            .evaluate(&comp, point, MixingStrategy::AggregateMolarRatio)
            .unwrap();
        let par = GridEvaluator::new(DensityEngine::default(), small_config(9, true))
            .evaluate(&comp, point, MixingStrategy::AggregateMolarRatio)
            .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn highlight_matches_direct_computation() {
        let engine = DensityEngine::default();
        let comp = Composition::pure("Hydrogen");
        let field = evaluate_grid(
            &engine,
            &comp,
            AxisRange::new(0.0, 50.0),
            AxisRange::new(10.0, 30.0),
            3,
            Conditions::new(33.0, 17.0),
            MixingStrategy::PartialDensitySum,
        )
        .unwrap();
        let direct = engine
            .compute_density(&comp, 33.0, 17.0, MixingStrategy::PartialDensitySum)
            .unwrap();
        assert_eq!(field.highlight.density, direct);
        assert_eq!(field.cells().count(), 9);
    }

    #[test]
    fn rejects_bad_resolution_and_ranges() {
        let comp = Composition::pure("Argon");
        let point = Conditions::new(14.7, 20.0);
        let err = GridEvaluator::new(DensityEngine::default(), small_config(1, false))
            .evaluate(&comp, point, MixingStrategy::PartialDensitySum)
            .unwrap_err();
        assert!(matches!(err, GasError::InvalidGrid { .. }));

        let cfg = GridConfig {
            temperature_range: AxisRange::new(80.0, 0.0),
            ..small_config(4, false)
        };
        let err = GridEvaluator::new(DensityEngine::default(), cfg)
            .evaluate(&comp, point, MixingStrategy::PartialDensitySum)
            .unwrap_err();
        assert!(matches!(err, GasError::InvalidGrid { .. }));
    }

    #[test]
    fn lattice_below_absolute_zero_fails() {
        let cfg = GridConfig {
            temperature_range: AxisRange::new(-300.0, 0.0),
            ..small_config(4, true)
        };
        let err = GridEvaluator::new(DensityEngine::default(), cfg)
            .evaluate(
                &Composition::pure("Oxygen"),
                Conditions::new(14.7, 20.0),
                MixingStrategy::PartialDensitySum,
            )
            .unwrap_err();
        assert!(matches!(err, GasError::InvalidTemperature { .. }));
    }

    #[test]
    fn config_round_trips_through_json_with_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"resolution": 25}"#).unwrap();
        assert_eq!(cfg.resolution, 25);
        assert_eq!(cfg.pressure_range, AxisRange::default_pressure());
        assert!(cfg.parallel);
    }
}
