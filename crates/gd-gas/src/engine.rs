//! Ideal-gas density engine.
//!
//! Converts the caller's PSI / °C inputs to atm / K, applies the ideal gas law
//! per component, and combines components under a [`MixingStrategy`].
//!
//! # Mixing strategies
//!
//! - [`MixingStrategy::PartialDensitySum`]: each component's partial density
//!   `P·M_i / (R·T)` is weighted by its mole fraction and summed. This is the
//!   standard ideal-gas mixture result.
//! - [`MixingStrategy::AggregateMolarRatio`]: the sum of the raw component
//!   molar masses over the share-weighted sum of molar volumes. Every ideal
//!   gas occupies the same molar volume `R·T/P` at a given state, so the
//!   volume sum reduces to `Σ x_i` and the result is `P·ΣM_i / (R·T)`. The two
//!   strategies agree for a single gas and diverge for mixtures, where this one
//!   counts every molar mass at full weight. It is kept as-is as a distinct
//!   model.

use crate::composition::{Composition, Mixture};
use crate::error::{GasError, GasResult};
use crate::result::DensityResult;
use crate::validate::MixtureValidator;
use gd_core::units::constants::L_PER_M3;
use gd_core::units::{
    Pressure, Temperature, celsius_to_kelvin, ensure_absolute_pressure, k, psi, psi_to_atm,
};
use gd_core::{CoreError, ensure_finite};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gas constant used by the density calculator [atm·L/(mol·K)].
pub const R_ATM_L: f64 = 0.0821;

/// CODATA gas constant [atm·L/(mol·K)].
pub const R_ATM_L_CODATA: f64 = 0.082_057_366;

/// Rule for combining per-component ideal-gas densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MixingStrategy {
    /// Mole-fraction weighted sum of partial densities.
    #[default]
    PartialDensitySum,
    /// Raw molar-mass sum over share-weighted molar-volume sum.
    AggregateMolarRatio,
}

impl MixingStrategy {
    pub const ALL: [MixingStrategy; 2] = [
        MixingStrategy::PartialDensitySum,
        MixingStrategy::AggregateMolarRatio,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::PartialDensitySum => "partial-density",
            Self::AggregateMolarRatio => "aggregate-ratio",
        }
    }

    /// Density [kg/m³] of an already validated mixture.
    ///
    /// `pressure_atm` must be >= 0 and `temperature_k` > 0.
    fn mix(self, mixture: &Mixture, pressure_atm: f64, temperature_k: f64, r: f64) -> f64 {
        let rt = r * temperature_k;
        match self {
            Self::PartialDensitySum => {
                let kg_per_l: f64 = mixture
                    .components()
                    .iter()
                    .map(|c| {
                        let partial = pressure_atm * c.species.gas.molar_mass_kg() / rt;
                        partial * c.mole_fraction()
                    })
                    .sum();
                kg_per_l * L_PER_M3
            }
            Self::AggregateMolarRatio => {
                let molar_mass_sum: f64 = mixture
                    .components()
                    .iter()
                    .map(|c| c.species.gas.molar_mass_kg())
                    .sum();
                // Molar volume in units of R·T/P: 1 for every ideal gas.
                let molar_volume_sum: f64 = mixture
                    .components()
                    .iter()
                    .map(|c| c.mole_fraction())
                    .sum();
                pressure_atm * molar_mass_sum / (molar_volume_sum * rt) * L_PER_M3
            }
        }
    }
}

impl fmt::Display for MixingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for MixingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "partial-density" | "partial" | "mole-fraction" => Ok(Self::PartialDensitySum),
            "b" | "aggregate-ratio" | "aggregate" => Ok(Self::AggregateMolarRatio),
            other => Err(format!(
                "unknown mixing strategy '{other}' (expected partial-density or aggregate-ratio)"
            )),
        }
    }
}

/// Pressure and temperature in the engine's input units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Absolute pressure [PSI].
    pub pressure_psi: f64,
    /// Temperature [°C].
    pub temperature_c: f64,
}

impl Conditions {
    pub fn new(pressure_psi: f64, temperature_c: f64) -> Self {
        Self {
            pressure_psi,
            temperature_c,
        }
    }

    /// Pressure as a typed quantity.
    pub fn pressure(&self) -> Pressure {
        psi(self.pressure_psi)
    }

    /// Absolute temperature as a typed quantity; fails at or below 0 K.
    pub fn temperature(&self) -> GasResult<Temperature> {
        Ok(k(celsius_to_kelvin(self.temperature_c)?))
    }

    /// Convert to (atm, K), rejecting negative pressure and Kelvin <= 0.
    pub fn absolute(&self) -> GasResult<(f64, f64)> {
        let p = ensure_finite(self.pressure_psi, "pressure")?;
        let t = ensure_finite(self.temperature_c, "temperature")?;
        let p = ensure_absolute_pressure(p, "psi")?;
        let kelvin = celsius_to_kelvin(t)?;
        Ok((psi_to_atm(p), kelvin))
    }
}

/// Engine tuning; serialisable so it can sit in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gas constant [atm·L/(mol·K)].
    pub gas_constant: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gas_constant: R_ATM_L,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> GasResult<()> {
        if !(self.gas_constant.is_finite() && self.gas_constant > 0.0) {
            return Err(GasError::InvalidConfig {
                what: format!(
                    "gas constant must be finite and > 0 (got {})",
                    self.gas_constant
                ),
            });
        }
        Ok(())
    }
}

/// Ideal-gas density calculator. Stateless apart from its configuration.
#[derive(Debug, Clone, Copy)]
pub struct DensityEngine {
    config: EngineConfig,
    validator: MixtureValidator,
}

impl Default for DensityEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DensityEngine {
    /// Build an engine from a configuration that may come from user input.
    pub fn try_new(config: EngineConfig) -> GasResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator: MixtureValidator::default(),
        })
    }

    /// Build an engine from a known-good configuration.
    ///
    /// # Panics
    ///
    /// If the gas constant is not finite and positive; use
    /// [`DensityEngine::try_new`] for configuration read at runtime.
    pub fn new(config: EngineConfig) -> Self {
        match Self::try_new(config) {
            Ok(engine) => engine,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validator(&self) -> &MixtureValidator {
        &self.validator
    }

    pub fn validate(&self, composition: &Composition) -> GasResult<Mixture> {
        self.validator.validate(composition)
    }

    /// Validate `composition` and compute its density at the given state.
    pub fn compute_density(
        &self,
        composition: &Composition,
        pressure_psi: f64,
        temperature_c: f64,
        strategy: MixingStrategy,
    ) -> GasResult<DensityResult> {
        let mixture = self.validate(composition)?;
        self.density_of(
            &mixture,
            Conditions::new(pressure_psi, temperature_c),
            strategy,
        )
    }

    /// Density of a mixture that has already been validated.
    pub fn density_of(
        &self,
        mixture: &Mixture,
        conditions: Conditions,
        strategy: MixingStrategy,
    ) -> GasResult<DensityResult> {
        let (pressure_atm, temperature_k) = conditions.absolute()?;
        let value = strategy.mix(
            mixture,
            pressure_atm,
            temperature_k,
            self.config.gas_constant,
        );
        if !(value.is_finite() && value >= 0.0) {
            return Err(CoreError::Invariant {
                what: "density must be finite and non-negative",
            }
            .into());
        }
        tracing::trace!(
            %strategy,
            pressure_atm,
            temperature_k,
            density_kg_m3 = value,
            "density computed"
        );
        Ok(DensityResult::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn air() -> Composition {
        Composition::new()
            .with("Oxygen", 21.0)
            .with("Nitrogen", 78.0)
            .with("Argon", 1.0)
    }

    #[test]
    fn nitrogen_at_stp_codata_constant() {
        let engine = DensityEngine::new(EngineConfig {
            gas_constant: R_ATM_L_CODATA,
        });
        let rho = engine
            .compute_density(
                &Composition::pure("Nitrogen"),
                14.6959488,
                0.0,
                MixingStrategy::PartialDensitySum,
            )
            .unwrap();
        let rel = (rho.kg_per_m3() - 1.2506).abs() / 1.2506;
        assert!(rel < 1e-3, "rho = {}", rho.kg_per_m3());
    }

    #[test]
    fn nitrogen_at_stp_default_constant() {
        let rho = DensityEngine::default()
            .compute_density(
                &Composition::pure("Nitrogen"),
                14.6959488,
                0.0,
                MixingStrategy::PartialDensitySum,
            )
            .unwrap();
        // 28.0134 / (0.0821 * 273.15)
        assert!((rho.kg_per_m3() - 1.249_167).abs() < 1e-5, "rho = {}", rho.kg_per_m3());
        let rel = (rho.kg_per_m3() - 1.2506).abs() / 1.2506;
        assert!(rel < 1.5e-3);
    }

    #[test]
    fn dry_air_at_sea_level() {
        let rho = DensityEngine::default()
            .compute_density(&air(), 14.6959488, 15.0, MixingStrategy::PartialDensitySum)
            .unwrap();
        let rel = (rho.kg_per_m3() - 1.225).abs() / 1.225;
        assert!(rel < 0.02, "rho = {}", rho.kg_per_m3());
    }

    #[test]
    fn strategies_agree_for_single_gas() {
        let engine = DensityEngine::default();
        for gas in crate::species::Gas::ALL {
            let comp = Composition::from(gas);
            let a = engine
                .compute_density(&comp, 87.0, 42.0, MixingStrategy::PartialDensitySum)
                .unwrap();
            let b = engine
                .compute_density(&comp, 87.0, 42.0, MixingStrategy::AggregateMolarRatio)
                .unwrap();
            let rel = (a.kg_per_m3() - b.kg_per_m3()).abs() / a.kg_per_m3();
            assert!(rel < 1e-12, "{gas}: {} vs {}", a.kg_per_m3(), b.kg_per_m3());
        }
    }

    #[test]
    fn aggregate_ratio_diverges_for_mixtures() {
        let engine = DensityEngine::default();
        let a = engine
            .compute_density(&air(), 14.6959488, 15.0, MixingStrategy::PartialDensitySum)
            .unwrap();
        let b = engine
            .compute_density(&air(), 14.6959488, 15.0, MixingStrategy::AggregateMolarRatio)
            .unwrap();
        // B counts all three molar masses at full weight: 99.9602 g/mol.
        let expected_b = 14.6959488 / 14.6959488 * 0.0999602 / (R_ATM_L * 288.15) * 1000.0;
        assert!((b.kg_per_m3() - expected_b).abs() < 1e-9);
        assert!(b.kg_per_m3() > 3.0 * a.kg_per_m3());
    }

    #[test]
    fn absolute_zero_is_rejected() {
        let err = DensityEngine::default()
            .compute_density(
                &Composition::pure("Oxygen"),
                14.7,
                -300.0,
                MixingStrategy::PartialDensitySum,
            )
            .unwrap_err();
        assert!(matches!(err, GasError::InvalidTemperature { kelvin } if kelvin < 0.0));
    }

    #[test]
    fn validation_runs_before_conversion() {
        let comp = Composition::new().with("Oxygen", 60.0).with("Nitrogen", 30.0);
        let err = DensityEngine::default()
            .compute_density(&comp, 14.7, -300.0, MixingStrategy::AggregateMolarRatio)
            .unwrap_err();
        assert!(matches!(err, GasError::CompositionSum { .. }));
    }

    #[test]
    fn negative_pressure_is_rejected() {
        let err = DensityEngine::default()
            .compute_density(
                &Composition::pure("Argon"),
                -1.0,
                20.0,
                MixingStrategy::PartialDensitySum,
            )
            .unwrap_err();
        assert!(matches!(err, GasError::InvalidPressure { .. }));
    }

    #[test]
    fn zero_pressure_gives_zero_density() {
        let rho = DensityEngine::default()
            .compute_density(
                &Composition::pure("Argon"),
                0.0,
                20.0,
                MixingStrategy::PartialDensitySum,
            )
            .unwrap();
        assert_eq!(rho.kg_per_m3(), 0.0);
    }

    #[test]
    fn conditions_as_typed_quantities() {
        use uom::si::pressure::{atmosphere, pascal};
        use uom::si::thermodynamic_temperature::kelvin;

        let stp = Conditions::new(14.6959488, 0.0);
        assert!((stp.pressure().get::<atmosphere>() - 1.0).abs() < 1e-6);
        assert!((stp.pressure().get::<pascal>() - 101_325.0).abs() < 0.1);
        assert!((stp.temperature().unwrap().get::<kelvin>() - 273.15).abs() < 1e-12);

        let err = Conditions::new(14.7, -300.0).temperature().unwrap_err();
        assert!(matches!(err, GasError::InvalidTemperature { .. }));
    }

    #[test]
    fn bad_gas_constant_is_an_error() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = DensityEngine::try_new(EngineConfig { gas_constant: r }).unwrap_err();
            assert!(matches!(err, GasError::InvalidConfig { .. }), "r = {r}");
        }
        assert!(DensityEngine::try_new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("A".parse::<MixingStrategy>().unwrap(), MixingStrategy::PartialDensitySum);
        assert_eq!(
            "aggregate-ratio".parse::<MixingStrategy>().unwrap(),
            MixingStrategy::AggregateMolarRatio
        );
        assert!("vdw".parse::<MixingStrategy>().is_err());
        for s in MixingStrategy::ALL {
            assert_eq!(s.key().parse::<MixingStrategy>().unwrap(), s);
        }
    }
}
