// gd-core/src/units.rs

use crate::error::{CoreError, CoreResult};
use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Fixed conversion factors used by the density engine.
///
/// These are the exact figures the engine is defined against; they are
/// deliberately not derived from `uom`'s own unit definitions.
pub mod constants {
    /// PSI per standard atmosphere.
    pub const PSI_PER_ATM: f64 = 14.695_948_8;
    /// Offset between Celsius and Kelvin.
    pub const ZERO_CELSIUS_K: f64 = 273.15;
    /// Kilograms per pound (avoirdupois).
    pub const KG_PER_LB: f64 = 0.453_592;
    /// Litres per cubic foot.
    pub const L_PER_FT3: f64 = 28.316_8;
    /// Litres per US gallon.
    pub const L_PER_GAL: f64 = 3.785_41;
    /// Litres per cubic metre.
    pub const L_PER_M3: f64 = 1000.0;
}

use constants::*;

/// Reject NaN and negative absolute pressures; zero is allowed.
pub fn ensure_absolute_pressure(value: f64, unit: &'static str) -> CoreResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(CoreError::NegativePressure { value, unit });
    }
    Ok(value)
}

pub fn psi_to_atm(psi: f64) -> f64 {
    psi / PSI_PER_ATM
}

pub fn atm_to_psi(atm: f64) -> f64 {
    atm * PSI_PER_ATM
}

/// Convert Celsius to Kelvin, rejecting results at or below absolute zero.
pub fn celsius_to_kelvin(c: f64) -> CoreResult<f64> {
    let kelvin = c + ZERO_CELSIUS_K;
    if kelvin.is_nan() || kelvin <= 0.0 {
        return Err(CoreError::NonPositiveTemperature { kelvin });
    }
    Ok(kelvin)
}

/// kg/m³ to g/L.
///
/// The two units are numerically identical, so this is the identity. Only the
/// label changes.
pub fn kg_per_m3_to_g_per_l(d: f64) -> f64 {
    d
}

pub fn kg_per_m3_to_kg_per_l(d: f64) -> f64 {
    d / L_PER_M3
}

pub fn kg_per_m3_to_lb_per_ft3(d: f64) -> f64 {
    d * KG_PER_LB / L_PER_FT3
}

pub fn kg_per_m3_to_lb_per_gal(d: f64) -> f64 {
    d * KG_PER_LB / L_PER_GAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::atmosphere,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn constructors_smoke() {
        let p = psi(PSI_PER_ATM);
        assert!((p.get::<atmosphere>() - 1.0).abs() < 1e-6);
        let t = k(273.15);
        assert!(t.get::<degree_celsius>().abs() < 1e-9);
        let rho = kg_per_m3(1.225);
        assert_eq!(rho.get::<kilogram_per_cubic_meter>(), 1.225);
    }

    #[test]
    fn psi_atm_round_trip() {
        assert_eq!(psi_to_atm(14.6959488), 1.0);
        assert!((atm_to_psi(psi_to_atm(87.0)) - 87.0).abs() < 1e-12);
    }

    #[test]
    fn celsius_to_kelvin_offsets() {
        assert_eq!(celsius_to_kelvin(0.0).unwrap(), 273.15);
        assert!((celsius_to_kelvin(15.0).unwrap() - 288.15).abs() < 1e-12);
    }

    #[test]
    fn celsius_to_kelvin_rejects_absolute_zero_and_below() {
        assert!(matches!(
            celsius_to_kelvin(-273.15),
            Err(CoreError::NonPositiveTemperature { .. })
        ));
        assert!(celsius_to_kelvin(-300.0).is_err());
        assert!(celsius_to_kelvin(f64::NAN).is_err());
    }

    #[test]
    fn absolute_pressure_allows_zero_only_upwards() {
        assert_eq!(ensure_absolute_pressure(0.0, "psi").unwrap(), 0.0);
        assert!(matches!(
            ensure_absolute_pressure(-1.0, "psi"),
            Err(CoreError::NegativePressure { unit: "psi", .. })
        ));
    }

    #[test]
    fn g_per_l_is_identity() {
        assert_eq!(kg_per_m3_to_g_per_l(1.2506), 1.2506);
    }

    #[test]
    fn imperial_density_views() {
        assert!((kg_per_m3_to_lb_per_ft3(1000.0) - 16.018).abs() < 1e-2);
        assert!((kg_per_m3_to_lb_per_gal(1000.0) - 119.826).abs() < 1e-2);
        assert_eq!(kg_per_m3_to_kg_per_l(1000.0), 1.0);
    }
}
