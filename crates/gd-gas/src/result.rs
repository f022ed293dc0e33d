//! Density results and their unit views.

use gd_core::units::{
    Density, kg_per_m3, kg_per_m3_to_g_per_l, kg_per_m3_to_kg_per_l, kg_per_m3_to_lb_per_ft3,
    kg_per_m3_to_lb_per_gal,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output units for a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DensityUnit {
    #[default]
    KgPerM3,
    GPerL,
    KgPerL,
    LbPerFt3,
    LbPerGal,
}

impl DensityUnit {
    pub const ALL: [DensityUnit; 5] = [
        DensityUnit::KgPerM3,
        DensityUnit::GPerL,
        DensityUnit::KgPerL,
        DensityUnit::LbPerFt3,
        DensityUnit::LbPerGal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::KgPerM3 => "kg/m^3",
            Self::GPerL => "g/L",
            Self::KgPerL => "kg/L",
            Self::LbPerFt3 => "lb/ft^3",
            Self::LbPerGal => "lb/gal",
        }
    }
}

impl fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DensityUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg/m^3" | "kg/m³" | "kg/m3" => Ok(Self::KgPerM3),
            "g/l" => Ok(Self::GPerL),
            "kg/l" => Ok(Self::KgPerL),
            "lb/ft^3" | "lb/ft³" | "lb/ft3" | "lbm/ft3" | "lbm/ft^3" => Ok(Self::LbPerFt3),
            "lb/gal" | "lbm/gal" => Ok(Self::LbPerGal),
            other => Err(format!("unknown density unit '{other}'")),
        }
    }
}

/// A computed density. Stored in kg/m³; every other unit is a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityResult {
    value: f64,
}

impl DensityResult {
    pub fn new(kg_per_m3: f64) -> Self {
        Self { value: kg_per_m3 }
    }

    pub fn kg_per_m3(&self) -> f64 {
        self.value
    }

    /// Numerically the same as kg/m³.
    pub fn g_per_l(&self) -> f64 {
        kg_per_m3_to_g_per_l(self.value)
    }

    pub fn kg_per_l(&self) -> f64 {
        kg_per_m3_to_kg_per_l(self.value)
    }

    pub fn lb_per_ft3(&self) -> f64 {
        kg_per_m3_to_lb_per_ft3(self.value)
    }

    pub fn lb_per_gal(&self) -> f64 {
        kg_per_m3_to_lb_per_gal(self.value)
    }

    pub fn in_unit(&self, unit: DensityUnit) -> f64 {
        match unit {
            DensityUnit::KgPerM3 => self.kg_per_m3(),
            DensityUnit::GPerL => self.g_per_l(),
            DensityUnit::KgPerL => self.kg_per_l(),
            DensityUnit::LbPerFt3 => self.lb_per_ft3(),
            DensityUnit::LbPerGal => self.lb_per_gal(),
        }
    }

    /// Typed `uom` quantity.
    pub fn density(&self) -> Density {
        kg_per_m3(self.value)
    }

    /// All unit views, for reporting.
    pub fn views(&self) -> DensityViews {
        DensityViews {
            kg_per_m3: self.kg_per_m3(),
            g_per_l: self.g_per_l(),
            kg_per_l: self.kg_per_l(),
            lb_per_ft3: self.lb_per_ft3(),
            lb_per_gal: self.lb_per_gal(),
        }
    }
}

/// Plain-data snapshot of every unit view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityViews {
    pub kg_per_m3: f64,
    pub g_per_l: f64,
    pub kg_per_l: f64,
    pub lb_per_ft3: f64,
    pub lb_per_gal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::mass_density::kilogram_per_cubic_meter;

    #[test]
    fn views_are_consistent() {
        let rho = DensityResult::new(1.225);
        assert_eq!(rho.g_per_l(), 1.225);
        assert!((rho.kg_per_l() - 0.001225).abs() < 1e-15);
        assert!((rho.lb_per_ft3() - 1.225 * 0.453592 / 28.3168).abs() < 1e-15);
        assert!((rho.lb_per_gal() - 1.225 * 0.453592 / 3.78541).abs() < 1e-15);
        assert_eq!(rho.density().get::<kilogram_per_cubic_meter>(), 1.225);
    }

    #[test]
    fn in_unit_matches_views() {
        let rho = DensityResult::new(3.5);
        let views = rho.views();
        assert_eq!(rho.in_unit(DensityUnit::KgPerM3), views.kg_per_m3);
        assert_eq!(rho.in_unit(DensityUnit::GPerL), views.g_per_l);
        assert_eq!(rho.in_unit(DensityUnit::KgPerL), views.kg_per_l);
        assert_eq!(rho.in_unit(DensityUnit::LbPerFt3), views.lb_per_ft3);
        assert_eq!(rho.in_unit(DensityUnit::LbPerGal), views.lb_per_gal);
    }

    #[test]
    fn unit_labels_parse_back() {
        for unit in DensityUnit::ALL {
            assert_eq!(unit.label().parse::<DensityUnit>().unwrap(), unit);
        }
        assert!("furlongs".parse::<DensityUnit>().is_err());
    }
}
