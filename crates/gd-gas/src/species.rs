//! Gas table: the fixed set of gases and their molar masses.

use crate::error::{GasError, GasResult};
use serde::{Deserialize, Serialize};

/// Gases known to the density engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gas {
    /// Nitrogen (N₂)
    Nitrogen,
    /// Oxygen (O₂)
    Oxygen,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Argon (Ar)
    Argon,
    /// Acetylene (C₂H₂)
    Acetylene,
    /// Ammonia (NH₃)
    Ammonia,
    /// Chlorine (Cl₂)
    Chlorine,
    /// Sulfur dioxide (SO₂)
    SulfurDioxide,
    /// Methane (CH₄)
    Methane,
}

impl Gas {
    pub const ALL: [Gas; 10] = [
        Gas::Nitrogen,
        Gas::Oxygen,
        Gas::Hydrogen,
        Gas::CarbonDioxide,
        Gas::Argon,
        Gas::Acetylene,
        Gas::Ammonia,
        Gas::Chlorine,
        Gas::SulfurDioxide,
        Gas::Methane,
    ];

    /// Chemical formula, used as the short key.
    pub fn formula(&self) -> &'static str {
        match self {
            Gas::Nitrogen => "N2",
            Gas::Oxygen => "O2",
            Gas::Hydrogen => "H2",
            Gas::CarbonDioxide => "CO2",
            Gas::Argon => "Ar",
            Gas::Acetylene => "C2H2",
            Gas::Ammonia => "NH3",
            Gas::Chlorine => "Cl2",
            Gas::SulfurDioxide => "SO2",
            Gas::Methane => "CH4",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gas::Nitrogen => "Nitrogen",
            Gas::Oxygen => "Oxygen",
            Gas::Hydrogen => "Hydrogen",
            Gas::CarbonDioxide => "Carbon Dioxide",
            Gas::Argon => "Argon",
            Gas::Acetylene => "Acetylene",
            Gas::Ammonia => "Ammonia",
            Gas::Chlorine => "Chlorine",
            Gas::SulfurDioxide => "Sulfur Dioxide",
            Gas::Methane => "Methane",
        }
    }

    /// Molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            Gas::Nitrogen => 28.0134,
            Gas::Oxygen => 31.9988,
            Gas::Hydrogen => 2.01588,
            Gas::CarbonDioxide => 44.0095,
            Gas::Argon => 39.948,
            Gas::Acetylene => 26.0373,
            Gas::Ammonia => 17.0306,
            Gas::Chlorine => 70.906,
            Gas::SulfurDioxide => 64.0638,
            Gas::Methane => 16.0425,
        }
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass_kg(&self) -> f64 {
        self.molar_mass() / 1000.0
    }

    pub fn species(&self) -> GasSpecies {
        GasSpecies {
            gas: *self,
            name: self.display_name(),
            molar_mass: self.molar_mass(),
        }
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Gas {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "N2" | "NITROGEN" => Ok(Gas::Nitrogen),
            "O2" | "OXYGEN" => Ok(Gas::Oxygen),
            "H2" | "HYDROGEN" => Ok(Gas::Hydrogen),
            "CO2" | "CARBONDIOXIDE" => Ok(Gas::CarbonDioxide),
            "AR" | "ARGON" => Ok(Gas::Argon),
            "C2H2" | "ACETYLENE" => Ok(Gas::Acetylene),
            "NH3" | "AMMONIA" => Ok(Gas::Ammonia),
            "CL2" | "CHLORINE" => Ok(Gas::Chlorine),
            "SO2" | "SULFURDIOXIDE" | "SULPHURDIOXIDE" => Ok(Gas::SulfurDioxide),
            "CH4" | "METHANE" => Ok(Gas::Methane),
            _ => Err(GasError::UnknownGas {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// Immutable table record: a gas and its molar mass [g/mol].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GasSpecies {
    pub gas: Gas,
    pub name: &'static str,
    pub molar_mass: f64,
}

/// Read-only registry of gas name → molar mass.
///
/// Values are the 10-gas table of the density calculator
/// (Oxygen at 31.9988 g/mol, not 32).
#[derive(Debug, Clone, Copy, Default)]
pub struct GasTable;

impl GasTable {
    pub fn standard() -> Self {
        GasTable
    }

    /// Look up a gas by display name or formula (case-insensitive).
    pub fn lookup(&self, name: &str) -> GasResult<GasSpecies> {
        let gas: Gas = name.parse()?;
        Ok(gas.species())
    }

    pub fn molar_mass(&self, name: &str) -> GasResult<f64> {
        self.lookup(name).map(|s| s.molar_mass)
    }

    /// All entries in stable table order.
    pub fn entries(&self) -> impl Iterator<Item = GasSpecies> {
        Gas::ALL.into_iter().map(|gas| gas.species())
    }

    pub fn len(&self) -> usize {
        Gas::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        Gas::ALL.is_empty()
    }
}
