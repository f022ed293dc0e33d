//! Gas composition (single gas or mixture), as entered and as validated.

use crate::species::{Gas, GasSpecies};
use serde::{Deserialize, Serialize};

/// Composition as supplied by a caller: gas names with percentage shares.
///
/// Entry order is preserved. Nothing is checked here; pass it through
/// [`crate::MixtureValidator`] to obtain a [`Mixture`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    entries: Vec<(String, f64)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single gas at 100%.
    pub fn pure(name: impl Into<String>) -> Self {
        Self {
            entries: vec![(name.into(), 100.0)],
        }
    }

    pub fn from_shares<I, S>(shares: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: shares.into_iter().map(|(n, p)| (n.into(), p)).collect(),
        }
    }

    /// Append a gas/percentage pair.
    pub fn with(mut self, name: impl Into<String>, share_pct: f64) -> Self {
        self.push(name, share_pct);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, share_pct: f64) {
        self.entries.push((name.into(), share_pct));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_share(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }
}

impl From<Gas> for Composition {
    fn from(gas: Gas) -> Self {
        Composition::pure(gas.display_name())
    }
}

/// One validated mixture component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Component {
    pub species: GasSpecies,
    /// Percentage share (0..=100).
    pub share_pct: f64,
}

impl Component {
    /// Mole fraction (share / 100).
    pub fn mole_fraction(&self) -> f64 {
        self.share_pct / 100.0
    }
}

/// Validated mixture: known gases, no duplicates, shares summing to 100%.
///
/// Only [`crate::MixtureValidator`] constructs these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mixture {
    components: Vec<Component>,
}

impl Mixture {
    pub(crate) fn from_validated(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns `Some(gas)` for a single-component mixture.
    pub fn is_pure(&self) -> Option<Gas> {
        match self.components.as_slice() {
            [only] => Some(only.species.gas),
            _ => None,
        }
    }

    /// Mole-fraction weighted molar mass [g/mol]: M_mix = Σ (x_i * M_i).
    pub fn molar_mass(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.species.molar_mass * c.mole_fraction())
            .sum()
    }

    pub fn share_of(&self, gas: Gas) -> f64 {
        self.components
            .iter()
            .find(|c| c.species.gas == gas)
            .map(|c| c.share_pct)
            .unwrap_or(0.0)
    }
}
