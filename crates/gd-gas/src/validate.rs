//! Composition validation.

use crate::composition::{Component, Composition, Mixture};
use crate::error::{GasError, GasResult};
use crate::species::GasTable;
use gd_core::numeric::{Tolerances, nearly_equal};
use std::collections::HashSet;

/// Allowed deviation of the share total from 100%.
pub const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Checks a [`Composition`] against the gas table and share rules.
///
/// Checks run in this order, first failure wins: empty, unknown gas,
/// non-finite or negative share, duplicate gas, share total.
#[derive(Debug, Clone, Copy)]
pub struct MixtureValidator {
    table: GasTable,
    tolerance: f64,
}

impl Default for MixtureValidator {
    fn default() -> Self {
        Self {
            table: GasTable::standard(),
            tolerance: SHARE_SUM_TOLERANCE,
        }
    }
}

impl MixtureValidator {
    pub fn new(table: GasTable) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    pub fn validate(&self, composition: &Composition) -> GasResult<Mixture> {
        if composition.is_empty() {
            return Err(GasError::EmptyComposition);
        }

        let mut seen = HashSet::with_capacity(composition.len());
        let mut components = Vec::with_capacity(composition.len());
        let mut sum = 0.0;

        for (name, share) in composition.iter() {
            let species = self.table.lookup(name)?;
            if !share.is_finite() {
                return Err(GasError::NonFinite {
                    what: "composition share",
                    value: share,
                });
            }
            if share < 0.0 {
                return Err(GasError::NegativeShare {
                    name: species.name.to_string(),
                    share,
                });
            }
            if !seen.insert(species.gas) {
                return Err(GasError::DuplicateComponent {
                    name: species.name.to_string(),
                });
            }
            sum += share;
            components.push(Component {
                species,
                share_pct: share,
            });
        }

        if !nearly_equal(sum, 100.0, Tolerances::absolute(self.tolerance)) {
            return Err(GasError::CompositionSum { sum });
        }

        tracing::trace!(components = components.len(), sum, "composition validated");
        Ok(Mixture::from_validated(components))
    }
}
