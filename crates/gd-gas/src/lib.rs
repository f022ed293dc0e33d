//! gd-gas: ideal-gas density of single gases and mixtures.
//!
//! Provides:
//! - The gas table (name → molar mass)
//! - Composition input and validation into a [`Mixture`]
//! - The density engine with selectable mixing strategies
//! - Unit views of results (kg/m³, g/L, kg/L, lb/ft³, lb/gal)
//! - 1D sweeps and the pressure × temperature grid used for surface plots
//!
//! # Example
//!
//! ```
//! use gd_gas::{Composition, DensityEngine, MixingStrategy};
//!
//! let air = Composition::new()
//!     .with("Oxygen", 21.0)
//!     .with("Nitrogen", 78.0)
//!     .with("Argon", 1.0);
//!
//! let engine = DensityEngine::default();
//! let rho = engine
//!     .compute_density(&air, 14.6959488, 15.0, MixingStrategy::PartialDensitySum)
//!     .unwrap();
//! assert!((rho.kg_per_m3() - 1.225).abs() < 0.02);
//! ```

pub mod composition;
pub mod engine;
pub mod error;
pub mod grid;
pub mod result;
pub mod species;
pub mod sweep_executor;
pub mod sweeps;
pub mod units;
pub mod validate;

// Re-exports for ergonomics
pub use composition::{Component, Composition, Mixture};
pub use engine::{
    Conditions, DensityEngine, EngineConfig, MixingStrategy, R_ATM_L, R_ATM_L_CODATA,
};
pub use error::{GasError, GasResult};
pub use grid::{DensityField, GridConfig, GridEvaluator, GridPoint, evaluate_grid};
pub use result::{DensityResult, DensityUnit, DensityViews};
pub use species::{Gas, GasSpecies, GasTable};
pub use sweep_executor::{
    SweepResult, execute_pressure_sweep_at_temperature, execute_sweep,
    execute_temperature_sweep_at_pressure,
};
pub use sweeps::{AxisRange, SweepAxis, SweepDefinition};
pub use units::{Quantity, UnitError, parse_quantity};
pub use validate::{MixtureValidator, SHARE_SUM_TOLERANCE};
