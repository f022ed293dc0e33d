//! Print the density of every gas in the table at 1 atm and 0 °C.

use gd_gas::{Composition, DensityEngine, GasTable, MixingStrategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = DensityEngine::default();

    println!("{:<16} {:>10} {:>12} {:>12}", "Gas", "M [g/mol]", "kg/m^3", "lb/ft^3");
    for species in GasTable::standard().entries() {
        let rho = engine.compute_density(
            &Composition::pure(species.name),
            14.6959488,
            0.0,
            MixingStrategy::PartialDensitySum,
        )?;
        println!(
            "{:<16} {:>10.4} {:>12.5} {:>12.6}",
            species.name,
            species.molar_mass,
            rho.kg_per_m3(),
            rho.lb_per_ft3()
        );
    }

    Ok(())
}
