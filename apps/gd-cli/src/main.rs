mod config;
mod error;
mod input;

use clap::{Parser, Subcommand, ValueEnum};
use config::CliConfig;
use error::{CliError, CliResult};
use gd_gas::{
    AxisRange, Conditions, DensityEngine, DensityField, DensityUnit, GasTable, GridEvaluator,
    MixingStrategy, Quantity, parse_quantity,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gd-cli")]
#[command(about = "GasDensity CLI - Ideal-gas density of gases and gas mixtures", long_about = None)]
struct Cli {
    /// Optional YAML/JSON config (strategy, engine, grid)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Composition and state shared by the computing subcommands.
#[derive(clap::Args)]
struct StateArgs {
    /// Gas and share, e.g. `Nitrogen=78` (repeatable; bare name means 100%)
    #[arg(long = "gas", required = true)]
    gases: Vec<String>,
    /// Absolute pressure, e.g. `14.7`, `30 psi`, `2 bar` (default unit psi)
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pressure: String,
    /// Temperature, e.g. `15`, `59F`, `300 K` (default unit °C)
    #[arg(long, short = 't', allow_hyphen_values = true)]
    temperature: String,
    /// Mixing strategy: partial-density (A) or aggregate-ratio (B)
    #[arg(long, short = 's')]
    strategy: Option<MixingStrategy>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GridFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the gas table
    Gases,
    /// Validate a composition
    Validate {
        /// Gas and share, e.g. `Oxygen=21` (repeatable)
        #[arg(long = "gas", required = true)]
        gases: Vec<String>,
    },
    /// Compute the density at one pressure and temperature
    Density {
        #[command(flatten)]
        state: StateArgs,
        /// Primary output unit (kg/m^3, g/L, kg/L, lb/ft^3, lb/gal)
        #[arg(long, short = 'u', default_value = "kg/m^3")]
        unit: DensityUnit,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the pressure x temperature density grid
    Grid {
        #[command(flatten)]
        state: StateArgs,
        /// Samples per axis
        #[arg(long, short = 'r')]
        resolution: Option<usize>,
        /// Pressure axis bounds, e.g. `--p-range 0 200` or `--p-range "1 bar" "10 bar"`
        #[arg(long, num_args = 2, value_names = ["START", "END"], allow_hyphen_values = true)]
        p_range: Option<Vec<String>>,
        /// Temperature axis bounds, e.g. `--t-range 0 80`
        #[arg(long, num_args = 2, value_names = ["START", "END"], allow_hyphen_values = true)]
        t_range: Option<Vec<String>>,
        /// Evaluate on a single thread
        #[arg(long)]
        sequential: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: GridFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Logs go to stderr so stdout stays clean for CSV/JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Gases => cmd_gases(),
        Commands::Validate { gases } => cmd_validate(&config, &gases),
        Commands::Density { state, unit, json } => cmd_density(&config, &state, unit, json),
        Commands::Grid {
            state,
            resolution,
            p_range,
            t_range,
            sequential,
            format,
            output,
        } => {
            let mut grid = config.grid;
            if let Some(r) = resolution {
                grid.resolution = r;
            }
            if let Some(range) = p_range {
                grid.pressure_range = parse_range(&range, Quantity::Pressure)?;
            }
            if let Some(range) = t_range {
                grid.temperature_range = parse_range(&range, Quantity::Temperature)?;
            }
            if sequential {
                grid.parallel = false;
            }
            let config = CliConfig { grid, ..config };
            cmd_grid(&config, &state, format, output.as_deref())
        }
    }
}

fn parse_range(bounds: &[String], quantity: Quantity) -> CliResult<AxisRange> {
    match bounds {
        [start, end] => Ok(AxisRange::from_text(start, end, quantity)?),
        _ => Err(CliError::InvalidInput(format!(
            "{quantity} range needs exactly two values"
        ))),
    }
}

fn resolve_state(config: &CliConfig, state: &StateArgs) -> CliResult<ResolvedState> {
    let composition = input::composition_from_args(&state.gases)?;
    let pressure_psi = parse_quantity(&state.pressure, Quantity::Pressure)?;
    let temperature_c = parse_quantity(&state.temperature, Quantity::Temperature)?;
    Ok(ResolvedState {
        composition,
        conditions: Conditions::new(pressure_psi, temperature_c),
        strategy: state.strategy.unwrap_or(config.strategy),
    })
}

struct ResolvedState {
    composition: gd_gas::Composition,
    conditions: Conditions,
    strategy: MixingStrategy,
}

fn cmd_gases() -> CliResult<()> {
    println!("{:<16} {:<8} {:>12}", "Gas", "Formula", "M [g/mol]");
    for species in GasTable::standard().entries() {
        println!(
            "{:<16} {:<8} {:>12.5}",
            species.name,
            species.gas.formula(),
            species.molar_mass
        );
    }
    Ok(())
}

fn cmd_validate(config: &CliConfig, gases: &[String]) -> CliResult<()> {
    let composition = input::composition_from_args(gases)?;
    let engine = DensityEngine::try_new(config.engine)?;
    let mixture = engine.validate(&composition)?;
    println!("✓ Composition is valid: {}", input::describe(&composition));
    println!("  Mean molar mass: {:.4} g/mol", mixture.molar_mass());
    Ok(())
}

#[derive(Serialize)]
struct DensityReport<'a> {
    composition: &'a gd_gas::Composition,
    conditions: Conditions,
    strategy: MixingStrategy,
    density: gd_gas::DensityViews,
}

fn cmd_density(
    config: &CliConfig,
    state: &StateArgs,
    unit: DensityUnit,
    json: bool,
) -> CliResult<()> {
    let resolved = resolve_state(config, state)?;
    let engine = DensityEngine::try_new(config.engine)?;
    let rho = engine.compute_density(
        &resolved.composition,
        resolved.conditions.pressure_psi,
        resolved.conditions.temperature_c,
        resolved.strategy,
    )?;

    if json {
        let report = DensityReport {
            composition: &resolved.composition,
            conditions: resolved.conditions,
            strategy: resolved.strategy,
            density: rho.views(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Density of {} at {} psi, {} °C [{}]: {:.6} {}",
        input::describe(&resolved.composition),
        resolved.conditions.pressure_psi,
        resolved.conditions.temperature_c,
        resolved.strategy,
        rho.in_unit(unit),
        unit
    );
    for other in DensityUnit::ALL.into_iter().filter(|u| *u != unit) {
        println!("  {:>12.6} {}", rho.in_unit(other), other);
    }
    Ok(())
}

fn cmd_grid(
    config: &CliConfig,
    state: &StateArgs,
    format: GridFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let resolved = resolve_state(config, state)?;
    let evaluator = GridEvaluator::new(DensityEngine::try_new(config.engine)?, config.grid);

    let started = Instant::now();
    let field = evaluator.evaluate(&resolved.composition, resolved.conditions, resolved.strategy)?;
    tracing::info!(
        cells = field.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "grid evaluated"
    );

    let body = match format {
        GridFormat::Csv => field_to_csv(&field),
        GridFormat::Json => serde_json::to_string_pretty(&field)?,
    };

    if let Some(path) = output {
        std::fs::write(path, body)?;
        println!("✓ Exported {} grid cells to {}", field.len(), path.display());
        println!(
            "  Point: {:.6} kg/m^3 at {} psi, {} °C",
            field.highlight.density.kg_per_m3(),
            field.highlight.pressure_psi,
            field.highlight.temperature_c
        );
        println!(
            "  Max: {:.6} kg/m^3 (axis bound {:.6})",
            field.max_value,
            field.axis_upper_bound()
        );
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(body.as_bytes())?;
    }

    Ok(())
}

fn field_to_csv(field: &DensityField) -> String {
    let mut csv = String::from("pressure_psi,temperature_c,density_kg_m3\n");
    for (p, t, rho) in field.cells() {
        csv.push_str(&format!("{},{},{}\n", p, t, rho));
    }
    csv
}
