//! Parsing of `--gas NAME[=PCT]` arguments.

use crate::error::{CliError, CliResult};
use gd_gas::Composition;

/// Parse one `NAME=PCT` (or bare `NAME`, meaning 100%) argument.
pub fn parse_gas_arg(arg: &str) -> CliResult<(String, f64)> {
    let (name, share) = match arg.rsplit_once('=') {
        Some((name, pct)) => {
            let pct = pct.trim().trim_end_matches('%').trim();
            let share: f64 = pct.parse().map_err(|_| {
                CliError::InvalidInput(format!("could not parse share '{pct}' in '{arg}'"))
            })?;
            (name, share)
        }
        None => (arg, 100.0),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(format!("missing gas name in '{arg}'")));
    }
    Ok((name.to_string(), share))
}

/// Build a composition from repeated `--gas` arguments, keeping their order.
pub fn composition_from_args(args: &[String]) -> CliResult<Composition> {
    let mut composition = Composition::new();
    for arg in args {
        let (name, share) = parse_gas_arg(arg)?;
        composition.push(name, share);
    }
    Ok(composition)
}

/// One-line summary such as `Oxygen 21%, Nitrogen 78%, Argon 1%`.
pub fn describe(composition: &Composition) -> String {
    composition
        .iter()
        .map(|(name, share)| format!("{name} {share}%"))
        .collect::<Vec<_>>()
        .join(", ")
}
