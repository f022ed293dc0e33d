//! CLI configuration file (YAML or JSON).
//!
//! Every section is optional; missing values fall back to library defaults.
//!
//! ```yaml
//! strategy: partial-density
//! engine:
//!   gas_constant: 0.0821
//! grid:
//!   resolution: 50
//!   pressure_range: { start: 0.0, end: 150.0 }
//! ```

use crate::error::{CliError, CliResult};
use gd_gas::{EngineConfig, GridConfig, MixingStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub strategy: MixingStrategy,
    pub engine: EngineConfig,
    pub grid: GridConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let config: CliConfig = match ext.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(CliError::ConfigFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        config.engine.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
