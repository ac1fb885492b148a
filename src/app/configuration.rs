//! Fleet declaration loading.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, FleetConfig};

/// Fleet declaration read when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "mcfleet.toml";

/// Command-line overrides applied on top of the loaded declaration.
#[derive(Debug, Clone, Default)]
pub struct FleetOverrides {
    pub data_root: Option<PathBuf>,
    pub unit_dir: Option<PathBuf>,
}

impl FleetOverrides {
    pub fn apply(&self, fleet: &mut FleetConfig) {
        if let Some(data_root) = &self.data_root {
            fleet.data_root = data_root.clone();
        }
        if let Some(unit_dir) = &self.unit_dir {
            fleet.unit_dir = unit_dir.clone();
        }
    }
}

/// Load and parse the fleet declaration at `path`.
pub fn load_fleet(path: &Path) -> Result<FleetConfig, AppError> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::FleetConfigMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;

    let fleet = FleetConfig::parse_toml(&content)?;
    debug!(
        path = %path.display(),
        servers = fleet.servers.len(),
        enabled = fleet.enabled_servers().count(),
        "loaded fleet declaration"
    );
    Ok(fleet)
}

/// Load the declaration and apply command-line overrides.
pub fn load_fleet_with(path: &Path, overrides: &FleetOverrides) -> Result<FleetConfig, AppError> {
    let mut fleet = load_fleet(path)?;
    overrides.apply(&mut fleet);
    Ok(fleet)
}
