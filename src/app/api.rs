//! API Facade for the application.
//!
//! Each function loads the fleet declaration, wires the real adapters and
//! runs one command.

use std::path::Path;

use crate::adapters::{EmbeddedUnitTemplate, FilesystemArtifactStore};
use crate::app::{
    AppContext,
    commands::{apply, check, plan, render},
    configuration::{FleetOverrides, load_fleet, load_fleet_with},
};

pub use crate::app::commands::apply::ApplyOutcome;
pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::domain::{AppError, FleetPlan};

fn create_context() -> AppContext<FilesystemArtifactStore, EmbeddedUnitTemplate> {
    AppContext::new(FilesystemArtifactStore::new(), EmbeddedUnitTemplate::new())
}

/// Validate the declaration at `config` and report diagnostics.
pub fn check(config: &Path, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    let fleet = load_fleet(config)?;
    Ok(check::execute(config, &fleet, options))
}

/// Build the provisioning plan without writing anything.
pub fn plan(config: &Path, overrides: &FleetOverrides) -> Result<FleetPlan, AppError> {
    let fleet = load_fleet_with(config, overrides)?;
    plan::execute(&fleet, &EmbeddedUnitTemplate::new())
}

/// Validate, plan and write every artifact to the host.
pub fn apply(config: &Path, overrides: &FleetOverrides) -> Result<ApplyOutcome, AppError> {
    let fleet = load_fleet_with(config, overrides)?;
    apply::execute(&create_context(), &fleet)
}

/// Render `server.properties` for one declared server.
pub fn render(config: &Path, name: &str) -> Result<String, AppError> {
    let fleet = load_fleet(config)?;
    render::execute(&fleet, name)
}
