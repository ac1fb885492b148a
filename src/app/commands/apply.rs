//! Materialize a provisioning plan on the host.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, FleetConfig, FleetPlan, InstancePlan, UnitRenderer};
use crate::ports::{ArtifactStore, LinkOutcome};

use super::plan;

/// What an apply run changed.
#[derive(Debug, Clone, Default)]
pub struct ApplyOutcome {
    pub instances: Vec<String>,
    pub written: Vec<PathBuf>,
    /// `eula.txt` links that fell back to copies.
    pub copied_links: Vec<PathBuf>,
    pub removed_units: Vec<PathBuf>,
}

/// Validate, plan, then write. Nothing is written for an invalid fleet.
pub fn execute<S, R>(ctx: &AppContext<S, R>, fleet: &FleetConfig) -> Result<ApplyOutcome, AppError>
where
    S: ArtifactStore,
    R: UnitRenderer,
{
    let plan = plan::execute(fleet, ctx.renderer())?;
    write_plan(ctx.store(), &plan)
}

/// Write every artifact of `plan`.
///
/// The shared license file goes first so instance links never dangle.
pub fn write_plan(store: &impl ArtifactStore, plan: &FleetPlan) -> Result<ApplyOutcome, AppError> {
    let mut outcome = ApplyOutcome::default();

    store.write_file(&plan.license.path, &plan.license.content, plan.license.mode)?;
    outcome.written.push(plan.license.path.clone());

    for instance in &plan.instances {
        write_instance(store, instance, &mut outcome)?;
    }

    for declaration in &plan.host_declarations {
        store.write_file(&declaration.path, &declaration.content, declaration.mode)?;
        outcome.written.push(declaration.path.clone());
    }

    for unit_file in &plan.stale_units {
        if store.remove_file(unit_file)? {
            info!(path = %unit_file.display(), "removed unit of disabled server");
            outcome.removed_units.push(unit_file.clone());
        }
    }

    info!(
        instances = outcome.instances.len(),
        written = outcome.written.len(),
        removed = outcome.removed_units.len(),
        "applied provisioning plan"
    );
    Ok(outcome)
}

fn write_instance(
    store: &impl ArtifactStore,
    instance: &InstancePlan,
    outcome: &mut ApplyOutcome,
) -> Result<(), AppError> {
    debug!(instance = %instance.name, directory = %instance.directory.display(), "provisioning");

    let properties = &instance.properties;
    store.write_file(&properties.path, &properties.content, properties.mode)?;
    outcome.written.push(properties.path.clone());

    if store.link_or_copy(&instance.eula.target, &instance.eula.path)? == LinkOutcome::Copied {
        outcome.copied_links.push(instance.eula.path.clone());
    }

    match &instance.start_script {
        Some(script) => {
            store.write_file(&script.path, &script.content, script.mode)?;
            outcome.written.push(script.path.clone());
        }
        None => {
            let expected = instance.unit.exec_start.as_path();
            if !store.file_exists(expected) {
                warn!(
                    instance = %instance.name,
                    path = %expected.display(),
                    "start script is not generated and does not exist yet"
                );
            }
        }
    }

    let unit_file = &instance.unit_file;
    store.write_file(&unit_file.path, &unit_file.content, unit_file.mode)?;
    outcome.written.push(unit_file.path.clone());

    outcome.instances.push(instance.name.to_string());
    Ok(())
}
