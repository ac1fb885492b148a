//! Build the provisioning plan for a fleet without touching disk.

use tracing::info;

use crate::domain::{AppError, FleetConfig, FleetPlan, UnitRenderer, validate_fleet};

/// Validate the fleet, then build every artifact in memory.
///
/// Fails with [`AppError::FleetInvalid`] before anything is rendered when the
/// fleet has violations.
pub fn execute(fleet: &FleetConfig, renderer: &impl UnitRenderer) -> Result<FleetPlan, AppError> {
    let validated = validate_fleet(fleet)?;
    let plan = FleetPlan::build(&validated, renderer)?;
    info!(
        instances = plan.instances.len(),
        udp = plan.firewall.udp.len(),
        tcp = plan.firewall.tcp.len(),
        "built provisioning plan"
    );
    Ok(plan)
}
