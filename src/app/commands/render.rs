//! Print the `server.properties` a declared server would receive.

use crate::domain::{AppError, FleetConfig, render_properties};

pub fn execute(fleet: &FleetConfig, name: &str) -> Result<String, AppError> {
    let (_, server) = fleet.server(name)?;
    Ok(render_properties(&server.server_config))
}
