//! mcfleet: provision a fleet of Minecraft servers from one declaration.
//!
//! Provisioning is two-phase. The whole fleet is validated and every artifact
//! is rendered in memory first; only a fleet without violations is written.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ApplyOutcome, CheckOptions, CheckOutcome, apply, check, plan, render};
pub use app::configuration::{DEFAULT_CONFIG_FILE, FleetOverrides, load_fleet};
pub use domain::{
    AppError, FleetConfig, FleetPlan, InstanceDefinition, InstanceName, ServerProperties,
    Violation, render_properties, validate, validate_fleet,
};
