//! Fleet-wide validation gate.
//!
//! Every check runs before any artifact is produced. A fleet with violations
//! never reaches the provisioner: the only way to obtain a [`ValidatedFleet`]
//! is through [`validate_fleet`].

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use super::AppError;
use super::fleet::FleetConfig;

/// A fleet-level configuration violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    #[error("You must accept the Minecraft EULA (set `eula = true`) before any server can run")]
    EulaNotAccepted,

    #[error("Server ports of enabled servers are not unique")]
    DuplicateServerPorts,

    #[error("RCON ports of RCON-enabled servers are not unique")]
    DuplicateRconPorts,

    #[error("Query ports of query-enabled servers are not unique")]
    DuplicateQueryPorts,

    #[error("Server, RCON and query ports collide across servers")]
    OverlappingPorts,
}

/// Ports claimed by the enabled servers of a fleet, one entry per claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSets {
    pub server: Vec<u16>,
    /// RCON ports of servers with RCON enabled.
    pub rcon: Vec<u16>,
    /// Query ports of servers with query enabled.
    pub query: Vec<u16>,
    /// RCON ports of servers that also opted into exposing RCON.
    pub open_rcon: Vec<u16>,
}

impl PortSets {
    pub fn collect(fleet: &FleetConfig) -> Self {
        let mut sets = PortSets::default();
        for (_, server) in fleet.enabled_servers() {
            let props = &server.server_config;
            sets.server.push(props.server_port);
            if props.enable_rcon {
                sets.rcon.push(props.rcon_port);
                if server.open_rcon {
                    sets.open_rcon.push(props.rcon_port);
                }
            }
            if props.enable_query {
                sets.query.push(props.query_port);
            }
        }
        sets
    }

    /// Every claimed port across all three categories.
    pub fn all(&self) -> Vec<u16> {
        self.server.iter().chain(&self.rcon).chain(&self.query).copied().collect()
    }
}

fn is_unique(ports: &[u16]) -> bool {
    ports.iter().collect::<BTreeSet<_>>().len() == ports.len()
}

/// Run every fleet check and collect all violations.
pub fn validate(fleet: &FleetConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !fleet.eula {
        violations.push(Violation::EulaNotAccepted);
    }

    let ports = PortSets::collect(fleet);
    if !is_unique(&ports.server) {
        violations.push(Violation::DuplicateServerPorts);
    }
    if !is_unique(&ports.rcon) {
        violations.push(Violation::DuplicateRconPorts);
    }
    if !is_unique(&ports.query) {
        violations.push(Violation::DuplicateQueryPorts);
    }
    if !is_unique(&ports.all()) {
        violations.push(Violation::OverlappingPorts);
    }

    violations
}

/// A fleet that passed every check.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedFleet<'a> {
    fleet: &'a FleetConfig,
}

impl<'a> ValidatedFleet<'a> {
    pub fn config(&self) -> &'a FleetConfig {
        self.fleet
    }
}

/// Gate a fleet: either every check passes or the run is aborted.
pub fn validate_fleet(fleet: &FleetConfig) -> Result<ValidatedFleet<'_>, AppError> {
    let violations = validate(fleet);
    if violations.is_empty() {
        Ok(ValidatedFleet { fleet })
    } else {
        Err(AppError::FleetInvalid { violations })
    }
}
