//! Host-wide requirements: firewall ports and the shared service account.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use super::fleet::{DEFAULT_IDENTITY, FleetConfig};
use super::validation::PortSets;

/// Ports the firewall collaborator must open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirewallPlan {
    pub udp: BTreeSet<u16>,
    pub tcp: BTreeSet<u16>,
}

impl FirewallPlan {
    /// UDP: query ports. TCP: server ports, query ports, and RCON ports of
    /// servers that opted into exposing RCON.
    pub fn compose(ports: &PortSets) -> Self {
        let udp: BTreeSet<u16> = ports.query.iter().copied().collect();
        let tcp =
            ports.server.iter().chain(&ports.query).chain(&ports.open_rcon).copied().collect();
        Self { udp, tcp }
    }
}

/// Service user mcfleet asks the account collaborator to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRequest {
    pub name: String,
    pub group: String,
    pub home: PathBuf,
    pub system: bool,
}

/// Accounts to create. Custom identities are assumed to exist already.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountPlan {
    pub user: Option<UserRequest>,
    pub group: Option<String>,
}

impl AccountPlan {
    pub fn compose(fleet: &FleetConfig) -> Self {
        let user = (fleet.user == DEFAULT_IDENTITY).then(|| UserRequest {
            name: fleet.user.clone(),
            group: fleet.group.clone(),
            home: fleet.home_dir.clone(),
            system: true,
        });
        let group = (fleet.group == DEFAULT_IDENTITY).then(|| fleet.group.clone());
        Self { user, group }
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.group.is_none()
    }
}
