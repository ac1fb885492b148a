//! Provisioning plan: every artifact a validated fleet produces.
//!
//! Building a plan is pure; writing it is the job of an
//! [`ArtifactStore`](crate::ports::ArtifactStore).

use std::path::PathBuf;

use serde::Serialize;

use super::eula::EULA_ACCEPTANCE;
use super::fleet::InstanceDefinition;
use super::host::{AccountPlan, FirewallPlan};
use super::properties::render_properties;
use super::script::materialize_start_script;
use super::unit::{ServiceUnit, UnitRenderer};
use super::validation::{PortSets, ValidatedFleet};
use super::{AppError, InstanceName, paths};

pub const MODE_CONFIG: u32 = 0o644;
pub const MODE_SCRIPT: u32 = 0o755;
pub const MODE_READ_ONLY: u32 = 0o444;

/// A file with fixed content and permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub mode: u32,
}

impl Artifact {
    pub fn new(path: PathBuf, content: impl Into<String>, mode: u32) -> Self {
        Self { path, content: content.into(), mode }
    }
}

/// A link that is always re-created so it cannot drift from its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub path: PathBuf,
    pub target: PathBuf,
}

/// Everything produced for one enabled server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstancePlan {
    pub name: InstanceName,
    pub directory: PathBuf,
    pub properties: Artifact,
    pub eula: Link,
    /// `None` when the server ships its own `start.sh`.
    pub start_script: Option<Artifact>,
    pub unit: ServiceUnit,
    pub unit_file: Artifact,
}

impl InstancePlan {
    pub fn build(
        fleet: &ValidatedFleet<'_>,
        name: &InstanceName,
        server: &InstanceDefinition,
        renderer: &impl UnitRenderer,
    ) -> Result<Self, AppError> {
        let config = fleet.config();
        let directory = paths::instance_dir(&config.data_root, name);

        let properties = Artifact::new(
            directory.join(paths::PROPERTIES_FILE),
            render_properties(&server.server_config),
            MODE_CONFIG,
        );
        let eula = Link {
            path: directory.join(paths::EULA_FILE),
            target: paths::license_file(&config.data_root),
        };
        let start_script = server.generate_start_script.then(|| {
            Artifact::new(
                directory.join(paths::START_SCRIPT_FILE),
                materialize_start_script(&server.start_script),
                MODE_SCRIPT,
            )
        });

        let unit = ServiceUnit::for_instance(config, name, server);
        let unit_file = Artifact::new(
            paths::unit_file(&config.unit_dir, name),
            renderer.render_unit(&unit)?,
            MODE_CONFIG,
        );

        Ok(Self { name: name.clone(), directory, properties, eula, start_script, unit, unit_file })
    }
}

/// Everything produced for a validated fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetPlan {
    /// Shared license-acceptance text every `eula.txt` links to.
    pub license: Artifact,
    pub instances: Vec<InstancePlan>,
    pub firewall: FirewallPlan,
    pub accounts: AccountPlan,
    /// Firewall and account declarations for the host collaborators.
    pub host_declarations: Vec<Artifact>,
    /// Unit files of declared but disabled servers.
    pub stale_units: Vec<PathBuf>,
}

fn declaration<T: Serialize>(path: PathBuf, what: &str, value: &T) -> Result<Artifact, AppError> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::SerializeError { what: what.to_string(), details: e.to_string() })?;
    json.push('\n');
    Ok(Artifact::new(path, json, MODE_CONFIG))
}

impl FleetPlan {
    pub fn build(
        fleet: &ValidatedFleet<'_>,
        renderer: &impl UnitRenderer,
    ) -> Result<Self, AppError> {
        let config = fleet.config();

        let instances = config
            .enabled_servers()
            .map(|(name, server)| InstancePlan::build(fleet, name, server, renderer))
            .collect::<Result<Vec<_>, _>>()?;

        let stale_units = config
            .servers
            .iter()
            .filter(|(_, server)| !server.enabled)
            .map(|(name, _)| paths::unit_file(&config.unit_dir, name))
            .collect();

        let firewall = FirewallPlan::compose(&PortSets::collect(config));
        let accounts = AccountPlan::compose(config);
        let host_declarations = vec![
            declaration(
                paths::firewall_declaration(&config.data_root),
                "firewall declaration",
                &firewall,
            )?,
            declaration(
                paths::account_declaration(&config.data_root),
                "account declaration",
                &accounts,
            )?,
        ];

        Ok(Self {
            license: Artifact::new(
                paths::license_file(&config.data_root),
                EULA_ACCEPTANCE,
                MODE_READ_ONLY,
            ),
            instances,
            firewall,
            accounts,
            host_declarations,
            stale_units,
        })
    }
}
