//! Fleet declaration model (`mcfleet.toml`).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::properties::ServerProperties;
use super::{AppError, InstanceName};

/// Account name that mcfleet creates itself when it is configured.
pub const DEFAULT_IDENTITY: &str = "minecraft";

/// Fleet-wide settings plus every declared server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FleetConfig {
    /// Whether the operator accepted the Minecraft EULA.
    #[serde(default)]
    pub eula: bool,
    #[serde(default = "default_identity")]
    pub user: String,
    #[serde(default = "default_identity")]
    pub group: String,
    /// Common root of every per-instance working directory.
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    /// Home directory of the default service account.
    #[serde(default = "default_home_dir")]
    pub home_dir: PathBuf,
    /// Directory unit files are written to.
    #[serde(default = "default_unit_dir")]
    pub unit_dir: PathBuf,
    /// Package providing a POSIX shell, put on every server's `PATH`.
    #[serde(default = "default_shell_package")]
    pub shell_package: String,
    #[serde(default)]
    pub servers: BTreeMap<InstanceName, InstanceDefinition>,
}

/// One declared server (`[servers.<name>]`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct InstanceDefinition {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub server_config: ServerProperties,
    /// Write `start.sh` from `start-script`; otherwise an existing one is used.
    #[serde(default = "default_true")]
    pub generate_start_script: bool,
    #[serde(default = "default_start_script")]
    pub start_script: String,
    /// Java runtime (or wrapper) whose `bin/` is put first on `PATH`.
    #[serde(default = "default_runtime_package")]
    pub runtime_package: String,
    #[serde(default)]
    pub extra_packages: Vec<String>,
    #[serde(default = "default_jvm_opts")]
    pub jvm_opts: String,
    /// Expose the RCON port through the firewall.
    #[serde(default)]
    pub open_rcon: bool,
}

fn default_true() -> bool {
    true
}

fn default_identity() -> String {
    DEFAULT_IDENTITY.to_string()
}

fn default_data_root() -> PathBuf {
    PathBuf::from("/var/lib")
}

fn default_home_dir() -> PathBuf {
    PathBuf::from("/var/lib/minecraft")
}

fn default_unit_dir() -> PathBuf {
    PathBuf::from("/etc/systemd/system")
}

fn default_shell_package() -> String {
    "/usr".to_string()
}

fn default_start_script() -> String {
    "exec java $JVMOPTS -jar server.jar nogui".to_string()
}

fn default_runtime_package() -> String {
    "/usr".to_string()
}

fn default_jvm_opts() -> String {
    "-Xmx2G -Xms1G".to_string()
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            eula: false,
            user: default_identity(),
            group: default_identity(),
            data_root: default_data_root(),
            home_dir: default_home_dir(),
            unit_dir: default_unit_dir(),
            shell_package: default_shell_package(),
            servers: BTreeMap::new(),
        }
    }
}

impl Default for InstanceDefinition {
    fn default() -> Self {
        Self {
            enabled: true,
            server_config: ServerProperties::default(),
            generate_start_script: true,
            start_script: default_start_script(),
            runtime_package: default_runtime_package(),
            extra_packages: Vec::new(),
            jvm_opts: default_jvm_opts(),
            open_rcon: false,
        }
    }
}

impl FleetConfig {
    /// Parse a fleet declaration from TOML text.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Enabled servers, in name order.
    pub fn enabled_servers(&self) -> impl Iterator<Item = (&InstanceName, &InstanceDefinition)> {
        self.servers.iter().filter(|(_, server)| server.enabled)
    }

    /// Look up a declared server by name, enabled or not.
    pub fn server(&self, name: &str) -> Result<(&InstanceName, &InstanceDefinition), AppError> {
        self.servers
            .iter()
            .find(|(candidate, _)| candidate.as_str() == name)
            .ok_or_else(|| AppError::InstanceNotFound(name.to_string()))
    }
}
