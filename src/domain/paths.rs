//! Path catalog for everything mcfleet writes.

use std::path::{Path, PathBuf};

use super::InstanceName;

/// Directory under the data root holding fleet-wide managed files.
pub const MANAGED_DIR: &str = ".mcfleet";
pub const PROPERTIES_FILE: &str = "server.properties";
pub const EULA_FILE: &str = "eula.txt";
pub const START_SCRIPT_FILE: &str = "start.sh";
pub const FIREWALL_FILE: &str = "firewall.json";
pub const ACCOUNT_FILE: &str = "account.json";

/// State directory name of a server, relative to the data root.
pub fn state_dir_name(name: &InstanceName) -> String {
    format!("mc-{}", name)
}

/// Unit file name of a server.
pub fn unit_file_name(name: &InstanceName) -> String {
    format!("mcfleet-{}.service", name)
}

pub fn instance_dir(data_root: &Path, name: &InstanceName) -> PathBuf {
    data_root.join(state_dir_name(name))
}

pub fn managed_dir(data_root: &Path) -> PathBuf {
    data_root.join(MANAGED_DIR)
}

pub fn license_file(data_root: &Path) -> PathBuf {
    managed_dir(data_root).join(EULA_FILE)
}

pub fn firewall_declaration(data_root: &Path) -> PathBuf {
    managed_dir(data_root).join(FIREWALL_FILE)
}

pub fn account_declaration(data_root: &Path) -> PathBuf {
    managed_dir(data_root).join(ACCOUNT_FILE)
}

pub fn unit_file(unit_dir: &Path, name: &InstanceName) -> PathBuf {
    unit_dir.join(unit_file_name(name))
}
