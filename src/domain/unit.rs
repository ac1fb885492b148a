//! Service unit description handed to the service manager.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::fleet::{FleetConfig, InstanceDefinition};
use super::{AppError, InstanceName, paths};

pub const ENV_JVM_OPTS: &str = "JVMOPTS";
pub const ENV_RCON_PORT: &str = "MCRCON_PORT";
pub const ENV_RCON_PASSWORD: &str = "MCRCON_PASS";

/// Restart behaviour requested from the service manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    Always,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Always => "always",
        }
    }
}

/// Everything the service manager needs to supervise one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceUnit {
    pub description: String,
    pub wanted_by: String,
    pub after: Vec<String>,
    /// Packages whose `bin/` directories form the service's `PATH`.
    pub path: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub exec_start: PathBuf,
    pub restart: RestartPolicy,
    pub user: String,
    pub group: String,
    pub working_directory: PathBuf,
    pub state_directory: String,
}

impl ServiceUnit {
    pub fn for_instance(
        fleet: &FleetConfig,
        name: &InstanceName,
        server: &InstanceDefinition,
    ) -> Self {
        let working_directory = paths::instance_dir(&fleet.data_root, name);

        let mut path = Vec::with_capacity(2 + server.extra_packages.len());
        path.push(server.runtime_package.clone());
        path.push(fleet.shell_package.clone());
        path.extend(server.extra_packages.iter().cloned());

        let props = &server.server_config;
        let environment = BTreeMap::from([
            (ENV_JVM_OPTS.to_string(), server.jvm_opts.clone()),
            (ENV_RCON_PORT.to_string(), props.rcon_port.to_string()),
            (ENV_RCON_PASSWORD.to_string(), props.rcon_password.clone()),
        ]);

        Self {
            description: format!("Minecraft Server {}", name),
            wanted_by: "multi-user.target".to_string(),
            after: vec!["network.target".to_string()],
            path,
            environment,
            exec_start: working_directory.join(paths::START_SCRIPT_FILE),
            restart: RestartPolicy::Always,
            user: fleet.user.clone(),
            group: fleet.group.clone(),
            working_directory,
            state_directory: paths::state_dir_name(name),
        }
    }

    /// `PATH` value built from the unit's packages, in declaration order.
    pub fn search_path(&self) -> String {
        self.path
            .iter()
            .map(|pkg| format!("{}/bin", pkg.trim_end_matches('/')))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// `Environment=` operands, `PATH` first, each quoted for the unit file.
    pub fn environment_assignments(&self) -> Vec<String> {
        std::iter::once(("PATH".to_string(), self.search_path()))
            .chain(self.environment.iter().map(|(k, v)| (k.clone(), v.clone())))
            .map(|(key, value)| quote_assignment(&key, &value))
            .collect()
    }
}

/// Append `c` to a double-quoted unit-file string.
///
/// Backslashes and double quotes are escaped, `%` is doubled so it is not
/// read as a specifier, and control characters become C escapes so a value
/// can never end the line it is written on.
fn push_quoted_char(out: &mut String, c: char) {
    match c {
        '\\' | '"' => {
            out.push('\\');
            out.push(c);
        }
        '%' => out.push_str("%%"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
        _ => out.push(c),
    }
}

/// Quote `KEY=value` as a unit-file `Environment=` operand.
pub fn quote_assignment(key: &str, value: &str) -> String {
    let mut quoted = String::with_capacity(key.len() + value.len() + 3);
    quoted.push('"');
    quoted.push_str(key);
    quoted.push('=');
    for c in value.chars() {
        push_quoted_char(&mut quoted, c);
    }
    quoted.push('"');
    quoted
}

/// Quote a path as the single program argument of `ExecStart=`.
///
/// `$` is doubled on top of the usual quoting so it is not expanded as an
/// environment variable reference.
pub fn quote_command(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if c == '$' {
            quoted.push_str("$$");
        } else {
            push_quoted_char(&mut quoted, c);
        }
    }
    quoted.push('"');
    quoted
}

/// Prepare a value for a directive that takes its operand verbatim
/// (`WorkingDirectory=`, `User=`, ...).
///
/// Such directives have no quoting, so control characters cannot be
/// represented and are rejected; `%` is doubled.
pub fn directive_value(directive: &str, value: &str) -> Result<String, AppError> {
    if value.chars().any(char::is_control) {
        return Err(AppError::InvalidUnitValue {
            directive: directive.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value.replace('%', "%%"))
}

/// Renders a [`ServiceUnit`] into the service manager's file format.
///
/// Keeps the template engine out of the domain layer.
pub trait UnitRenderer {
    fn render_unit(&self, unit: &ServiceUnit) -> Result<String, AppError>;
}
