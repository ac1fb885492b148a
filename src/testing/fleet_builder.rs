//! Builders for synthetic fleets.

use std::path::PathBuf;

use crate::domain::{FleetConfig, InstanceDefinition, InstanceName};

/// Builds a [`FleetConfig`] with the EULA accepted and no servers.
pub struct FleetBuilder {
    fleet: FleetConfig,
}

#[allow(dead_code)]
impl FleetBuilder {
    pub fn new() -> Self {
        Self { fleet: FleetConfig { eula: true, ..FleetConfig::default() } }
    }

    pub fn eula(mut self, accepted: bool) -> Self {
        self.fleet.eula = accepted;
        self
    }

    pub fn identity(mut self, user: &str, group: &str) -> Self {
        self.fleet.user = user.to_string();
        self.fleet.group = group.to_string();
        self
    }

    pub fn data_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.fleet.data_root = path.into();
        self
    }

    pub fn unit_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.fleet.unit_dir = path.into();
        self
    }

    pub fn server(
        mut self,
        name: &str,
        build: impl FnOnce(ServerBuilder) -> ServerBuilder,
    ) -> Self {
        let name = InstanceName::new(name).expect("test server names are valid");
        let server = build(ServerBuilder::default()).server;
        self.fleet.servers.insert(name, server);
        self
    }

    pub fn build(self) -> FleetConfig {
        self.fleet
    }
}

/// Builds one [`InstanceDefinition`], starting from the declaration defaults.
#[derive(Default)]
pub struct ServerBuilder {
    server: InstanceDefinition,
}

#[allow(dead_code)]
impl ServerBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.server.server_config.server_port = port;
        self
    }

    pub fn rcon(mut self, port: u16) -> Self {
        self.server.server_config.enable_rcon = true;
        self.server.server_config.rcon_port = port;
        self
    }

    pub fn rcon_password(mut self, password: &str) -> Self {
        self.server.server_config.rcon_password = password.to_string();
        self
    }

    pub fn open_rcon(mut self) -> Self {
        self.server.open_rcon = true;
        self
    }

    pub fn query(mut self, port: u16) -> Self {
        self.server.server_config.enable_query = true;
        self.server.server_config.query_port = port;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.server.enabled = false;
        self
    }

    pub fn start_script(mut self, fragment: &str) -> Self {
        self.server.start_script = fragment.to_string();
        self
    }

    pub fn external_start_script(mut self) -> Self {
        self.server.generate_start_script = false;
        self
    }

    pub fn jvm_opts(mut self, opts: &str) -> Self {
        self.server.jvm_opts = opts.to_string();
        self
    }

    pub fn runtime_package(mut self, package: &str) -> Self {
        self.server.runtime_package = package.to_string();
        self
    }

    pub fn extra_package(mut self, package: &str) -> Self {
        self.server.extra_packages.push(package.to_string());
        self
    }
}
