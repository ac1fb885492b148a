//! Shared testing harness for `mcfleet` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated host layout: a declaration file, a data root and a unit directory.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("data")).expect("Failed to create data root");
        fs::create_dir_all(root.path().join("units")).expect("Failed to create unit dir");
        Self { root }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.root.path().join("mcfleet.toml")
    }

    pub(crate) fn data_root(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub(crate) fn unit_dir(&self) -> PathBuf {
        self.root.path().join("units")
    }

    pub(crate) fn instance_dir(&self, name: &str) -> PathBuf {
        self.data_root().join(format!("mc-{}", name))
    }

    pub(crate) fn unit_file(&self, name: &str) -> PathBuf {
        self.unit_dir().join(format!("mcfleet-{}.service", name))
    }

    /// Write a declaration whose paths point into this context.
    ///
    /// `body` is appended after the fleet-wide keys.
    pub(crate) fn write_fleet(&self, body: &str) {
        let header = super::fleet_toml::header(&self.data_root(), &self.unit_dir());
        fs::write(self.config_path(), format!("{}\n{}", header, body))
            .expect("Failed to write fleet declaration");
    }

    /// Write a declaration verbatim.
    pub(crate) fn write_raw_fleet(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write fleet declaration");
    }

    pub(crate) fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(path.as_ref())
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.as_ref().display(), e))
    }

    /// Build a command for invoking the compiled `mcfleet` binary against this context.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mcfleet").expect("Failed to locate mcfleet binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG").arg("--config").arg(self.config_path());
        cmd
    }
}
