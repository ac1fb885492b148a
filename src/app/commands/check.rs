//! Fleet check: violations block provisioning, warnings only advise.

use std::path::Path;

use tracing::info;

use super::diagnostics::Diagnostics;
use crate::domain::{FleetConfig, validate};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Collect violations and advisory warnings for a loaded fleet.
pub fn diagnose(config_path: &Path, fleet: &FleetConfig) -> Diagnostics {
    let file = config_path.display().to_string();
    let mut diagnostics = Diagnostics::default();

    diagnostics.push_violations(&file, &validate(fleet));

    if fleet.enabled_servers().next().is_none() {
        diagnostics.push_warning(&file, "No enabled servers are declared");
    }
    for (name, server) in fleet.enabled_servers() {
        let props = &server.server_config;
        if props.enable_rcon && props.rcon_password.is_empty() {
            diagnostics.push_warning(
                &file,
                format!("Server '{}' enables RCON without an rcon-password", name),
            );
        }
        if server.open_rcon && !props.enable_rcon {
            diagnostics.push_warning(
                &file,
                format!("Server '{}' sets open-rcon but RCON is disabled; no port is opened", name),
            );
        }
    }

    diagnostics
}

pub fn execute(config_path: &Path, fleet: &FleetConfig, options: CheckOptions) -> CheckOutcome {
    let diagnostics = diagnose(config_path, fleet);
    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }
    info!(errors, warnings, exit_code, "fleet check finished");

    CheckOutcome { errors, warnings, exit_code }
}
