//! Plan command implementation.

use std::path::Path;

use crate::app::configuration::FleetOverrides;
use crate::domain::{AppError, FleetPlan};

pub fn run_plan(config: &Path, json: bool) -> Result<(), AppError> {
    let plan = crate::app::api::plan(config, &FleetOverrides::default())?;

    if json {
        let output = serde_json::to_string_pretty(&plan).map_err(|e| AppError::SerializeError {
            what: "provisioning plan".to_string(),
            details: e.to_string(),
        })?;
        println!("{}", output);
    } else {
        print_summary(&plan);
    }
    Ok(())
}

fn join_ports<'a>(ports: impl IntoIterator<Item = &'a u16>) -> String {
    let ports: Vec<String> = ports.into_iter().map(u16::to_string).collect();
    if ports.is_empty() { "-".to_string() } else { ports.join(", ") }
}

fn print_summary(plan: &FleetPlan) {
    println!("License: {}", plan.license.path.display());

    for instance in &plan.instances {
        println!();
        println!("Server '{}' ({})", instance.name, instance.directory.display());
        println!("  write {}", instance.properties.path.display());
        println!("  link  {} -> {}", instance.eula.path.display(), instance.eula.target.display());
        match &instance.start_script {
            Some(script) => println!("  write {}", script.path.display()),
            None => println!("  keep  {}", instance.unit.exec_start.display()),
        }
        println!("  write {}", instance.unit_file.path.display());
    }

    println!();
    println!(
        "Firewall: udp [{}] tcp [{}]",
        join_ports(&plan.firewall.udp),
        join_ports(&plan.firewall.tcp)
    );
    match (&plan.accounts.user, &plan.accounts.group) {
        (None, None) => println!("Accounts: none requested"),
        (user, group) => {
            if let Some(user) = user {
                println!("Accounts: user '{}' (home {})", user.name, user.home.display());
            }
            if let Some(group) = group {
                println!("Accounts: group '{}'", group);
            }
        }
    }
    for path in &plan.stale_units {
        println!("Remove: {}", path.display());
    }
}
