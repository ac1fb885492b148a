use crate::harness::{TestContext, fleet_toml};
use predicates::prelude::*;
use std::fs;

#[test]
fn plan_lists_artifacts_without_writing() {
    let ctx = TestContext::new();
    ctx.write_fleet(&fleet_toml::server("survival", 25565));

    ctx.cli()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Server 'survival'"))
        .stdout(predicate::str::contains("server.properties"))
        .stdout(predicate::str::contains("mcfleet-survival.service"))
        .stdout(predicate::str::contains("Firewall: udp [-] tcp [25565]"));

    assert!(fs::read_dir(ctx.data_root()).unwrap().next().is_none());
    assert!(fs::read_dir(ctx.unit_dir()).unwrap().next().is_none());
}

#[test]
fn plan_json_is_machine_readable() {
    let ctx = TestContext::new();
    ctx.write_fleet(&format!(
        "{}[servers.old]\nenabled = false\n",
        fleet_toml::server("a", 25565)
    ));

    let output = ctx.cli().args(["plan", "--json"]).output().unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["instances"].as_array().unwrap().len(), 1);
    assert_eq!(plan["instances"][0]["name"], "a");
    assert_eq!(plan["instances"][0]["properties"]["mode"], 0o644);
    assert_eq!(plan["firewall"]["tcp"], serde_json::json!([25565]));
    assert_eq!(plan["stale_units"].as_array().unwrap().len(), 1);
}

#[test]
fn plan_refuses_an_invalid_fleet() {
    let ctx = TestContext::new();
    ctx.write_raw_fleet("eula = false\n");

    ctx.cli()
        .arg("plan")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("accept the Minecraft EULA"));
}
