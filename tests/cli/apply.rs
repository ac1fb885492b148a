use crate::harness::{TestContext, fleet_toml};
use predicates::prelude::*;
use std::fs;

#[test]
fn apply_writes_every_artifact() {
    let ctx = TestContext::new();
    ctx.write_fleet(
        r#"
[servers.survival]
jvm-opts = "-Xmx4G"

[servers.survival.server-config]
server-port = 25565
enable-rcon = true
rcon-password = "pw"
motd = "Hello: world"
"#,
    );

    ctx.cli()
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Provisioned server 'survival'"));

    let dir = ctx.instance_dir("survival");
    let properties = ctx.read(dir.join("server.properties"));
    assert_eq!(
        properties,
        "server-port=25565\n\
         enable-rcon=true\n\
         rcon.port=25575\n\
         rcon.password=pw\n\
         enable-query=false\n\
         query.port=25565\n\
         motd=Hello\\: world"
    );

    let script = ctx.read(dir.join("start.sh"));
    assert_eq!(
        script,
        "#!/usr/bin/env bash\ncd \"$(dirname \"$0\")\"\nexec java $JVMOPTS -jar server.jar nogui\n"
    );

    let license = ctx.data_root().join(".mcfleet/eula.txt");
    assert_eq!(ctx.read(&license), "# eula.txt managed by mcfleet\neula=true\n");
    assert_eq!(ctx.read(dir.join("eula.txt")), ctx.read(&license));

    let unit = ctx.read(ctx.unit_file("survival"));
    assert!(unit.contains("Description=Minecraft Server survival\n"));
    assert!(unit.contains("Environment=\"JVMOPTS=-Xmx4G\"\n"));
    assert!(unit.contains("Environment=\"MCRCON_PASS=pw\"\n"));
    assert!(unit.contains(&format!("ExecStart=\"{}\"\n", dir.join("start.sh").display())));
    assert!(unit.contains("Restart=always\n"));
    assert!(unit.contains("StateDirectory=mc-survival\n"));
}

#[cfg(unix)]
#[test]
fn apply_sets_modes_and_links_the_license() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    ctx.write_fleet(&fleet_toml::server("a", 25565));
    ctx.cli().arg("apply").assert().success();

    let mode = |path: std::path::PathBuf| fs::metadata(path).unwrap().permissions().mode() & 0o777;
    let dir = ctx.instance_dir("a");
    assert_eq!(mode(dir.join("server.properties")), 0o644);
    assert_eq!(mode(dir.join("start.sh")), 0o755);
    assert_eq!(mode(ctx.data_root().join(".mcfleet/eula.txt")), 0o444);

    let link = fs::read_link(dir.join("eula.txt")).unwrap();
    assert_eq!(link, ctx.data_root().join(".mcfleet/eula.txt"));
}

#[test]
fn multiline_secrets_stay_inside_their_environment_line() {
    let ctx = TestContext::new();
    ctx.write_fleet(
        r#"
[servers.a.server-config]
enable-rcon = true
rcon-password = "pw\nExecStartPre=/bin/rm -rf /srv"
"#,
    );

    ctx.cli().arg("apply").assert().success();

    let unit = ctx.read(ctx.unit_file("a"));
    assert!(!unit.lines().any(|line| line.starts_with("ExecStartPre=")));
    assert!(unit.contains("Environment=\"MCRCON_PASS=pw\\nExecStartPre=/bin/rm -rf /srv\"\n"));
}

#[test]
fn apply_twice_overwrites_in_place() {
    let ctx = TestContext::new();
    ctx.write_fleet(&fleet_toml::server("a", 25565));
    ctx.cli().arg("apply").assert().success();

    ctx.write_fleet(&fleet_toml::server("a", 25570));
    ctx.cli().arg("apply").assert().success();

    let properties = ctx.read(ctx.instance_dir("a").join("server.properties"));
    assert!(properties.starts_with("server-port=25570\n"));
}

#[test]
fn violations_leave_the_host_untouched() {
    let ctx = TestContext::new();
    ctx.write_fleet(&format!(
        "{}{}",
        fleet_toml::server("a", 25565),
        fleet_toml::server("b", 25565)
    ));

    ctx.cli()
        .arg("apply")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Fleet validation failed with 2 violation(s)"));

    assert!(fs::read_dir(ctx.data_root()).unwrap().next().is_none());
    assert!(fs::read_dir(ctx.unit_dir()).unwrap().next().is_none());
}

#[test]
fn external_start_script_is_not_touched() {
    let ctx = TestContext::new();
    let dir = ctx.instance_dir("a");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("start.sh"), "#!/bin/sh\nexec ./run\n").unwrap();
    ctx.write_fleet("[servers.a]\ngenerate-start-script = false\n");

    ctx.cli().arg("apply").assert().success();

    assert_eq!(ctx.read(dir.join("start.sh")), "#!/bin/sh\nexec ./run\n");
    assert!(dir.join("server.properties").exists());
    assert!(dir.join("eula.txt").exists());
}

#[test]
fn disabled_servers_lose_their_unit() {
    let ctx = TestContext::new();
    fs::write(ctx.unit_file("old"), "[Unit]\n").unwrap();
    ctx.write_fleet(&format!(
        "{}[servers.old]\nenabled = false\n",
        fleet_toml::server("a", 25565)
    ));

    ctx.cli().arg("apply").assert().success().stdout(predicate::str::contains("Removed"));

    assert!(!ctx.unit_file("old").exists());
    assert!(!ctx.instance_dir("old").exists());
    assert!(ctx.unit_file("a").exists());
}

#[test]
fn host_declarations_are_written() {
    let ctx = TestContext::new();
    ctx.write_fleet(
        r#"
[servers.a]
open-rcon = true

[servers.a.server-config]
server-port = 25565
enable-rcon = true
rcon-port = 25575
rcon-password = "pw"
enable-query = true
query-port = 25566
"#,
    );

    ctx.cli().arg("apply").assert().success();

    let firewall: serde_json::Value =
        serde_json::from_str(&ctx.read(ctx.data_root().join(".mcfleet/firewall.json"))).unwrap();
    assert_eq!(firewall["udp"], serde_json::json!([25566]));
    assert_eq!(firewall["tcp"], serde_json::json!([25565, 25566, 25575]));

    let account: serde_json::Value =
        serde_json::from_str(&ctx.read(ctx.data_root().join(".mcfleet/account.json"))).unwrap();
    assert_eq!(account["user"]["name"], "minecraft");
    assert_eq!(account["group"], "minecraft");
}

#[test]
fn path_overrides_redirect_output() {
    let ctx = TestContext::new();
    ctx.write_fleet(&fleet_toml::server("a", 25565));
    let data_root = ctx.root().join("elsewhere");
    let unit_dir = ctx.root().join("other-units");

    ctx.cli()
        .arg("apply")
        .arg("--data-root")
        .arg(&data_root)
        .arg("--unit-dir")
        .arg(&unit_dir)
        .assert()
        .success();

    assert!(data_root.join("mc-a/server.properties").exists());
    assert!(unit_dir.join("mcfleet-a.service").exists());
    assert!(!ctx.instance_dir("a").exists());
}
