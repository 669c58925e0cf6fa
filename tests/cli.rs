use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
[[teams]]
name = "Odania"
data = { baseAccountId = "my-account-id" }

[[teams.providers]]
type = "dummy"
name = "dummy-provider"
data = { accountId = "account-id-1", color = "color1" }

[[teams.providers]]
type = "aws"
name = "aws-provider"
roles = ["admin", "developer"]
data = { accountId = "account-id-2", color = "color2" }
"#;

const EXPECTED: &str = "AWS Extend Switch Roles configuration:

[Odania]
aws_account_id = my-account-id


[aws-provider-admin]
source_profile = Odania
color = color2
role_arn = arn:aws:iam::account-id-2:role/admin


[aws-provider-developer]
source_profile = Odania
color = color2
role_arn = arn:aws:iam::account-id-2:role/developer


";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("terraless-switch-roles").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TERRALESS_CONFIG");
    cmd
}

#[test]
fn renders_configuration_to_log_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("terraless.toml");
    let log = dir.path().join("out.log");
    fs::write(&config, CONFIG).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let output = fs::read_to_string(&log).unwrap();
    assert!(output.contains(EXPECTED), "log was:\n{}", output);
    assert!(!output.contains("dummy-provider"));
    assert_eq!(output.matches("AWS Extend Switch Roles configuration:").count(), 1);
}

#[test]
fn renders_configuration_to_stderr() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("terraless.toml");
    fs::write(&config, CONFIG).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("[aws-provider-developer]"))
        .stderr(predicate::str::contains(
            "role_arn = arn:aws:iam::account-id-2:role/admin",
        ));
}

#[test]
fn picks_up_project_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("terraless.toml"), CONFIG).unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[Odania]"));
}

#[test]
fn warn_level_suppresses_output() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("terraless.toml");
    fs::write(&config, CONFIG).unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("--log-level")
        .arg("warn")
        .assert()
        .success()
        .stderr(predicate::str::contains("AWS Extend Switch Roles").not());
}

#[test]
fn missing_config_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn duplicate_team_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("terraless.toml");
    fs::write(&config, "[[teams]]\nname = \"a\"\n\n[[teams]]\nname = \"a\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate team name"));
}
