use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{temp_dir, temp_path, wks};

fn config_arg(name: &str) -> String {
    temp_path(name, "conf").to_string_lossy().to_string()
}

#[test]
fn test_help_lists_commands() {
    wks()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("report").and(contains("members")).and(contains("init")));
}

#[test]
fn test_init_writes_default_config() {
    let cfg = config_arg("cli_init");

    wks().args(["--config", &cfg, "init"]).assert().success();

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("reporting_utc_offset_minutes: 330"));
    assert!(content.contains("api.clickup.com/api/v2"));

    // second init refuses to overwrite
    wks()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    wks().args(["--config", &cfg, "init", "--force"]).assert().success();
}

#[test]
fn test_config_print_masks_token() {
    let cfg = config_arg("cli_print");
    fs::write(&cfg, "api_token: pk_secret_9876\nteam_id: \"555\"\n").expect("write config");

    wks()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("****9876").and(contains("pk_secret").not()))
        .stdout(contains("555"));
}

#[test]
fn test_config_check_reports_missing_values() {
    let cfg = config_arg("cli_check");
    fs::write(&cfg, "team_id: \"555\"\n").expect("write config");

    wks()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stdout(contains("api_token"));
}

#[test]
fn test_config_check_accepts_env_token() {
    let cfg = config_arg("cli_check_env");
    fs::write(&cfg, "team_id: \"555\"\n").expect("write config");

    wks()
        .env("WEEKSHEET_API_TOKEN", "pk_from_env")
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete."));
}

#[test]
fn test_report_rejects_bad_date() {
    let cfg = config_arg("cli_bad_date");

    wks()
        .args([
            "--config", &cfg, "report", "AB12", "--start", "2025-13-01", "--end", "2025-01-12",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_report_rejects_reversed_range() {
    let cfg = config_arg("cli_reversed");

    wks()
        .args([
            "--config", &cfg, "report", "AB12", "--start", "2025-01-12", "--end", "2025-01-06",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_report_requires_credentials() {
    let cfg = config_arg("cli_no_token");
    let out = temp_dir("cli_no_token_out");

    wks()
        .args([
            "--config",
            &cfg,
            "report",
            "AB12",
            "--start",
            "2025-01-06",
            "--end",
            "2025-01-12",
            "--dir",
            &out.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("api_token is not set"));

    assert_eq!(fs::read_dir(&out).expect("read dir").count(), 0);
}

#[test]
fn test_members_requires_team_id() {
    let cfg = config_arg("cli_members");
    fs::write(&cfg, "api_token: pk_x\n").expect("write config");

    wks()
        .args(["--config", &cfg, "members"])
        .assert()
        .failure()
        .stderr(contains("team_id is not set"));
}

#[test]
fn test_unknown_format_is_a_usage_error() {
    wks()
        .args([
            "report", "AB12", "--start", "2025-01-06", "--end", "2025-01-12", "--format", "pdf",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}
