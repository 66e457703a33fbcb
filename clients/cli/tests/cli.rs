use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".employee-dashboard").join("config.json")
}

const BINARY_NAME: &str = "employee-dashboard";

fn dashboard_cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path())
        .env_remove("DASHBOARD_API_URL")
        .env_remove("DASHBOARD_ENVIRONMENT");
    cmd
}

#[test]
/// Help command should list every subcommand.
fn cli_help_displays_usage() {
    let home = temp_home_dir();
    dashboard_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Employee dashboard"))
        .stdout(contains("start"))
        .stdout(contains("summary"))
        .stdout(contains("set-api-url"))
        .stdout(contains("reset-config"));
}

#[test]
/// set-api-url should create the config file with the given URL.
fn set_api_url_creates_config_file() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    dashboard_cmd(&home)
        .arg("set-api-url")
        .arg("http://hr.example/api")
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"api_base_url\": \"http://hr.example/api\""));
}

#[test]
/// set-api-url should reject anything that is not an http(s) URL.
fn set_api_url_rejects_invalid_url() {
    let home = temp_home_dir();

    dashboard_cmd(&home)
        .arg("set-api-url")
        .arg("ftp://hr.example")
        .assert()
        .failure();

    assert!(!config_file_path(&home).exists());
}

#[test]
/// reset-config should delete an existing config file.
fn reset_config_deletes_config_file() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();
    assert!(config_path.exists());

    dashboard_cmd(&home)
        .arg("reset-config")
        .assert()
        .success()
        .stdout(contains("Resetting configuration"));

    assert!(!config_path.exists());
}

#[test]
/// reset-config without a config file is not an error.
fn reset_config_without_file_succeeds() {
    let home = temp_home_dir();

    dashboard_cmd(&home).arg("reset-config").assert().success();
}

#[test]
/// summary should exit non-zero with the generic message when the API is unreachable.
fn summary_fails_with_generic_message_when_api_unreachable() {
    let home = temp_home_dir();

    dashboard_cmd(&home)
        .arg("summary")
        .arg("--api-url")
        .arg("http://127.0.0.1:1/api")
        .env("NO_PROXY", "*")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .assert()
        .failure()
        .stderr(contains("Error loading dashboard data"));
}
