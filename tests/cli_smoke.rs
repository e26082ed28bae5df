#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing. Every test points
//! `XDG_CONFIG_HOME` at an empty directory so a user's config never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn tl_desk(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tl-desk").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("tl-desk");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Desktop-style translation tool"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_session_help() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .args(["session", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--model"));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("French"))
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("zh-CN"));
}

#[test]
fn test_providers_list_without_config_shows_builtin() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("google"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_providers_lists_configured_provider() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[tl]
provider = "local"

[providers.local]
kind = "openai"
endpoint = "http://localhost:11434"
models = ["gemma3:12b"]
"#,
    );

    tl_desk(&home)
        .args(["providers", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("http://localhost:11434"))
        .stdout(predicate::str::contains("gemma3:12b"));
}

#[test]
fn test_providers_unknown_provider() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .args(["providers", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .args(["--to", "invalid_lang_xyz"])
        .write_stdin("hello")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_missing_target_is_config_error() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .write_stdin("hello")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("'to'"));
}

#[test]
fn test_empty_input_is_rejected() {
    let home = TempDir::new().unwrap();
    tl_desk(&home)
        .args(["--to", "fr"])
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}

#[test]
fn test_broken_config_file_is_config_error() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[tl\nprovider = ");

    tl_desk(&home)
        .args(["--to", "fr"])
        .write_stdin("hello")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_unreachable_provider_fails() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[providers.dead]
kind = "openai"
endpoint = "http://127.0.0.1:9"
"#,
    );

    tl_desk(&home)
        .args(["--provider", "dead", "--model", "m", "--to", "fr", "--quiet"])
        .write_stdin("hello")
        .assert()
        .code(exitcode::SOFTWARE)
        .stdout(predicate::str::is_empty());
}
