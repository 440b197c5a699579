//! Binary tests for the plugin inspector

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Inspector isolated from the user's own config and environment
fn inspector(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("echo-plugins").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("ECHO_PLUGINS_LOAD")
        .env_remove("ECHO_PLUGINS_DISABLED")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_shows_builtin_agents() {
    let home = TempDir::new().unwrap();

    inspector(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("myinfo_agent"))
        .stdout(predicate::str::contains("search_agent"));
}

#[test]
fn list_is_the_default_command() {
    let home = TempDir::new().unwrap();

    inspector(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("myinfo_agent"));
}

#[test]
fn show_prints_prompt_and_tools() {
    let home = TempDir::new().unwrap();

    inspector(&home)
        .args(["show", "myinfo_agent"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You're Echo AI, your goal is to help user understand, get to know who you are",
        ))
        .stdout(predicate::str::contains("whoami"));
}

#[test]
fn show_json() {
    let home = TempDir::new().unwrap();

    let output = inspector(&home)
        .args(["show", "search_agent", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["name"], "search_agent");
    assert_eq!(summary["tools"][0]["name"], "web_search");
    assert_eq!(summary["tools"][0]["parameters"][0]["name"], "query");
}

#[test]
fn show_unknown_plugin_fails() {
    let home = TempDir::new().unwrap();

    inspector(&home)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown plugin: nope"));
}

#[test]
fn config_file_disables_plugin() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("plugins.toml");
    fs::write(&config, "[plugins]\ndisabled = [\"search_agent\"]\n").unwrap();

    inspector(&home)
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("myinfo_agent"))
        .stdout(predicate::str::contains("search_agent").not());
}

#[test]
fn env_allow_list() {
    let home = TempDir::new().unwrap();

    inspector(&home)
        .env("ECHO_PLUGINS_LOAD", "search_agent")
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"search_agent\""))
        .stdout(predicate::str::contains("myinfo_agent").not());
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    fs::write(&config, "[plugins]\nload = [\"Bad Name\"]\n").unwrap();

    inspector(&home)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn env_allow_list_overrides_user_file_deny_list() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".echo")).unwrap();
    fs::write(
        home.path().join(".echo/config.toml"),
        "[plugins]\ndisabled = [\"search_agent\"]\n",
    )
    .unwrap();

    inspector(&home)
        .env("ECHO_PLUGINS_LOAD", "search_agent")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("search_agent"));
}

#[test]
fn cli_file_keeps_user_file_enabled_flag() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".echo")).unwrap();
    fs::write(home.path().join(".echo/config.toml"), "[plugins]\nenabled = false\n").unwrap();
    let config = home.path().join("plugins.toml");
    fs::write(&config, "[plugins]\ndisabled = [\"search_agent\"]\n").unwrap();

    inspector(&home)
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("myinfo_agent").not());
}

#[test]
fn missing_plugin_is_reported_once() {
    let home = TempDir::new().unwrap();

    let output = inspector(&home)
        .env("ECHO_PLUGINS_LOAD", "ghost")
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("'ghost' not found").count(), 1);
}
