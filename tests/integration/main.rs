//! Integration tests for the recon7 CLI
//!
//! Each test runs the binary against files in a temporary directory, either
//! through `--config`/`--targets` or by pointing `HOME` at the directory.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a recon7 command
fn recon7() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("recon7"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Temp directory holding a config and a targets file
struct Setup {
    dir: TempDir,
}

impl Setup {
    fn new(config: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("config.7cfg"), config).expect("Failed to write config");
        Self { dir }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.7cfg")
    }

    fn targets(&self) -> PathBuf {
        self.dir.path().join("targets.lock")
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = recon7();
        cmd.arg("-c").arg(self.config()).arg("-t").arg(self.targets());
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}

// =============================================================================
// VERSION
// =============================================================================

#[test]
fn test_version_command() {
    recon7()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("recon7 v"));
}

#[test]
fn test_version_does_not_open_stores() {
    let temp = TempDir::new().unwrap();

    recon7()
        .arg("-c")
        .arg(temp.path().join("missing.7cfg"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("recon7 v"));
    assert!(!temp.path().join("missing.7cfg").exists());
}

#[test]
fn test_no_command_prints_version_and_hint() {
    recon7()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'recon7 --help' for usage"));
}

#[test]
fn test_version_json() {
    recon7()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

// =============================================================================
// TARGETS
// =============================================================================

#[test]
fn test_targets_add_list_remove() {
    let setup = Setup::new("");

    setup
        .cmd()
        .args(["targets", "add", "web1", "http://example.com", "landing", "page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added target 'web1'."));
    assert_eq!(read(&setup.targets()), "web1 \"http://example.com\" \"landing page\"\n");

    setup
        .cmd()
        .args(["targets", "add", "web1", "http://example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated target 'web1'."));
    assert_eq!(read(&setup.targets()), "web1 \"http://example.org\"\n");

    setup
        .cmd()
        .args(["targets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web1: http://example.org"));

    setup
        .cmd()
        .args(["targets", "remove", "web1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted target 'web1'."));
    assert_eq!(read(&setup.targets()), "");

    setup
        .cmd()
        .args(["targets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No targets."));
}

#[test]
fn test_targets_remove_missing_name() {
    let setup = Setup::new("");

    setup
        .cmd()
        .args(["targets", "remove", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No target named 'ghost'."));
    assert!(!setup.targets().exists());
}

#[test]
fn test_targets_show() {
    let setup = Setup::new("");
    fs::write(setup.targets(), "mysite \"example.com\" \"Example site\"\n").unwrap();

    setup
        .cmd()
        .args(["targets", "show", "mysite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected target: mysite -> example.com"))
        .stdout(predicate::str::contains("Example site"));

    setup
        .cmd()
        .args(["targets", "show", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No target named 'other'"));
}

#[test]
fn test_targets_add_rejects_bad_name() {
    let setup = Setup::new("");

    setup
        .cmd()
        .args(["targets", "add", "bad-name", "10.0.0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad-name"));
    assert!(!setup.targets().exists());
}

#[test]
fn test_targets_list_json() {
    let setup = Setup::new("");
    fs::write(setup.targets(), "a \"10.0.0.1\"\nb \"10.0.0.2\" \"db\"\n").unwrap();

    let output = setup.cmd().args(["--json", "targets", "list"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let targets = json["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0]["name"], "a");
    assert_eq!(targets[1]["desc"], "db");
}

// =============================================================================
// SETTINGS
// =============================================================================

#[test]
fn test_settings_set_and_get() {
    let setup = Setup::new("theme:bg #000000\n");

    setup
        .cmd()
        .args(["settings", "set", "num:delay", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set num:delay."));

    setup
        .cmd()
        .args(["settings", "get", "num:delay"])
        .assert()
        .success()
        .stdout("250\n");

    assert_eq!(read(&setup.config()), "num:delay 250\ntheme:bg #000000\n");
    assert_eq!(read(&setup.dir.path().join("config.7cfg.save")), "theme:bg #000000\n");
}

#[test]
fn test_settings_list_masks_secrets() {
    let setup = Setup::new("secret:shodan \"abc123\"\nnum:delay 5\n");

    setup
        .cmd()
        .args(["settings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("abc123").not());

    setup
        .cmd()
        .args(["settings", "get", "secret:shodan"])
        .assert()
        .success()
        .stdout("abc123\n");
}

#[test]
fn test_settings_list_by_namespace() {
    let setup = Setup::new("secret:k \"v\"\nnum:delay 5\ntheme:bg #000000\n");

    setup
        .cmd()
        .args(["settings", "list", "num"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delay"))
        .stdout(predicate::str::contains("bg").not());
}

#[test]
fn test_settings_set_rejects_bad_values() {
    let setup = Setup::new("num:delay 5\n");

    setup.cmd().args(["settings", "set", "num:delay", "fast"]).assert().failure();
    setup.cmd().args(["settings", "set", "theme:bg", "blue"]).assert().failure();
    setup.cmd().args(["settings", "set", "colors:bg", "#000000"]).assert().failure();

    assert_eq!(read(&setup.config()), "num:delay 5\n");
}

#[test]
fn test_settings_get_missing_key() {
    let setup = Setup::new("");

    setup
        .cmd()
        .args(["settings", "get", "num:nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No setting named 'num:nothing'"));
}

// =============================================================================
// RELOAD AND RECOVERY
// =============================================================================

#[test]
fn test_reload_counts_entries() {
    let setup = Setup::new("num:a 1\nnum:b 2\n");
    fs::write(setup.targets(), "t \"10.0.0.1\"\n").unwrap();

    setup
        .cmd()
        .arg("reload")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config and targets reloaded (2 setting(s), 1 target(s))."));
}

#[test]
fn test_unreadable_targets_restored_from_backup() {
    let setup = Setup::new("");
    fs::write(setup.targets(), [0xff, 0xfe, 0xfd, b'\n']).unwrap();
    fs::write(setup.dir.path().join("targets.lock.save"), "a \"10.0.0.1\"\n").unwrap();

    setup
        .cmd()
        .arg("reload")
        .assert()
        .success()
        .stdout(predicate::str::contains("Targets were unreadable; restored from backup."))
        .stdout(predicate::str::contains("Config was unreadable").not())
        .stdout(predicate::str::contains("1 target(s)"));

    assert_eq!(read(&setup.targets()), "a \"10.0.0.1\"\n");
}

#[test]
fn test_reload_json_reports_config_recovery() {
    let setup = Setup::new("");
    fs::write(setup.config(), [0xff, 0xfe, 0xfd, b'\n']).unwrap();
    fs::write(setup.dir.path().join("config.7cfg.save"), "num:delay 5\n").unwrap();

    let output = setup.cmd().args(["--json", "reload"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["settings_recovered"], true);
    assert_eq!(json["targets_recovered"], false);
    assert_eq!(json["settings"], 1);
    assert_eq!(read(&setup.config()), "num:delay 5\n");
}

#[test]
fn test_reload_without_corruption_reports_no_recovery() {
    let setup = Setup::new("num:a 1\n");

    setup
        .cmd()
        .arg("reload")
        .assert()
        .success()
        .stdout(predicate::str::contains("restored from backup").not());
}

#[test]
fn test_unreadable_without_backup_fails() {
    let setup = Setup::new("");
    fs::write(setup.targets(), [0xff, 0xfe, 0xfd, b'\n']).unwrap();

    setup
        .cmd()
        .args(["targets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load targets"));
}

// =============================================================================
// CONFIG RESOLUTION
// =============================================================================

#[test]
fn test_missing_explicit_config_is_error() {
    let temp = TempDir::new().unwrap();

    recon7()
        .arg("-c")
        .arg(temp.path().join("nope.7cfg"))
        .args(["targets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_default_config_created_under_home() {
    let home = TempDir::new().unwrap();

    recon7()
        .env("HOME", home.path())
        .args(["settings", "get", "theme:accent"])
        .assert()
        .success()
        .stdout("#00ffff\n");

    let config = home.path().join(".config/recon7/config.7cfg");
    assert!(config.is_file());
    assert!(read(&config).contains("theme:bg #000000"));
}

#[test]
fn test_default_targets_file_under_home() {
    let home = TempDir::new().unwrap();

    recon7()
        .env("HOME", home.path())
        .args(["targets", "add", "router", "192.168.1.1"])
        .assert()
        .success();

    let targets = home.path().join(".config/recon7/targets.lock");
    assert_eq!(read(&targets), "router \"192.168.1.1\"\n");
}
