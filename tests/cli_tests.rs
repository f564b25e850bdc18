//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn feedlot() -> Command {
    let mut cmd = cargo_bin_cmd!("feedlot");
    cmd.env_remove("FEEDLOT_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    feedlot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("grid"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_simulate_default_scenario() {
    feedlot()
        .args(["--color", "never", "simulate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resultado: USD 31"))
        .stdout(predicate::str::contains("Composición del Resultado"))
        .stdout(predicate::str::contains("Margen de alimentación"))
        .stdout(predicate::str::contains("Compra: 1.95"))
        .stdout(predicate::str::contains("ADPV: 2.40"));
}

#[test]
fn test_simulate_no_grids() {
    feedlot()
        .args(["--color", "never", "simulate", "--no-grids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resultado Total"))
        .stdout(predicate::str::contains("Compra: 1.95").not());
}

#[test]
fn test_simulate_quiet_prints_only_result() {
    feedlot()
        .args(["--quiet", "simulate", "--sale-price", "4.0"])
        .assert()
        .success()
        .stdout("31\n");
}

#[test]
fn test_simulate_json() {
    let output = feedlot()
        .args(["--json", "simulate"])
        .output()
        .expect("run feedlot");
    assert!(output.status.success());

    let line = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();

    assert_eq!(value["type"], "simulation");
    assert_eq!(value["payload"]["result"]["net_result"], 31);
    assert_eq!(value["payload"]["price_grid"]["cells"][5][5]["value"], 31);
    assert_eq!(value["payload"]["price_grid"]["cells"][10][0]["band"], "loss");
}

#[test]
fn test_grid_price_json() {
    let output = feedlot()
        .args(["--json", "grid", "price"])
        .output()
        .expect("run feedlot");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json document");
    assert_eq!(value["type"], "grid");
    assert_eq!(value["payload"]["rows"]["field"], "purchase_price");
    assert_eq!(value["payload"]["columns"]["field"], "sale_price");
    assert_eq!(value["payload"]["cells"][0][0]["value"], 45);
}

#[test]
fn test_invalid_override_fails() {
    feedlot()
        .args(["simulate", "--dressing-yield", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dressing yield"));
}

#[test]
fn test_zero_gain_fails() {
    feedlot()
        .args(["simulate", "--daily-gain", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("daily_gain"));
}

#[test]
fn test_config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feedlot.toml");

    feedlot()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    feedlot()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    feedlot()
        .args(["--color", "never", "config", "init", "--force"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwriting"));

    feedlot()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn test_simulate_uses_config_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feedlot.toml");
    fs::write(&path, "[scenario]\nsale_price_per_kg = 4.25\n").unwrap();

    feedlot()
        .args(["--quiet", "simulate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("104\n");
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feedlot.toml");
    fs::write(&path, "[scenario]\nkg_purchased = \"many\"\n").unwrap();

    feedlot()
        .args(["--color", "never", "config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("feedlot::config"));
}
