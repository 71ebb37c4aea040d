//! End-to-end tests for the `cephalo` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cephalo_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cephalo"))
}

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn analyze_md_prints_table_and_summary() {
    cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg(data("landmarks.json"))
        .arg("--patient")
        .arg(data("patient.json"))
        .arg("--mm-per-px")
        .arg("0.1")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Measure | Value | Units | Norm | Z | Interpretation |"))
        .stdout(predicate::str::contains("| SNA |"))
        .stdout(predicate::str::contains("## Summary"))
        .stdout(predicate::str::contains("Ana Souza (female, age 14) presents"));
}

#[test]
fn analyze_json_is_parseable() {
    let output = cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg(data("landmarks.json"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["measures"].as_array().unwrap().len(), 21);
    assert_eq!(value["soft"]["linear_unit"], "px");
}

#[test]
fn analyze_flags_disable_families() {
    let output = cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg(data("landmarks.json"))
        .arg("--no-steiner")
        .arg("--no-bjork")
        .arg("--no-extended")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["measures"].as_array().unwrap().len(), 1);
    assert!(value["steiner"]["sna"].is_null());
}

#[test]
fn analyze_applies_config_overrides() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("cephalo.toml");
    std::fs::write(
        &config,
        "[analysis]\nbjork = false\nextended = false\n\n[norms.steiner]\nSNA = { mean = 70.0, sd = 2.0 }\n",
    )
    .unwrap();

    let output = cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg(data("landmarks.json"))
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let measures = value["measures"].as_array().unwrap();
    assert_eq!(measures.len(), 11);
    assert_eq!(measures[0]["norm"]["mean"], 70.0);
}

#[test]
fn analyze_missing_landmark_file_fails() {
    cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg("does/not/exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read landmarks file"));
}

#[test]
fn analyze_unknown_landmark_code_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "Zz": { "x": 1.0, "y": 2.0 } }"#).unwrap();
    cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse landmarks JSON"));
}

#[test]
fn analyze_invalid_format_fails() {
    cephalo_cmd()
        .arg("analyze")
        .arg("--landmarks")
        .arg(data("landmarks.json"))
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

// ---------------------------------------------------------------------------
// calibrate
// ---------------------------------------------------------------------------

#[test]
fn calibrate_prints_factor_and_scale() {
    cephalo_cmd()
        .args(["calibrate", "--p1", "0,0", "--p2", "10,0", "--known-mm", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mm_per_px: 2"))
        .stdout(predicate::str::contains("scale: 0.50 px/mm"));
}

#[test]
fn calibrate_rejects_coincident_points() {
    cephalo_cmd()
        .args(["calibrate", "--p1", "5,5", "--p2", "5,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Calibration rejected"));
}

#[test]
fn calibrate_rejects_zero_known_distance() {
    cephalo_cmd()
        .args(["calibrate", "--p1", "0,0", "--p2", "3,4", "--known-mm", "0"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// norms
// ---------------------------------------------------------------------------

#[test]
fn norms_prints_standard_table() {
    let output = cephalo_cmd().arg("norms").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["norms"]["SNA"]["mean"], 82.0);
    assert_eq!(value["tolerances"]["millimeters"], 1.0);
}

#[test]
fn norms_reports_wrong_family() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("cephalo.toml");
    std::fs::write(&config, "[norms.bjork]\nSNA = { mean = 80.0, sd = 3.0 }\n").unwrap();
    cephalo_cmd()
        .arg("norms")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("belongs to [steiner], not [bjork]"));
}
