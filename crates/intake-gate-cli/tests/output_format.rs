//! Output format tests: JSONL vs JSON array, pretty printing, field shape.

#![allow(clippy::unwrap_used, clippy::expect_used, deprecated)]

use assert_cmd::Command;
use intake_gate_test_support::SyntheticPhotoBuilder;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn two_image_dir() -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    write_image(
        temp.path(),
        "a.jpg",
        &SyntheticPhotoBuilder::noise_jpeg(800, 1000),
    );
    write_image(
        temp.path(),
        "b.png",
        &SyntheticPhotoBuilder::noise_png(700, 900),
    );
    temp
}

#[test]
fn test_jsonl_emits_one_object_per_line() {
    let temp = two_image_dir();

    let mut cmd = Command::cargo_bin("intake-gate").unwrap();
    cmd.arg("--format").arg("jsonl").arg(temp.path());

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let records: Vec<Value> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("each line is a JSON object"))
        .collect();
    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record.is_object());
        assert!(record["path"].is_string());
    }
}

#[test]
fn test_json_emits_single_array() {
    let temp = two_image_dir();

    let mut cmd = Command::cargo_bin("intake-gate").unwrap();
    cmd.arg("--format").arg("json").arg(temp.path());

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: Value = serde_json::from_str(stdout.trim()).expect("single JSON document");
    let records = parsed.as_array().expect("top-level array");
    assert_eq!(records.len(), 2);
}

#[test]
fn test_pretty_json_is_multiline() {
    let temp = two_image_dir();

    let mut cmd = Command::cargo_bin("intake-gate").unwrap();
    cmd.arg("--format").arg("json").arg("--pretty").arg(temp.path());

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.lines().count() > 2, "pretty output spans lines");
    let parsed: Value = serde_json::from_str(stdout.trim()).expect("still valid JSON");
    assert!(parsed.is_array());
}

#[test]
fn test_record_shape_matches_contract() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_image(
        temp.path(),
        "selfie.jpg",
        &SyntheticPhotoBuilder::noise_jpeg(800, 1000),
    );

    let mut cmd = Command::cargo_bin("intake-gate").unwrap();
    cmd.arg(&path);

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let record: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();

    // Top level: path + timestamp + flattened verdict
    for key in ["path", "timestamp", "accepted", "quality_score", "checks", "reasons", "metadata"] {
        assert!(record.get(key).is_some(), "missing key {key}");
    }

    // All six checks present as booleans
    let checks = record["checks"].as_object().unwrap();
    assert_eq!(checks.len(), 6);
    for (key, value) in checks {
        assert!(value.is_boolean(), "check {key} should be a bool");
    }

    // Metadata carries dimensions, format, size and blur score
    let metadata = record["metadata"].as_object().unwrap();
    for key in ["width", "height", "format", "size_bytes", "blur_score"] {
        assert!(metadata.contains_key(key), "missing metadata key {key}");
    }
}

#[test]
fn test_scores_are_rounded_to_two_decimals_on_the_wire() {
    // A 5-of-6 pass serializes as 0.83, not 0.8333...
    let temp = tempfile::tempdir().unwrap();
    let path = write_image(
        temp.path(),
        "scan.bmp",
        &SyntheticPhotoBuilder::noise_bmp(800, 1000),
    );

    let mut cmd = Command::cargo_bin("intake-gate").unwrap();
    cmd.arg(&path);

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"quality_score\":0.83"), "got {stdout}");
    assert!(!stdout.contains("0.8333"), "got {stdout}");
}

#[test]
fn test_quiet_suppresses_stderr_chatter() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_image(
        temp.path(),
        "thumb.jpg",
        &SyntheticPhotoBuilder::flat_jpeg(300, 200, 128),
    );

    let mut cmd = Command::cargo_bin("intake-gate").unwrap();
    cmd.arg("--quiet").arg(&path);

    let output = cmd.output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.trim().is_empty(), "quiet run printed: {stderr}");
    // Verdict still goes to stdout and the exit code still reflects it
    assert_eq!(output.status.code(), Some(1));
}
