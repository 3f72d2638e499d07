//! Integration tests for the housing CLI

use assert_cmd::Command;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

/// Test CLI argument parsing
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

/// Test CLI version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("--version");
    cmd.assert().success();
}

/// Test invalid arguments
#[test]
fn test_invalid_arguments() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("--invalid-flag");
    cmd.assert().failure();
}

#[test]
fn test_render_writes_index() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("dist");

    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("render").arg("--out-dir").arg(&out);
    cmd.assert().success();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("राष्ट्रीय आवास सहायता वीडियो गाइड"));
    assert_eq!(html.matches("<video").count(), 1);
}

#[test]
fn test_render_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("site.json");
    fs::write(&config, r#"{ "lang": "en" }"#).unwrap();
    let out = temp_dir.path().join("dist");

    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("render")
        .arg("--out-dir")
        .arg(&out);
    cmd.assert().success();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains(r#"lang="en""#));
}

#[test]
fn test_check_assets_missing() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("check-assets").arg("--public").arg(temp_dir.path());
    let output = cmd.output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("housing-support.jpg"));
    assert!(stdout.contains("housing-support.mp4"));
}

#[test]
fn test_check_assets_present() {
    let temp_dir = TempDir::new().unwrap();
    for file in ["posters/housing-support.jpg", "videos/housing-support.mp4"] {
        let path = temp_dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"data").unwrap();
    }

    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("check-assets").arg("--public").arg(temp_dir.path());
    cmd.assert().success();
}

#[test]
fn test_storyboard_json() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("storyboard").arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, ["overview", "eligibility", "apply", "benefits"]);
}

#[test]
fn test_timeline_json() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.args(["timeline", "--json", "10", "12", "14", "11"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["slides"].as_array().unwrap().len(), 4);
}

#[rstest]
#[case(&["timeline", "1", "2", "3"])]
#[case(&["timeline", "1", "2", "3", "-4"])]
#[case(&["plan", "1", "2"])]
fn test_bad_clip_lengths(#[case] args: &[&str]) {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.args(args);
    cmd.assert().failure();
}

#[test]
fn test_plan_prints_ffmpeg_commands() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.args(["plan", "--assets", "build", "10", "12", "14", "11"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().filter(|l| l.starts_with("ffmpeg ")).count(), 7);
    assert!(stdout.contains("build/housing_support.mp4"));
}

#[test]
fn test_storyboard_text_shows_accents() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.arg("storyboard");
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // accent #0f5fa6 as a 24-bit foreground colour
    assert!(stdout.contains("\x1b[38;2;15;95;166m"));
    assert!(stdout.contains("#6b2fa3"));
}

#[test]
fn test_timeline_rejects_overflowing_total() {
    let mut cmd = Command::cargo_bin("housing").unwrap();
    cmd.args(["timeline", "1e308", "1e308", "1e308", "1e308"]);
    cmd.assert().failure();
}
