//! Integration tests for xhairctl CLI
//!
//! These tests cover every command workflow together with the exit codes
//! reported for invalid input.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        if let Ok(text) = std::str::from_utf8(s) {
            serde_json::from_str::<Value>(text).is_ok()
        } else {
            false
        }
    })
}

/// Test helper to create an xhairctl command
fn xhairctl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("xhairctl")?;
    cmd.env_remove("XHAIRCTL_CONFIG").env_remove("RUST_LOG");
    Ok(cmd)
}

fn stdout_json(cmd: &mut Command) -> Result<Value, Box<dyn std::error::Error>> {
    let output = cmd.output()?;
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_cli_help() -> TestResult {
    xhairctl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("crosshair codes"));
    Ok(())
}

#[test]
fn test_cli_version() -> TestResult {
    xhairctl()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xhairctl"));
    Ok(())
}

#[test]
fn test_decode_human() -> TestResult {
    xhairctl()?
        .args(["decode", "0;P;c;1;o;1;d;1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Green"))
        .stdout(predicate::str::contains("00FF00FF"));
    Ok(())
}

#[test]
fn test_decode_json() -> TestResult {
    let json = stdout_json(xhairctl()?.args(["--json", "decode", "0;P;c;1;o;1;d;1"]))?;
    assert_eq!(json["success"], true);
    assert_eq!(json["profile"]["primary"]["color"], 1);
    assert_eq!(json["profile"]["primary"]["outlines"]["alpha"], 1.0);
    assert_eq!(json["profile"]["primary"]["dot"]["enabled"], true);
    assert_eq!(json["profile"]["primary"]["hexColor"]["value"], "00FF00FF");
    assert!(json.get("issues").is_none());
    Ok(())
}

#[test]
fn test_decode_report() -> TestResult {
    let json = stdout_json(xhairctl()?.args(["decode", "0;P;zz;5;t;9", "--report", "--json"]))?;
    assert_eq!(
        json["issues"],
        serde_json::json!(["unknown key P:zz", "value 9 for P:t outside [1, 6]"])
    );

    xhairctl()?
        .args(["decode", "0;P;zz;5", "--report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown key P:zz"));
    Ok(())
}

#[test]
fn test_decode_invalid_code_exit_code() -> TestResult {
    xhairctl()?
        .args(["decode", "P;c;1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid crosshair code"));

    xhairctl()?
        .args(["--json", "decode", "P;c;1"])
        .assert()
        .code(4)
        .stdout(is_json())
        .stdout(predicate::str::contains("InvalidCode"));
    Ok(())
}

#[test]
fn test_normalize() -> TestResult {
    xhairctl()?
        .args(["normalize", "0;P;d;1;c;1;o;1.0;zz;3"])
        .assert()
        .success()
        .stdout("0;P;c;1;o;1;d;1\n");

    xhairctl()?
        .args(["normalize", "0;P;c;0"])
        .assert()
        .success()
        .stdout("0\n");
    Ok(())
}

#[test]
fn test_diff() -> TestResult {
    let json = stdout_json(xhairctl()?.args(["--json", "diff", "0;P;c;2;0a;0.5"]))?;
    assert_eq!(
        json["changes"],
        serde_json::json!([
            {"key": "P:c", "path": "primary.color", "value": "2"},
            {"key": "P:0a", "path": "primary.inner.alpha", "value": "0.5"},
        ])
    );

    xhairctl()?
        .args(["diff", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));
    Ok(())
}

#[test]
fn test_encode_from_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("profile.json");
    let profile = serde_json::json!({
        "primary": {
            "color": 8,
            "hexColor": { "enabled": true, "value": "12AB34FF" }
        }
    });
    fs::write(&path, serde_json::to_string_pretty(&profile)?)?;

    xhairctl()?
        .arg("encode")
        .arg(&path)
        .assert()
        .success()
        .stdout("0;P;c;8;u;12AB34FF;b;1\n");
    Ok(())
}

#[test]
fn test_encode_from_stdin() -> TestResult {
    xhairctl()?
        .args(["encode", "-"])
        .write_stdin(r#"{"general": {"hideOnFire": false}}"#)
        .assert()
        .success()
        .stdout("0;P;f;0\n");
    Ok(())
}

#[test]
fn test_encode_rejects_out_of_range_profile() -> TestResult {
    xhairctl()?
        .args(["encode", "-"])
        .write_stdin(r#"{"primary": {"color": 9}}"#)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("primary.color = 9"));

    xhairctl()?
        .args(["encode", "-"])
        .write_stdin("not json")
        .assert()
        .code(4);
    Ok(())
}

#[test]
fn test_encode_missing_file() -> TestResult {
    xhairctl()?
        .args(["encode", "/nonexistent/profile.json"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn test_random_is_reproducible_with_seed() -> TestResult {
    let first = xhairctl()?.args(["random", "-n", "20", "--seed", "7"]).output()?;
    let second = xhairctl()?.args(["random", "-n", "20", "--seed", "7"]).output()?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout)?;
    assert_eq!(text.lines().count(), 20);
    for code in text.lines() {
        let profile = crosshair_codec::decode(code).ok_or("random code must decode")?;
        assert!(profile.primary.has_visible_part(), "{code}");
        assert!(!profile.general.advanced_options);
    }
    Ok(())
}

#[test]
fn test_random_json() -> TestResult {
    let json = stdout_json(xhairctl()?.args(["random", "--count", "3", "--json"]))?;
    let codes = json["codes"].as_array().ok_or("codes must be an array")?;
    assert_eq!(codes.len(), 3);
    Ok(())
}

#[test]
fn test_background() -> TestResult {
    xhairctl()?
        .args(["background", "42", "0;P;c;1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/assets/vcrdb-backgrounds/blaugelb.webp",
        ));

    let json = stdout_json(xhairctl()?.args(["--json", "background", "100", "0;P;c;8;u;FF0000FF"]))?;
    assert_eq!(json["background"], "metall.webp");
    assert_eq!(json["color"]["name"], "red");
    assert_eq!(json["color"]["luminance"], "dark");
    Ok(())
}

#[test]
fn test_config_file_enables_json() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("xhairctl.yaml");
    fs::write(&path, "output:\n  json: true\nrandomizer:\n  max_attempts: 50\n")?;

    xhairctl()?
        .args(["normalize", "0;P;c;1"])
        .env("XHAIRCTL_CONFIG", &path)
        .assert()
        .success()
        .stdout(is_json())
        .stdout(predicate::str::contains("\"code\": \"0;P;c;1\""));
    Ok(())
}

#[test]
fn test_invalid_config_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("xhairctl.yaml");
    fs::write(&path, "randomizer:\n  max_attempts: 0\n")?;

    xhairctl()?
        .arg("--config")
        .arg(&path)
        .args(["random"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_attempts"));
    Ok(())
}

#[test]
fn test_completion_generation() -> TestResult {
    xhairctl()?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xhairctl"));
    Ok(())
}
