//! End-to-end tests for the `parlance` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const CONTENT: &str = r#"{
    "ui": [
        { "id": "welcome", "voice_content": "Welcome to {city}. {greet-*}" },
        { "id": "greet-a", "voice_content": "Good morning!", "start_hour": 5, "end_hour": 11 },
        { "id": "greet-b", "voice_content": "Hello!" },
        { "id": "typo", "voice_content": "Hi {nmae}" }
    ],
    "facts": [{ "id": "beds", "template": "{beds:>0:[beds] bedroom[s]}" }]
}"#;

fn content_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{CONTENT}").unwrap();
    file.flush().unwrap();
    file
}

fn parlance(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parlance"))
        .args(args)
        .args(["--color", "never"])
        .env_remove("PARLANCE_CONTENT")
        .env_remove("PARLANCE_HOUR")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// render
// =============================================================================

#[test]
fn render_with_params_and_hour() {
    let file = content_file();
    let path = file.path().to_str().unwrap();
    let output = parlance(&[
        "render", "welcome", "--content", path, "-p", "city=Austin", "--hour", "20",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Welcome to Austin. Hello!\n");
}

#[test]
fn render_fact_template_with_data_file() {
    let file = content_file();
    let mut data = NamedTempFile::new().unwrap();
    write!(data, r#"{{"beds": 2}}"#).unwrap();
    data.flush().unwrap();
    let output = parlance(&[
        "render",
        "beds-response",
        "--content",
        file.path().to_str().unwrap(),
        "--data",
        data.path().to_str().unwrap(),
    ]);
    assert_eq!(stdout(&output), "2 bedrooms\n");
}

#[test]
fn render_missing_data_speaks_fallback() {
    let file = content_file();
    let output = parlance(&["render", "welcome", "--content", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("could not load content from welcome."));
}

#[test]
fn render_raw_prints_empty_line_for_missing_data() {
    let file = content_file();
    let output = parlance(&[
        "render",
        "welcome",
        "--raw",
        "--content",
        file.path().to_str().unwrap(),
    ]);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn render_json_includes_version() {
    let file = content_file();
    let output = parlance(&[
        "render",
        "greet-b",
        "--json",
        "--content",
        file.path().to_str().unwrap(),
    ]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["output"], "Hello!");
    assert_eq!(json["version"].as_str().unwrap().len(), 16);
}

#[test]
fn render_rejects_out_of_range_hour() {
    let file = content_file();
    let output = parlance(&[
        "render",
        "welcome",
        "--hour",
        "24",
        "--content",
        file.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
}

#[test]
fn missing_content_file_exits_noinput() {
    let output = parlance(&["render", "welcome", "--content", "/nonexistent/content.json"]);
    assert_eq!(output.status.code(), Some(exitcode::NOINPUT));
}

#[test]
fn invalid_content_file_exits_dataerr() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ \"ui\": [ }}").unwrap();
    file.flush().unwrap();
    let output = parlance(&["check", "--content", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_reports_warnings() {
    let file = content_file();
    let output = parlance(&["check", "--content", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("'typo' references unknown key 'nmae'"));
    assert!(out.contains("'welcome' references unknown key 'city'"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let file = content_file();
    let output = parlance(&["check", "--strict", "--content", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn check_json_lists_warnings() {
    let file = content_file();
    let output = parlance(&[
        "check",
        "--json",
        "-p",
        "city=Austin",
        "-p",
        "beds=1",
        "--content",
        file.path().to_str().unwrap(),
    ]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["key"], "typo");
}

// =============================================================================
// variations
// =============================================================================

#[test]
fn variations_json_by_hour() {
    let file = content_file();
    let output = parlance(&[
        "variations",
        "greet-*",
        "--json",
        "--content",
        file.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[8]["candidates"], serde_json::json!(["greet-a", "greet-b"]));
    assert_eq!(rows[20]["candidates"], serde_json::json!(["greet-b"]));
    assert!(rows[24]["hour"].is_null());
}

#[test]
fn variations_strict_fails_for_empty_group() {
    let file = content_file();
    let output = parlance(&[
        "variations",
        "farewell-",
        "--strict",
        "--content",
        file.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}
