//! Integration tests for the strmatch CLI.
//!
//! These run the built binary against the bundled articles and small
//! fixture files, checking output format and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn get_fixture_dir() -> PathBuf {
    FIXTURE_DIR.get_or_init(create_fixture_dir).clone()
}

/// Create an isolated directory with a text file and a bench config
fn create_fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("strmatch_test_fixtures")
        .join(format!("test_{}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");

    fs::copy(fixture_path("sample.txt"), dir.join("sample.txt")).expect("Failed to copy sample");

    fs::write(
        dir.join("cases.json"),
        r#"{
    "repetitions": 5,
    "cases": [
        { "file": "sample.txt", "existing": "ABABCABAB", "missing": "xyz" }
    ]
}
"#,
    )
    .unwrap();

    fs::write(
        dir.join("bad_cases.json"),
        r#"{
    "cases": [
        { "file": "sample.txt", "existing": "ABABCABAB", "missing": "ABAB" }
    ]
}
"#,
    )
    .unwrap();

    dir
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run strmatch from `cwd` with given args
fn run_strmatch(args: &[&str], cwd: &Path) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_strmatch"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run strmatch");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code(),
    )
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_all_algorithms() {
    let dir = get_fixture_dir();
    let (out, _, code) = run_strmatch(&["search", "sample.txt", "ABABCABAB"], &dir);

    assert_eq!(code, Some(0));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["KMP: 10", "Rabin-Karp: 10", "Boyer-Moore: 10"]);
}

#[test]
fn test_search_single_algorithm() {
    let dir = get_fixture_dir();
    let (out, _, code) = run_strmatch(
        &["search", "sample.txt", "ABABCABAB", "--algorithm", "boyer-moore"],
        &dir,
    );

    assert_eq!(code, Some(0));
    assert_eq!(out.trim(), "10");
}

#[test]
fn test_search_not_found_exit_code() {
    let dir = get_fixture_dir();
    let (out, _, code) = run_strmatch(&["search", "sample.txt", "xyz", "-a", "kmp"], &dir);

    assert_eq!(code, Some(1));
    assert_eq!(out.trim(), "not found");
}

#[test]
fn test_search_missing_file() {
    let dir = get_fixture_dir();
    let (_, err, code) = run_strmatch(&["search", "nope.txt", "abc"], &dir);

    assert_ne!(code, Some(0));
    assert!(err.contains("nope.txt"), "stderr should name the file: {}", err);
}

#[test]
fn test_search_rejects_unknown_algorithm() {
    let dir = get_fixture_dir();
    let (_, err, code) = run_strmatch(&["search", "sample.txt", "abc", "-a", "naive"], &dir);

    assert_ne!(code, Some(0));
    assert!(err.contains("naive"));
}

// ============================================================================
// bench
// ============================================================================

#[test]
fn test_bench_default_articles() {
    let (out, err, code) = run_strmatch(&["bench", "--repetitions", "2", "--no-color"], &manifest_dir());

    assert_eq!(code, Some(0), "bench failed: {}", err);
    assert!(out.contains("article01.txt:"));
    assert!(out.contains("article02.txt:"));
    for label in [
        "KMP exist:",
        "KMP fake:",
        "Rabin-Karp exist:",
        "Rabin-Karp fake:",
        "Boyer-Moore exist:",
        "Boyer-Moore fake:",
    ] {
        assert_eq!(out.matches(label).count(), 2, "expected {} twice in:\n{}", label, out);
    }
}

#[test]
fn test_bench_json_config() {
    let dir = get_fixture_dir();
    let (out, err, code) = run_strmatch(&["bench", "--config", "cases.json", "--json"], &dir);

    assert_eq!(code, Some(0), "bench failed: {}", err);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON output");
    let cases = value.as_array().expect("array of cases");
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0]["existing_index"], 10);
    assert_eq!(cases[0]["timings"].as_array().map(|t| t.len()), Some(6));
    assert_eq!(cases[0]["timings"][0]["repetitions"], 5);
}

#[test]
fn test_bench_config_from_other_directory() {
    let dir = get_fixture_dir();
    let config = dir.join("cases.json");
    let (_, err, code) = run_strmatch(
        &["bench", "--config", config.to_str().unwrap(), "--json"],
        &manifest_dir(),
    );

    assert_eq!(code, Some(0), "relative case paths should resolve against the config: {}", err);
}

#[test]
fn test_bench_fails_when_missing_pattern_present() {
    let dir = get_fixture_dir();
    let (_, err, code) = run_strmatch(&["bench", "--config", "bad_cases.json"], &dir);

    assert_ne!(code, Some(0));
    assert!(err.contains("should be absent"), "stderr: {}", err);
}

// ============================================================================
// bound
// ============================================================================

#[test]
fn test_bound_self_test() {
    let (out, _, code) = run_strmatch(&["bound"], &manifest_dir());

    assert_eq!(code, Some(0));
    assert!(out.contains("Test 1 -> Target: 2, Iterations: 3, Upper bound: 2.5"));
    assert!(out.contains("Upper bound: 3.6"));
    assert!(out.contains("Upper bound: 0.1"));
    assert!(out.contains("Test 4 -> Target 5.5 exceeds all array elements."));
}
