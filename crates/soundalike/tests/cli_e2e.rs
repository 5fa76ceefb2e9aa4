//! End-to-end tests for the `soundalike` binary. Each test runs a real
//! invocation against a name list written to a temp directory.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

const NAMES: &str = "\
# name,value
Katherine,10
Catherine,7
Kathryn,3
Zzyzx,1
";

fn soundalike_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_soundalike"));
    cmd.current_dir(dir).env_remove("SOUNDALIKE_LOG");
    cmd
}

fn fixture(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// --version / --help
// ---------------------------------------------------------------------------

#[test]
fn version_flag_prints_version() {
    let dir = tempdir().unwrap();
    soundalike_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("soundalike"));
}

#[test]
fn help_flag_lists_subcommands() {
    let dir = tempdir().unwrap();
    soundalike_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("explain"));
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn default_mode_renders_markdown() {
    let (dir, path) = fixture(NAMES);
    soundalike_cmd(dir.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Confusion clusters"))
        .stdout(predicate::str::contains("Katherine, Catherine, Kathryn"))
        .stdout(predicate::str::contains("Zzyzx").not())
        .stdout(predicate::str::contains(
            "4 records, 2 buckets, 1 singletons dropped, 1 clusters, 3 clustered names",
        ));
}

#[test]
fn json_receipt_has_expected_cluster() {
    let (dir, path) = fixture(NAMES);
    let output = soundalike_cmd(dir.path())
        .args(["analyze", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["tool"]["name"], "soundalike");
    assert_eq!(json["summary"]["clusters"], 1);
    let cluster = &json["clusters"][0];
    assert_eq!(cluster["member_count"], 3);
    assert_eq!(cluster["min_value"], 3);
    assert_eq!(cluster["max_value"], 10);
    assert_eq!(cluster["avg_value"].as_f64().unwrap(), 6.6667);
}

#[test]
fn serial_and_parallel_reports_match() {
    let (dir, path) = fixture(NAMES);
    let serial = soundalike_cmd(dir.path())
        .args(["--format", "tsv", "--serial"])
        .arg(&path)
        .output()
        .unwrap();
    let parallel = soundalike_cmd(dir.path())
        .args(["--format", "tsv"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(serial.status.success());
    assert_eq!(serial.stdout, parallel.stdout);
}

#[test]
fn output_flag_writes_file() {
    let (dir, path) = fixture(NAMES);
    let out = dir.path().join("report.tsv");
    soundalike_cmd(dir.path())
        .arg(&path)
        .args(["--format", "tsv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("Rank\tCode\t"));
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn tab_delimiter_is_accepted() {
    let (dir, path) = fixture("Katherine\t10\nCatherine\t7\n");
    soundalike_cmd(dir.path())
        .arg(&path)
        .args(["--delimiter", "tab", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Katherine, Catherine"));
}

#[test]
fn no_clusters_is_still_success() {
    let (dir, path) = fixture("Zzyzx,1\nKatherine,2\n");
    soundalike_cmd(dir.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("_No confusion clusters found._"));
}

// ---------------------------------------------------------------------------
// explain
// ---------------------------------------------------------------------------

#[test]
fn explain_prints_breakdown_per_name() {
    let dir = tempdir().unwrap();
    soundalike_cmd(dir.path())
        .args(["explain", "Katherine", "R2-D2", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name\tCode\t"))
        .stdout(predicate::str::contains("Katherine\t"))
        .stdout(predicate::str::contains("R2-D2\t"));
}

// ---------------------------------------------------------------------------
// config profiles
// ---------------------------------------------------------------------------

#[test]
fn default_profile_in_working_directory_applies() {
    let (dir, path) = fixture(NAMES);
    std::fs::write(
        dir.path().join("soundalike.toml"),
        "[profiles.default]\nformat = \"tsv\"\n",
    )
    .unwrap();
    soundalike_cmd(dir.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rank\tCode\t"));
}

#[test]
fn named_profile_from_explicit_config() {
    let (dir, path) = fixture(NAMES);
    let config = dir.path().join("other.toml");
    std::fs::write(&config, "[profiles.ci]\nformat = \"json\"\n").unwrap();
    soundalike_cmd(dir.path())
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .args(["--profile", "ci"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn missing_input_file_fails_with_hint() {
    let dir = tempdir().unwrap();
    soundalike_cmd(dir.path())
        .arg("does-not-exist.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to parse name list"))
        .stderr(predicate::str::contains("Hints:"));
}

#[test]
fn negative_value_names_record_index() {
    let (dir, path) = fixture("Katherine,10\nCatherine,-7\n");
    soundalike_cmd(dir.path())
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid record at index 1"));
}

#[test]
fn malformed_line_reports_line_number() {
    let (dir, path) = fixture("Katherine,10\nCatherine,lots\n");
    soundalike_cmd(dir.path())
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn unknown_profile_is_an_error() {
    let (dir, path) = fixture(NAMES);
    soundalike_cmd(dir.path())
        .arg(&path)
        .args(["--profile", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown profile 'nope'"));
}

#[test]
fn missing_input_argument_is_an_error() {
    let dir = tempdir().unwrap();
    soundalike_cmd(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input file given"));
}
