use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn bin_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gridloc").expect("binary built");
    // Isolate from the developer's real config and credentials.
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("GRIDLOC_API_TOKEN")
        .env_remove("GRIDLOC_PROJECT_ID")
        .env_remove("GRIDLOC_BASE_URL");
    cmd
}

fn write_sheet(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const SHEET: &str = "\
,,,140 char max,
English (US),,,Hello,Goodbye
French,,,,
LATAM Spanish,es-419,,,
";

#[test]
fn help_works() {
    let dir = tempfile::tempdir().unwrap();
    bin_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grid <-> TMS localization sync"));
}

#[test]
fn scan_lists_identifiers_and_limits() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "Main.csv", SHEET);

    bin_cmd(dir.path())
        .args(["--no-color", "scan", "--sheet"])
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("Main_R2D"))
        .stdout(predicate::str::contains("(max 140)"))
        .stdout(predicate::str::contains("Main_R2E"))
        .stdout(predicate::str::contains("French -> fr-FR"))
        .stdout(predicate::str::contains("LATAM Spanish -> es-419"));
}

#[test]
fn scan_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "Main.csv", SHEET);

    let assert = bin_cmd(dir.path())
        .args(["scan", "--format", "json", "--sheet"])
        .arg(&sheet)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["identifier"], "Main_R2D");
    assert_eq!(items[0]["max_length"], 140);
    assert_eq!(items[1]["max_length"], 0);
}

#[test]
fn scan_without_source_row_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "Empty.csv", "a,b,c\nFrench,,,Bonjour\n");

    bin_cmd(dir.path())
        .args(["scan", "--sheet"])
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("no source row found"));
}

#[test]
fn file_log_receives_events() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "Main.csv", SHEET);

    bin_cmd(dir.path())
        .args(["scan", "--sheet"])
        .arg(&sheet)
        .assert()
        .success();

    // The rolling appender writes logs/gridloc.log.<date> in the CWD and
    // flushes when the worker guard drops at process exit.
    let logs_dir = dir.path().join("logs");
    let mut contents = String::new();
    for entry in std::fs::read_dir(&logs_dir).unwrap() {
        contents.push_str(&std::fs::read_to_string(entry.unwrap().path()).unwrap());
    }
    assert!(contents.contains("starting command"));
    assert!(contents.contains("finished command"));
}

#[test]
fn push_fails_fast_without_token() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "Main.csv", SHEET);

    bin_cmd(dir.path())
        .args(["push", "--sheet"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("API token is missing"));
}

#[test]
fn push_fails_fast_without_project_id() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "Main.csv", SHEET);

    bin_cmd(dir.path())
        .env("GRIDLOC_API_TOKEN", "tok")
        .args(["push", "--sheet"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("project id is missing"));
}

#[test]
fn non_numeric_project_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    bin_cmd(dir.path())
        .env("GRIDLOC_API_TOKEN", "tok")
        .env("GRIDLOC_PROJECT_ID", "abc")
        .arg("test-connection")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be numeric"));
}
