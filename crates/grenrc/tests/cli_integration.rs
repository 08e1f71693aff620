//! End-to-end CLI integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn grenrc() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("grenrc")
}

const CONFIG: &str = r####"{
  "dataSource": "prs",
  "username": "weaveworks",
  "repo": "ignite",
  "groupBy": {
    "New Features": ["kind/feature"],
    "Bug Fixes": ["kind/bug"],
    "No category": ["closed"]
  },
  "changelogFilename": "docs/releases/next.md",
  "ignoreLabels": ["kind/cleanup"],
  "template": {
    "issue": "- {{name}} ([{{text}}]({{url}}))",
    "group": "### {{heading}}",
    "changelogTitle": "",
    "release": "## {{release}}, {{date}}\n\n{{body}}"
  }
}
"####;

const RELEASES: &str = r#"[
  {
    "name": "v0.8.0",
    "date": "2020-02-01",
    "entries": [
      { "number": 10, "title": "Add snapshots", "url": "http://x/10", "kind": "pull_request", "labels": ["kind/feature"] },
      { "number": 11, "title": "Fix boot", "url": "http://x/11", "kind": "pull_request", "labels": ["kind/bug"] },
      { "number": 12, "title": "Remove dead code", "url": "http://x/12", "kind": "pull_request", "labels": ["kind/cleanup"] }
    ]
  }
]
"#;

const CHANGELOG: &str = "## v0.8.0, 01/02/2020\n\n\
### New Features\n- Add snapshots ([#10](http://x/10))\n\
### Bug Fixes\n- Fix boot ([#11](http://x/11))";

fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    fs::write(temp_dir.path().join(".grenrc.json"), CONFIG).expect("failed to write config");
    fs::write(temp_dir.path().join("releases.json"), RELEASES).expect("failed to write releases");
    temp_dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("failed to read file")
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    grenrc()
        .args(["init", "--username", "weaveworks", "--repo", "ignite"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(contains("Created"));

    let content = read(&temp_dir.path().join(".grenrc.json"));
    assert!(content.contains("\"username\": \"weaveworks\""));
    assert!(content.contains("\"builtin\": \"author-or-name\""));
}

#[test]
fn test_init_yaml_then_check() {
    let temp_dir = TempDir::new().unwrap();

    grenrc()
        .args(["init", "-u", "weaveworks", "-r", "ignite", "--format", "yaml"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join(".grenrc.yml").exists());

    grenrc()
        .arg("check")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(contains("weaveworks/ignite"))
        .stdout(contains("Configuration is valid"));
}

#[test]
fn test_init_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".grenrc.json");
    fs::write(&path, "{}\n").unwrap();

    grenrc()
        .args(["init", "-u", "weaveworks", "-r", "ignite"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(read(&path), "{}\n");

    grenrc()
        .args(["init", "-u", "weaveworks", "-r", "ignite", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    assert!(read(&path).contains("ignite"));
}

#[test]
fn test_check_summary() {
    let temp_dir = setup_project();

    grenrc()
        .arg("check")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(contains("Data source: prs"))
        .stdout(contains("3 sections"))
        .stdout(contains("Bug Fixes: kind/bug"))
        .stdout(contains("Ignored:     kind/cleanup"))
        .stdout(contains("warning").not());
}

#[test]
fn test_check_finds_config_in_parent() {
    let temp_dir = setup_project();
    let nested = temp_dir.path().join("docs/releases");
    fs::create_dir_all(&nested).unwrap();

    grenrc()
        .arg("check")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(contains("weaveworks/ignite"));
}

#[test]
fn test_check_reports_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.json");
    fs::write(
        &path,
        r#"{ "username": "u", "repo": "r", "template": { "issue": "{{name}} {{bogus}}" } }"#,
    )
    .unwrap();

    grenrc()
        .args(["check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("bogus"));

    grenrc()
        .args(["check", "--deny-warnings", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("1 warning(s)"));
}

#[test]
fn test_check_missing_config() {
    let temp_dir = TempDir::new().unwrap();

    grenrc()
        .arg("check")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(contains("failed to find configuration"));
}

#[test]
fn test_check_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".grenrc.json"),
        r#"{ "username": "", "repo": "ignite" }"#,
    )
    .unwrap();

    grenrc()
        .arg("check")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(contains("username"));
}

#[test]
fn test_render_writes_changelog_file() {
    let temp_dir = setup_project();

    grenrc()
        .args(["render", "--input", "releases.json"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(contains("next.md"));

    let changelog = read(&temp_dir.path().join("docs/releases/next.md"));
    assert_eq!(changelog, CHANGELOG);
    assert!(!changelog.contains("Remove dead code"));
}

#[test]
fn test_render_stdout() {
    let temp_dir = setup_project();

    grenrc()
        .args(["render", "--input", "releases.json", "--stdout"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(format!("{CHANGELOG}\n"));

    assert!(!temp_dir.path().join("docs/releases/next.md").exists());
}

#[test]
fn test_render_output_override() {
    let temp_dir = setup_project();

    grenrc()
        .args(["render", "-i", "releases.json", "-o", "OUT.md"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert_eq!(read(&temp_dir.path().join("OUT.md")), CHANGELOG);
}

#[test]
fn test_render_output_creates_directories() {
    let temp_dir = setup_project();

    grenrc()
        .args(["render", "-i", "releases.json", "-o", "out/notes.md"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(contains("notes.md"));

    assert_eq!(read(&temp_dir.path().join("out/notes.md")), CHANGELOG);
}

#[test]
fn test_render_output_conflicts_with_stdout() {
    let temp_dir = setup_project();

    grenrc()
        .args(["render", "-i", "releases.json", "-o", "OUT.md", "--stdout"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_render_invalid_releases() {
    let temp_dir = setup_project();
    fs::write(temp_dir.path().join("releases.json"), "not json").unwrap();

    grenrc()
        .args(["render", "--input", "releases.json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(contains("failed to read releases"));
}
