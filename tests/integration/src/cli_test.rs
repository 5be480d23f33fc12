//! Smoke tests for the bind-scaffold binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[project]
app_name = "my-app"
language = "python"

[services]
only = ["cloudant"]
"#;

const BINDINGS: &str = r#"{
  "cloudant": [{
    "username": "admin",
    "password": "hunter2",
    "url": "https://host.cloudant.com"
  }]
}"#;

fn seed_project(dir: &Path) {
    fs::write(dir.join("scaffold.toml"), CONFIG).unwrap();
    fs::write(dir.join("bindings.json"), BINDINGS).unwrap();
}

fn seed_templates(dir: &Path) {
    let base = dir.join("service-cloudant/python");
    fs::create_dir_all(&base).unwrap();
    fs::write(
        base.join("localdev-config.json.template"),
        r#"{"cloudant_url": "{{ cloudantUrl }}"}"#,
    )
    .unwrap();
}

fn bind_scaffold() -> Command {
    Command::cargo_bin("bind-scaffold").unwrap()
}

#[test]
fn scaffold_run_writes_artifacts_and_summarizes() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    seed_project(project.path());
    seed_templates(templates.path());

    bind_scaffold()
        .arg("--project-dir")
        .arg(project.path())
        .arg("--templates-dir")
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("done cloudant"))
        .stdout(predicate::str::contains("1 file(s) written"));

    let config = fs::read_to_string(project.path().join("localdev-config.json")).unwrap();
    assert!(config.contains("https://host.cloudant.com"));
}

#[test]
fn second_run_reports_everything_unchanged() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    seed_project(project.path());
    seed_templates(templates.path());

    let run = |cmd: &mut Command| {
        cmd.arg("--project-dir")
            .arg(project.path())
            .arg("--templates-dir")
            .arg(templates.path())
            .assert()
            .success()
    };
    run(&mut bind_scaffold());
    run(&mut bind_scaffold()).stdout(predicate::str::contains("0 file(s) written"));
}

#[test]
fn missing_config_is_a_fatal_error() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();

    bind_scaffold()
        .arg("--project-dir")
        .arg(project.path())
        .arg("--templates-dir")
        .arg(templates.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn unknown_service_filter_is_a_fatal_error() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    seed_project(project.path());

    bind_scaffold()
        .arg("--project-dir")
        .arg(project.path())
        .arg("--templates-dir")
        .arg(templates.path())
        .arg("--services")
        .arg("no-such-service")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown service: no-such-service"));
}

#[test]
fn unknown_language_is_a_fatal_error() {
    let project = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    seed_project(project.path());

    bind_scaffold()
        .arg("--project-dir")
        .arg(project.path())
        .arg("--templates-dir")
        .arg(templates.path())
        .arg("--language")
        .arg("cobol")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language target: cobol"));
}

#[test]
fn help_lists_the_run_options() {
    bind_scaffold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project-dir"))
        .stdout(predicate::str::contains("--templates-dir"))
        .stdout(predicate::str::contains("--services"));
}
