//! End-to-end tests for the `stowage` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const MANIFEST: &str = r#"services:
  db:
    image: postgres:16
  web:
    image: nginx:stable
    ports:
      - "8080:80"
  cache:
    image: redis
    ports:
      - 6379
"#;

fn stowage() -> Command {
    let mut cmd = Command::cargo_bin("stowage").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn project_with(manifest: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("myapp");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("stowage.yml"), manifest).unwrap();
    (dir, project)
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_creates_a_manifest_that_validates() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("myapp");
    std::fs::create_dir(&project).unwrap();

    stowage()
        .args(["init", "-p"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest created"));
    assert!(project.join("stowage.yml").is_file());

    stowage()
        .args(["validate", "-p"])
        .arg(&project)
        .assert()
        .success();
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["init", "-p"])
        .arg(&project)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    stowage()
        .args(["init", "--force", "-p"])
        .arg(&project)
        .assert()
        .success();
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn validate_reports_counts_and_portless_warning() {
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["validate", "-p"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 service(s), 2 exported"))
        .stdout(predicate::str::contains("'db' declares no ports"));
}

#[test]
fn validate_fails_on_malformed_port() {
    let (_dir, project) = project_with("services:\n  web:\n    ports:\n      - \"80:xyz\"\n");

    stowage()
        .args(["validate", "-p"])
        .arg(&project)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("malformed port spec"));
}

#[test]
fn missing_manifest_exits_not_found() {
    let dir = tempfile::tempdir().unwrap();

    stowage()
        .args(["validate", "-p"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("manifest not found"))
        .stderr(predicate::str::contains("stowage init"));
}

// ── services ──────────────────────────────────────────────────────────────────

#[test]
fn services_list_preserves_manifest_order() {
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["services", "--format", "list", "-p"])
        .arg(&project)
        .assert()
        .success()
        .stdout("db\nweb\ncache\n");
}

#[test]
fn services_json_is_parseable_and_qualified() {
    let (_dir, project) = project_with(MANIFEST);

    let output = stowage()
        .args(["services", "--format", "json", "-p"])
        .arg(&project)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summaries[1]["qualified_name"], "myapp-web");
    assert_eq!(summaries[1]["ports"][0]["targetPort"], 80);
}

// ── shipit ────────────────────────────────────────────────────────────────────

#[test]
fn shipit_writes_a_stamped_playbook() {
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["shipit", "openshift", "-p"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Playbook written to"));

    let playbook = read(&project.join("deploy/shipit-openshift.yml"));
    assert!(playbook.starts_with("# Generated by stowage"));
    assert!(playbook.contains("hosts: localhost"));
    assert!(playbook.contains("oso_service"));
    assert!(playbook.contains("service_name: myapp-web"));
    assert!(playbook.contains("port_8080"));
    // db has no ports and must not be exported
    assert!(!playbook.contains("myapp-db"));
}

#[test]
fn shipit_save_config_writes_service_templates() {
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["shipit", "openshift", "--save-config", "-p"])
        .arg(&project)
        .assert()
        .success();

    let web = read(&project.join("deploy/config/openshift/myapp-web-service.json"));
    let template: serde_json::Value = serde_json::from_str(&web).unwrap();
    assert_eq!(template["apiVersion"], "v1");
    assert_eq!(template["kind"], "Service");
    assert_eq!(template["metadata"]["name"], "myapp-web");
    assert_eq!(template["spec"]["ports"][0]["name"], "port_8080");

    assert!(
        project
            .join("deploy/config/openshift/myapp-cache-service.json")
            .is_file()
    );
}

#[test]
fn shipit_defaults_to_the_configured_engine() {
    // No engine argument: the built-in default (openshift) applies.
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["shipit", "-p"])
        .arg(&project)
        .assert()
        .success();
    assert!(project.join("deploy/shipit-openshift.yml").is_file());
}

#[test]
fn shipit_unknown_engine_lists_available() {
    let (_dir, project) = project_with(MANIFEST);

    stowage()
        .args(["shipit", "kubernetes", "-p"])
        .arg(&project)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown deployment engine"))
        .stderr(predicate::str::contains("openshift"));
}

// ── top level ─────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_prints_help() {
    stowage()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}
