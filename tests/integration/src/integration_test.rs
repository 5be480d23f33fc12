//! End-to-end integration tests for the scaffolding flow
//!
//! Exercises the complete flow: run configuration loading -> service
//! composition -> artifact persistence.

use bind_core::{ComposeOutcome, Composer, ProjectContext, run_all};
use bind_fs::{RunConfig, TemplateStore, load_document};
use bind_meta::{LanguageTarget, ServiceRegistry};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seed_templates(root: &Path) {
    let cloudant = root.join("service-cloudant/python");
    fs::create_dir_all(&cloudant).unwrap();
    fs::write(cloudant.join("dependencies.template"), "cloudant==2.15\n").unwrap();
    fs::write(
        cloudant.join("mappings.json"),
        r#"{"cloudant_username": {"searchPattern": "cloudantUsername"}}"#,
    )
    .unwrap();
    fs::write(
        cloudant.join("localdev-config.json.template"),
        r#"{"cloudant_username": "{{ cloudantUsername }}", "cloudant_url": "{{ cloudantUrl }}"}"#,
    )
    .unwrap();
    fs::write(cloudant.join("README.md"), "# Cloudant\n").unwrap();
    fs::write(cloudant.join("instrumentation.py"), "client = None\n").unwrap();

    let redis = root.join("service-redis/python");
    fs::create_dir_all(&redis).unwrap();
    fs::write(
        redis.join("localdev-config.json.template"),
        r#"{"redis_uri": "{{ composeForRedisUri }}"}"#,
    )
    .unwrap();
}

fn binding_set() -> Value {
    json!({
        "cloudant": [{
            "username": "admin",
            "password": "hunter2",
            "url": "https://host.cloudant.com"
        }],
        "compose-for-redis": [{
            "uri": "redis://host:6379"
        }]
    })
}

#[test]
fn full_run_composes_and_persists_every_artifact() {
    let templates = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    seed_templates(templates.path());

    let registry = ServiceRegistry::with_builtins();
    let composer = Composer::new(TemplateStore::new(templates.path()));
    let mut ctx = ProjectContext::new(project.path(), "my-app", binding_set());

    let reports = run_all(
        &composer,
        &registry,
        &["cloudant".to_string(), "redis".to_string()],
        LanguageTarget::Python,
        &mut ctx,
    );
    assert!(reports.iter().all(|r| r.outcome == ComposeOutcome::Done));
    ctx.persist().unwrap();

    let config: Value = serde_json::from_str(
        &fs::read_to_string(project.path().join("localdev-config.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(config["cloudant_username"], json!("admin"));
    assert_eq!(config["cloudant_url"], json!("https://host.cloudant.com"));
    assert_eq!(config["redis_uri"], json!("redis://host:6379"));

    let dependencies = fs::read_to_string(project.path().join("dependencies.txt")).unwrap();
    assert_eq!(dependencies, "cloudant==2.15\n");

    let mappings: Value = serde_json::from_str(
        &fs::read_to_string(project.path().join("mappings.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        mappings["cloudant_username"]["searchPattern"],
        json!("cloudantUsername")
    );

    assert!(project.path().join("docs/README-service-cloudant.md").is_file());
    assert!(project.path().join("services/service_cloudant.py").is_file());
}

#[test]
fn manifest_collects_env_entries_from_every_composed_service() {
    let templates = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    seed_templates(templates.path());

    let manifest_path = project.path().join("chart/my-app/templates/deployment.yaml");
    fs::create_dir_all(manifest_path.parent().unwrap()).unwrap();
    fs::write(
        &manifest_path,
        "spec:\n  template:\n    spec:\n      containers:\n        - name: my-app\n",
    )
    .unwrap();

    let registry = ServiceRegistry::with_builtins();
    let composer = Composer::new(TemplateStore::new(templates.path()));
    let mut ctx = ProjectContext::new(project.path(), "my-app", binding_set());

    run_all(
        &composer,
        &registry,
        &["cloudant".to_string(), "redis".to_string()],
        LanguageTarget::Python,
        &mut ctx,
    );
    ctx.persist().unwrap();

    let patched: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();
    let env = patched["spec"]["template"]["spec"]["containers"][0]["env"]
        .as_sequence()
        .unwrap();
    assert_eq!(env.len(), 2);
    assert_eq!(env[0]["name"], serde_yaml::Value::from("cloudant"));
    assert_eq!(
        env[0]["valueFrom"]["secretKeyRef"]["name"],
        serde_yaml::Value::from("binding-cloudant")
    );
    assert_eq!(env[1]["name"], serde_yaml::Value::from("redis"));
}

#[test]
fn manifest_placeholders_survive_a_scaffolding_run() {
    let templates = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    seed_templates(templates.path());

    let manifest_path = project.path().join("chart/my-app/templates/deployment.yaml");
    fs::create_dir_all(manifest_path.parent().unwrap()).unwrap();
    fs::write(
        &manifest_path,
        "\
metadata:
  name: {{ .Chart.Name }}
spec:
  replicas: {{ .Values.replicaCount }}
  template:
    spec:
      containers:
        - name: my-app
",
    )
    .unwrap();

    let registry = ServiceRegistry::with_builtins();
    let composer = Composer::new(TemplateStore::new(templates.path()));
    let mut ctx = ProjectContext::new(project.path(), "my-app", binding_set());

    run_all(
        &composer,
        &registry,
        &["cloudant".to_string()],
        LanguageTarget::Python,
        &mut ctx,
    );
    ctx.persist().unwrap();

    let patched = fs::read_to_string(&manifest_path).unwrap();
    assert!(patched.contains("name: {{ .Chart.Name }}\n"));
    assert!(patched.contains("replicas: {{ .Values.replicaCount }}\n"));
    assert!(patched.contains("name: cloudant"));
}

#[test]
fn empty_binding_set_composes_nothing() {
    let templates = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    seed_templates(templates.path());

    let registry = ServiceRegistry::with_builtins();
    let composer = Composer::new(TemplateStore::new(templates.path()));
    let mut ctx = ProjectContext::new(project.path(), "my-app", json!({}));

    let services: Vec<String> = registry.list().iter().map(|s| s.to_string()).collect();
    let reports = run_all(&composer, &registry, &services, LanguageTarget::Python, &mut ctx);

    assert!(reports
        .iter()
        .all(|r| matches!(r.outcome, ComposeOutcome::Skipped(_))));
    let persisted = ctx.persist().unwrap();
    assert!(persisted.written.is_empty());
    assert!(!project.path().join("localdev-config.json").exists());
}

#[test]
fn rerunning_an_unchanged_project_rewrites_nothing() {
    let templates = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    seed_templates(templates.path());

    let registry = ServiceRegistry::with_builtins();
    let composer = Composer::new(TemplateStore::new(templates.path()));
    let services = vec!["cloudant".to_string(), "redis".to_string()];

    let mut first = ProjectContext::new(project.path(), "my-app", binding_set());
    run_all(&composer, &registry, &services, LanguageTarget::Python, &mut first);
    let report = first.persist().unwrap();
    assert!(!report.written.is_empty());

    let mut second = ProjectContext::new(project.path(), "my-app", binding_set());
    run_all(&composer, &registry, &services, LanguageTarget::Python, &mut second);
    let report = second.persist().unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), 5);
}

#[test]
fn run_config_drives_language_and_service_selection() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("scaffold.toml"),
        r#"
[project]
app_name = "my-app"
language = "python"

[services]
only = ["cloudant"]
bindings = "creds.json"
"#,
    )
    .unwrap();
    fs::write(
        project.path().join("creds.json"),
        serde_json::to_string(&binding_set()).unwrap(),
    )
    .unwrap();

    let config = RunConfig::load(&project.path().join("scaffold.toml")).unwrap();
    let language: LanguageTarget = config.project.language.parse().unwrap();
    assert_eq!(language, LanguageTarget::Python);
    assert_eq!(config.services.only, Some(vec!["cloudant".to_string()]));

    let bindings: Value =
        load_document(&project.path().join(&config.services.bindings)).unwrap();
    assert_eq!(bindings["cloudant"][0]["username"], json!("admin"));

    let registry = ServiceRegistry::with_builtins();
    for name in config.services.only.as_deref().unwrap_or_default() {
        assert!(registry.get(name).is_ok());
    }
}
