//! Integration tests wiring real adapters through the core services.

use std::path::{Path, PathBuf};

use stowage_adapters::{EngineRegistry, JsonRenderer, MemoryFilesystem, YamlManifestLoader, YamlRenderer};
use stowage_core::application::{ShipItOptions, ShipItService, validate_project};

const MANIFEST: &str = r#"project: myapp
services:
  db:
    image: postgres:16
  web:
    image: nginx:stable
    ports:
      - "8080:80"
      - 443
  cache:
    image: redis
    ports:
      - "6379:6379"
"#;

fn ship(save_config: bool) -> (MemoryFilesystem, stowage_core::application::ShipItOutcome) {
    let manifest = YamlManifestLoader::new()
        .parse_str(MANIFEST, Path::new("stowage.yml"))
        .unwrap();
    let project = manifest.into_project("ignored-fallback").unwrap();

    let filesystem = MemoryFilesystem::new();
    let service = ShipItService::new(
        Box::new(filesystem.clone()),
        Box::new(YamlRenderer::new()),
        Box::new(JsonRenderer::new()),
    );

    let engine = EngineRegistry::create("openshift").unwrap();
    let outcome = service
        .ship(
            &project,
            engine.as_ref(),
            &ShipItOptions {
                deploy_dir: PathBuf::from("deploy"),
                save_config,
                header: Some("# generated for tests".into()),
            },
        )
        .unwrap();

    (filesystem, outcome)
}

#[test]
fn full_pipeline_writes_playbook_with_exported_services_in_order() {
    let (fs, outcome) = ship(false);

    let playbook = fs.read_file(&outcome.playbook_path).unwrap();
    assert!(playbook.starts_with("# generated for tests\n"));
    assert!(playbook.contains("- name: Deploy myapp to OpenShift"));
    assert!(playbook.contains("connection: local"));

    // Exported services appear in manifest order; db is skipped.
    let web = playbook.find("service_name: myapp-web").unwrap();
    let cache = playbook.find("service_name: myapp-cache").unwrap();
    assert!(web < cache);
    assert!(!playbook.contains("myapp-db"));

    // Mapped and bare ports both normalized.
    assert!(playbook.contains("port_8080"));
    assert!(playbook.contains("port_443"));
    assert!(playbook.contains("targetPort: 80"));
}

#[test]
fn full_pipeline_save_config_writes_json_templates() {
    let (fs, outcome) = ship(true);
    assert_eq!(outcome.config_paths.len(), 2);

    let web = fs
        .read_file(Path::new("deploy/config/openshift/myapp-web-service.json"))
        .unwrap();
    let template: serde_json::Value = serde_json::from_str(&web).unwrap();
    assert_eq!(template["apiVersion"], "v1");
    assert_eq!(template["kind"], "Service");
    assert_eq!(template["metadata"]["labels"]["app"], "myapp");
    assert_eq!(template["spec"]["selector"]["service"], "myapp-web");
    assert_eq!(template["spec"]["ports"][1]["name"], "port_443");
}

#[test]
fn task_and_config_ports_agree_for_the_same_manifest() {
    let manifest = YamlManifestLoader::new()
        .parse_str(MANIFEST, Path::new("stowage.yml"))
        .unwrap();
    let project = manifest.into_project("x").unwrap();

    let engine = EngineRegistry::create("openshift").unwrap();
    let playbook = engine.playbook(&project).unwrap();
    let configs = engine.configs(&project).unwrap();

    let tasks = &playbook.plays[0].tasks;
    assert_eq!(tasks.len(), configs.len());
    for (task, config) in tasks.iter().zip(configs) {
        assert_eq!(task.oso_service.ports, config.spec.ports);
        assert_eq!(task.oso_service.service_name, config.metadata.name);
    }
}

#[test]
fn validation_sees_what_generation_sees() {
    let manifest = YamlManifestLoader::new()
        .parse_str(MANIFEST, Path::new("stowage.yml"))
        .unwrap();
    let project = manifest.into_project("x").unwrap();

    let report = validate_project(&project).unwrap();
    assert_eq!(report.services, 3);
    assert_eq!(report.exported, 2);
    assert_eq!(report.portless, vec!["db"]);
}
