//! ShipIt service - deployment artifact orchestrator.
//!
//! Coordinates the shipit workflow:
//! 1. Ask the engine for the playbook (and optionally the config templates)
//! 2. Render each artifact to text
//! 3. Write everything under the deployment directory
//!
//! If any write fails and this call created the deployment directory, the
//! directory is removed again (best effort) so a failed run leaves nothing
//! half-written behind.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::application::ports::{ArtifactRenderer, DeploymentEngine, Filesystem};
use crate::domain::Project;
use crate::error::StowageResult;

/// Options for one shipit invocation.
#[derive(Debug, Clone)]
pub struct ShipItOptions {
    /// Directory the playbook and config templates are written under.
    pub deploy_dir: PathBuf,
    /// Also write one config template per exported service.
    pub save_config: bool,
    /// Comment line(s) prepended to the playbook file, e.g. a generation
    /// stamp. Must already be valid YAML comments.
    pub header: Option<String>,
}

/// Paths written by a successful shipit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipItOutcome {
    pub playbook_path: PathBuf,
    pub config_paths: Vec<PathBuf>,
}

/// Main shipit orchestrator.
pub struct ShipItService {
    filesystem: Box<dyn Filesystem>,
    playbook_renderer: Box<dyn ArtifactRenderer>,
    config_renderer: Box<dyn ArtifactRenderer>,
}

impl ShipItService {
    /// Create a shipit service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        playbook_renderer: Box<dyn ArtifactRenderer>,
        config_renderer: Box<dyn ArtifactRenderer>,
    ) -> Self {
        Self {
            filesystem,
            playbook_renderer,
            config_renderer,
        }
    }

    /// Generate and write all deployment artifacts for `project`.
    #[instrument(skip_all, fields(project = %project.name(), engine = engine.name()))]
    pub fn ship(
        &self,
        project: &Project,
        engine: &dyn DeploymentEngine,
        options: &ShipItOptions,
    ) -> StowageResult<ShipItOutcome> {
        info!("Generating deployment artifacts");

        let playbook = engine.playbook(project)?;
        let mut playbook_text = self.playbook_renderer.render_playbook(&playbook)?;
        if let Some(header) = &options.header {
            playbook_text = format!("{header}\n{playbook_text}");
        }

        // Remember whether we created the deploy dir so rollback never
        // deletes a directory the user already had.
        let created_root = !self.filesystem.exists(&options.deploy_dir);

        match self.write_artifacts(project, engine, options, &playbook_text) {
            Ok(outcome) => {
                info!(
                    playbook = %outcome.playbook_path.display(),
                    configs = outcome.config_paths.len(),
                    "Shipit completed"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!("Write failed, cleaning up");
                if created_root {
                    self.rollback(&options.deploy_dir);
                }
                Err(e)
            }
        }
    }

    fn write_artifacts(
        &self,
        project: &Project,
        engine: &dyn DeploymentEngine,
        options: &ShipItOptions,
        playbook_text: &str,
    ) -> StowageResult<ShipItOutcome> {
        self.filesystem.create_dir_all(&options.deploy_dir)?;

        let playbook_path = options
            .deploy_dir
            .join(format!("shipit-{}.yml", engine.name()));
        self.filesystem.write_file(&playbook_path, playbook_text)?;

        let mut config_paths = Vec::new();
        if options.save_config {
            let config_dir = options.deploy_dir.join("config").join(engine.name());
            self.filesystem.create_dir_all(&config_dir)?;

            for template in engine.configs(project)? {
                let file_name = format!(
                    "{}-service.{}",
                    template.metadata.name,
                    self.config_renderer.file_extension()
                );
                let path = config_dir.join(file_name);
                let body = self.config_renderer.render_template(&template)?;
                self.filesystem.write_file(&path, &body)?;
                config_paths.push(path);
            }
        }

        Ok(ShipItOutcome {
            playbook_path,
            config_paths,
        })
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{
        NamedService, Play, Playbook, PortSpec, Project, ProjectConfig, ServiceDefinition,
        ServiceTemplateGenerator,
    };
    use mockall::mock;

    mock! {
        Fs {}
        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> StowageResult<()>;
            fn write_file(&self, path: &Path, content: &str) -> StowageResult<()>;
            fn exists(&self, path: &Path) -> bool;
            fn remove_dir_all(&self, path: &Path) -> StowageResult<()>;
        }
    }

    // Minimal renderer double: fixed body, fixed extension.
    struct FakeRenderer(&'static str);
    impl ArtifactRenderer for FakeRenderer {
        fn render_playbook(&self, _playbook: &Playbook) -> StowageResult<String> {
            Ok(format!("{}-playbook", self.0))
        }
        fn render_template(
            &self,
            template: &crate::domain::ServiceTemplate,
        ) -> StowageResult<String> {
            Ok(format!("{}:{}", self.0, template.metadata.name))
        }
        fn file_extension(&self) -> &'static str {
            "json"
        }
    }

    // Engine double driving the real generator.
    #[derive(Debug)]
    struct FakeEngine;
    impl DeploymentEngine for FakeEngine {
        fn name(&self) -> &'static str {
            "fake"
        }
        fn playbook(&self, project: &Project) -> StowageResult<Playbook> {
            let generator = ServiceTemplateGenerator::new(project.config(), project.name());
            let tasks = generator.generate_tasks()?;
            Ok(Playbook::single(Play::local("test", tasks)))
        }
        fn configs(&self, project: &Project) -> StowageResult<Vec<crate::domain::ServiceTemplate>> {
            let generator = ServiceTemplateGenerator::new(project.config(), project.name());
            Ok(generator.generate_configs()?)
        }
    }

    fn project() -> Project {
        let web = NamedService::new(
            "web",
            ServiceDefinition {
                ports: vec![PortSpec::from("80")],
                ..ServiceDefinition::default()
            },
        );
        Project::new("myapp", ProjectConfig::from_services(vec![web]).unwrap()).unwrap()
    }

    fn options(save_config: bool) -> ShipItOptions {
        ShipItOptions {
            deploy_dir: PathBuf::from("deploy"),
            save_config,
            header: None,
        }
    }

    #[test]
    fn writes_playbook_under_deploy_dir() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("deploy/shipit-fake.yml") && content == "yaml-playbook"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ShipItService::new(
            Box::new(fs),
            Box::new(FakeRenderer("yaml")),
            Box::new(FakeRenderer("json")),
        );
        let outcome = service.ship(&project(), &FakeEngine, &options(false)).unwrap();
        assert_eq!(outcome.playbook_path, PathBuf::from("deploy/shipit-fake.yml"));
        assert!(outcome.config_paths.is_empty());
    }

    #[test]
    fn save_config_writes_one_template_per_exported_service() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = ShipItService::new(
            Box::new(fs),
            Box::new(FakeRenderer("yaml")),
            Box::new(FakeRenderer("json")),
        );
        let outcome = service.ship(&project(), &FakeEngine, &options(true)).unwrap();
        assert_eq!(
            outcome.config_paths,
            vec![PathBuf::from("deploy/config/fake/myapp-web-service.json")]
        );
    }

    #[test]
    fn header_is_prepended_to_playbook() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, content| content.starts_with("# stamp\n"))
            .returning(|_, _| Ok(()));

        let service = ShipItService::new(
            Box::new(fs),
            Box::new(FakeRenderer("yaml")),
            Box::new(FakeRenderer("json")),
        );
        let mut opts = options(false);
        opts.header = Some("# stamp".into());
        service.ship(&project(), &FakeEngine, &opts).unwrap();
    }

    #[test]
    fn failed_write_rolls_back_a_directory_we_created() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false); // deploy dir did not exist
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|path| path == Path::new("deploy"))
            .times(1)
            .returning(|_| Ok(()));

        let service = ShipItService::new(
            Box::new(fs),
            Box::new(FakeRenderer("yaml")),
            Box::new(FakeRenderer("json")),
        );
        assert!(service.ship(&project(), &FakeEngine, &options(false)).is_err());
    }

    #[test]
    fn failed_write_keeps_a_preexisting_directory() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true); // user already had deploy/
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all().times(0);

        let service = ShipItService::new(
            Box::new(fs),
            Box::new(FakeRenderer("yaml")),
            Box::new(FakeRenderer("json")),
        );
        assert!(service.ship(&project(), &FakeEngine, &options(false)).is_err());
    }
}
