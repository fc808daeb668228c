//! Command handlers.
//!
//! Each submodule implements one subcommand. The shared helpers here
//! resolve the project directory / manifest path from the global flags and
//! load the project — no command does its own path math.

pub mod completions;
pub mod init;
pub mod services;
pub mod shipit;
pub mod validate;

use std::path::PathBuf;

use tracing::debug;

use stowage_adapters::YamlManifestLoader;
use stowage_core::application::ports::ManifestLoader;
use stowage_core::domain::Project;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the project directory from `--project` (default: CWD).
pub(crate) fn project_dir(global: &GlobalArgs) -> CliResult<PathBuf> {
    match &global.project {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().map_err(|e| CliError::IoError {
            message: "cannot determine current directory".into(),
            source: e,
        }),
    }
}

/// Manifest path: `--manifest` (or the configured filename) inside the
/// project directory.
pub(crate) fn manifest_path(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let file = global
        .manifest
        .as_deref()
        .unwrap_or(&config.defaults.manifest);
    Ok(project_dir(global)?.join(file))
}

/// Load the manifest and resolve it into a [`Project`].
///
/// The fallback project name is the project directory's basename, matching
/// what the manifest's optional `project:` key overrides.
pub(crate) fn load_project(global: &GlobalArgs, config: &AppConfig) -> CliResult<Project> {
    let dir = project_dir(global)?;
    let path = manifest_path(global, config)?;
    debug!(manifest = %path.display(), "Loading project");

    let fallback = dir
        .canonicalize()
        .unwrap_or_else(|_| dir.clone())
        .file_name()
        .and_then(|n| n.to_str().map(str::to_owned))
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "cannot derive a project name from '{}'; set 'project:' in the manifest",
                dir.display()
            ),
        })?;

    let manifest = YamlManifestLoader::new().load(&path).map_err(CliError::Core)?;
    let project = manifest
        .into_project(&fallback)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        project = %project.name(),
        services = project.config().len(),
        "Project loaded"
    );
    Ok(project)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(project: Option<&str>, manifest: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            project: project.map(PathBuf::from),
            manifest: manifest.map(str::to_owned),
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn manifest_path_uses_configured_default() {
        let path = manifest_path(&global(Some("/tmp/myapp"), None), &AppConfig::default()).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/myapp/stowage.yml"));
    }

    #[test]
    fn manifest_flag_overrides_default() {
        let path = manifest_path(
            &global(Some("/tmp/myapp"), Some("container.yml")),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/myapp/container.yml"));
    }

    #[test]
    fn load_project_falls_back_to_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = dir.path().join("myapp");
        std::fs::create_dir(&project_dir).unwrap();
        std::fs::write(
            project_dir.join("stowage.yml"),
            "services:\n  web:\n    ports:\n      - 80\n",
        )
        .unwrap();

        let project = load_project(
            &global(project_dir.to_str(), None),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(project.name(), "myapp");
    }

    #[test]
    fn load_project_prefers_manifest_project_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stowage.yml"),
            "project: renamed\nservices: {}\n",
        )
        .unwrap();

        let project = load_project(
            &global(dir.path().to_str(), None),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(project.name(), "renamed");
    }

    #[test]
    fn missing_manifest_surfaces_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(
            &global(dir.path().to_str(), None),
            &AppConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
