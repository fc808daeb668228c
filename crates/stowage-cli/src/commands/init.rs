//! `stowage init` — write a starter manifest into the project directory.

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = super::project_dir(&global)?;
    let path = super::manifest_path(&global, &config)?;

    if path.exists() && !args.force {
        return Err(CliError::ManifestExists { path });
    }

    let project_name = dir
        .canonicalize()
        .unwrap_or_else(|_| dir.clone())
        .file_name()
        .and_then(|n| n.to_str().map(str::to_owned))
        .unwrap_or_else(|| "myproject".into());

    std::fs::create_dir_all(&dir)
        .with_cli_context(|| format!("creating project directory '{}'", dir.display()))?;
    std::fs::write(&path, starter_manifest(&project_name))
        .with_cli_context(|| format!("writing manifest to '{}'", path.display()))?;

    info!(path = %path.display(), "Manifest created");
    output.success(&format!("Manifest created at {}", path.display()))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  # Edit the manifest to describe your services")?;
        output.print("  stowage validate")?;
        output.print("  stowage shipit openshift")?;
    }

    Ok(())
}

/// The starter manifest: one exported service, one internal one.
fn starter_manifest(project_name: &str) -> String {
    format!(
        "\
# Stowage project manifest.
#
# Services follow the compose conventions stowage understands:
# image, command, ports, expose, environment, links, volumes.
# Only services with a 'ports' list are exported to the orchestrator.
project: {project_name}

services:
  web:
    image: nginx:stable
    ports:
      - \"8080:80\"

  db:
    image: postgres:16
"
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
