//! Implementation of the `stowage shipit` command.
//!
//! Responsibility: resolve the engine and output locations from CLI
//! arguments and configuration, call the core shipit service, and display
//! results. No generation logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use stowage_adapters::{EngineRegistry, JsonRenderer, LocalFilesystem, YamlRenderer};
use stowage_core::application::{ShipItOptions, ShipItService};

use crate::{
    cli::{GlobalArgs, ShipitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stowage shipit` command.
#[instrument(skip_all)]
pub fn execute(
    args: ShipitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Load the project (manifest + name resolution).
    let project = super::load_project(&global, &config)?;

    // 2. Resolve the engine: CLI argument, then configured default.
    let engine_name = args.engine.as_deref().unwrap_or(&config.defaults.engine);
    let engine = EngineRegistry::create(engine_name).map_err(CliError::Core)?;

    // 3. Resolve the output directory.
    let deploy_dir = resolve_deploy_dir(&args, &global, &config)?;

    output.header(&format!(
        "Shipping '{}' with the {} engine...",
        project.name(),
        engine.name()
    ))?;
    info!(
        project = %project.name(),
        engine = engine.name(),
        deploy_dir = %deploy_dir.display(),
        "Shipit started"
    );

    // 4. Generate and write.
    let service = ShipItService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(YamlRenderer::new()),
        Box::new(JsonRenderer::new()),
    );
    let options = ShipItOptions {
        deploy_dir,
        save_config: args.save_config,
        header: Some(generation_stamp()),
    };
    let outcome = service
        .ship(&project, engine.as_ref(), &options)
        .map_err(CliError::Core)?;

    // 5. Report.
    output.success(&format!(
        "Playbook written to {}",
        outcome.playbook_path.display()
    ))?;
    for path in &outcome.config_paths {
        output.print(&format!("  wrote {}", path.display()))?;
    }
    if !args.save_config && !output.is_quiet() {
        output.info("Use --save-config to also write service config templates")?;
    }

    Ok(())
}

/// `--deploy-dir`, else the configured default; relative paths are anchored
/// at the project directory.
fn resolve_deploy_dir(
    args: &ShipitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<PathBuf> {
    let dir = args
        .deploy_dir
        .clone()
        .unwrap_or_else(|| config.defaults.deploy_dir.clone());
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(super::project_dir(global)?.join(dir))
    }
}

/// YAML comment stamped at the top of generated playbooks.
fn generation_stamp() -> String {
    format!(
        "# Generated by stowage {} on {}",
        stowage_core::VERSION,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
