//! Implementation of the `stowage validate` command.
//!
//! Runs the full load-and-generate path without writing anything. Malformed
//! port specs fail the command; portless services — which generation skips
//! silently by design — are surfaced here as warnings.

use tracing::instrument;

use stowage_core::application::validate_project;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest = super::manifest_path(&global, &config)?;
    let project = super::load_project(&global, &config)?;
    let report = validate_project(&project).map_err(CliError::Core)?;

    output.success(&format!(
        "{}: {} service(s), {} exported",
        manifest.display(),
        report.services,
        report.exported
    ))?;

    for name in &report.portless {
        output.warning(&format!(
            "service '{name}' declares no ports and will not be exported"
        ))?;
    }

    Ok(())
}
