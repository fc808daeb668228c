//! Implementation of the `stowage services` command.

use stowage_core::application::summarize_services;
use stowage_core::error::Context as _;

use crate::{
    cli::{GlobalArgs, ListFormat, ServicesArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ServicesArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project = super::load_project(&global, &config)?;
    let summaries = summarize_services(&project).map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Services in '{}':", project.name()))?;
            for summary in &summaries {
                let ports = if summary.ports.is_empty() {
                    "-".to_owned()
                } else {
                    summary
                        .ports
                        .iter()
                        .map(|p| format!("{}:{}", p.port, p.target_port))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                output.print(&format!(
                    "  {:<16} {:<28} {}",
                    summary.name,
                    summary.image.as_deref().unwrap_or("(no image)"),
                    ports
                ))?;
            }
            if summaries.is_empty() {
                output.info("No services declared")?;
            }
        }

        ListFormat::List => {
            for summary in &summaries {
                println!("{}", summary.name);
            }
        }

        ListFormat::Json => {
            // JSON must stay parseable even in non-TTY pipes, so bypass the
            // OutputManager.
            let json = serde_json::to_string_pretty(&summaries)
                .context("serializing service list")
                .map_err(CliError::Core)?;
            println!("{json}");
        }
    }

    Ok(())
}
