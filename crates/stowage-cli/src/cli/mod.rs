//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stowage",
    bin_name = "stowage",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2693} Deployment artifacts from your container manifest",
    long_about = "Stowage turns a compose-style service manifest into \
                  deployment playbooks and orchestration-API templates.",
    after_help = "EXAMPLES:\n\
        \x20 stowage init\n\
        \x20 stowage services --format table\n\
        \x20 stowage shipit openshift --save-config\n\
        \x20 stowage completions bash > /usr/share/bash-completion/completions/stowage",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate deployment artifacts for a cloud engine.
    #[command(
        about = "Generate a deployment playbook",
        after_help = "EXAMPLES:\n\
            \x20 stowage shipit openshift\n\
            \x20 stowage shipit openshift --save-config\n\
            \x20 stowage shipit --deploy-dir out/deploy"
    )]
    Shipit(ShipitArgs),

    /// List the services declared in the manifest.
    #[command(
        visible_alias = "ls",
        about = "List manifest services",
        after_help = "EXAMPLES:\n\
            \x20 stowage services\n\
            \x20 stowage services --format json"
    )]
    Services(ServicesArgs),

    /// Check the manifest without writing anything.
    #[command(
        about = "Validate the manifest",
        after_help = "EXAMPLES:\n\
            \x20 stowage validate\n\
            \x20 stowage validate -p ./myapp"
    )]
    Validate,

    /// Write a starter manifest into the project directory.
    #[command(
        about = "Initialise a project manifest",
        after_help = "EXAMPLES:\n\
            \x20 stowage init           # ./stowage.yml\n\
            \x20 stowage init --force   # overwrite an existing manifest"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stowage completions bash > ~/.local/share/bash-completion/completions/stowage\n\
            \x20 stowage completions zsh  > ~/.zfunc/_stowage\n\
            \x20 stowage completions fish > ~/.config/fish/completions/stowage.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shipit ────────────────────────────────────────────────────────────────────

/// Arguments for `stowage shipit`.
#[derive(Debug, Args)]
pub struct ShipitArgs {
    /// Deployment engine to generate for. Falls back to the configured
    /// default engine when omitted.
    #[arg(value_name = "ENGINE", help = "Deployment engine (e.g. openshift)")]
    pub engine: Option<String>,

    /// Also write one orchestration-API config file per exported service.
    #[arg(
        long = "save-config",
        help = "Save service config templates alongside the playbook"
    )]
    pub save_config: bool,

    /// Directory artifacts are written under, relative to the project
    /// directory unless absolute.
    #[arg(
        long = "deploy-dir",
        value_name = "DIR",
        help = "Deployment output directory (default: deploy)"
    )]
    pub deploy_dir: Option<PathBuf>,
}

// ── services ──────────────────────────────────────────────────────────────────

/// Arguments for `stowage services`.
#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `services` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stowage init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing manifest.
    #[arg(long = "force", help = "Overwrite existing manifest")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stowage completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
