//! Output management and formatting.
//!
//! All human-facing stdout goes through [`OutputManager`] so quiet mode and
//! colour handling live in exactly one place. Machine-readable output
//! (e.g. `services --format json`) bypasses it and prints directly.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Visual status of a message line.
#[derive(Debug, Clone, Copy)]
enum Status {
    Plain,
    Success,
    Error,
    Warning,
    Info,
    Header,
}

impl Status {
    const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Plain | Self::Header => None,
            Self::Success => Some("\u{2713}"), // ✓
            Self::Error => Some("\u{2717}"),   // ✗
            Self::Warning => Some("\u{26a0}"), // ⚠
            Self::Info => Some("\u{2139}"),    // ℹ
        }
    }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.write(Status::Plain, msg, true)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.write(Status::Success, msg, true)
    }

    /// Error indicator: `✗ <msg>`. *Not* suppressed in quiet mode — errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.write(Status::Error, msg, false)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.write(Status::Warning, msg, true)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.write(Status::Info, msg, true)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.write(Status::Header, text, true)
    }

    fn write(&self, status: Status, msg: &str, suppressible: bool) -> io::Result<()> {
        if self.quiet && suppressible {
            return Ok(());
        }
        let line = self.compose(status, msg);
        self.term.write_line(&line)
    }

    fn compose(&self, status: Status, msg: &str) -> String {
        if self.no_color {
            return match status.symbol() {
                Some(symbol) => format!("{symbol} {msg}"),
                None => msg.to_owned(),
            };
        }
        match status {
            Status::Plain => msg.to_owned(),
            Status::Header => msg.cyan().bold().to_string(),
            Status::Success => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            Status::Error => format!("{} {}", "\u{2717}".red().bold(), msg.red()),
            Status::Warning => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
            Status::Info => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
