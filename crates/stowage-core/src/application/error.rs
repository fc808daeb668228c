//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No manifest file at the expected location.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// The manifest exists but could not be read or parsed.
    #[error("failed to load manifest {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// No deployment engine registered under this name.
    #[error("unknown deployment engine '{name}'")]
    UnknownEngine {
        name: String,
        available: Vec<&'static str>,
    },

    /// Serializing an artifact failed.
    #[error("failed to render {artifact}: {reason}")]
    RenderFailed {
        artifact: &'static str,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestNotFound { path } => vec![
                format!("No manifest at: {}", path.display()),
                "Run 'stowage init' to create a starter manifest".into(),
                "Or point at the project with --project / --manifest".into(),
            ],
            Self::ManifestError { reason, .. } => vec![
                format!("Parse failure: {}", reason),
                "The manifest must be a YAML mapping with a 'services:' key".into(),
            ],
            Self::UnknownEngine { name, available } => {
                let mut suggestions = vec![
                    format!("'{}' is not a registered engine", name),
                    "Available engines:".into(),
                ];
                for engine in available {
                    suggestions.push(format!("  \u{2022} {engine}"));
                }
                suggestions
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RenderFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. } | Self::UnknownEngine { .. } => ErrorCategory::NotFound,
            Self::ManifestError { .. } => ErrorCategory::Validation,
            Self::RenderFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
