//! Domain-layer errors.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A port declaration could not be parsed.
    ///
    /// Raised for non-numeric parts, zero ports, and out-of-range values.
    /// Port ranges (`"8000-8010"`) are deliberately unsupported and land
    /// here too.
    #[error("malformed port spec '{spec}': {reason}")]
    MalformedPortSpec { spec: String, reason: String },

    /// Two services share a name. Service names are unique map keys.
    #[error("duplicate service '{name}' in project configuration")]
    DuplicateService { name: String },

    /// The project name resolved to an empty string.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name contains characters the orchestrator rejects.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// A service name contains characters the orchestrator rejects.
    #[error("invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedPortSpec { spec, .. } => vec![
                format!("Port entry '{}' is not valid", spec),
                "Use a bare port (\"8080\") or a mapping (\"8080:80\")".into(),
                "Port ranges like \"8000-8010\" are not supported".into(),
            ],
            Self::DuplicateService { name } => vec![
                format!("The service '{}' is declared more than once", name),
                "Service names must be unique within a project".into(),
            ],
            Self::EmptyProjectName => vec![
                "Set a 'project:' key in the manifest".into(),
                "Or run from a directory whose name can serve as the project name".into(),
            ],
            Self::InvalidProjectName { reason, .. } | Self::InvalidServiceName { reason, .. } => {
                vec![
                    reason.clone(),
                    "Use lowercase letters, digits, '.', '_' and '-'".into(),
                ]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        // Every domain failure is bad input; internal variants would go here.
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
