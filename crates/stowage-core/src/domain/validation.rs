//! Name validation at the configuration-loading boundary.
//!
//! Generated object names (`<project>-<service>`) end up as orchestrator
//! metadata names, so both halves are restricted to the character set the
//! downstream API accepts. Validation runs when a manifest is loaded, not
//! inside the generator — the generator trusts its inputs.

use crate::domain::error::DomainError;

/// Validate a resolved project name.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyProjectName);
    }
    if let Err(reason) = check_name_chars(name) {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason,
        });
    }
    Ok(())
}

/// Validate a manifest service key.
pub fn validate_service_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason: "name must not be empty".into(),
        });
    }
    if let Err(reason) = check_name_chars(name) {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason,
        });
    }
    Ok(())
}

fn check_name_chars(name: &str) -> Result<(), String> {
    if name.starts_with(['-', '.']) {
        return Err(format!("cannot start with '{}'", &name[..1]));
    }
    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        Some(c) => Err(format!("character '{c}' is not allowed")),
        None => Ok(()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
