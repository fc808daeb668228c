//! Port declarations and their canonical normalized form.
//!
//! A service manifest declares ports in two shapes: a bare port (`8080` or
//! `"8080"`) that targets itself, or a mapping (`"8080:80"`) split on the
//! first `:` into exposed port and target port. Nothing else parses; in
//! particular port ranges (`"8000-8010"`) are an unsupported input form,
//! not a silently-extended one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Input form ────────────────────────────────────────────────────────────────

/// A port declaration as it appears in a service definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    /// Bare numeric manifest entry (`8080`).
    Number(i64),
    /// String entry: a bare port (`"8080"`) or a mapping (`"8080:80"`).
    Text(String),
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u16> for PortSpec {
    fn from(port: u16) -> Self {
        Self::Number(i64::from(port))
    }
}

impl From<&str> for PortSpec {
    fn from(spec: &str) -> Self {
        Self::Text(spec.to_owned())
    }
}

// ── Canonical form ────────────────────────────────────────────────────────────

/// The canonical `{port, targetPort, name}` triple derived from a [`PortSpec`].
///
/// `name` is always `port_<port>` where `<port>` is the decimal of the
/// *exposed* port, never the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPort {
    pub port: u16,
    #[serde(rename = "targetPort")]
    pub target_port: u16,
    pub name: String,
}

impl NormalizedPort {
    fn new(port: u16, target_port: u16) -> Self {
        Self {
            port,
            target_port,
            name: format!("port_{port}"),
        }
    }
}

// ── Normalization ─────────────────────────────────────────────────────────────

impl PortSpec {
    /// Normalize this declaration into its canonical triple.
    pub fn normalize(&self) -> Result<NormalizedPort, DomainError> {
        match self {
            Self::Number(n) => {
                let port = range_checked(*n, self)?;
                Ok(NormalizedPort::new(port, port))
            }
            Self::Text(text) => match text.split_once(':') {
                // "8080:80" — left is the exposed port, right the target.
                // Anything after a second ':' stays glued to the right part
                // and fails integer parsing.
                Some((exposed, target)) => Ok(NormalizedPort::new(
                    parse_part(exposed, self)?,
                    parse_part(target, self)?,
                )),
                None => {
                    let port = parse_part(text, self)?;
                    Ok(NormalizedPort::new(port, port))
                }
            },
        }
    }
}

/// Normalize a whole `ports` sequence, preserving input order.
///
/// No sorting, no deduplication: duplicate ports are the caller's risk and
/// pass through untouched. The first malformed entry aborts the whole call.
pub fn normalize_ports(specs: &[PortSpec]) -> Result<Vec<NormalizedPort>, DomainError> {
    specs.iter().map(PortSpec::normalize).collect()
}

fn parse_part(part: &str, spec: &PortSpec) -> Result<u16, DomainError> {
    let trimmed = part.trim();
    let port: u16 = trimmed
        .parse()
        .map_err(|_| DomainError::MalformedPortSpec {
            spec: spec.to_string(),
            reason: format!("'{trimmed}' is not a valid port number"),
        })?;
    reject_zero(port, spec)
}

fn range_checked(value: i64, spec: &PortSpec) -> Result<u16, DomainError> {
    let port = u16::try_from(value).map_err(|_| DomainError::MalformedPortSpec {
        spec: spec.to_string(),
        reason: format!("{value} is outside the valid port range"),
    })?;
    reject_zero(port, spec)
}

fn reject_zero(port: u16, spec: &PortSpec) -> Result<u16, DomainError> {
    if port == 0 {
        return Err(DomainError::MalformedPortSpec {
            spec: spec.to_string(),
            reason: "port must be positive".into(),
        });
    }
    Ok(port)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
