//! Typed service definitions.
//!
//! The manifest's per-service record, compose-style. Only `ports` feeds
//! template generation; the remaining fields round-trip through the loader
//! so a manifest survives parse → serialize unchanged in meaning.

use serde::{Deserialize, Serialize};

use crate::domain::entities::port::PortSpec;

/// One service as declared in the project manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDefinition {
    /// Container image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Command override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Published ports. A service without ports is never exported.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortSpec>,

    /// Ports reachable only from linked services, never published.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expose: Vec<PortSpec>,

    /// `KEY=value` environment entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,

    /// Names of services this one links to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,

    /// Volume mount declarations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

impl ServiceDefinition {
    /// Whether this service publishes any ports (and thus gets exported).
    pub fn has_ports(&self) -> bool {
        !self.ports.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_definition_has_no_ports() {
        assert!(!ServiceDefinition::default().has_ports());
    }

    #[test]
    fn parses_compose_style_yaml() {
        let yaml = r#"
image: nginx:stable
ports:
  - "8080:80"
  - 443
environment:
  - RAILS_ENV=production
"#;
        let def: ServiceDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.image.as_deref(), Some("nginx:stable"));
        assert_eq!(def.ports.len(), 2);
        assert!(def.has_ports());
        assert_eq!(def.environment, vec!["RAILS_ENV=production"]);
    }

    #[test]
    fn unknown_compose_fields_are_tolerated() {
        // depends_on is valid compose we do not model; it must not fail the
        // typed parse.
        let def: ServiceDefinition =
            serde_yaml::from_str("image: redis\ndepends_on:\n  - db\n").unwrap();
        assert_eq!(def.image.as_deref(), Some("redis"));
    }
}
