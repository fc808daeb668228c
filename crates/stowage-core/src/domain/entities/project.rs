//! The project aggregate: an ordered, uniquely-named set of services.
//!
//! The original configuration format is a mapping from service name to
//! definition. Mapping order is semantic — generated artifacts come out in
//! declaration order — so [`ProjectConfig`] stores services as an ordered
//! sequence and enforces name uniqueness at construction.

use crate::domain::entities::service::ServiceDefinition;
use crate::domain::error::DomainError;
use crate::domain::validation;

// ── Named service ─────────────────────────────────────────────────────────────

/// A service definition together with its manifest key.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedService {
    pub name: String,
    pub definition: ServiceDefinition,
}

impl NamedService {
    pub fn new(name: impl Into<String>, definition: ServiceDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }
}

// ── Project configuration ─────────────────────────────────────────────────────

/// Ordered collection of uniquely-named services.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    services: Vec<NamedService>,
}

impl ProjectConfig {
    /// An empty configuration. Generates zero artifacts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a configuration from an ordered service list.
    ///
    /// Rejects duplicate names; order is preserved as given.
    pub fn from_services(services: Vec<NamedService>) -> Result<Self, DomainError> {
        for (i, service) in services.iter().enumerate() {
            if services[..i].iter().any(|s| s.name == service.name) {
                return Err(DomainError::DuplicateService {
                    name: service.name.clone(),
                });
            }
        }
        Ok(Self { services })
    }

    /// Services in declaration order.
    pub fn services(&self) -> &[NamedService] {
        &self.services
    }

    /// Look up a service definition by name.
    pub fn get(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.definition)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

// ── Manifest ──────────────────────────────────────────────────────────────────

/// A parsed manifest file: optional explicit project name plus services.
///
/// The project name falls back to the project directory's basename when the
/// manifest does not set one, which is why this is a distinct type from
/// [`Project`].
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub project_name: Option<String>,
    pub config: ProjectConfig,
}

impl Manifest {
    /// Resolve into a [`Project`], using `fallback_name` when the manifest
    /// carries no explicit project name.
    pub fn into_project(self, fallback_name: &str) -> Result<Project, DomainError> {
        let name = self
            .project_name
            .unwrap_or_else(|| fallback_name.to_owned());
        Project::new(name, self.config)
    }
}

// ── Project ───────────────────────────────────────────────────────────────────

/// A fully-resolved project: validated name + service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    config: ProjectConfig,
}

impl Project {
    /// Create a project, validating the name.
    pub fn new(name: impl Into<String>, config: ProjectConfig) -> Result<Self, DomainError> {
        let name = name.into();
        validation::validate_project_name(&name)?;
        Ok(Self { name, config })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
