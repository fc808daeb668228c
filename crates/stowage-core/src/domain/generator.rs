//! Service template generation.
//!
//! [`ServiceTemplateGenerator`] is the pure transform at the heart of the
//! crate: project configuration in, deployment artifacts out. It is
//! stateless beyond the borrowed config/name pair, performs no I/O, and may
//! be invoked concurrently from independent call sites.
//!
//! Selection rule: a service appears in the output iff it declares at least
//! one port. Output order matches configuration order. The first malformed
//! port spec aborts the whole call — there is no partial output.

use crate::domain::entities::port::{NormalizedPort, normalize_ports};
use crate::domain::entities::project::{NamedService, ProjectConfig};
use crate::domain::entities::template::{Labels, ServiceTask, ServiceTemplate};
use crate::domain::error::DomainError;

/// Transforms a project configuration into deployment artifacts.
pub struct ServiceTemplateGenerator<'a> {
    config: &'a ProjectConfig,
    project_name: &'a str,
}

impl<'a> ServiceTemplateGenerator<'a> {
    /// Capture the configuration and project name verbatim.
    ///
    /// No validation happens here; the loading boundary has already checked
    /// names, and port specs are validated lazily during generation.
    pub fn new(config: &'a ProjectConfig, project_name: &'a str) -> Self {
        Self {
            config,
            project_name,
        }
    }

    /// One orchestration-API [`ServiceTemplate`] per port-bearing service.
    pub fn generate_configs(&self) -> Result<Vec<ServiceTemplate>, DomainError> {
        self.exported()
            .map(|service| {
                let (qualified, labels, ports) = self.common_parts(service)?;
                Ok(ServiceTemplate::new(qualified, labels, ports))
            })
            .collect()
    }

    /// One playbook [`ServiceTask`] per port-bearing service.
    pub fn generate_tasks(&self) -> Result<Vec<ServiceTask>, DomainError> {
        self.exported()
            .map(|service| {
                let (qualified, labels, ports) = self.common_parts(service)?;
                Ok(ServiceTask::new(self.project_name, qualified, labels, ports))
            })
            .collect()
    }

    // Port-bearing services, configuration order. Portless services are
    // skipped silently by contract, not reported.
    fn exported(&self) -> impl Iterator<Item = &'a NamedService> {
        self.config
            .services()
            .iter()
            .filter(|s| s.definition.has_ports())
    }

    // The pieces both output variants share: qualified name, labels, and the
    // normalized port list. One normalization routine feeds both variants so
    // a config/task pair for the same input can never drift apart.
    fn common_parts(
        &self,
        service: &NamedService,
    ) -> Result<(String, Labels, Vec<NormalizedPort>), DomainError> {
        let ports = normalize_ports(&service.definition.ports)?;
        let qualified = format!("{}-{}", self.project_name, service.name);
        let labels = Labels::new(self.project_name, qualified.clone());
        Ok((qualified, labels, ports))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
