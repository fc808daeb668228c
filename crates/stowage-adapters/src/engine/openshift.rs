//! OpenShift deployment engine.

use tracing::debug;

use stowage_core::application::ports::DeploymentEngine;
use stowage_core::domain::{Play, Playbook, Project, ServiceTemplate, ServiceTemplateGenerator};
use stowage_core::error::StowageResult;

/// Generates OpenShift deployment artifacts for a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenShiftEngine;

impl OpenShiftEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DeploymentEngine for OpenShiftEngine {
    fn name(&self) -> &'static str {
        "openshift"
    }

    fn playbook(&self, project: &Project) -> StowageResult<Playbook> {
        let generator = ServiceTemplateGenerator::new(project.config(), project.name());
        let tasks = generator.generate_tasks()?;
        debug!(tasks = tasks.len(), "OpenShift playbook assembled");

        Ok(Playbook::single(Play::local(
            format!("Deploy {} to OpenShift", project.name()),
            tasks,
        )))
    }

    fn configs(&self, project: &Project) -> StowageResult<Vec<ServiceTemplate>> {
        let generator = ServiceTemplateGenerator::new(project.config(), project.name());
        Ok(generator.generate_configs()?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
