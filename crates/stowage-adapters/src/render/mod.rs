//! Artifact renderers.
//!
//! Playbooks are written as YAML; config templates as pretty JSON — the
//! formats the downstream playbook runner and orchestration API expect.
//! Both renderers implement the same port so the pairing stays a caller
//! decision.

use stowage_core::application::ApplicationError;
use stowage_core::application::ports::ArtifactRenderer;
use stowage_core::domain::{Playbook, ServiceTemplate};
use stowage_core::error::StowageResult;

/// Renders artifacts as YAML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRenderer;

impl YamlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for YamlRenderer {
    fn render_playbook(&self, playbook: &Playbook) -> StowageResult<String> {
        serde_yaml::to_string(playbook).map_err(|e| {
            ApplicationError::RenderFailed {
                artifact: "playbook",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn render_template(&self, template: &ServiceTemplate) -> StowageResult<String> {
        serde_yaml::to_string(template).map_err(|e| {
            ApplicationError::RenderFailed {
                artifact: "service template",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn file_extension(&self) -> &'static str {
        "yml"
    }
}

/// Renders artifacts as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for JsonRenderer {
    fn render_playbook(&self, playbook: &Playbook) -> StowageResult<String> {
        serde_json::to_string_pretty(playbook).map_err(|e| {
            ApplicationError::RenderFailed {
                artifact: "playbook",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn render_template(&self, template: &ServiceTemplate) -> StowageResult<String> {
        let mut text =
            serde_json::to_string_pretty(template).map_err(|e| ApplicationError::RenderFailed {
                artifact: "service template",
                reason: e.to_string(),
            })?;
        text.push('\n');
        Ok(text)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
