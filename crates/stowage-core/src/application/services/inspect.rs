//! Read-only project inspection for the `services` and `validate` commands.

use serde::Serialize;

use crate::domain::{NormalizedPort, Project, ServiceTemplateGenerator, normalize_ports};
use crate::error::StowageResult;

/// Listing row for one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSummary {
    pub name: String,
    pub qualified_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub ports: Vec<NormalizedPort>,
}

/// What `validate` found. Port errors surface as `Err` before a report
/// exists; the report itself only carries warnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Total services in the manifest.
    pub services: usize,
    /// Services that will be exported.
    pub exported: usize,
    /// Services silently skipped by generation because they declare no
    /// ports. Surfaced here so the skip is at least visible on demand.
    pub portless: Vec<String>,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.portless.is_empty()
    }
}

/// Summarize every service in the project, ports normalized.
///
/// Portless services are included (with an empty port list) — this is a
/// listing, not the export selection.
pub fn summarize_services(project: &Project) -> StowageResult<Vec<ServiceSummary>> {
    project
        .config()
        .services()
        .iter()
        .map(|service| {
            let ports = normalize_ports(&service.definition.ports)?;
            Ok(ServiceSummary {
                name: service.name.clone(),
                qualified_name: format!("{}-{}", project.name(), service.name),
                image: service.definition.image.clone(),
                ports,
            })
        })
        .collect()
}

/// Run generation without writing anything and report what it would do.
pub fn validate_project(project: &Project) -> StowageResult<ValidationReport> {
    let generator = ServiceTemplateGenerator::new(project.config(), project.name());

    // Exercises the full normalization path; malformed ports abort here.
    let exported = generator.generate_configs()?.len();

    let portless = project
        .config()
        .services()
        .iter()
        .filter(|s| !s.definition.has_ports())
        .map(|s| s.name.clone())
        .collect();

    Ok(ValidationReport {
        services: project.config().len(),
        exported,
        portless,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
