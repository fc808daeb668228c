//! Output artifact shapes.
//!
//! Two wire formats describe the same exported service:
//!
//! - [`ServiceTemplate`] — the orchestration-API object (`kind: Service`),
//!   submitted to the cluster or saved with `--save-config`.
//! - [`ServiceTask`] — the playbook task form, embedded in a generated
//!   deployment playbook under the `oso_service` module key.
//!
//! Struct field declaration order below IS the serialization order, and
//! downstream renderers depend on it. Do not reorder fields.

use serde::Serialize;

use crate::domain::entities::port::NormalizedPort;

/// API version stamped on every generated service object.
pub const API_VERSION: &str = "v1";

/// Object kind stamped on every generated service object.
pub const KIND_SERVICE: &str = "Service";

// ── Labels ────────────────────────────────────────────────────────────────────

/// The label pair attached to generated objects.
///
/// Appears twice per artifact (metadata and selector) as two independently
/// owned copies — mutating one never affects the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub app: String,
    pub service: String,
}

impl Labels {
    pub fn new(app: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            service: service.into(),
        }
    }
}

// ── Variant A: orchestration-API object ───────────────────────────────────────

/// An orchestration-API-ready service description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTemplate {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub name: String,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSpec {
    pub selector: Labels,
    pub ports: Vec<NormalizedPort>,
}

impl ServiceTemplate {
    /// Assemble a template for one exported service.
    pub fn new(qualified_name: impl Into<String>, labels: Labels, ports: Vec<NormalizedPort>) -> Self {
        Self {
            api_version: API_VERSION.into(),
            kind: KIND_SERVICE.into(),
            metadata: Metadata {
                name: qualified_name.into(),
                labels: labels.clone(),
            },
            spec: ServiceSpec {
                selector: labels,
                ports,
            },
        }
    }
}

// ── Variant B: playbook task ──────────────────────────────────────────────────

/// A playbook task describing the same exported service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceTask {
    pub oso_service: OsoService,
}

/// Module arguments for an `oso_service` task.
///
/// Field order here is the order downstream playbook rendering expects:
/// project_name, service_name, labels, ports, selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsoService {
    pub project_name: String,
    pub service_name: String,
    pub labels: Labels,
    pub ports: Vec<NormalizedPort>,
    pub selector: Labels,
}

impl ServiceTask {
    /// Assemble a task for one exported service.
    pub fn new(
        project_name: impl Into<String>,
        qualified_name: impl Into<String>,
        labels: Labels,
        ports: Vec<NormalizedPort>,
    ) -> Self {
        Self {
            oso_service: OsoService {
                project_name: project_name.into(),
                service_name: qualified_name.into(),
                labels: labels.clone(),
                ports,
                selector: labels,
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::port::PortSpec;

    fn ports() -> Vec<NormalizedPort> {
        vec![PortSpec::from("8080:80").normalize().unwrap()]
    }

    fn labels() -> Labels {
        Labels::new("myapp", "myapp-web")
    }

    #[test]
    fn template_carries_fixed_api_version_and_kind() {
        let t = ServiceTemplate::new("myapp-web", labels(), ports());
        assert_eq!(t.api_version, "v1");
        assert_eq!(t.kind, "Service");
        assert_eq!(t.metadata.name, "myapp-web");
    }

    #[test]
    fn metadata_labels_and_selector_are_independent_copies() {
        let mut t = ServiceTemplate::new("myapp-web", labels(), ports());
        t.metadata.labels.app = "mutated".into();
        assert_eq!(t.spec.selector.app, "myapp");
        t.spec.selector.service = "other".into();
        assert_eq!(t.metadata.labels.service, "myapp-web");
    }

    #[test]
    fn task_labels_and_selector_are_independent_copies() {
        let mut task = ServiceTask::new("myapp", "myapp-web", labels(), ports());
        task.oso_service.labels.app = "mutated".into();
        assert_eq!(task.oso_service.selector.app, "myapp");
    }

    #[test]
    fn template_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ServiceTemplate::new("myapp-web", labels(), ports())).unwrap();
        assert_eq!(json["apiVersion"], "v1");
        assert_eq!(json["kind"], "Service");
        assert_eq!(json["metadata"]["labels"]["service"], "myapp-web");
        assert_eq!(json["spec"]["selector"]["app"], "myapp");
        assert_eq!(json["spec"]["ports"][0]["targetPort"], 80);
    }

    #[test]
    fn task_field_order_is_the_wire_order() {
        // Downstream rendering reads oso_service keys positionally; lock the
        // declaration order into the serialized form.
        let json =
            serde_json::to_string(&ServiceTask::new("myapp", "myapp-web", labels(), ports()))
                .unwrap();
        let order = [
            json.find("\"project_name\"").unwrap(),
            json.find("\"service_name\"").unwrap(),
            json.find("\"labels\"").unwrap(),
            json.find("\"ports\"").unwrap(),
            json.find("\"selector\"").unwrap(),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "bad order in {json}");
        assert!(json.starts_with("{\"oso_service\":"));
    }
}
