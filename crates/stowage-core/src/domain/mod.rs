//! Domain layer: entities, validation, and the template generator.
//!
//! Pure logic only — no I/O, no subscribers, no adapters. Observability is
//! the responsibility of the application and CLI layers.

pub mod entities;
pub mod error;
pub mod generator;
pub mod validation;

pub use entities::{
    Labels, Manifest, NamedService, NormalizedPort, OsoService, Play, Playbook, PortSpec, Project,
    ProjectConfig, ServiceDefinition, ServiceSpec, ServiceTask, ServiceTemplate, normalize_ports,
};
pub use error::{DomainError, ErrorCategory};
pub use generator::ServiceTemplateGenerator;
