//! Domain entities.

pub mod playbook;
pub mod port;
pub mod project;
pub mod service;
pub mod template;

pub use playbook::{Play, Playbook};
pub use port::{NormalizedPort, PortSpec, normalize_ports};
pub use project::{Manifest, NamedService, Project, ProjectConfig};
pub use service::ServiceDefinition;
pub use template::{Labels, Metadata, OsoService, ServiceSpec, ServiceTask, ServiceTemplate};
