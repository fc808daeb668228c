//! Stowage core — deployment artifact generation for container projects.
//!
//! This crate holds the domain and application layers behind the `stowage`
//! CLI. A project manifest (an ordered set of services, some of which
//! publish ports) is transformed into deployment artifacts:
//!
//! - orchestration-API service templates (`kind: Service` objects), and
//! - playbook task documents embedding the same services as `oso_service`
//!   tasks.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stowage-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (ShipItService, inspect)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (ManifestLoader, Renderer, Filesystem, │
//! │          DeploymentEngine)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stowage-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Project, PortSpec, TemplateGenerator)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer is pure: no I/O, no logging subscribers, freely
//! callable from concurrent call sites.

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ShipItOptions, ShipItOutcome, ShipItService,
        ports::{ArtifactRenderer, DeploymentEngine, Filesystem, ManifestLoader},
        summarize_services, validate_project,
    };
    pub use crate::domain::{
        Labels, Manifest, NamedService, NormalizedPort, Play, Playbook, PortSpec, Project,
        ProjectConfig, ServiceDefinition, ServiceTask, ServiceTemplate, ServiceTemplateGenerator,
    };
    pub use crate::error::{StowageError, StowageResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
