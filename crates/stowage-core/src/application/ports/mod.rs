//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stowage-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Manifest, Playbook, Project, ServiceTemplate};
use crate::error::StowageResult;

/// Port for reading and parsing project manifests.
///
/// Implemented by:
/// - `stowage_adapters::manifest::YamlManifestLoader` (production)
///
/// The loader owns the typed-parse boundary: malformed shapes are rejected
/// here, before any domain logic runs.
pub trait ManifestLoader: Send + Sync {
    /// Load and parse the manifest at `path`.
    fn load(&self, path: &Path) -> StowageResult<Manifest>;
}

/// Port for serializing artifacts to text.
///
/// Implemented by:
/// - `stowage_adapters::render::YamlRenderer` (playbooks)
/// - `stowage_adapters::render::JsonRenderer` (config templates)
pub trait ArtifactRenderer: Send + Sync {
    /// Serialize a playbook document.
    fn render_playbook(&self, playbook: &Playbook) -> StowageResult<String>;

    /// Serialize one service config template.
    fn render_template(&self, template: &ServiceTemplate) -> StowageResult<String>;

    /// File extension (without dot) for artifacts this renderer produces.
    fn file_extension(&self) -> &'static str;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stowage_adapters::filesystem::LocalFilesystem` (production)
/// - `stowage_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StowageResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> StowageResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StowageResult<()>;
}

/// Port for a named deployment engine.
///
/// Engines live behind a compile-time registry
/// (`stowage_adapters::engine::EngineRegistry`) — a name is looked up in a
/// static table of factories, never used to construct a module path.
pub trait DeploymentEngine: std::fmt::Debug + Send + Sync {
    /// Registry name of this engine.
    fn name(&self) -> &'static str;

    /// Build the deployment playbook for a project.
    fn playbook(&self, project: &Project) -> StowageResult<Playbook>;

    /// Build the orchestration-API config objects for a project.
    fn configs(&self, project: &Project) -> StowageResult<Vec<ServiceTemplate>>;
}
