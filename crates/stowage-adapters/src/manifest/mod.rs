//! Manifest loading: the typed-parse boundary.
//!
//! The manifest is a compose-style YAML document:
//!
//! ```yaml
//! project: myapp        # optional; defaults to the directory name
//! services:
//!   web:
//!     image: nginx:stable
//!     ports:
//!       - "8080:80"
//!   worker:
//!     image: myapp/worker
//! ```
//!
//! Service mapping order is semantic (artifacts come out in declaration
//! order), so `services` is deserialized through an order-preserving
//! visitor rather than a hash map. Shape errors — wrong types, invalid
//! names, duplicate keys — are rejected here, before any domain logic runs.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use tracing::debug;

use stowage_core::application::ApplicationError;
use stowage_core::application::ports::ManifestLoader;
use stowage_core::domain::{
    Manifest, NamedService, ProjectConfig, ServiceDefinition, validation,
};
use stowage_core::error::StowageResult;

// ── Raw document ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawManifest {
    /// Schema marker; tolerated, currently uninterpreted.
    #[allow(dead_code)]
    version: Option<String>,
    project: Option<String>,
    services: OrderedServices,
}

/// Service entries in document order.
#[derive(Debug, Default)]
struct OrderedServices(Vec<(String, ServiceDefinition)>);

impl<'de> Deserialize<'de> for OrderedServices {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = OrderedServices;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of service name to service definition")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, definition)) =
                    map.next_entry::<String, ServiceDefinition>()?
                {
                    entries.push((name, definition));
                }
                Ok(OrderedServices(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads `stowage.yml` manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManifestLoader;

impl YamlManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse manifest text. `origin` is only used in error messages.
    pub fn parse_str(&self, text: &str, origin: &Path) -> StowageResult<Manifest> {
        let raw: RawManifest =
            serde_yaml::from_str(text).map_err(|e| ApplicationError::ManifestError {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut services = Vec::with_capacity(raw.services.0.len());
        for (name, definition) in raw.services.0 {
            validation::validate_service_name(&name)?;
            services.push(NamedService::new(name, definition));
        }
        let config = ProjectConfig::from_services(services)?;

        debug!(services = config.len(), "Manifest parsed");
        Ok(Manifest {
            project_name: raw.project,
            config,
        })
    }
}

impl ManifestLoader for YamlManifestLoader {
    fn load(&self, path: &Path) -> StowageResult<Manifest> {
        if !path.is_file() {
            return Err(ApplicationError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::ManifestError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.parse_str(&text, path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
