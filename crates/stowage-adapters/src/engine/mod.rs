//! Deployment engine registry.
//!
//! Engines are selected by name on the command line. Instead of turning
//! that name into a module path at runtime, every engine is described
//! exactly once in a static table; lookup is an O(n) scan over the table.
//!
//! # Adding a New Engine
//!
//! 1. Implement [`DeploymentEngine`] in a sibling module
//! 2. Add one [`EngineDef`] entry to [`ENGINE_REGISTRY`]
//! 3. That's it — the CLI, error suggestions, and lookup all derive from
//!    the table

use stowage_core::application::ApplicationError;
use stowage_core::application::ports::DeploymentEngine;
use stowage_core::error::StowageResult;

pub mod openshift;

pub use openshift::OpenShiftEngine;

// ── Registry ──────────────────────────────────────────────────────────────────

/// One registered engine: its name and how to construct it.
pub struct EngineDef {
    pub name: &'static str,
    pub description: &'static str,
    factory: fn() -> Box<dyn DeploymentEngine>,
}

fn openshift_factory() -> Box<dyn DeploymentEngine> {
    Box::new(OpenShiftEngine::new())
}

/// Single source of truth for available engines.
///
/// To add a new engine: add one entry here. No `match` arms elsewhere.
pub static ENGINE_REGISTRY: &[EngineDef] = &[EngineDef {
    name: "openshift",
    description: "Generate an OpenShift deployment playbook and service configs",
    factory: openshift_factory,
}];

/// Name-based engine lookup over [`ENGINE_REGISTRY`].
pub struct EngineRegistry;

impl EngineRegistry {
    /// Construct the engine registered under `name`.
    pub fn create(name: &str) -> StowageResult<Box<dyn DeploymentEngine>> {
        ENGINE_REGISTRY
            .iter()
            .find(|def| def.name == name)
            .map(|def| (def.factory)())
            .ok_or_else(|| {
                ApplicationError::UnknownEngine {
                    name: name.to_owned(),
                    available: Self::available(),
                }
                .into()
            })
    }

    /// Names of all registered engines, registry order.
    pub fn available() -> Vec<&'static str> {
        ENGINE_REGISTRY.iter().map(|def| def.name).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
