//! Deployment playbook document.
//!
//! The playbook wraps generated [`ServiceTask`]s in the standard local-run
//! play: executed against `localhost` with a local connection and no fact
//! gathering, since every task talks to the orchestration API rather than
//! to managed hosts.

use serde::Serialize;

use crate::domain::entities::template::ServiceTask;

/// A playbook: a sequence of plays. Serializes as a top-level YAML list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Playbook {
    pub plays: Vec<Play>,
}

impl Playbook {
    pub fn single(play: Play) -> Self {
        Self { plays: vec![play] }
    }
}

/// One play. Field order is the rendered key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Play {
    pub name: String,
    pub hosts: String,
    pub connection: String,
    pub gather_facts: bool,
    pub tasks: Vec<ServiceTask>,
}

impl Play {
    /// A `localhost` play carrying the given tasks.
    pub fn local(name: impl Into<String>, tasks: Vec<ServiceTask>) -> Self {
        Self {
            name: name.into(),
            hosts: "localhost".into(),
            connection: "local".into(),
            gather_facts: false,
            tasks,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
