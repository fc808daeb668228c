//! Application services: orchestration over the driven ports.

pub mod inspect;
pub mod shipit_service;

pub use inspect::{ServiceSummary, ValidationReport, summarize_services, validate_project};
pub use shipit_service::{ShipItOptions, ShipItOutcome, ShipItService};
