//! Application layer: services and the ports they drive.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    ServiceSummary, ShipItOptions, ShipItOutcome, ShipItService, ValidationReport,
    summarize_services, validate_project,
};
