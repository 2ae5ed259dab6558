//! HTTP Endpoint Availability Monitor Library
//!
//! This library provides components for periodically probing HTTP endpoints
//! and reporting cumulative per-domain availability percentages.

pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod monitor;
pub mod probe;

pub use config::{Config, EndpointSpec};
pub use errors::{MonitorError, Result};
pub use ledger::{AvailabilityLedger, DomainStats};
pub use monitor::HealthMonitor;
pub use probe::{EndpointProber, Probe, ProbeResult};
