//! Telemetry module
//!
//! Structured logging to stderr and request latency events

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{record_latency, LatencyMetric};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
///
/// `verbose` raises the configured level to `info`.
pub fn init_telemetry(config: &TelemetryConfig, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "info" } else { config.log_level.as_str() };
    init_logging(level, config.format)
}
