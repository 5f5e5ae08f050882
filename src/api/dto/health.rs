//! Body of `GET /health`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeResult {
    Ok,
    Error,
}

/// Outcome of one dependency probe.
#[derive(Debug, Serialize)]
pub struct Probe {
    pub status: ProbeResult,
    pub latency_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct Probes {
    pub database: Probe,
}

/// `{"status": "healthy", "version": "0.1.0", "checks": {"database": {...}}}`
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: Health,
    pub version: &'static str,
    pub checks: Probes,
}
