use std::fmt;

use crate::model::tier::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Sink for collection diagnostics and progress.
/// Frontends implement this to surface notices; nothing here affects control flow.
pub trait Reporter {
    fn report(&self, severity: Severity, message: &str);

    /// Called before a tier's collection starts. `index` is zero based.
    fn tier_started(&self, _tier: Tier, _index: usize, _total: usize) {}

    /// Called once a tier's collection has finished, successful or not.
    fn tier_finished(&self, _tier: Tier, _collected: usize, _index: usize, _total: usize) {}
}

/// Forwards diagnostics to `tracing`.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Warning => tracing::warn!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }

    fn tier_finished(&self, tier: Tier, collected: usize, index: usize, total: usize) {
        tracing::info!(%tier, collected, "tier {}/{} done", index + 1, total);
    }
}
