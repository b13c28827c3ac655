//! Propagation metrics, kept for tests and diagnostics.

use std::time::Duration;

/// Counters and last-seen values for the sync coordinator.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyncMetrics {
    /// Wall time of the most recent completed propagation.
    pub last_latency: Option<Duration>,

    /// Slowest propagation since the last reset.
    pub max_latency: Duration,

    /// Distance most recently pushed into the Target, metres.
    pub last_synced_distance_m: Option<f64>,

    /// Completed propagations.
    pub sync_count: u64,

    /// Propagations postponed because the Target map was not ready.
    pub deferred_count: u64,

    /// Propagations that took longer than the configured budget.
    pub budget_violations: u64,
}

impl SyncMetrics {
    /// `true` if no propagation so far exceeded `budget`.
    #[inline]
    pub fn within_budget(&self, budget: Duration) -> bool {
        self.max_latency <= budget
    }

    pub(crate) fn record(&mut self, distance_m: f64, latency: Duration) {
        self.last_latency = Some(latency);
        self.max_latency = self.max_latency.max(latency);
        self.last_synced_distance_m = Some(distance_m);
        self.sync_count += 1;
    }
}
