//! One-way Source → Target distance propagation.

use std::time::Duration;

use dm_core::EngineConfig;
use dm_line::{Line, LineEngine, LineError, Side, SyncApplied, ViewportCenter};
use instant::Instant;
use tracing::{debug, warn};

use crate::{SyncError, SyncMetrics, SyncResult};

/// What one call to [`SyncCoordinator::propagate`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Propagation {
    /// The Target now has `distance_m`.
    Synced {
        distance_m: f64,
        applied:    SyncApplied,
        latency:    Duration,
    },
    /// The Source distance equals what the Target already has.
    Unchanged,
    /// There is no Source line to read.
    NoSource,
    /// The Target map is not ready; `distance_m` is held for
    /// [`SyncCoordinator::retry_pending`].
    Deferred { distance_m: f64 },
}

/// Pushes the Source line's distance into the Target engine.
///
/// # Contract
///
/// - Reads exactly one thing from the Source: its `distance_m`.  The Source
///   engine is borrowed immutably, so nothing here can write back to it.
/// - Writes the Target only through [`LineEngine::sync_distance`], which
///   preserves the Target's start and bearing.  Nothing about the Source's
///   position or orientation ever reaches the Target.
/// - Runs synchronously: call it in the same stack as the Source mutation and
///   no observer can see the two sides disagree.
/// - Times every propagation (Target mutation plus the caller's `notify`
///   hook).  A pure in-memory call chain that blows the budget means
///   something is blocking, so it is logged and counted; with
///   `strict_latency` it is also returned as an error.
pub struct SyncCoordinator {
    budget:  Duration,
    strict:  bool,
    metrics: SyncMetrics,
    pending: Option<f64>,
}

impl SyncCoordinator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            budget:  config.latency_budget(),
            strict:  config.strict_latency,
            metrics: SyncMetrics::default(),
            pending: None,
        }
    }

    #[inline]
    pub fn metrics(&self) -> &SyncMetrics {
        &self.metrics
    }

    #[inline]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Distance waiting for the Target map to become ready.
    #[inline]
    pub fn pending(&self) -> Option<f64> {
        self.pending
    }

    /// Drop a deferred distance whose Source line no longer exists.
    /// Returns the dropped distance, if any.
    pub fn discard_pending(&mut self) -> Option<f64> {
        let dropped = self.pending.take();
        if let Some(distance) = dropped {
            debug!(distance_m = distance, "deferred propagation discarded");
        }
        dropped
    }

    /// Forget metrics and any pending distance.
    pub fn reset(&mut self) {
        self.metrics = SyncMetrics::default();
        self.pending = None;
    }

    /// Propagate without a render hook.
    pub fn propagate<VS, VT>(
        &mut self,
        source: &LineEngine<VS>,
        target: &mut LineEngine<VT>,
    ) -> SyncResult<Propagation>
    where
        VS: ViewportCenter,
        VT: ViewportCenter,
    {
        self.propagate_with(source, target, |_| {})
    }

    /// Read the Source distance and, if the Target needs it, impose it.
    ///
    /// `notify` is called with the updated Target line inside the timed
    /// region, so the measured latency covers "Source changed → Target
    /// mutated → renderer told".
    pub fn propagate_with<VS, VT, F>(
        &mut self,
        source: &LineEngine<VS>,
        target: &mut LineEngine<VT>,
        notify: F,
    ) -> SyncResult<Propagation>
    where
        VS: ViewportCenter,
        VT: ViewportCenter,
        F: FnOnce(&Line),
    {
        if source.side() != Side::Source {
            return Err(LineError::WrongSide { op: "propagate", side: source.side() }.into());
        }
        let Some(distance) = source.distance_m() else {
            return Ok(Propagation::NoSource);
        };
        if self.pending.is_none()
            && target.has_line()
            && self.metrics.last_synced_distance_m == Some(distance)
        {
            return Ok(Propagation::Unchanged);
        }
        self.push(distance, target, notify)
    }

    /// Apply a deferred distance now that the Target map may be ready.
    ///
    /// Returns `Unchanged` if nothing was pending, `Deferred` again if the map
    /// is still not ready.
    pub fn retry_pending<VT, F>(&mut self, target: &mut LineEngine<VT>, notify: F) -> SyncResult<Propagation>
    where
        VT: ViewportCenter,
        F: FnOnce(&Line),
    {
        match self.pending {
            Some(distance) => self.push(distance, target, notify),
            None => Ok(Propagation::Unchanged),
        }
    }

    fn push<VT, F>(&mut self, distance: f64, target: &mut LineEngine<VT>, notify: F) -> SyncResult<Propagation>
    where
        VT: ViewportCenter,
        F: FnOnce(&Line),
    {
        let started = Instant::now();
        let applied = match target.sync_distance(distance) {
            Ok(applied) => applied,
            Err(LineError::ViewportUnavailable(side)) => {
                self.pending = Some(distance);
                self.metrics.deferred_count += 1;
                debug!(%side, distance_m = distance, "target map not ready; propagation deferred");
                return Ok(Propagation::Deferred { distance_m: distance });
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(line) = target.line() {
            notify(line);
        }
        let latency = started.elapsed();

        self.pending = None;
        self.metrics.record(distance, latency);
        debug!(distance_m = distance, ?applied, ?latency, "distance propagated");

        if latency > self.budget {
            self.metrics.budget_violations += 1;
            warn!(?latency, budget = ?self.budget, "propagation exceeded its latency budget");
            if self.strict {
                return Err(SyncError::LatencyBudgetExceeded { elapsed: latency, budget: self.budget });
            }
        }
        Ok(Propagation::Synced { distance_m: distance, applied, latency })
    }
}
