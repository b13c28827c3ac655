//! Engine configuration.

use crate::{DistanceUnit, DmError, DmResult};

/// Tunables shared by both line engines and the sync coordinator.
///
/// Typically built from `Default` and adjusted by the host application;
/// with the `serde` feature it can also be read from the app's settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Lines shorter than this (metres) count as zero-length: they are valid,
    /// but have no meaningful bearing, so rotation is refused.
    pub zero_length_threshold_m: f64,

    /// Upper bound for one Source → Target propagation, milliseconds.
    pub latency_budget_ms: u64,

    /// Treat a blown latency budget as an error instead of a warning.
    pub strict_latency: bool,

    /// Unit used for distance labels.
    pub unit: DistanceUnit,

    /// Step size for button/keyboard rotation, degrees.
    pub rotation_step_deg: f64,

    /// Seed for line id generation.  The same seed always issues the same ids.
    pub id_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zero_length_threshold_m: 1.0,
            latency_budget_ms:       100,
            strict_latency:          false,
            unit:                    DistanceUnit::Metric,
            rotation_step_deg:       5.0,
            id_seed:                 0x5eed,
        }
    }
}

impl EngineConfig {
    /// Latency budget as a `Duration`.
    #[inline]
    pub fn latency_budget(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.latency_budget_ms)
    }

    /// Reject values the engines cannot work with.
    pub fn validate(&self) -> DmResult<()> {
        if !self.zero_length_threshold_m.is_finite() || self.zero_length_threshold_m < 0.0 {
            return Err(DmError::Config(format!(
                "zero_length_threshold_m must be a non-negative number, got {}",
                self.zero_length_threshold_m
            )));
        }
        if self.latency_budget_ms == 0 {
            return Err(DmError::Config("latency_budget_ms must be > 0".into()));
        }
        if !self.rotation_step_deg.is_finite()
            || self.rotation_step_deg <= 0.0
            || self.rotation_step_deg >= 360.0
        {
            return Err(DmError::Config(format!(
                "rotation_step_deg must be in (0, 360), got {}",
                self.rotation_step_deg
            )));
        }
        Ok(())
    }
}
