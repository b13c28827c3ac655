use std::time::Duration;

use dm_core::DmError;
use dm_line::LineError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyncError {
    #[error("session configuration error: {0}")]
    Config(#[from] DmError),

    #[error("line operation refused: {0}")]
    Line(#[from] LineError),

    /// Only raised with `strict_latency`; the Target has already been
    /// updated when this is returned.
    #[error("propagation took {elapsed:?}, budget is {budget:?}")]
    LatencyBudgetExceeded {
        elapsed: Duration,
        budget:  Duration,
    },
}

pub type SyncResult<T> = Result<T, SyncError>;
