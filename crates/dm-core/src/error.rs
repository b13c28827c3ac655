//! Core error type.
//!
//! Geometry in this workspace never fails: bad coordinates are clamped and
//! degenerate lines are a recognized state.  What can fail is setup, so the
//! only variant here is configuration.  Sub-crates define their own enums and
//! wrap `DmError` via `From`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dm-core`.
pub type DmResult<T> = Result<T, DmError>;
