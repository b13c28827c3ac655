//! `dm-sync` — one-way distance propagation and the dual-map session.
//!
//! # Propagation
//!
//! ```text
//!   pointer / drag                              renderer
//!        │                                          ▲
//!        ▼                                          │ on_line_drawn
//!   ① Source LineEngine ── distance_m ──▶ ② SyncCoordinator ──▶ ③ Target LineEngine
//!        (measures)          (only field read)    (times it)      sync_distance(d):
//!                                                                 start, bearing kept,
//!                                                                 end re-projected
//! ```
//!
//! The flow is one-way by construction: the coordinator borrows the Source
//! engine immutably and touches the Target only through `sync_distance`.
//! Target rotation and translation never reach the Source.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`coordinator`] | `SyncCoordinator`, `Propagation`                          |
//! | [`metrics`]     | `SyncMetrics` — latency and counters                      |
//! | [`renderer`]    | `LineRenderer` trait, `NoopRenderer`, `RecordingRenderer` |
//! | [`event`]       | `MapEvent` — closed set of UI inputs                      |
//! | [`session`]     | `DualMap` — both engines + creation + coordinator         |
//! | [`builder`]     | `DualMapBuilder`                                          |
//! | [`error`]       | `SyncError`, `SyncResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dm_core::{Coordinate, EngineConfig};
//! use dm_line::{FixedCenter, Side};
//! use dm_sync::DualMapBuilder;
//!
//! let mut map = DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(nyc), FixedCenter::at(paris))
//!     .build()?;
//! map.create_line(Side::Source, nyc, la)?;   // Target appears at Paris, pointing North
//! map.rotate_target(90.0)?;                   // Target now points East, same length
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod metrics;
pub mod renderer;
pub mod session;

#[cfg(test)]
mod tests;

pub use builder::DualMapBuilder;
pub use coordinator::{Propagation, SyncCoordinator};
pub use error::{SyncError, SyncResult};
pub use event::MapEvent;
pub use metrics::SyncMetrics;
pub use renderer::{LineRenderer, NoopRenderer, RecordingRenderer, RenderEvent};
pub use session::DualMap;
