//! `dm-line` — the measurement line and the per-side engine that owns it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`line`]     | `Line`, `Side`, `Endpoint`, `LineStyle`                         |
//! | [`engine`]   | `LineEngine<V>` — create / move / rotate / sync / clear         |
//! | [`viewport`] | `ViewportCenter` trait, `FixedCenter`, `SharedCenter`           |
//! | [`error`]    | `LineError`, `LineResult<T>`                                    |
//!
//! # Two sides, one type
//!
//! The Source engine measures: its line's distance is always the great-circle
//! distance between its endpoints.  The Target engine is told its distance
//! (by the sync coordinator in `dm-sync`) and holds it fixed while the user
//! moves and turns the line:
//!
//! ```text
//!   Source                         Target
//!   start ●────────● end           start ●
//!         distance = d(start,end)          \  bearing θ (user-owned)
//!                                           \
//!                                            ● end = destination(start, d, θ)
//! ```
//!
//! Each engine exclusively owns its line.  `Line`'s fields are private to this
//! crate, so nothing outside an engine can break the invariants above.

pub mod engine;
pub mod error;
pub mod line;
pub mod viewport;


pub use engine::{LineEngine, RotationDirection, SyncApplied};
pub use error::{LineError, LineResult};
pub use line::{Endpoint, Line, LineStyle, Side};
pub use viewport::{FixedCenter, SharedCenter, ViewportCenter};
