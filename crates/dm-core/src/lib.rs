//! `dm-core` — foundational types for the dual-map geodesic line engine.
//!
//! This crate is a dependency of every other `dm-*` crate.  It has no `dm-*`
//! dependencies and minimal external ones (`rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, haversine distance, bearing, destination     |
//! | [`ids`]    | `LineId`, `LineIdGen`                                      |
//! | [`units`]  | `DistanceUnit`, `format_distance`                          |
//! | [`config`] | `EngineConfig`                                             |
//! | [`error`]  | `DmError`, `DmResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use error::{DmError, DmResult};
pub use geo::{
    bearing_deg, destination, distance_m, normalize_bearing, normalize_lng, Coordinate,
    EARTH_RADIUS_M,
};
pub use ids::{LineId, LineIdGen};
pub use units::{format_distance, DistanceUnit};
