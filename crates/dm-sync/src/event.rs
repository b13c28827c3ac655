//! Typed inputs from the UI layer.

use dm_core::{Coordinate, DistanceUnit};
use dm_line::{Endpoint, RotationDirection, Side};

/// Everything the map surface and UI controls can ask of a
/// [`DualMap`][crate::DualMap], as one closed set.
///
/// Pointer coordinates are already geographic: translating screen pixels is
/// the map surface's job.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MapEvent {
    /// Place a line directly (e.g. from a drag gesture or a restore).
    CreateLine {
        side:  Side,
        start: Coordinate,
        end:   Coordinate,
    },

    /// An endpoint marker was dragged.
    MoveEndpoint {
        side:     Side,
        endpoint: Endpoint,
        to:       Coordinate,
    },

    /// The whole line was dragged by its start marker.
    Reposition {
        side:  Side,
        start: Coordinate,
    },

    /// Rotate the Target line by a relative angle (positive = clockwise).
    Rotate { delta_deg: f64 },

    /// Point the Target line at an absolute bearing.
    SetBearing { bearing_deg: f64 },

    /// Rotation button / arrow key.
    RotateStep(RotationDirection),

    Clear(Side),

    ClearAll,

    /// "Draw a line" button.
    ActivateCreation(Side),

    /// Escape / cancel.
    DeactivateCreation(Side),

    PointerClick {
        side: Side,
        at:   Coordinate,
    },

    PointerMove {
        side: Side,
        at:   Coordinate,
    },

    /// The map surface finished loading (or re-laid out) and can now answer
    /// viewport-center queries.
    ViewportReady,

    SetUnit(DistanceUnit),
}
