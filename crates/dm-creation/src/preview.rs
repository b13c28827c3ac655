//! The transient rubber-band line shown between the two creation clicks.

use dm_core::{distance_m, format_distance, Coordinate, DistanceUnit};
use dm_line::Side;

/// A visual-only line from the first click to the pointer.
///
/// Not a [`dm_line::Line`]: it has no id, is never owned by a line engine,
/// and disappears as soon as creation completes or is cancelled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PreviewLine {
    pub side:       Side,
    pub start:      Coordinate,
    pub end:        Coordinate,
    pub distance_m: f64,
    pub label:      String,
}

impl PreviewLine {
    pub(crate) fn new(side: Side, start: Coordinate, end: Coordinate, unit: DistanceUnit) -> Self {
        let d = distance_m(start, end);
        Self {
            side,
            start,
            end,
            distance_m: d,
            label:      format_distance(d, unit),
        }
    }
}
