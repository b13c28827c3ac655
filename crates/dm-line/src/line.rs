//! The measurement line and its small vocabulary types.

use std::fmt;

use dm_core::{bearing_deg, destination, distance_m, format_distance, Coordinate, DistanceUnit, LineId};

// ── Side ──────────────────────────────────────────────────────────────────────

/// Which map a line lives on.
///
/// The **Source** map is where distance is measured (ground truth).  The
/// **Target** map receives that distance and lets the user choose position and
/// orientation freely.  In the product these are the left and right maps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Source, Side::Target];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Source => "source",
            Side::Target => "target",
        }
    }

    /// Screen position of this side's map in the product layout.
    pub fn screen_label(self) -> &'static str {
        match self {
            Side::Source => "left",
            Side::Target => "right",
        }
    }

    /// Stream number for per-side id generators.
    #[inline]
    pub(crate) fn stream(self) -> u64 {
        match self {
            Side::Source => 0,
            Side::Target => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Endpoint ──────────────────────────────────────────────────────────────────

/// One of the two ends of a line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End   => "end",
        })
    }
}

// ── LineStyle ─────────────────────────────────────────────────────────────────

/// Presentation hints for the renderer.  The engine never reads these.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStyle {
    /// `0xRRGGBB`.
    pub color:  u32,
    /// Stroke width in CSS pixels.
    pub weight: f32,
    pub dashed: bool,
}

impl LineStyle {
    /// Default look for `side`: solid red on Source, dashed blue on Target.
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Source => Self { color: 0xe5_3935, weight: 3.0, dashed: false },
            Side::Target => Self { color: 0x1e_88e5, weight: 3.0, dashed: true },
        }
    }
}

// ── Line ──────────────────────────────────────────────────────────────────────

/// One measurement line.
///
/// Fields are private: only the owning [`LineEngine`][crate::LineEngine] can
/// change a line, and every change goes through a constructor or recompute
/// helper that keeps the derived fields consistent.
///
/// # Invariants
///
/// - Source: `distance_m == distance(start, end)`; `bearing_deg` is `None`.
/// - Target: `bearing_deg` is `Some`, and `end == destination(start,
///   distance_m, bearing_deg)`.  `distance_m` is whatever was last imposed
///   (locked), not re-measured from the endpoints.
/// - `label` is always `format_distance(distance_m, unit)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line {
    id:          LineId,
    side:        Side,
    start:       Coordinate,
    end:         Coordinate,
    distance_m:  f64,
    bearing_deg: Option<f64>,
    label:       String,
    style:       LineStyle,
}

impl Line {
    /// A Source-side line: distance measured from the endpoints.
    pub(crate) fn measured(
        id:    LineId,
        start: Coordinate,
        end:   Coordinate,
        unit:  DistanceUnit,
    ) -> Self {
        let d = distance_m(start, end);
        Self {
            id,
            side:        Side::Source,
            start,
            end,
            distance_m:  d,
            bearing_deg: None,
            label:       format_distance(d, unit),
            style:       LineStyle::for_side(Side::Source),
        }
    }

    /// A Target-side line: `end` projected from `start`.
    pub(crate) fn projected(
        id:          LineId,
        start:       Coordinate,
        distance:    f64,
        bearing:     f64,
        unit:        DistanceUnit,
    ) -> Self {
        Self {
            id,
            side:        Side::Target,
            start,
            end:         destination(start, distance, bearing),
            distance_m:  distance,
            bearing_deg: Some(bearing),
            label:       format_distance(distance, unit),
            style:       LineStyle::for_side(Side::Target),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> LineId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.end
    }

    #[inline]
    pub fn endpoint(&self, which: Endpoint) -> Coordinate {
        match which {
            Endpoint::Start => self.start,
            Endpoint::End   => self.end,
        }
    }

    /// Length in metres.
    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Locked orientation.  `None` on Source lines.
    #[inline]
    pub fn bearing_deg(&self) -> Option<f64> {
        self.bearing_deg
    }

    /// Formatted distance, e.g. `"3935.75 km"`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Heading for the arrow marker drawn at `end`.
    ///
    /// Target lines report their locked bearing.  Source lines have none, so
    /// the forward azimuth from `start` to `end` is used instead.
    pub fn heading_deg(&self) -> f64 {
        self.bearing_deg.unwrap_or_else(|| bearing_deg(self.start, self.end))
    }

    /// `true` if the line is shorter than `threshold_m`.
    #[inline]
    pub fn is_zero_length(&self, threshold_m: f64) -> bool {
        self.distance_m < threshold_m
    }

    // ── Crate-internal mutation ───────────────────────────────────────────

    /// Source path: replace an endpoint and re-measure.
    pub(crate) fn set_measured_endpoint(&mut self, which: Endpoint, pos: Coordinate, unit: DistanceUnit) {
        match which {
            Endpoint::Start => self.start = pos,
            Endpoint::End   => self.end = pos,
        }
        self.distance_m = distance_m(self.start, self.end);
        self.label = format_distance(self.distance_m, unit);
    }

    /// Source path: replace both endpoints and re-measure.
    pub(crate) fn set_measured_endpoints(&mut self, start: Coordinate, end: Coordinate, unit: DistanceUnit) {
        self.start = start;
        self.end = end;
        self.distance_m = distance_m(start, end);
        self.label = format_distance(self.distance_m, unit);
    }

    /// Target path: set any of start / distance / bearing and re-project `end`.
    pub(crate) fn reproject(
        &mut self,
        start:    Coordinate,
        distance: f64,
        bearing:  f64,
        unit:     DistanceUnit,
    ) {
        self.start = start;
        self.distance_m = distance;
        self.bearing_deg = Some(bearing);
        self.end = destination(start, distance, bearing);
        self.label = format_distance(distance, unit);
    }

    pub(crate) fn relabel(&mut self, unit: DistanceUnit) {
        self.label = format_distance(self.distance_m, unit);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} → {} [{}]", self.side, self.id, self.start, self.end, self.label)?;
        if let Some(b) = self.bearing_deg {
            write!(f, " @ {:.1}°", b)?;
        }
        Ok(())
    }
}
