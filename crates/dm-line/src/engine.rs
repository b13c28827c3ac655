//! Per-side line engine: owns at most one [`Line`] and every mutation of it.

use dm_core::{bearing_deg, distance_m, normalize_bearing, Coordinate, DistanceUnit, EngineConfig, LineId, LineIdGen};
use tracing::{debug, warn};

use crate::{Endpoint, Line, LineError, LineResult, Side, ViewportCenter};

/// What [`LineEngine::sync_distance`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyncApplied {
    /// An existing line was re-projected at the new length.
    Resynced,
    /// No line existed; one was created at the viewport center, bearing 0°.
    Created,
}

/// Rotation step direction for [`LineEngine::rotate_step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            RotationDirection::Clockwise        => 1.0,
            RotationDirection::CounterClockwise => -1.0,
        }
    }
}

/// Owns the single line of one map side.
///
/// Source and Target engines share this type but not their rules:
///
/// | Operation            | Source                       | Target                                   |
/// |----------------------|------------------------------|------------------------------------------|
/// | `create_line`        | measure `start → end`        | measure, then lock bearing               |
/// | `move_endpoint(Start)` | re-measure                 | translate; bearing and length held       |
/// | `move_endpoint(End)` | re-measure                   | re-aim; snap back onto the locked length |
/// | `rotate`/`set_bearing` | refused (`WrongSide`)      | re-aim; length held                      |
/// | `sync_distance`      | refused (`WrongSide`)        | impose length; bearing and start held    |
///
/// All coordinates entering the engine are clamped into range first, with a
/// warning.  No operation leaves the line half-updated: a refused call returns
/// `Err` and changes nothing.
///
/// # Type parameter
///
/// `V` supplies the map's viewport center, used only when a Target line has
/// to be conjured by `sync_distance`.
pub struct LineEngine<V: ViewportCenter> {
    side:     Side,
    config:   EngineConfig,
    viewport: V,
    ids:      LineIdGen,
    line:     Option<Line>,
    revision: u64,
}

impl<V: ViewportCenter> LineEngine<V> {
    /// Create an engine with no line.
    pub fn new(side: Side, config: EngineConfig, viewport: V) -> Self {
        Self {
            side,
            ids: LineIdGen::new(config.id_seed, side.stream()),
            config,
            viewport,
            line: None,
            revision: 0,
        }
    }

    // ── Read side ─────────────────────────────────────────────────────────

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    #[inline]
    pub fn line(&self) -> Option<&Line> {
        self.line.as_ref()
    }

    #[inline]
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }

    /// Current line length, if there is a line.
    #[inline]
    pub fn distance_m(&self) -> Option<f64> {
        self.line.as_ref().map(Line::distance_m)
    }

    /// Current locked bearing (Target lines only).
    #[inline]
    pub fn bearing_deg(&self) -> Option<f64> {
        self.line.as_ref().and_then(Line::bearing_deg)
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.line.as_ref().map(Line::label)
    }

    /// Bumped on every successful mutation, including clear.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `true` if [`rotate`][Self::rotate] would be accepted right now.
    pub fn can_rotate(&self) -> bool {
        self.check_rotatable("rotate").is_ok()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Replace this side's line with a new one from `start` to `end`.
    ///
    /// On the Target side the new line's bearing is taken from the two points
    /// and `end` is re-projected from it, so the Target invariant holds from
    /// the first moment.
    pub fn create_line(&mut self, start: Coordinate, end: Coordinate) -> &Line {
        let start = self.sanitize(start, "start");
        let end = self.sanitize(end, "end");
        let id = self.ids.next_id();
        let unit = self.config.unit;

        let line = match self.side {
            Side::Source => Line::measured(id, start, end, unit),
            Side::Target => Line::projected(id, start, distance_m(start, end), bearing_deg(start, end), unit),
        };
        if let Some(old) = &self.line {
            debug!(side = %self.side, old = %old.id(), new = %id, "replacing line");
        }
        debug!(side = %self.side, id = %id, distance_m = line.distance_m(), "line created");

        self.revision += 1;
        self.line.insert(line)
    }

    /// Drag one endpoint to `pos`.
    ///
    /// - Source: the endpoint moves and the distance is re-measured.
    /// - Target, `Start`: the whole line translates; `end` is re-projected at
    ///   the locked bearing and length.
    /// - Target, `End`: `pos` only picks a direction.  The bearing becomes
    ///   `bearing(start, pos)` and `end` snaps onto the locked length.  If
    ///   `pos` equals `start` the old bearing is kept.  Refused on a
    ///   zero-length line, whose direction is meaningless.
    pub fn move_endpoint(&mut self, which: Endpoint, pos: Coordinate) -> LineResult<&Line> {
        let pos = self.sanitize(pos, "endpoint");
        match (self.side, which) {
            (Side::Source, _) => {
                let unit = self.config.unit;
                let line = self.line.as_mut().ok_or(LineError::NoLine(Side::Source))?;
                line.set_measured_endpoint(which, pos, unit);
                self.revision += 1;
                Ok(&*line)
            }
            (Side::Target, Endpoint::Start) => self.reposition(pos),
            (Side::Target, Endpoint::End) => {
                self.check_rotatable("move_endpoint(end)")?;
                let unit = self.config.unit;
                let line = self.line.as_mut().ok_or(LineError::NoLine(Side::Target))?;
                let start = line.start();
                let bearing = if pos == start {
                    line.bearing_deg().unwrap_or(0.0)
                } else {
                    bearing_deg(start, pos)
                };
                line.reproject(start, line.distance_m(), bearing, unit);
                self.revision += 1;
                Ok(&*line)
            }
        }
    }

    /// Move the whole line so it starts at `new_start`.
    ///
    /// Target: parallel move, bearing and length held.  Source: both
    /// endpoints shift by the same lat/lng offset and the distance is
    /// re-measured (a pure translation in degrees is not length-preserving on
    /// a sphere).
    pub fn reposition(&mut self, new_start: Coordinate) -> LineResult<&Line> {
        let new_start = self.sanitize(new_start, "start");
        let side = self.side;
        let unit = self.config.unit;
        let line = self.line.as_ref().ok_or(LineError::NoLine(side))?;

        let new_end = match side {
            Side::Source => {
                let (start, end) = (line.start(), line.end());
                let shifted = Coordinate::new(
                    end.lat + (new_start.lat - start.lat),
                    end.lng + (new_start.lng - start.lng),
                );
                Some(self.sanitize(shifted, "end"))
            }
            Side::Target => None,
        };

        let line = self.line.as_mut().ok_or(LineError::NoLine(side))?;
        match new_end {
            Some(end) => line.set_measured_endpoints(new_start, end, unit),
            None => {
                let bearing = line.bearing_deg().unwrap_or(0.0);
                line.reproject(new_start, line.distance_m(), bearing, unit);
            }
        }
        self.revision += 1;
        Ok(&*line)
    }

    /// Turn a Target line by `delta_deg` (positive = clockwise) about its
    /// start.  Length is held.
    pub fn rotate(&mut self, delta_deg: f64) -> LineResult<&Line> {
        let current = self.check_rotatable("rotate")?;
        let delta_deg = if delta_deg.is_finite() {
            delta_deg
        } else {
            warn!(side = %self.side, delta_deg, "non-finite rotation ignored");
            0.0
        };
        self.apply_bearing(normalize_bearing(current + delta_deg))
    }

    /// Point a Target line at an absolute `bearing_deg`.  Length is held.
    pub fn set_bearing(&mut self, bearing_deg: f64) -> LineResult<&Line> {
        let current = self.check_rotatable("set_bearing")?;
        let bearing = if bearing_deg.is_finite() {
            normalize_bearing(bearing_deg)
        } else {
            warn!(side = %self.side, bearing_deg, "non-finite bearing ignored");
            current
        };
        self.apply_bearing(bearing)
    }

    /// Rotate by the configured step (`rotation_step_deg`).
    pub fn rotate_step(&mut self, direction: RotationDirection) -> LineResult<&Line> {
        let step = self.config.rotation_step_deg * direction.sign();
        self.rotate(step)
    }

    /// Impose `distance_m` on the Target line (the length lock).
    ///
    /// Start and bearing are preserved.  With no line yet, one is created at
    /// the viewport center pointing due North.  If the viewport center is not
    /// available the call is refused with `ViewportUnavailable` and nothing
    /// changes; the caller may retry once the map is ready.
    ///
    /// Negative or non-finite distances are clamped to `0.0`.
    pub fn sync_distance(&mut self, distance_m: f64) -> LineResult<SyncApplied> {
        if self.side != Side::Target {
            return Err(LineError::WrongSide { op: "sync_distance", side: self.side });
        }
        let distance = if distance_m.is_finite() && distance_m >= 0.0 {
            distance_m
        } else {
            warn!(side = %self.side, distance_m, "invalid synced distance clamped to 0");
            0.0
        };
        let unit = self.config.unit;

        if let Some(line) = self.line.as_mut() {
            let bearing = line.bearing_deg().unwrap_or(0.0);
            line.reproject(line.start(), distance, bearing, unit);
            self.revision += 1;
            debug!(side = %self.side, id = %line.id(), distance_m = distance, "line resynced");
            return Ok(SyncApplied::Resynced);
        }

        let center = self
            .viewport
            .viewport_center()
            .ok_or(LineError::ViewportUnavailable(self.side))?;
        let center = self.sanitize(center, "viewport center");
        let id = self.ids.next_id();
        self.line = Some(Line::projected(id, center, distance, 0.0, unit));
        self.revision += 1;
        debug!(side = %self.side, id = %id, distance_m = distance, "line created from sync");
        Ok(SyncApplied::Created)
    }

    /// Remove the line.  Returns the removed id; `None` (and no revision
    /// bump) if there was nothing to remove.
    pub fn clear_line(&mut self) -> Option<LineId> {
        let old = self.line.take()?;
        self.revision += 1;
        debug!(side = %self.side, id = %old.id(), "line cleared");
        Some(old.id())
    }

    /// Switch the label unit and re-label the current line.
    pub fn set_unit(&mut self, unit: DistanceUnit) {
        self.config.unit = unit;
        if let Some(line) = self.line.as_mut() {
            line.relabel(unit);
            self.revision += 1;
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Clamp `c` into range, warning if that changed anything.
    fn sanitize(&self, c: Coordinate, what: &'static str) -> Coordinate {
        let (clamped, changed) = c.clamped();
        if changed {
            warn!(side = %self.side, what, input = %c, clamped = %clamped, "coordinate out of range; clamped");
        }
        clamped
    }

    /// Current bearing if the line may be turned, otherwise why not.
    fn check_rotatable(&self, op: &'static str) -> LineResult<f64> {
        if self.side != Side::Target {
            return Err(LineError::WrongSide { op, side: self.side });
        }
        let line = self.line.as_ref().ok_or(LineError::NoLine(self.side))?;
        if line.is_zero_length(self.config.zero_length_threshold_m) {
            return Err(LineError::ZeroLength(line.id()));
        }
        Ok(line.bearing_deg().unwrap_or(0.0))
    }

    fn apply_bearing(&mut self, bearing: f64) -> LineResult<&Line> {
        let unit = self.config.unit;
        let line = self.line.as_mut().ok_or(LineError::NoLine(self.side))?;
        line.reproject(line.start(), line.distance_m(), bearing, unit);
        self.revision += 1;
        Ok(&*line)
    }
}
