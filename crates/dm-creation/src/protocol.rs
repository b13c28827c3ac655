//! The two-click creation state machine.

use dm_core::{Coordinate, DistanceUnit};
use dm_line::Side;
use tracing::{debug, trace, warn};

use crate::PreviewLine;

/// Where the protocol is.
///
/// ```text
///            activate()            click(a)                  click(b)
///  Inactive ───────────▶ Armed ─────────────▶ AwaitingSecondClick ───────▶ Inactive
///      ▲                   │                     │  ▲  move(p): preview a→p   (Completed{a,b})
///      └── deactivate() ───┴─────────────────────┘  └──┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum CreationState {
    /// Not listening for clicks.
    Inactive,
    /// Listening; no point placed yet.
    Armed,
    /// First point placed; pointer moves update the preview.
    AwaitingSecondClick {
        first:   Coordinate,
        preview: Option<PreviewLine>,
    },
}

/// Result of feeding one click to the protocol.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The protocol was inactive; the click belongs to someone else.
    Ignored,
    /// First point recorded.
    FirstPoint(Coordinate),
    /// Second point recorded.  The caller should now create the line; the
    /// protocol is already back to `Inactive`.
    Completed {
        start: Coordinate,
        end:   Coordinate,
    },
}

/// Turns two discrete clicks on one map into a `(start, end)` pair, with a
/// live preview in between.
///
/// The protocol never touches a [`LineEngine`][dm_line::LineEngine]: it
/// reports [`ClickOutcome::Completed`] and lets the caller commit.  That
/// keeps the preview outside the one-line-per-side rule, and means a
/// cancelled creation can never leave a partial line behind.
///
/// It is single-shot: after completing it returns to `Inactive` and must be
/// re-armed with [`activate`][Self::activate].
#[derive(Clone, Debug)]
pub struct CreationProtocol {
    side:  Side,
    unit:  DistanceUnit,
    state: CreationState,
}

impl CreationProtocol {
    pub fn new(side: Side, unit: DistanceUnit) -> Self {
        Self {
            side,
            unit,
            state: CreationState::Inactive,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn state(&self) -> &CreationState {
        &self.state
    }

    /// `true` unless `Inactive`.
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, CreationState::Inactive)
    }

    /// The pending first point, if one has been placed.
    pub fn first_point(&self) -> Option<Coordinate> {
        match &self.state {
            CreationState::AwaitingSecondClick { first, .. } => Some(*first),
            _ => None,
        }
    }

    /// The current preview, if the pointer has moved since the first click.
    pub fn preview(&self) -> Option<&PreviewLine> {
        match &self.state {
            CreationState::AwaitingSecondClick { preview, .. } => preview.as_ref(),
            _ => None,
        }
    }

    /// Start listening for clicks.  Returns `false` if already active (a
    /// pending first point is kept).
    pub fn activate(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        debug!(side = %self.side, "creation armed");
        self.state = CreationState::Armed;
        true
    }

    /// Return to `Inactive` from any state, discarding the first point and
    /// preview.  Returns `true` if there was anything to discard or the
    /// protocol was listening.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            debug!(side = %self.side, "creation cancelled");
        }
        self.state = CreationState::Inactive;
        was_active
    }

    /// Feed one click.
    pub fn on_click(&mut self, pos: Coordinate) -> ClickOutcome {
        if !self.is_active() {
            return ClickOutcome::Ignored;
        }
        let pos = self.sanitize(pos, "click");
        match &self.state {
            CreationState::Inactive => ClickOutcome::Ignored,
            CreationState::Armed => {
                debug!(side = %self.side, first = %pos, "creation first point");
                self.state = CreationState::AwaitingSecondClick { first: pos, preview: None };
                ClickOutcome::FirstPoint(pos)
            }
            CreationState::AwaitingSecondClick { first, .. } => {
                let start = *first;
                debug!(side = %self.side, start = %start, end = %pos, "creation complete");
                self.state = CreationState::Inactive;
                ClickOutcome::Completed { start, end: pos }
            }
        }
    }

    /// Feed one pointer move.  Updates and returns the preview while waiting
    /// for the second click; otherwise does nothing and returns `None`.
    pub fn on_pointer_move(&mut self, pos: Coordinate) -> Option<&PreviewLine> {
        if self.first_point().is_none() {
            return None;
        }
        let pos = self.sanitize(pos, "pointer");
        let (side, unit) = (self.side, self.unit);
        match &mut self.state {
            CreationState::AwaitingSecondClick { first, preview } => {
                let line = PreviewLine::new(side, *first, pos, unit);
                trace!(side = %side, distance_m = line.distance_m, "preview updated");
                Some(&*preview.insert(line))
            }
            _ => None,
        }
    }

    /// Change the preview's label unit.  An existing preview is re-labelled.
    pub fn set_unit(&mut self, unit: DistanceUnit) {
        self.unit = unit;
        if let CreationState::AwaitingSecondClick { preview: Some(p), .. } = &mut self.state {
            *p = PreviewLine::new(p.side, p.start, p.end, unit);
        }
    }

    /// Clamp `pos` into range, warning if that changed anything.
    fn sanitize(&self, pos: Coordinate, what: &'static str) -> Coordinate {
        let (clamped, changed) = pos.clamped();
        if changed {
            warn!(side = %self.side, what, input = %pos, clamped = %clamped, "coordinate out of range; clamped");
        }
        clamped
    }
}
