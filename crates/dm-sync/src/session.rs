//! The `DualMap` session: both engines, both creation protocols, the
//! coordinator and the renderer, behind one imperative API.

use dm_core::{Coordinate, DistanceUnit, EngineConfig, LineId};
use dm_creation::{ClickOutcome, CreationProtocol};
use dm_line::{Endpoint, Line, LineEngine, RotationDirection, Side, ViewportCenter};
use tracing::debug;

use crate::{LineRenderer, MapEvent, Propagation, SyncCoordinator, SyncMetrics, SyncResult};

/// The dual-map line tool.
///
/// Every entry point follows the same order, in one call stack:
///
/// 1. mutate the owning engine (clamping inputs, refusing invalid operations
///    with no state change);
/// 2. tell the renderer about that side;
/// 3. for Source mutations, propagate the distance to the Target and tell the
///    renderer about the Target.
///
/// So by the time any method returns, both sides are consistent and drawn.
/// Refused operations return `Err` and leave both sides untouched.
///
/// Create via [`DualMapBuilder`][crate::DualMapBuilder].
pub struct DualMap<VS: ViewportCenter, VT: ViewportCenter, R: LineRenderer> {
    pub(crate) source:          LineEngine<VS>,
    pub(crate) target:          LineEngine<VT>,
    pub(crate) source_creation: CreationProtocol,
    pub(crate) target_creation: CreationProtocol,
    pub(crate) coordinator:     SyncCoordinator,
    pub(crate) renderer:        R,
}

impl<VS: ViewportCenter, VT: ViewportCenter, R: LineRenderer> DualMap<VS, VT, R> {
    pub(crate) fn new(config: EngineConfig, source_viewport: VS, target_viewport: VT, renderer: R) -> Self {
        Self {
            source_creation: CreationProtocol::new(Side::Source, config.unit),
            target_creation: CreationProtocol::new(Side::Target, config.unit),
            coordinator:     SyncCoordinator::new(&config),
            source:          LineEngine::new(Side::Source, config.clone(), source_viewport),
            target:          LineEngine::new(Side::Target, config, target_viewport),
            renderer,
        }
    }

    // ── Read side ─────────────────────────────────────────────────────────

    #[inline]
    pub fn source(&self) -> &LineEngine<VS> {
        &self.source
    }

    #[inline]
    pub fn target(&self) -> &LineEngine<VT> {
        &self.target
    }

    /// The line on `side`, for the renderer to draw.
    pub fn line(&self, side: Side) -> Option<&Line> {
        match side {
            Side::Source => self.source.line(),
            Side::Target => self.target.line(),
        }
    }

    /// The distance label on `side`.
    pub fn label(&self, side: Side) -> Option<&str> {
        self.line(side).map(Line::label)
    }

    pub fn creation(&self, side: Side) -> &CreationProtocol {
        match side {
            Side::Source => &self.source_creation,
            Side::Target => &self.target_creation,
        }
    }

    #[inline]
    pub fn metrics(&self) -> &SyncMetrics {
        self.coordinator.metrics()
    }

    #[inline]
    pub fn coordinator(&self) -> &SyncCoordinator {
        &self.coordinator
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        self.source.config()
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    // ── Line operations ───────────────────────────────────────────────────

    /// Place a new line on `side`, replacing any existing one.
    ///
    /// A Target line takes its direction from `start → end` and is then
    /// locked to the current Source distance (if one has been propagated or
    /// is pending).
    pub fn create_line(&mut self, side: Side, start: Coordinate, end: Coordinate) -> SyncResult<LineId> {
        match side {
            Side::Source => {
                let id = self.source.create_line(start, end).id();
                self.draw(Side::Source);
                self.propagate()?;
                Ok(id)
            }
            Side::Target => {
                let id = self.target.create_line(start, end).id();
                self.lock_target_length()?;
                self.draw(Side::Target);
                Ok(id)
            }
        }
    }

    /// Drag an endpoint.  See [`LineEngine::move_endpoint`] for the per-side
    /// rules.
    pub fn move_endpoint(&mut self, side: Side, which: Endpoint, to: Coordinate) -> SyncResult<()> {
        match side {
            Side::Source => {
                self.source.move_endpoint(which, to)?;
                self.draw(Side::Source);
                self.propagate()?;
            }
            Side::Target => {
                self.target.move_endpoint(which, to)?;
                self.draw(Side::Target);
            }
        }
        Ok(())
    }

    /// Move the whole line on `side` to start at `start`.
    pub fn reposition(&mut self, side: Side, start: Coordinate) -> SyncResult<()> {
        match side {
            Side::Source => {
                self.source.reposition(start)?;
                self.draw(Side::Source);
                self.propagate()?;
            }
            Side::Target => {
                self.target.reposition(start)?;
                self.draw(Side::Target);
            }
        }
        Ok(())
    }

    pub fn rotate_target(&mut self, delta_deg: f64) -> SyncResult<()> {
        self.target.rotate(delta_deg)?;
        self.draw(Side::Target);
        Ok(())
    }

    pub fn set_target_bearing(&mut self, bearing_deg: f64) -> SyncResult<()> {
        self.target.set_bearing(bearing_deg)?;
        self.draw(Side::Target);
        Ok(())
    }

    pub fn rotate_target_step(&mut self, direction: RotationDirection) -> SyncResult<()> {
        self.target.rotate_step(direction)?;
        self.draw(Side::Target);
        Ok(())
    }

    /// Remove the line on `side`.  Idempotent.
    ///
    /// Clearing the Source does not clear the Target: the Target line keeps
    /// its last synced length until a new Source line propagates.  A
    /// distance still waiting for the Target map is dropped with it.
    pub fn clear(&mut self, side: Side) -> Option<LineId> {
        let id = match side {
            Side::Source => {
                let id = self.source.clear_line()?;
                self.coordinator.discard_pending();
                id
            }
            Side::Target => self.target.clear_line()?,
        };
        self.renderer.on_line_cleared(side, id);
        Some(id)
    }

    /// Clear both lines, cancel both creations and forget sync history.
    pub fn clear_all(&mut self) {
        for side in Side::BOTH {
            self.deactivate_creation(side);
            self.clear(side);
        }
        self.coordinator.reset();
        debug!("session reset");
    }

    // ── Creation ──────────────────────────────────────────────────────────

    /// Arm two-click creation on `side`.
    pub fn activate_creation(&mut self, side: Side) -> bool {
        self.creation_mut(side).activate()
    }

    /// Cancel creation on `side`, removing any preview.
    pub fn deactivate_creation(&mut self, side: Side) -> bool {
        let had_preview = self.creation(side).preview().is_some();
        let discarded = self.creation_mut(side).deactivate();
        if had_preview {
            self.renderer.on_preview(side, None);
        }
        discarded
    }

    /// A click on the `side` map.  A completing click creates the line (and,
    /// on the Source side, propagates it) before returning.
    pub fn pointer_click(&mut self, side: Side, at: Coordinate) -> SyncResult<ClickOutcome> {
        let had_preview = self.creation(side).preview().is_some();
        let outcome = self.creation_mut(side).on_click(at);
        if let ClickOutcome::Completed { start, end } = outcome {
            if had_preview {
                self.renderer.on_preview(side, None);
            }
            self.create_line(side, start, end)?;
        }
        Ok(outcome)
    }

    /// Pointer movement over the `side` map.  Returns `true` if a creation
    /// preview was updated.
    pub fn pointer_move(&mut self, side: Side, at: Coordinate) -> bool {
        let protocol = match side {
            Side::Source => &mut self.source_creation,
            Side::Target => &mut self.target_creation,
        };
        match protocol.on_pointer_move(at) {
            Some(preview) => {
                self.renderer.on_preview(side, Some(preview));
                true
            }
            None => false,
        }
    }

    // ── Sync & settings ───────────────────────────────────────────────────

    /// Push the Source distance to the Target now.  Every Source mutation
    /// already does this; call it directly only after out-of-band changes.
    pub fn propagate(&mut self) -> SyncResult<Propagation> {
        let renderer = &mut self.renderer;
        self.coordinator
            .propagate_with(&self.source, &mut self.target, |line| renderer.on_line_drawn(line))
    }

    /// The Target map can now answer viewport queries: apply any deferred
    /// propagation.
    pub fn viewport_ready(&mut self) -> SyncResult<Propagation> {
        let renderer = &mut self.renderer;
        let result = self
            .coordinator
            .retry_pending(&mut self.target, |line| renderer.on_line_drawn(line))?;
        match result {
            Propagation::Unchanged => self.propagate(),
            other => Ok(other),
        }
    }

    /// Switch label units on both sides, including any open preview.
    pub fn set_unit(&mut self, unit: DistanceUnit) {
        self.source.set_unit(unit);
        self.target.set_unit(unit);
        for side in Side::BOTH {
            self.creation_mut(side).set_unit(unit);
            self.draw(side);
            let protocol = match side {
                Side::Source => &self.source_creation,
                Side::Target => &self.target_creation,
            };
            if let Some(preview) = protocol.preview() {
                self.renderer.on_preview(side, Some(preview));
            }
        }
    }

    /// Dispatch one UI event.
    pub fn handle(&mut self, event: MapEvent) -> SyncResult<()> {
        match event {
            MapEvent::CreateLine { side, start, end } => {
                self.create_line(side, start, end)?;
            }
            MapEvent::MoveEndpoint { side, endpoint, to } => self.move_endpoint(side, endpoint, to)?,
            MapEvent::Reposition { side, start } => self.reposition(side, start)?,
            MapEvent::Rotate { delta_deg } => self.rotate_target(delta_deg)?,
            MapEvent::SetBearing { bearing_deg } => self.set_target_bearing(bearing_deg)?,
            MapEvent::RotateStep(direction) => self.rotate_target_step(direction)?,
            MapEvent::Clear(side) => {
                self.clear(side);
            }
            MapEvent::ClearAll => self.clear_all(),
            MapEvent::ActivateCreation(side) => {
                self.activate_creation(side);
            }
            MapEvent::DeactivateCreation(side) => {
                self.deactivate_creation(side);
            }
            MapEvent::PointerClick { side, at } => {
                self.pointer_click(side, at)?;
            }
            MapEvent::PointerMove { side, at } => {
                self.pointer_move(side, at);
            }
            MapEvent::ViewportReady => {
                self.viewport_ready()?;
            }
            MapEvent::SetUnit(unit) => self.set_unit(unit),
        }
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn creation_mut(&mut self, side: Side) -> &mut CreationProtocol {
        match side {
            Side::Source => &mut self.source_creation,
            Side::Target => &mut self.target_creation,
        }
    }

    fn draw(&mut self, side: Side) {
        let line = match side {
            Side::Source => self.source.line(),
            Side::Target => self.target.line(),
        };
        if let Some(line) = line {
            self.renderer.on_line_drawn(line);
        }
    }

    /// After the user places a Target line, impose the Source distance on it.
    fn lock_target_length(&mut self) -> SyncResult<()> {
        if self.coordinator.pending().is_some() {
            self.coordinator.retry_pending(&mut self.target, |_| {})?;
        } else if let Some(distance) = self.coordinator.metrics().last_synced_distance_m {
            self.target.sync_distance(distance)?;
        }
        Ok(())
    }
}
