//! Fluent builder for constructing a [`DualMap`].

use dm_core::{Coordinate, DistanceUnit, EngineConfig};
use dm_line::{Side, ViewportCenter};

use crate::{DualMap, LineRenderer, NoopRenderer, SyncResult};

/// Fluent builder for [`DualMap<VS, VT, R>`].
///
/// # Required inputs
///
/// - [`EngineConfig`] — thresholds, latency budget, unit, …
/// - `VS`, `VT: ViewportCenter` — the two map surfaces' center accessors
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                      |
/// |---------------------|------------------------------|
/// | `.renderer(r)`      | [`NoopRenderer`]             |
/// | `.unit(u)`          | `config.unit`                |
/// | `.source_line(a, b)`| no initial line              |
///
/// # Example
///
/// ```rust,ignore
/// let mut map = DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(nyc), FixedCenter::at(paris))
///     .renderer(RecordingRenderer::new())
///     .source_line(nyc, la)
///     .build()?;
/// map.rotate_target(45.0)?;
/// ```
pub struct DualMapBuilder<VS: ViewportCenter, VT: ViewportCenter, R: LineRenderer> {
    config:          EngineConfig,
    source_viewport: VS,
    target_viewport: VT,
    renderer:        R,
    source_line:     Option<(Coordinate, Coordinate)>,
}

impl<VS: ViewportCenter, VT: ViewportCenter> DualMapBuilder<VS, VT, NoopRenderer> {
    /// Create a builder with all required inputs.
    pub fn new(config: EngineConfig, source_viewport: VS, target_viewport: VT) -> Self {
        Self {
            config,
            source_viewport,
            target_viewport,
            renderer:    NoopRenderer,
            source_line: None,
        }
    }
}

impl<VS: ViewportCenter, VT: ViewportCenter, R: LineRenderer> DualMapBuilder<VS, VT, R> {
    /// Supply the renderer that receives draw/clear/preview calls.
    pub fn renderer<R2: LineRenderer>(self, renderer: R2) -> DualMapBuilder<VS, VT, R2> {
        DualMapBuilder {
            config:          self.config,
            source_viewport: self.source_viewport,
            target_viewport: self.target_viewport,
            renderer,
            source_line:     self.source_line,
        }
    }

    /// Override the label unit from the config.
    pub fn unit(mut self, unit: DistanceUnit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Start with a Source line already measured (and propagated).
    pub fn source_line(mut self, start: Coordinate, end: Coordinate) -> Self {
        self.source_line = Some((start, end));
        self
    }

    /// Validate the config and return a ready session.
    ///
    /// If an initial Source line was given it is created and propagated; a
    /// Target map that is not ready yet simply leaves the propagation pending.
    pub fn build(self) -> SyncResult<DualMap<VS, VT, R>> {
        self.config.validate()?;

        let mut map = DualMap::new(self.config, self.source_viewport, self.target_viewport, self.renderer);
        if let Some((start, end)) = self.source_line {
            map.create_line(Side::Source, start, end)?;
        }
        Ok(map)
    }
}
