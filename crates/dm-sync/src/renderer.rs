//! Renderer hooks — how line state leaves the engine.

use dm_core::LineId;
use dm_creation::PreviewLine;
use dm_line::{Line, Side};

/// Callbacks invoked by [`DualMap`][crate::DualMap] after every state change
/// a map needs to redraw.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they draw.  Calls happen synchronously, after the engine
/// state is final for that step.
///
/// # Example — log every redraw
///
/// ```rust,ignore
/// struct LogRenderer;
///
/// impl LineRenderer for LogRenderer {
///     fn on_line_drawn(&mut self, line: &Line) {
///         println!("{}: {}", line.side().screen_label(), line);
///     }
/// }
/// ```
pub trait LineRenderer {
    /// A line was created or changed; draw path, endpoint markers and the
    /// arrow at `end` (oriented by [`Line::heading_deg`]).
    fn on_line_drawn(&mut self, _line: &Line) {}

    /// The line `id` on `side` is gone.
    fn on_line_cleared(&mut self, _side: Side, _id: LineId) {}

    /// The creation preview on `side` changed; `None` removes it.
    fn on_preview(&mut self, _side: Side, _preview: Option<&PreviewLine>) {}
}

/// A [`LineRenderer`] that draws nothing.
pub struct NoopRenderer;

impl LineRenderer for NoopRenderer {}

/// One recorded renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderEvent {
    Drawn(Line),
    Cleared { side: Side, id: LineId },
    Preview { side: Side, preview: Option<PreviewLine> },
}

/// A [`LineRenderer`] that keeps every call, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently drawn line on `side`, if it hasn't been cleared since.
    pub fn last_drawn(&self, side: Side) -> Option<&Line> {
        for event in self.events.iter().rev() {
            match event {
                RenderEvent::Drawn(line) if line.side() == side => return Some(line),
                RenderEvent::Cleared { side: s, .. } if *s == side => return None,
                _ => {}
            }
        }
        None
    }

    /// How many draws happened on `side`.
    pub fn draw_count(&self, side: Side) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Drawn(l) if l.side() == side))
            .count()
    }

    /// The preview currently shown on `side`.
    pub fn current_preview(&self, side: Side) -> Option<&PreviewLine> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Preview { side: s, preview } if *s == side => Some(preview.as_ref()),
            _ => None,
        })?
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl LineRenderer for RecordingRenderer {
    fn on_line_drawn(&mut self, line: &Line) {
        self.events.push(RenderEvent::Drawn(line.clone()));
    }

    fn on_line_cleared(&mut self, side: Side, id: LineId) {
        self.events.push(RenderEvent::Cleared { side, id });
    }

    fn on_preview(&mut self, side: Side, preview: Option<&PreviewLine>) {
        self.events.push(RenderEvent::Preview { side, preview: preview.cloned() });
    }
}
