//! side-by-side — scripted walk-through of the dual-map line engine.
//!
//! Measures New York → Los Angeles on the Source map, lets the Target map
//! (centred on Paris) pick the length up, then rotates and drags the Target
//! to show that the length stays locked.  Pass a JSON `EngineConfig` path as
//! the first argument to override the defaults; `RUST_LOG=debug` shows the
//! engine's own logs.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dm_core::{Coordinate, DistanceUnit, EngineConfig, LineId};
use dm_creation::PreviewLine;
use dm_line::{Endpoint, FixedCenter, Line, RotationDirection, SharedCenter, Side};
use dm_sync::{DualMapBuilder, LineRenderer, MapEvent, RecordingRenderer};

// ── Constants ─────────────────────────────────────────────────────────────────

const NEW_YORK:    Coordinate = Coordinate::new(40.7128, -74.0060);
const LOS_ANGELES: Coordinate = Coordinate::new(34.0522, -118.2437);
const PARIS:       Coordinate = Coordinate::new(48.8566, 2.3522);
const TOKYO:       Coordinate = Coordinate::new(35.6762, 139.6503);

// ── Renderer that narrates ────────────────────────────────────────────────────

/// Prints every draw call and keeps the full log for the JSON dump.
struct ConsoleRenderer {
    inner: RecordingRenderer,
}

impl LineRenderer for ConsoleRenderer {
    fn on_line_drawn(&mut self, line: &Line) {
        println!("  draw  {:<6} {}", line.side().screen_label(), line);
        self.inner.on_line_drawn(line);
    }

    fn on_line_cleared(&mut self, side: Side, id: LineId) {
        println!("  clear {:<6} {id}", side.screen_label());
        self.inner.on_line_cleared(side, id);
    }

    fn on_preview(&mut self, side: Side, preview: Option<&PreviewLine>) {
        if let Some(p) = preview {
            println!("  prev  {:<6} {} → {}  {}", side.screen_label(), p.start, p.end, p.label);
        }
        self.inner.on_preview(side, preview);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<EngineConfig>(&raw).with_context(|| format!("parsing config {path}"))?
        }
        None => EngineConfig::default(),
    };
    info!(?config, "starting");

    println!("=== side-by-side — dual-map line engine ===");
    println!("Source centre: {NEW_YORK}  |  Target centre: {PARIS}");
    println!();

    // The Target map is still loading when the first line is drawn.
    let target_center = SharedCenter::new(None);
    let mut map = DualMapBuilder::new(config, FixedCenter::at(NEW_YORK), target_center.clone())
        .renderer(ConsoleRenderer { inner: RecordingRenderer::new() })
        .build()?;

    let t0 = Instant::now();

    println!("1. Two-click creation on the Source map");
    let script = [
        MapEvent::ActivateCreation(Side::Source),
        MapEvent::PointerClick { side: Side::Source, at: NEW_YORK },
        MapEvent::PointerMove { side: Side::Source, at: Coordinate::new(37.0, -100.0) },
        MapEvent::PointerClick { side: Side::Source, at: LOS_ANGELES },
    ];
    for event in script {
        map.handle(event)?;
    }
    println!(
        "  target centre: {:?}  |  pending: {:?}",
        target_center.get(),
        map.coordinator().pending()
    );

    println!("2. Target map finishes loading");
    target_center.set(Some(PARIS));
    map.handle(MapEvent::ViewportReady)?;

    println!("3. Rotate and drag the Target (Source is untouched)");
    map.rotate_target(90.0)?;
    map.rotate_target_step(RotationDirection::CounterClockwise)?;
    map.move_endpoint(Side::Target, Endpoint::End, TOKYO)?;

    println!("4. Stretch the Source to Tokyo");
    map.move_endpoint(Side::Source, Endpoint::End, TOKYO)?;

    println!("5. Switch to imperial labels");
    map.set_unit(DistanceUnit::Imperial);

    let elapsed = t0.elapsed();
    println!();
    println!("Source: {}", map.label(Side::Source).unwrap_or("-"));
    println!("Target: {}", map.label(Side::Target).unwrap_or("-"));
    println!(
        "Syncs: {}  |  max latency: {:?}  |  budget: {:?}  |  wall: {elapsed:?}",
        map.metrics().sync_count,
        map.metrics().max_latency,
        map.coordinator().budget(),
    );

    let dump = serde_json::json!({
        "source":  map.line(Side::Source),
        "target":  map.line(Side::Target),
        "metrics": map.metrics(),
        "renders": map.renderer().inner.events.len(),
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}
