//! Unit and end-to-end tests for dm-sync.

use std::time::Duration;

use dm_core::{bearing_deg, distance_m, Coordinate, DistanceUnit, EngineConfig};
use dm_line::{Endpoint, FixedCenter, LineEngine, LineError, RotationDirection, SharedCenter, Side, SyncApplied};

use crate::{
    DualMap, DualMapBuilder, MapEvent, Propagation, RecordingRenderer, RenderEvent, SyncCoordinator, SyncError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const NYC:    Coordinate = Coordinate::new(40.7128, -74.0060);
const LA:     Coordinate = Coordinate::new(34.0522, -118.2437);
const LONDON: Coordinate = Coordinate::new(51.5, -0.12);
const PARIS:  Coordinate = Coordinate::new(48.8566, 2.3522);
const TOKYO:  Coordinate = Coordinate::new(35.6762, 139.6503);

/// Route engine logs to the test harness; `RUST_LOG=debug` shows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engines(target_center: Option<Coordinate>) -> (LineEngine<FixedCenter>, LineEngine<FixedCenter>) {
    let cfg = EngineConfig::default();
    (
        LineEngine::new(Side::Source, cfg.clone(), FixedCenter::at(NYC)),
        LineEngine::new(Side::Target, cfg, FixedCenter(target_center)),
    )
}

type TestMap = DualMap<FixedCenter, FixedCenter, RecordingRenderer>;

fn session() -> TestMap {
    init_tracing();
    DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(NYC), FixedCenter::at(PARIS))
        .renderer(RecordingRenderer::new())
        .build()
        .unwrap()
}

fn assert_close(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "{a} vs {b} (eps {eps})");
}

// ── SyncCoordinator ───────────────────────────────────────────────────────────

#[cfg(test)]
mod coordinator {
    use super::*;

    #[test]
    fn nothing_to_propagate_without_source_line() {
        let (source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        assert_eq!(sync.propagate(&source, &mut target).unwrap(), Propagation::NoSource);
        assert!(!target.has_line());
        assert_eq!(sync.metrics().sync_count, 0);
    }

    #[test]
    fn first_propagation_creates_target() {
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        let d = source.create_line(NYC, LA).distance_m();

        match sync.propagate(&source, &mut target).unwrap() {
            Propagation::Synced { distance_m, applied, .. } => {
                assert_eq!(distance_m, d);
                assert_eq!(applied, SyncApplied::Created);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(target.distance_m(), Some(d));
        assert_eq!(sync.metrics().last_synced_distance_m, Some(d));
        assert_eq!(sync.metrics().sync_count, 1);
        assert!(sync.metrics().last_latency.is_some());
    }

    #[test]
    fn repeated_propagation_is_idempotent() {
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        source.create_line(NYC, LA);
        sync.propagate(&source, &mut target).unwrap();
        let rev = target.revision();

        assert_eq!(sync.propagate(&source, &mut target).unwrap(), Propagation::Unchanged);
        assert_eq!(target.revision(), rev);
        assert_eq!(sync.metrics().sync_count, 1);
    }

    #[test]
    fn resync_keeps_target_bearing_and_position() {
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        source.create_line(NYC, LA);
        sync.propagate(&source, &mut target).unwrap();

        target.set_bearing(120.0).unwrap();
        target.reposition(LONDON).unwrap();

        source.move_endpoint(Endpoint::End, TOKYO).unwrap();
        let p = sync.propagate(&source, &mut target).unwrap();
        assert!(matches!(p, Propagation::Synced { applied: SyncApplied::Resynced, .. }));

        let line = target.line().unwrap();
        assert_eq!(line.start(), LONDON);
        assert_eq!(line.bearing_deg(), Some(120.0));
        assert_eq!(line.distance_m(), distance_m(NYC, TOKYO));
    }

    #[test]
    fn swapped_engines_are_refused() {
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        source.create_line(NYC, LA);
        target.create_line(LONDON, PARIS);

        let err = sync.propagate(&target, &mut source).unwrap_err();
        assert!(matches!(err, SyncError::Line(LineError::WrongSide { op: "propagate", .. })));
        assert_eq!(source.distance_m(), Some(distance_m(NYC, LA)));
    }

    #[test]
    fn deferred_until_viewport_ready() {
        let (mut source, _) = engines(None);
        let center = SharedCenter::new(None);
        let mut target = LineEngine::new(Side::Target, EngineConfig::default(), center.clone());
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        let d = source.create_line(NYC, LA).distance_m();

        assert_eq!(sync.propagate(&source, &mut target).unwrap(), Propagation::Deferred { distance_m: d });
        assert_eq!(sync.pending(), Some(d));
        assert_eq!(sync.metrics().deferred_count, 1);
        assert!(!target.has_line());

        // Still not ready.
        assert!(matches!(sync.retry_pending(&mut target, |_| {}).unwrap(), Propagation::Deferred { .. }));

        center.set(Some(PARIS));
        let p = sync.retry_pending(&mut target, |_| {}).unwrap();
        assert!(matches!(p, Propagation::Synced { applied: SyncApplied::Created, .. }));
        assert_eq!(sync.pending(), None);
        assert_eq!(target.line().unwrap().start(), PARIS);
        assert_eq!(target.distance_m(), Some(d));
    }

    #[test]
    fn discarded_distance_is_never_applied() {
        let (mut source, _) = engines(None);
        let center = SharedCenter::new(None);
        let mut target = LineEngine::new(Side::Target, EngineConfig::default(), center.clone());
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        let d = source.create_line(NYC, LA).distance_m();
        sync.propagate(&source, &mut target).unwrap();

        assert_eq!(sync.discard_pending(), Some(d));
        assert_eq!(sync.discard_pending(), None);

        center.set(Some(PARIS));
        assert_eq!(sync.retry_pending(&mut target, |_| {}).unwrap(), Propagation::Unchanged);
        assert!(!target.has_line());
    }

    #[test]
    fn retry_without_pending_is_unchanged() {
        let (_, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        assert_eq!(sync.retry_pending(&mut target, |_| {}).unwrap(), Propagation::Unchanged);
    }

    #[test]
    fn latency_within_budget() {
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        source.create_line(NYC, LA);
        for step in 0..50 {
            let end = Coordinate::new(34.0 + step as f64 * 0.1, -118.0);
            source.move_endpoint(Endpoint::End, end).unwrap();
            sync.propagate(&source, &mut target).unwrap();
        }
        let m = sync.metrics();
        assert_eq!(m.sync_count, 50);
        assert_eq!(m.budget_violations, 0);
        assert!(m.within_budget(Duration::from_millis(100)));
        assert!(m.last_latency.unwrap() <= m.max_latency);
    }

    #[test]
    fn slow_render_is_counted() {
        let cfg = EngineConfig { latency_budget_ms: 1, ..EngineConfig::default() };
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&cfg);
        source.create_line(NYC, LA);

        let p = sync
            .propagate_with(&source, &mut target, |_| std::thread::sleep(Duration::from_millis(5)))
            .unwrap();
        assert!(matches!(p, Propagation::Synced { .. }));
        assert_eq!(sync.metrics().budget_violations, 1);
        assert!(!sync.metrics().within_budget(sync.budget()));
    }

    #[test]
    fn strict_budget_is_an_error() {
        let cfg = EngineConfig { latency_budget_ms: 1, strict_latency: true, ..EngineConfig::default() };
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&cfg);
        source.create_line(NYC, LA);

        let err = sync
            .propagate_with(&source, &mut target, |_| std::thread::sleep(Duration::from_millis(5)))
            .unwrap_err();
        assert!(matches!(err, SyncError::LatencyBudgetExceeded { .. }));
        // The Target was still updated.
        assert_eq!(target.distance_m(), source.distance_m());
    }

    #[test]
    fn reset_forgets_history() {
        let (mut source, mut target) = engines(Some(PARIS));
        let mut sync = SyncCoordinator::new(&EngineConfig::default());
        source.create_line(NYC, LA);
        sync.propagate(&source, &mut target).unwrap();
        sync.reset();
        assert_eq!(sync.metrics().sync_count, 0);
        assert_eq!(sync.metrics().last_synced_distance_m, None);
    }
}

// ── DualMap session ───────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use super::*;

    #[test]
    fn end_to_end_nyc_to_la() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();

        let source = map.line(Side::Source).unwrap();
        let target = map.line(Side::Target).unwrap();
        let expected = 3_936_000.0;
        assert!((source.distance_m() - expected).abs() / expected < 0.005);

        // Auto-created at the Target map's center, pointing North.
        assert_eq!(target.start(), PARIS);
        assert_eq!(target.bearing_deg(), Some(0.0));
        assert_close(target.distance_m(), source.distance_m(), 1e-6);

        // `end` is due North of `start`, exactly that far away.
        assert_close(target.end().lng, PARIS.lng, 1e-9);
        assert!(target.end().lat > PARIS.lat);
        assert_close(distance_m(target.start(), target.end()), target.distance_m(), 1.0);
        assert_eq!(target.label(), source.label());
    }

    #[test]
    fn source_edits_propagate_in_the_same_call() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        map.move_endpoint(Side::Source, Endpoint::End, LONDON).unwrap();
        assert_eq!(map.target().distance_m(), map.source().distance_m());

        map.reposition(Side::Source, Coordinate::new(0.0, 0.0)).unwrap();
        assert_eq!(map.target().distance_m(), map.source().distance_m());
    }

    #[test]
    fn target_edits_never_reach_source() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        let before = map.line(Side::Source).unwrap().clone();
        let source_rev = map.source().revision();

        map.rotate_target(45.0).unwrap();
        map.set_target_bearing(300.0).unwrap();
        map.rotate_target_step(RotationDirection::Clockwise).unwrap();
        map.move_endpoint(Side::Target, Endpoint::Start, TOKYO).unwrap();
        map.move_endpoint(Side::Target, Endpoint::End, LONDON).unwrap();
        map.reposition(Side::Target, Coordinate::new(-10.0, 20.0)).unwrap();

        assert_eq!(map.line(Side::Source).unwrap(), &before);
        assert_eq!(map.source().revision(), source_rev);
        assert_eq!(map.metrics().sync_count, 1);
    }

    #[test]
    fn target_keeps_its_own_orientation_and_place() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        map.set_target_bearing(90.0).unwrap();
        map.reposition(Side::Target, LONDON).unwrap();

        for end in [TOKYO, PARIS, Coordinate::new(0.0, 0.0)] {
            map.move_endpoint(Side::Source, Endpoint::End, end).unwrap();
            let target = map.line(Side::Target).unwrap();
            assert_eq!(target.start(), LONDON, "target was re-centred");
            assert_eq!(target.bearing_deg(), Some(90.0), "target bearing overwritten");
            assert_eq!(target.distance_m(), distance_m(NYC, end));
        }
    }

    #[test]
    fn length_lock_across_target_edits() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        let locked = map.metrics().last_synced_distance_m.unwrap();

        map.rotate_target(33.0).unwrap();
        map.move_endpoint(Side::Target, Endpoint::Start, TOKYO).unwrap();
        map.rotate_target(-270.0).unwrap();
        map.move_endpoint(Side::Target, Endpoint::End, LONDON).unwrap();

        let target = map.line(Side::Target).unwrap();
        assert_eq!(target.distance_m(), locked);
        assert_close(distance_m(target.start(), target.end()), locked, 1.0);
    }

    #[test]
    fn user_placed_target_is_locked_to_source_length() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        let d = map.source().distance_m().unwrap();

        map.create_line(Side::Target, LONDON, PARIS).unwrap();
        let target = map.line(Side::Target).unwrap();
        assert_eq!(target.start(), LONDON);
        assert_eq!(target.distance_m(), d);
        assert_close(target.bearing_deg().unwrap(), bearing_deg(LONDON, PARIS), 1e-9);
    }

    #[test]
    fn target_before_any_source_keeps_drawn_length() {
        let mut map = session();
        map.create_line(Side::Target, LONDON, PARIS).unwrap();
        assert_eq!(map.target().distance_m(), Some(distance_m(LONDON, PARIS)));

        map.create_line(Side::Source, NYC, LA).unwrap();
        assert_eq!(map.target().distance_m(), map.source().distance_m());
        assert_eq!(map.line(Side::Target).unwrap().start(), LONDON);
    }

    #[test]
    fn single_line_per_side() {
        let mut map = session();
        let first = map.create_line(Side::Source, NYC, LA).unwrap();
        let second = map.create_line(Side::Source, LONDON, PARIS).unwrap();
        assert_ne!(first, second);

        let line = map.line(Side::Source).unwrap();
        assert_eq!(line.id(), second);
        assert_eq!((line.start(), line.end()), (LONDON, PARIS));
        assert_eq!(map.target().distance_m(), Some(distance_m(LONDON, PARIS)));
    }

    #[test]
    fn zero_length_source_disables_target_rotation() {
        let mut map = session();
        map.create_line(Side::Source, LONDON, LONDON).unwrap();
        assert_eq!(map.source().distance_m(), Some(0.0));
        assert_eq!(map.target().distance_m(), Some(0.0));

        let bearing = map.target().bearing_deg();
        let err = map.rotate_target(45.0).unwrap_err();
        assert!(matches!(err, SyncError::Line(LineError::ZeroLength(_))));
        assert_eq!(map.target().bearing_deg(), bearing);
    }

    #[test]
    fn clearing_source_leaves_target() {
        let mut map = session();
        let id = map.create_line(Side::Source, NYC, LA).unwrap();
        assert_eq!(map.clear(Side::Source), Some(id));
        assert_eq!(map.clear(Side::Source), None);
        assert!(map.line(Side::Target).is_some());

        map.create_line(Side::Source, LONDON, PARIS).unwrap();
        assert_eq!(map.target().distance_m(), Some(distance_m(LONDON, PARIS)));
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        map.activate_creation(Side::Source);
        map.clear_all();

        assert!(map.line(Side::Source).is_none());
        assert!(map.line(Side::Target).is_none());
        assert!(!map.creation(Side::Source).is_active());
        assert_eq!(map.metrics().sync_count, 0);

        map.create_line(Side::Source, LONDON, PARIS).unwrap();
        let target = map.line(Side::Target).unwrap();
        assert_eq!(target.start(), PARIS);
        assert_eq!(target.bearing_deg(), Some(0.0));
    }

    #[test]
    fn deferred_target_appears_when_map_ready() {
        init_tracing();
        let center = SharedCenter::new(None);
        let mut map = DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(NYC), center.clone())
            .renderer(RecordingRenderer::new())
            .source_line(NYC, LA)
            .build()
            .unwrap();

        assert!(map.line(Side::Target).is_none());
        assert_eq!(map.coordinator().pending(), map.source().distance_m());

        center.set(Some(TOKYO));
        let p = map.viewport_ready().unwrap();
        assert!(matches!(p, Propagation::Synced { applied: SyncApplied::Created, .. }));
        assert_eq!(map.line(Side::Target).unwrap().start(), TOKYO);
        assert_eq!(map.renderer().last_drawn(Side::Target).unwrap().start(), TOKYO);
    }

    #[test]
    fn user_placed_target_applies_pending_distance() {
        let mut map = DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(NYC), FixedCenter(None))
            .source_line(NYC, LA)
            .build()
            .unwrap();
        assert!(map.coordinator().pending().is_some());

        map.create_line(Side::Target, LONDON, PARIS).unwrap();
        assert_eq!(map.coordinator().pending(), None);
        assert_eq!(map.target().distance_m(), map.source().distance_m());
    }

    #[test]
    fn cleared_source_drops_deferred_distance() {
        init_tracing();
        let center = SharedCenter::new(None);
        let mut map = DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(NYC), center.clone())
            .renderer(RecordingRenderer::new())
            .source_line(NYC, LA)
            .build()
            .unwrap();
        assert!(map.coordinator().pending().is_some());

        map.clear(Side::Source);
        assert_eq!(map.coordinator().pending(), None);

        center.set(Some(PARIS));
        assert_eq!(map.viewport_ready().unwrap(), Propagation::NoSource);
        assert!(map.line(Side::Target).is_none());
        assert_eq!(map.renderer().draw_count(Side::Target), 0);
    }

    #[test]
    fn unit_switch_relabels_both_sides() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        map.set_unit(DistanceUnit::Imperial);
        let label = map.label(Side::Source).unwrap().to_string();
        assert!(label.ends_with(" mi"), "got {label}");
        assert_eq!(map.label(Side::Target), Some(label.as_str()));
    }

    #[test]
    fn builder_rejects_bad_config() {
        let cfg = EngineConfig { rotation_step_deg: -1.0, ..EngineConfig::default() };
        let result = DualMapBuilder::new(cfg, FixedCenter::at(NYC), FixedCenter::at(PARIS)).build();
        assert!(matches!(result, Err(SyncError::Config(_))));
    }

    #[test]
    fn builder_unit_override() {
        let map = DualMapBuilder::new(EngineConfig::default(), FixedCenter::at(NYC), FixedCenter::at(PARIS))
            .unit(DistanceUnit::Imperial)
            .source_line(NYC, LA)
            .build()
            .unwrap();
        assert!(map.label(Side::Target).unwrap().ends_with(" mi"));
    }
}

// ── Creation through the session ──────────────────────────────────────────────

#[cfg(test)]
mod creation {
    use dm_creation::ClickOutcome;

    use super::*;

    #[test]
    fn two_clicks_create_and_propagate() {
        let mut map = session();
        assert!(map.activate_creation(Side::Source));

        assert_eq!(map.pointer_click(Side::Source, NYC).unwrap(), ClickOutcome::FirstPoint(NYC));
        assert!(map.pointer_move(Side::Source, Coordinate::new(38.0, -100.0)));
        assert!(map.line(Side::Source).is_none(), "preview must not create a line");
        assert!(map.renderer().current_preview(Side::Source).is_some());

        let outcome = map.pointer_click(Side::Source, LA).unwrap();
        assert_eq!(outcome, ClickOutcome::Completed { start: NYC, end: LA });
        assert!(map.renderer().current_preview(Side::Source).is_none());
        assert!(!map.creation(Side::Source).is_active());

        assert_eq!(map.source().distance_m(), Some(distance_m(NYC, LA)));
        assert_eq!(map.target().distance_m(), map.source().distance_m());
    }

    #[test]
    fn cancel_mid_creation_leaves_nothing() {
        let mut map = session();
        map.activate_creation(Side::Source);
        map.pointer_click(Side::Source, NYC).unwrap();
        map.pointer_move(Side::Source, LA);

        assert!(map.deactivate_creation(Side::Source));
        assert!(map.line(Side::Source).is_none());
        assert!(map.line(Side::Target).is_none());
        assert!(map.renderer().current_preview(Side::Source).is_none());

        assert_eq!(map.pointer_click(Side::Source, LA).unwrap(), ClickOutcome::Ignored);
        assert!(!map.pointer_move(Side::Source, NYC));
    }

    #[test]
    fn target_side_creation_is_length_locked() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();

        map.activate_creation(Side::Target);
        map.pointer_click(Side::Target, LONDON).unwrap();
        map.pointer_click(Side::Target, Coordinate::new(51.5, 10.0)).unwrap();

        let target = map.line(Side::Target).unwrap();
        assert_eq!(target.start(), LONDON);
        assert_eq!(target.distance_m(), map.source().distance_m().unwrap());
    }

    #[test]
    fn clicks_on_inactive_side_are_ignored() {
        let mut map = session();
        map.activate_creation(Side::Source);
        assert_eq!(map.pointer_click(Side::Target, NYC).unwrap(), ClickOutcome::Ignored);
        assert!(map.creation(Side::Source).is_active());
    }
}

// ── Events & rendering ────────────────────────────────────────────────────────

#[cfg(test)]
mod events {
    use super::*;

    #[test]
    fn dispatch_drives_the_session() {
        let mut map = session();
        let script = [
            MapEvent::ActivateCreation(Side::Source),
            MapEvent::PointerClick { side: Side::Source, at: NYC },
            MapEvent::PointerMove { side: Side::Source, at: PARIS },
            MapEvent::PointerClick { side: Side::Source, at: LA },
            MapEvent::Rotate { delta_deg: 90.0 },
            MapEvent::RotateStep(RotationDirection::CounterClockwise),
            MapEvent::MoveEndpoint { side: Side::Source, endpoint: Endpoint::Start, to: LONDON },
            MapEvent::SetUnit(DistanceUnit::Imperial),
        ];
        for event in script {
            map.handle(event).unwrap();
        }

        let target = map.line(Side::Target).unwrap();
        assert_eq!(target.bearing_deg(), Some(85.0));
        assert_eq!(target.distance_m(), distance_m(LONDON, LA));
        assert!(target.label().ends_with(" mi"));

        map.handle(MapEvent::Clear(Side::Target)).unwrap();
        assert!(map.line(Side::Target).is_none());
        map.handle(MapEvent::ClearAll).unwrap();
        assert!(map.line(Side::Source).is_none());
    }

    #[test]
    fn refused_event_surfaces_error_and_changes_nothing() {
        let mut map = session();
        let err = map.handle(MapEvent::Rotate { delta_deg: 10.0 }).unwrap_err();
        assert_eq!(err, SyncError::Line(LineError::NoLine(Side::Target)));
        assert!(map.renderer().events.is_empty());
    }

    #[test]
    fn source_then_target_are_drawn_in_order() {
        let mut map = session();
        map.create_line(Side::Source, NYC, LA).unwrap();
        map.renderer_mut().clear();

        map.move_endpoint(Side::Source, Endpoint::End, TOKYO).unwrap();
        let sides: Vec<Side> = map
            .renderer()
            .events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Drawn(line) => Some(line.side()),
                _ => None,
            })
            .collect();
        assert_eq!(sides, vec![Side::Source, Side::Target]);
    }

    #[test]
    fn clear_is_reported_once() {
        let mut map = session();
        let id = map.create_line(Side::Source, NYC, LA).unwrap();
        map.clear(Side::Source);
        map.clear(Side::Source);

        let clears: Vec<_> = map
            .renderer()
            .events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Cleared { .. }))
            .collect();
        assert_eq!(clears, vec![&RenderEvent::Cleared { side: Side::Source, id }]);
        assert!(map.renderer().last_drawn(Side::Source).is_none());
        assert_eq!(map.renderer().draw_count(Side::Target), 1);
    }
}
