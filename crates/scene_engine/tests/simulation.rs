//! End-to-end simulation behavior
//!
//! Drives the engine through its public API only, the way a host would,
//! and checks the contractual properties of the loop: population bounds,
//! bullet motion, fire cadence, resize stability, and teardown.

use approx::assert_relative_eq;
use scene_engine::prelude::*;
use std::collections::HashMap;

const DT: f32 = 1.0 / 60.0;

fn seeded(config: SceneConfig, width: f32, height: f32) -> SceneEngine {
    SceneEngine::with_seed(config, width, height, 42)
}

#[test]
fn population_stays_bounded_and_particles_stay_alive() {
    let mut config = SceneConfig::default();
    config.limits.max_entities = 40;
    let mut engine = seeded(config, 800.0, 600.0);

    // A style with a ready sprite, one stuck pending, one failed: all three
    // draw paths get exercised through tick.
    let ready = engine
        .sprites_mut()
        .insert_ready(ImageData::solid_color(8, 8, [0, 240, 255, 255]));
    let pending = engine.sprites_mut().insert_pending();
    let failed = engine.sprites_mut().insert_pending();
    engine
        .sprites_mut()
        .fulfill(failed, Err(AssetError::LoadFailed("boom".into())));
    engine.register_style("React", Color::CYAN, Some(ready));
    engine.register_style("Docker", Color::rgb(0.14, 0.59, 0.93), Some(pending));
    engine.register_style("Git", Color::rgb(0.94, 0.31, 0.2), Some(failed));

    let mut canvas = NullCanvas::new(800.0, 600.0);
    for _ in 0..5_000 {
        engine.tick(DT, Some(&mut canvas));
        assert!(engine.entities().len() <= 40);
        for e in engine.entities() {
            if let EntityKind::Particle { life } = &e.kind {
                assert!(*life > 0.0, "expired particles must not survive a tick");
            }
        }
    }
}

#[test]
fn bullets_only_ascend_until_removed() {
    let mut config = SceneConfig::default();
    config.targets.spawn_rate = 0.0;
    config.firing.side_cannon_chance = 0.0;
    config.firing.cooldown = 0.1;
    // Retarget constantly so consecutive volleys leave distinct x positions.
    config.ship.retarget_rate = 50.0;
    let top_margin = config.firing.top_margin;
    let mut engine = seeded(config, 800.0, 600.0);

    let mut last_y: HashMap<u32, f32> = HashMap::new();
    for _ in 0..2_000 {
        engine.advance(DT);

        let mut seen: HashMap<u32, f32> = HashMap::new();
        for e in engine.entities() {
            assert!(e.is_bullet());
            // A bullet past the removal boundary must already be gone.
            assert!(e.position.y > -top_margin);
            seen.insert(e.position.x.to_bits(), e.position.y);
        }
        for (x, y) in &seen {
            if let Some(previous) = last_y.get(x) {
                assert!(y < previous, "bullet y must strictly decrease");
            }
        }
        last_y = seen;
    }
}

#[test]
fn fire_cadence_matches_cooldown() {
    let mut config = SceneConfig::default();
    config.targets.spawn_rate = 0.0;
    config.firing.side_cannon_chance = 0.0;
    // Tall surface: no bullet reaches the top during the run, so the live
    // count equals the number of volleys fired.
    let mut engine = seeded(config, 800.0, 20_000.0);

    for _ in 0..600 {
        engine.advance(DT);
    }

    let expected = (engine.clock() / 0.25).floor() as i64;
    let fired = engine.entities().len() as i64;
    assert!(
        (fired - expected).abs() <= 1,
        "fired {} centered bullets over {:.3}s, expected {} +/- 1",
        fired,
        engine.clock(),
        expected
    );
}

#[test]
fn fire_cadence_is_independent_of_tick_pattern() {
    let mut config = SceneConfig::default();
    config.targets.spawn_rate = 0.0;
    config.firing.side_cannon_chance = 0.0;
    let mut engine = seeded(config, 800.0, 20_000.0);

    // Jittery host: alternating short and long frames.
    for i in 0..1_200 {
        engine.advance(if i % 2 == 0 { 0.005 } else { 0.030 });
    }

    let expected = (engine.clock() / 0.25).floor() as i64;
    let fired = engine.entities().len() as i64;
    assert!((fired - expected).abs() <= 1);
}

#[test]
fn resize_reanchors_ship_and_preserves_entities() {
    let mut engine = seeded(SceneConfig::default(), 800.0, 600.0);
    for _ in 0..240 {
        engine.advance(DT);
    }
    assert!(!engine.entities().is_empty(), "scene should be populated");

    let before: Vec<Vec2> = engine.entities().iter().map(|e| e.position).collect();
    engine.resize(1024.0, 400.0);

    assert_relative_eq!(engine.ship_position().y, 400.0 - 80.0);
    let after: Vec<Vec2> = engine.entities().iter().map(|e| e.position).collect();
    assert_eq!(before, after, "resize must not move entities");
    for p in &after {
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    // The scene keeps running on the new bounds.
    for _ in 0..240 {
        engine.advance(DT);
        for e in engine.entities() {
            assert!(e.position.x.is_finite() && e.position.y.is_finite());
        }
    }
}

#[test]
fn tick_adopts_canvas_size_changes() {
    let mut engine = seeded(SceneConfig::default(), 800.0, 600.0);
    let mut canvas = NullCanvas::new(800.0, 600.0);
    engine.tick(DT, Some(&mut canvas));

    canvas.set_size(640.0, 480.0);
    engine.tick(DT, Some(&mut canvas));

    assert_eq!(engine.surface_size(), (640.0, 480.0));
    assert_relative_eq!(engine.ship_position().y, 480.0 - 80.0);
}

#[test]
fn unusable_surface_skips_the_frame() {
    let mut engine = seeded(SceneConfig::default(), 800.0, 600.0);

    engine.tick(DT, None);
    assert_eq!(engine.clock(), 0.0);

    let mut collapsed = NullCanvas::new(0.0, 0.0);
    engine.tick(DT, Some(&mut collapsed));
    assert_eq!(engine.clock(), 0.0);

    let mut canvas = NullCanvas::new(800.0, 600.0);
    engine.tick(DT, Some(&mut canvas));
    assert!(engine.clock() > 0.0);
}

#[test]
fn teardown_is_idempotent_and_final() {
    let mut engine = seeded(SceneConfig::default(), 800.0, 600.0);
    let mut canvas = NullCanvas::new(800.0, 600.0);
    for _ in 0..120 {
        engine.tick(DT, Some(&mut canvas));
    }

    engine.shutdown();
    assert!(!engine.is_alive());
    assert!(engine.entities().is_empty());
    let clock = engine.clock();

    // Second teardown and late callbacks are all safe no-ops.
    engine.shutdown();
    engine.tick(DT, Some(&mut canvas));
    engine.advance(DT);
    engine.resize(100.0, 100.0);

    assert_eq!(engine.clock(), clock);
    assert!(engine.entities().is_empty());
}

#[test]
fn same_seed_same_scene() {
    let mut a = seeded(SceneConfig::default(), 800.0, 600.0);
    let mut b = seeded(SceneConfig::default(), 800.0, 600.0);

    for _ in 0..600 {
        a.advance(DT);
        b.advance(DT);
    }

    assert_eq!(a.ship_position(), b.ship_position());
    assert_eq!(a.entities(), b.entities());
}
