mod common;

use common::Sim;
use gemslap_audio::engine::backend::TestOp;
use gemslap_audio::EngineConfig;
use gemslap_types::{AudioFeedback, UnitKind};

#[test]
fn test_ceiling_drops_the_overflow_unit() {
    let mut sim = Sim::new();
    for _ in 0..151 {
        sim.engine.play_tone(0, 0.3, 0.1);
    }
    sim.pump();

    assert_eq!(sim.engine.active_units(), 150);
    assert_eq!(sim.engine.dropped_units(), 1);
    assert_eq!(sim.backend.scheduled().len(), 150);
    assert_eq!(
        sim.count_feedback(|m| matches!(m, AudioFeedback::UnitDropped(UnitKind::Tone))),
        1
    );
}

#[test]
fn test_exempt_units_play_when_budget_is_full() {
    let mut sim = Sim::with_config(EngineConfig {
        unit_ceiling: 4,
        ..EngineConfig::default()
    });
    sim.engine.start_beat(120.0, |_| {});
    for _ in 0..8 {
        sim.engine.play_tone(3, 0.3, 0.1);
    }
    assert_eq!(sim.engine.active_units(), 4);

    sim.engine.play_crystal_shatter(0, 5);
    sim.engine.play_crystal_shatter(4, 5);
    sim.engine.play_level_clear_fanfare();

    let kinds = sim.backend.scheduled_kinds();
    assert_eq!(
        kinds.iter().filter(|k| **k == UnitKind::CrystalShatter).count(),
        2
    );
    assert_eq!(
        kinds.iter().filter(|k| **k == UnitKind::LevelClearFanfare).count(),
        1
    );
    // exempt units never hold a slot
    assert_eq!(sim.engine.active_units(), 4);
}

#[test]
fn test_cleanup_returns_slots() {
    let mut sim = Sim::new();
    for _ in 0..150 {
        sim.engine.play_tone(0, 0.3, 0.1);
    }
    assert_eq!(sim.engine.active_units(), 150);
    sim.engine.play_tone(0, 0.3, 0.1);
    assert_eq!(sim.engine.dropped_units(), 1);

    // 0.3 s note + 0.15 s release tail + 150 ms margin
    sim.advance_ms(599);
    assert_eq!(sim.engine.active_units(), 150);
    sim.advance_ms(2);
    assert_eq!(sim.engine.active_units(), 0);
    assert_eq!(
        sim.backend
            .count(|op| matches!(op, TestOp::Released(_))),
        150
    );

    sim.engine.play_tone(0, 0.3, 0.1);
    assert_eq!(sim.engine.active_units(), 1);
}

#[test]
fn test_shatter_cleanup_waits_for_floor() {
    let mut sim = Sim::new();
    sim.engine.play_crystal_shatter(1, 4);
    let event = sim.backend.scheduled()[0].clone();
    let after_ms = (f64::from(event.lifetime) * 1000.0 + 150.0).max(700.0);

    sim.advance_ms(690);
    assert!(sim.backend.released().is_empty());
    sim.advance_ms((after_ms - 690.0).ceil() as u32 + 1);
    assert_eq!(sim.backend.released().len(), 1);
}

#[test]
fn test_step_units_release_after_they_sound() {
    let mut sim = Sim::new();
    sim.engine.start_beat(120.0, |_| {});
    sim.advance_ms(2_000);
    let active_running = sim.engine.active_units();
    assert!(active_running > 0);

    sim.engine.stop_beat();
    sim.advance_ms(10_000);
    assert_eq!(sim.engine.active_units(), 0);
    assert_eq!(
        sim.backend.released().len(),
        sim.backend.scheduled().len()
    );
    assert_eq!(sim.engine.next_deadline_ms(), None);
}

#[test]
fn test_fanfare_plays_once_per_beat() {
    let mut sim = Sim::new();
    sim.engine.start_beat(120.0, |_| {});
    sim.engine.play_level_clear_fanfare();
    sim.engine.play_level_clear_fanfare();
    let fanfares = |sim: &Sim| {
        sim.backend
            .scheduled_kinds()
            .into_iter()
            .filter(|k| *k == UnitKind::LevelClearFanfare)
            .count()
    };
    assert_eq!(fanfares(&sim), 1);

    sim.engine.start_beat(120.0, |_| {});
    sim.engine.play_level_clear_fanfare();
    assert_eq!(fanfares(&sim), 2);
}

#[test]
fn test_nothing_schedules_while_suspended() {
    let mut sim = Sim::new();
    sim.backend.set_state(gemslap_types::ContextState::Suspended);
    sim.engine.play_tone(0, 0.3, 0.1);
    sim.engine.play_crystal_shatter(0, 3);
    sim.engine.play_success_jingle();
    sim.advance_ms(500);

    assert!(sim.backend.scheduled().is_empty());
    assert_eq!(sim.engine.active_units(), 0);
    assert_eq!(sim.engine.dropped_units(), 0);
}
