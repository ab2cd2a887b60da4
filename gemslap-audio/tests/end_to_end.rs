mod common;

use common::{expected_kinds, Sim};
use gemslap_audio::engine::backend::TestOp;
use gemslap_audio::scheduler::StepScheduler;
use gemslap_types::{Style, STEPS_PER_LOOP};

/// One full loop: every step fires once, in order, and each step's units
/// reach the backend in firing order at the step's swung time.
#[test]
fn test_full_loop_fires_every_unit_in_order() {
    let cases = [
        (0u32, 130.0),
        (3, Style::wrapping(3).tempo()),
        (9, Style::wrapping(9).tempo()),
    ];
    for (style, tempo) in cases {
        let mut sim = Sim::unbounded();
        sim.engine.set_style(style);
        sim.engine.start_beat(tempo, |_| {});

        let loop_ms = StepScheduler::step_duration_for(tempo) * STEPS_PER_LOOP as f64 * 1000.0;
        sim.advance_ms(loop_ms.ceil() as u32);

        let steps = sim.fired_steps();
        assert!(steps.len() >= STEPS_PER_LOOP);
        for (i, &(step, loop_count, _)) in steps[..STEPS_PER_LOOP].iter().enumerate() {
            assert_eq!(step, i, "style {}", style);
            assert_eq!(loop_count, 0, "style {}", style);
        }

        let events: Vec<_> = sim
            .backend
            .operations()
            .into_iter()
            .filter_map(|op| match op {
                TestOp::Scheduled { event, .. } => Some(event),
                _ => None,
            })
            .collect();

        let mut cursor = 0;
        for &(step, _, time) in &steps[..STEPS_PER_LOOP] {
            for kind in expected_kinds(style as usize, step) {
                let event = &events[cursor];
                assert_eq!(event.kind, kind, "style {} step {}", style, step);
                assert!((event.start - time).abs() < 1e-9, "style {} step {}", style, step);
                cursor += 1;
            }
        }
    }
}

#[test]
fn test_music_off_keeps_time_but_stays_silent() {
    let mut sim = Sim::new();
    sim.engine.set_music_enabled(false);
    sim.engine.start_beat(130.0, |_| {});
    sim.advance_ms(1_500);

    assert!(sim.fired_steps().len() > 8);
    assert!(sim.backend.scheduled().is_empty());

    sim.engine.play_shockwave(1.0);
    sim.engine.play_count_click(true);
    assert!(sim.backend.scheduled().is_empty());

    // game feedback is not music
    sim.engine.play_crystal_shatter(0, 3);
    sim.engine.play_tone(5, 0.2, 0.1);
    assert_eq!(sim.backend.scheduled().len(), 2);

    sim.engine.set_music_enabled(true);
    sim.advance_ms(500);
    assert!(sim.backend.scheduled().len() > 2);
}

#[test]
fn test_jingles_spread_over_timers() {
    let mut sim = Sim::new();
    sim.engine.play_success_jingle();
    assert_eq!(sim.backend.scheduled().len(), 1);
    sim.advance_ms(79);
    assert_eq!(sim.backend.scheduled().len(), 1);
    sim.advance_ms(1);
    assert_eq!(sim.backend.scheduled().len(), 2);
    sim.advance_ms(200);
    assert_eq!(sim.backend.scheduled().len(), 4);

    sim.backend.clear();
    sim.engine.play_failure_jingle();
    // first note and the thud land immediately
    assert_eq!(sim.backend.scheduled().len(), 2);
    sim.advance_ms(130);
    assert_eq!(sim.backend.scheduled().len(), 3);
}
