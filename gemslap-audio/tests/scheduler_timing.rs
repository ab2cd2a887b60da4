mod common;

use common::Sim;
use gemslap_audio::scheduler::StepScheduler;
use gemslap_types::Style;

#[test]
fn test_step_duration_at_120_bpm() {
    assert!((StepScheduler::step_duration_for(120.0) - 0.125).abs() < 1e-12);

    let mut sim = Sim::new();
    sim.engine.set_style(1);
    sim.engine.start_beat(120.0, |_| {});
    sim.advance_until_steps(8, 5_000);

    let steps = sim.fired_steps();
    assert!((steps[0].2 - 0.01).abs() < 1e-9);
    for pair in steps.windows(2) {
        assert!((pair[1].2 - pair[0].2 - 0.125).abs() < 1e-9);
    }
}

#[test]
fn test_loop_count_increments_once_per_32_steps() {
    let mut sim = Sim::new();
    sim.engine.set_style(1);
    sim.engine.start_beat(120.0, |_| {});
    sim.advance_until_steps(33, 10_000);

    let steps = sim.fired_steps();
    for (i, &(step, loop_count, _)) in steps[..32].iter().enumerate() {
        assert_eq!(step, i);
        assert_eq!(loop_count, 0);
    }
    assert_eq!(steps[32].0, 0);
    assert_eq!(steps[32].1, 1);
    assert_eq!(sim.engine.loop_count(), 1);
}

#[test]
fn test_audio_times_strictly_increase_across_ticks() {
    let mut sim = Sim::new();
    sim.engine.start_beat(150.0, |_| {});
    sim.advance_ms(3_000);
    let steps = sim.fired_steps();
    assert!(steps.len() > 20);
    for pair in steps.windows(2) {
        assert!(pair[1].2 > pair[0].2);
    }
}

#[test]
fn test_swing_delays_odd_steps_only() {
    for style in Style::ALL {
        let mut sim = Sim::new();
        sim.engine.set_style(style.id() as u32);
        sim.engine.start_beat(120.0, |_| {});
        sim.advance_until_steps(4, 5_000);

        let steps = sim.fired_steps();
        let grid = |i: usize| 0.01 + i as f64 * 0.125;
        assert!((steps[0].2 - grid(0)).abs() < 1e-9, "style {}", style.id());
        assert!((steps[2].2 - grid(2)).abs() < 1e-9, "style {}", style.id());

        let expected = match style.id() {
            0 => grid(1) + 0.125 * 0.12,
            2 => grid(1) + 0.125 * 0.10,
            _ => grid(1),
        };
        assert!((steps[1].2 - expected).abs() < 1e-9, "style {}", style.id());
    }
}

#[test]
fn test_style_change_applies_to_next_step() {
    let mut sim = Sim::new();
    sim.engine.set_style(1);
    sim.engine.start_beat(120.0, |_| {});
    sim.advance_until_steps(2, 5_000);
    sim.engine.set_style(2);
    sim.advance_until_steps(4, 5_000);

    let styles: Vec<usize> = sim
        .feedback
        .iter()
        .filter_map(|m| match m {
            gemslap_types::AudioFeedback::StepFired { style, .. } => Some(style.id()),
            _ => None,
        })
        .collect();
    assert_eq!(&styles[..2], &[1, 1]);
    assert_eq!(styles[2], 2);
    assert!(sim.engine.is_ticking());
}

#[test]
fn test_restart_while_running_resets_cursor() {
    let mut sim = Sim::new();
    sim.engine.start_beat(120.0, |_| {});
    sim.advance_until_steps(10, 5_000);
    sim.engine.start_beat(120.0, |_| {});
    sim.pump();

    let steps = sim.fired_steps();
    let last = steps[steps.len() - 1];
    assert_eq!(last.0, 0);
    assert_eq!(last.1, 0);
    assert!(sim.engine.is_ticking());
}
