//! Beat-phase brightness: how close "now" is to a target's beat slot.

use gemslap_types::BeatAnchor;

const FLOOR: f64 = 0.12;
const NO_TEMPO_VALUE: f64 = 0.15;
const NO_TEMPO_DISTANCE_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness {
    /// Pulse intensity in [0.12, 1.0].
    pub value: f64,
    /// Absolute distance to the nearest occurrence of the target slot, ms.
    pub distance_ms: f64,
}

/// Gaussian proximity of `now_ms` to the quarter-measure slot `phrase_beat`
/// (1-based; 0 reads as 1). Without an established measure the result is a
/// fixed dim value.
pub fn brightness(anchor: Option<&BeatAnchor>, now_ms: f64, phrase_beat: u32) -> Brightness {
    let anchor = match anchor {
        Some(a) if a.measure_ms > 0.0 && a.measure_ms.is_finite() => a,
        _ => {
            return Brightness {
                value: NO_TEMPO_VALUE,
                distance_ms: NO_TEMPO_DISTANCE_MS,
            }
        }
    };

    let measure = anchor.measure_ms;
    let beat_ms = anchor.beat_ms();
    let slot = f64::from(phrase_beat.max(1) - 1);
    let target = slot * beat_ms;
    let elapsed = (now_ms - anchor.beat_start_ms).rem_euclid(measure);

    let mut dist = elapsed - target;
    if dist > measure / 2.0 {
        dist -= measure;
    }
    if dist < -measure / 2.0 {
        dist += measure;
    }

    let dist = dist.abs();
    let sigma = beat_ms * 0.5;
    let gaussian = (-(dist * dist) / (2.0 * sigma * sigma)).exp();
    Brightness {
        value: FLOOR + (1.0 - FLOOR) * gaussian,
        distance_ms: dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> BeatAnchor {
        BeatAnchor {
            beat_start_ms: 0.0,
            measure_ms: 2000.0,
        }
    }

    #[test]
    fn peaks_on_the_slot() {
        let b = brightness(Some(&anchor()), 0.0, 1);
        assert!((b.value - 1.0).abs() < 1e-9);
        assert_eq!(b.distance_ms, 0.0);
    }

    #[test]
    fn half_a_measure_away_is_the_floor() {
        let b = brightness(Some(&anchor()), 1000.0, 1);
        assert!((b.value - 0.12).abs() < 1e-3, "{}", b.value);
        assert!((b.distance_ms - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn later_slots_and_wrapping() {
        // slot 3 sits at 1000 ms into the measure
        let b = brightness(Some(&anchor()), 3000.0, 3);
        assert!((b.value - 1.0).abs() < 1e-9);
        // 100 ms before the downbeat of the next measure, seen from slot 1
        let b = brightness(Some(&anchor()), 1900.0, 1);
        assert!((b.distance_ms - 100.0).abs() < 1e-9);
        // before the anchor still wraps into the measure
        let b = brightness(Some(&anchor()), -100.0, 1);
        assert!((b.distance_ms - 100.0).abs() < 1e-9);
    }

    #[test]
    fn stays_in_range() {
        for t in (0..4000).step_by(37) {
            for beat in 0..6 {
                let b = brightness(Some(&anchor()), t as f64, beat);
                assert!(b.value >= 0.12 && b.value <= 1.0);
                assert!(b.distance_ms <= 1000.0);
            }
        }
    }

    #[test]
    fn without_measure_returns_dim_default() {
        let b = brightness(None, 123.0, 2);
        assert_eq!(b.value, 0.15);
        assert_eq!(b.distance_ms, 500.0);
        let zero = BeatAnchor {
            beat_start_ms: 0.0,
            measure_ms: 0.0,
        };
        assert_eq!(brightness(Some(&zero), 0.0, 1).value, 0.15);
    }
}
