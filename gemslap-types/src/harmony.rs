//! Pentatonic harmony: every pitch the game hands to the audio core is
//! snapped onto C minor pentatonic (C Eb F G Bb) so arbitrary offsets stay
//! consonant with the backing track.

/// Scale degrees within one octave, ascending.
pub const PENTATONIC: [i32; 5] = [0, 3, 5, 7, 10];

/// Two octaves plus the top root, used for ordinal pitch progressions
/// (crystal breaks, the fanfare shimmer cloud).
pub const PENTATONIC_LADDER: [i32; 11] = [0, 3, 5, 7, 10, 12, 15, 17, 19, 22, 24];

/// Snap a signed semitone offset to the nearest pentatonic pitch.
///
/// Distance is measured around the octave, so a degree just below the next
/// root (e.g. 11) may resolve upward into the following octave. Ties go to
/// the first scale degree in ascending order. The octave is taken with floor
/// division, which keeps negative inputs in their own octave instead of
/// jumping a full octave down.
pub fn quantize(offset: i32) -> i32 {
    let octave = offset.div_euclid(12);
    let degree = offset.rem_euclid(12);

    let mut best = 0;
    let mut best_dist = i32::MAX;
    for &p in &PENTATONIC {
        // Candidate in this octave, and the same degree reached by wrapping
        // past the octave boundary in either direction.
        for candidate in [p, p + 12, p - 12] {
            let dist = (degree - candidate).abs();
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
    }

    let snapped = i64::from(octave) * 12 + i64::from(best);
    snapped.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Frequency of `semitones` above (or below) `base_hz` in 12-TET.
pub fn semitone_freq(base_hz: f32, semitones: f32) -> f32 {
    base_hz * 2.0_f32.powf(semitones / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_scale(n: i32) -> bool {
        PENTATONIC.contains(&n.rem_euclid(12))
    }

    #[test]
    fn scale_members_are_fixed_points() {
        for octave in -4..=4 {
            for &p in &PENTATONIC {
                let n = octave * 12 + p;
                assert_eq!(quantize(n), n);
            }
        }
    }

    #[test]
    fn snaps_within_half_the_largest_gap() {
        for n in -48..=48 {
            let q = quantize(n);
            assert!(in_scale(q), "{} -> {} not in scale", n, q);
            assert!((q - n).abs() <= 6, "{} -> {} jumped too far", n, q);
        }
    }

    #[test]
    fn ties_favor_lower_listed_degree() {
        assert_eq!(quantize(1), 0);
        // 4 sits between 3 and 5; 3 is listed first
        assert_eq!(quantize(4), 3);
        // 6 sits between 5 and 7; 5 is listed first
        assert_eq!(quantize(6), 5);
        // 11 is one from 10 and one from the next root; root is listed first
        assert_eq!(quantize(11), 12);
    }

    #[test]
    fn negative_offsets_stay_near_zero() {
        assert_eq!(quantize(-1), 0);
        assert_eq!(quantize(-2), -2);
        assert_eq!(quantize(-3), -2);
        assert_eq!(quantize(-5), -5);
        assert_eq!(quantize(-6), -7);
        assert_eq!(quantize(-12), -12);
    }

    #[test]
    fn is_total_over_extremes() {
        assert!(in_scale(quantize(i32::MAX / 2)));
        assert!(in_scale(quantize(i32::MIN / 2)));
        // Clamped at the edges rather than overflowing.
        let _ = quantize(i32::MAX);
        let _ = quantize(i32::MIN);
    }

    #[test]
    fn semitone_freq_octaves() {
        assert!((semitone_freq(261.63, 12.0) - 523.26).abs() < 0.01);
        assert!((semitone_freq(261.63, -12.0) - 130.815).abs() < 0.01);
    }
}
