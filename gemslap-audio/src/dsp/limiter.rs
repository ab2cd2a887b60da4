//! Peak limiter guarding the SFX bus.

const THRESHOLD_DB: f32 = -3.0;
const RATIO: f32 = 20.0;
const ATTACK_SECS: f32 = 0.002;
const RELEASE_SECS: f32 = 0.18;

fn db_to_lin(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}

fn lin_to_db(lin: f32) -> f32 {
    20.0 * lin.max(1e-9).log10()
}

/// Stereo-linked compressor with a hard knee and a fast peak envelope.
#[derive(Debug, Clone)]
pub struct Limiter {
    threshold: f32,
    attack: f32,
    release: f32,
    envelope: f32,
}

impl Limiter {
    pub fn new(sample_rate: u32) -> Self {
        let sr = sample_rate.max(1) as f32;
        Self {
            threshold: db_to_lin(THRESHOLD_DB),
            attack: (-1.0 / (ATTACK_SECS * sr)).exp(),
            release: (-1.0 / (RELEASE_SECS * sr)).exp(),
            envelope: 0.0,
        }
    }

    /// Gain to apply for a frame whose peak is `level`.
    fn gain(&mut self, level: f32) -> f32 {
        let coeff = if level > self.envelope {
            self.attack
        } else {
            self.release
        };
        self.envelope = coeff * self.envelope + (1.0 - coeff) * level;
        if self.envelope <= self.threshold {
            return 1.0;
        }
        let over = lin_to_db(self.envelope) - THRESHOLD_DB;
        let reduction = over - over / RATIO;
        db_to_lin(-reduction)
    }

    #[inline]
    pub fn process(&mut self, left: f32, right: f32) -> (f32, f32) {
        let g = self.gain(left.abs().max(right.abs()));
        (left * g, right * g)
    }
}
