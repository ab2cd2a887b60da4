//! Synthetic convolution reverb.
//!
//! The impulse response is decaying stereo noise with a boosted early
//! reflection window and a high-frequency rolloff toward the tail. It is
//! applied with uniformly partitioned FFT convolution: one block of latency,
//! cost independent of IR length per output sample apart from the spectral
//! multiply-accumulate.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::units::Rng;

pub const IR_SECONDS: f32 = 1.4;
const EARLY_SECONDS: f32 = 0.03;
const EARLY_BOOST: f32 = 0.6;
const DECAY_POWER: f32 = 2.2;
const AIR_ABSORPTION: f32 = 0.35;
const BLOCK: usize = 256;

/// One channel of the synthetic impulse response.
pub fn impulse_response(sample_rate: u32, seed: u64) -> Vec<f32> {
    let len = ((sample_rate as f32 * IR_SECONDS) as usize).max(1);
    let early = ((sample_rate as f32 * EARLY_SECONDS) as usize).max(1);
    let mut rng = Rng::new(seed);
    (0..len)
        .map(|i| {
            let norm = i as f32 / len as f32;
            let decay = (1.0 - norm).powf(DECAY_POWER);
            let air = 1.0 - norm * AIR_ABSORPTION;
            let boost = if i < early {
                1.0 + (1.0 - i as f32 / early as f32) * EARLY_BOOST
            } else {
                1.0
            };
            (rng.next_f32() * 2.0 - 1.0) * decay * air * boost
        })
        .collect()
}

/// Mono-in, stereo-out partitioned convolver.
pub struct Reverb {
    fft: Arc<dyn Fft<f32>>,
    ifft: Arc<dyn Fft<f32>>,
    /// IR partition spectra per output channel.
    partitions: [Vec<Vec<Complex<f32>>>; 2],
    /// Frequency-domain delay line of past input blocks.
    history: Vec<Vec<Complex<f32>>>,
    history_pos: usize,
    /// Previous block followed by the block being filled.
    window: Vec<f32>,
    fill: usize,
    output: [Vec<f32>; 2],
    acc: Vec<Complex<f32>>,
    scratch: Vec<Complex<f32>>,
}

impl Reverb {
    pub fn new(sample_rate: u32) -> Self {
        let left = impulse_response(sample_rate, 0x5eed_0001);
        let right = impulse_response(sample_rate, 0x5eed_0002);
        Self::with_impulses(&left, &right)
    }

    pub fn with_impulses(left: &[f32], right: &[f32]) -> Self {
        let size = BLOCK * 2;
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);
        let scratch_len = fft
            .get_inplace_scratch_len()
            .max(ifft.get_inplace_scratch_len());
        let mut scratch = vec![Complex::new(0.0, 0.0); scratch_len];

        let mut split = |ir: &[f32]| -> Vec<Vec<Complex<f32>>> {
            ir.chunks(BLOCK)
                .map(|chunk| {
                    let mut buf = vec![Complex::new(0.0, 0.0); size];
                    for (slot, &x) in buf.iter_mut().zip(chunk) {
                        slot.re = x;
                    }
                    fft.process_with_scratch(&mut buf, &mut scratch);
                    buf
                })
                .collect()
        };
        let partitions = [split(left), split(right)];
        let count = partitions[0].len().max(partitions[1].len()).max(1);

        Self {
            fft: Arc::clone(&fft),
            ifft,
            partitions,
            history: vec![vec![Complex::new(0.0, 0.0); size]; count],
            history_pos: 0,
            window: vec![0.0; size],
            fill: 0,
            output: [vec![0.0; BLOCK], vec![0.0; BLOCK]],
            acc: vec![Complex::new(0.0, 0.0); size],
            scratch,
        }
    }

    /// Latency in frames.
    pub fn latency(&self) -> usize {
        BLOCK
    }

    /// Push one input sample, get one stereo wet sample.
    pub fn process(&mut self, input: f32) -> (f32, f32) {
        let out = (self.output[0][self.fill], self.output[1][self.fill]);
        self.window[BLOCK + self.fill] = input;
        self.fill += 1;
        if self.fill == BLOCK {
            self.fill = 0;
            self.process_block();
        }
        out
    }

    fn process_block(&mut self) {
        let size = BLOCK * 2;
        let count = self.history.len();

        let slot = &mut self.history[self.history_pos];
        for (dst, &x) in slot.iter_mut().zip(&self.window) {
            *dst = Complex::new(x, 0.0);
        }
        self.fft.process_with_scratch(slot, &mut self.scratch);

        let scale = 1.0 / size as f32;
        for ch in 0..2 {
            self.acc.iter_mut().for_each(|c| *c = Complex::new(0.0, 0.0));
            for (k, part) in self.partitions[ch].iter().enumerate() {
                let idx = (self.history_pos + count - k % count) % count;
                for ((a, &x), &h) in self.acc.iter_mut().zip(&self.history[idx]).zip(part) {
                    *a += x * h;
                }
            }
            self.ifft.process_with_scratch(&mut self.acc, &mut self.scratch);
            for (dst, c) in self.output[ch].iter_mut().zip(&self.acc[BLOCK..]) {
                *dst = c.re * scale;
            }
        }

        self.window.copy_within(BLOCK.., 0);
        self.history_pos = (self.history_pos + 1) % count;
    }
}
