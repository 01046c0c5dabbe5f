#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Band-naive phase-accumulator oscillator.

A single `phase` value runs 0.0 → 1.0 once per waveform cycle and wraps.
Each sample the phase advances by the normalized frequency:

    phase += freq_hz / sample_rate        (cycles per sample)

The waveform is computed directly from the phase, so retargeting the
frequency is just writing one field - no table swaps, no discontinuity in
phase. "Band-naive" means the saw/square shapes are the ideal geometric
waveforms; they alias above a few kHz, which is accepted (anti-aliasing is
out of scope for this engine).

The oscillator stores frequency in cycles/sample rather than Hz so the
render loop can retarget it every sample without re-dividing by the sample
rate. Callers convert once: `set_frequency(freq_hz / sample_rate)`.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscWaveform {
    Saw,
    Sine,
    Square,
    Triangle,
}

pub struct Oscillator {
    waveform: OscWaveform,
    phase: f32,     // 0.0 .. 1.0, wraps
    freq_norm: f32, // cycles per sample
}

impl Oscillator {
    pub fn new(waveform: OscWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
            freq_norm: 0.0,
        }
    }

    pub fn saw() -> Self {
        Self::new(OscWaveform::Saw)
    }

    pub fn sine() -> Self {
        Self::new(OscWaveform::Sine)
    }

    pub fn square() -> Self {
        Self::new(OscWaveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(OscWaveform::Triangle)
    }

    /// Set the target frequency in cycles per sample (`freq_hz / sample_rate`).
    /// Negative or non-finite inputs are clamped to silence rather than
    /// running the phase backwards.
    pub fn set_frequency(&mut self, freq_norm: f32) {
        self.freq_norm = if freq_norm.is_finite() {
            freq_norm.clamp(0.0, 0.5)
        } else {
            0.0
        };
    }

    pub fn frequency(&self) -> f32 {
        self.freq_norm
    }

    pub fn set_waveform(&mut self, waveform: OscWaveform) {
        self.waveform = waveform;
    }

    /// Generate one sample in [-1.0, 1.0] and advance the phase.
    #[inline]
    pub fn process(&mut self) -> f32 {
        let out = match self.waveform {
            OscWaveform::Saw => 2.0 * self.phase - 1.0,
            OscWaveform::Sine => (core::f32::consts::TAU * self.phase).sin(),
            OscWaveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            OscWaveform::Triangle => {
                if self.phase < 0.5 {
                    4.0 * self.phase - 1.0
                } else {
                    3.0 - 4.0 * self.phase
                }
            }
        };

        self.phase += self.freq_norm;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        out
    }

    /// Reset the phase accumulator. Frequency is left untouched.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
