#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Free-running low-frequency oscillator.

Same phase-accumulator math as the audio oscillator, but at control-rate
frequencies (0.01 Hz - 30 Hz) and never tied to note gating: the phase
keeps running across note boundaries, so each note catches the modulation
wherever it happens to be. Reset only happens on engine activation.

Output ranges:

  triangle / sine / saw / square   bipolar,  [-1.0, +1.0]
  exponent                         unipolar, (0.0, 1.0] decay ramp

A rate of exactly 0 Hz is legal and degenerates to a constant output (the
value at the frozen phase), which matters for hosts that automate the rate
down to its floor.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfoWaveform {
    Triangle,
    Sine,
    Saw,
    Square,
    Exponent,
}

/// Steepness of the exponential decay shape. e^-5 ≈ 0.0067, close enough
/// to zero at the end of the cycle that the wrap is not an audible step.
const EXP_SHAPE: f32 = 5.0;

pub struct Lfo {
    waveform: LfoWaveform,
    rate_hz: f32,
    sample_rate: f32,
    phase: f32, // 0.0 .. 1.0, wraps
}

impl Lfo {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            waveform: LfoWaveform::Triangle,
            rate_hz: 8.0,
            sample_rate,
            phase: 0.0,
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate_hz = rate_hz.max(0.0);
    }

    pub fn set_waveform(&mut self, waveform: LfoWaveform) {
        self.waveform = waveform;
    }

    pub fn waveform(&self) -> LfoWaveform {
        self.waveform
    }

    /// Current waveform value, then advance the phase by one sample.
    #[inline]
    pub fn tick(&mut self) -> f32 {
        let p = self.phase;
        let out = match self.waveform {
            LfoWaveform::Triangle => {
                if p < 0.5 {
                    4.0 * p - 1.0
                } else {
                    3.0 - 4.0 * p
                }
            }
            LfoWaveform::Sine => (core::f32::consts::TAU * p).sin(),
            LfoWaveform::Saw => 2.0 * p - 1.0,
            LfoWaveform::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            LfoWaveform::Exponent => (-EXP_SHAPE * p).exp(),
        };

        self.phase += self.rate_hz / self.sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        out
    }

    /// Reset the phase to the start of the cycle.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
