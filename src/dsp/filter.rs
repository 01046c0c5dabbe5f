use std::f32::consts::PI;

/*
Resonant low-pass filter.

Topology: trapezoidal-integration state-variable filter (two integrator
memories), low-pass tap only. The coefficient `g` prewarps the cutoff with
tan() so the analog-style response survives near Nyquist, and the damping

    k = 2.0 - 1.9 * resonance

maps resonance 0..1 onto a damping range that boosts the cutoff region
without ever reaching self-oscillation (k stays > 0).

The cutoff is expected to change every sample - the engine recomputes it
from envelope and LFO modulation before each `process()` call - so `g` is
derived fresh per sample rather than cached.
*/

pub const CUTOFF_MIN_HZ: f32 = 16.0;
pub const CUTOFF_MAX_HZ: f32 = 20_000.0;

pub struct ResonantLowPass {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    cutoff_hz: f32,
    resonance: f32,
    sample_rate: f32,
}

impl ResonantLowPass {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz: CUTOFF_MAX_HZ,
            resonance: 0.0,
            sample_rate,
        }
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    /// Set the cutoff frequency, clamped to [16, 20000] Hz.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.cutoff_hz = if cutoff_hz.is_finite() {
            cutoff_hz.clamp(CUTOFF_MIN_HZ, CUTOFF_MAX_HZ)
        } else {
            CUTOFF_MAX_HZ
        };
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    /// Set the resonance amount, clamped to [0, 1].
    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance.clamp(0.0, 1.0);
    }

    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    /// Filter one sample.
    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        // Keep the prewarp argument below pi/2 even when the host runs at a
        // rate where 20kHz sits above Nyquist.
        let fc = self.cutoff_hz.min(0.49 * self.sample_rate);
        let g = (PI * fc / self.sample_rate).tan();
        let k = 2.0 - 1.9 * self.resonance;

        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        v2
    }

    /// Clear the integrator history.
    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }
}
