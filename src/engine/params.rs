#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::lfo::LfoWaveform;

/// Full parameter snapshot for the voice engine.
///
/// This is the engine-side mirror of the host's automatable parameters.
/// Values are stored already clamped to their documented ranges, so the
/// render path can consume them without re-validating. Defaults are the
/// plugin's "Default" program: instant envelopes, filter wide open, LFO
/// routed nowhere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SynthParams {
    /// Linear output gain, 0..=1.
    pub volume: f32,

    // Amplitude envelope, seconds / level
    pub amp_attack: f32,
    pub amp_decay: f32,
    pub amp_sustain: f32,
    pub amp_release: f32,

    // Filter envelope, seconds / level
    pub filter_attack: f32,
    pub filter_decay: f32,
    pub filter_sustain: f32,
    pub filter_release: f32,

    /// Static filter cutoff in Hz, 16..=20000.
    pub cutoff_hz: f32,
    /// Filter resonance, 0..=1.
    pub resonance: f32,
    /// Filter-envelope-to-cutoff depth in cents, -12000..=12000.
    pub filter_env_amount: f32,

    pub lfo_waveform: LfoWaveform,
    /// LFO rate in Hz, 0..=30.
    pub lfo_rate_hz: f32,
    /// LFO-to-cutoff depth in cents, -12000..=12000.
    pub lfo_filter_amount: f32,
    /// LFO-to-oscillator-pitch depth in cents, -12000..=12000.
    pub lfo_osc_amount: f32,
}

const MAX_STAGE_SECONDS: f32 = 10.0;
const MAX_MOD_CENTS: f32 = 12_000.0;
const MAX_LFO_RATE_HZ: f32 = 30.0;

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            volume: 0.8,
            amp_attack: 0.001,
            amp_decay: 0.0,
            amp_sustain: 1.0,
            amp_release: 0.001,
            filter_attack: 0.001,
            filter_decay: 0.0,
            filter_sustain: 1.0,
            filter_release: 0.001,
            cutoff_hz: 20_000.0,
            resonance: 0.0,
            filter_env_amount: 0.0,
            lfo_waveform: LfoWaveform::Triangle,
            lfo_rate_hz: 8.0,
            lfo_filter_amount: 0.0,
            lfo_osc_amount: 0.0,
        }
    }
}

/// A single parameter change, as sent from the control thread.
#[derive(Debug, Clone, Copy)]
pub enum ParamUpdate {
    Volume(f32),
    AmpAttack(f32),
    AmpDecay(f32),
    AmpSustain(f32),
    AmpRelease(f32),
    FilterAttack(f32),
    FilterDecay(f32),
    FilterSustain(f32),
    FilterRelease(f32),
    Cutoff(f32),
    Resonance(f32),
    FilterEnvAmount(f32),
    LfoWaveform(LfoWaveform),
    LfoRate(f32),
    LfoFilterAmount(f32),
    LfoOscAmount(f32),
}

impl SynthParams {
    /// Apply one update, clamping the value into its documented range.
    pub fn apply(&mut self, update: ParamUpdate) {
        use ParamUpdate::*;

        let seconds = |v: f32| v.clamp(0.0, MAX_STAGE_SECONDS);
        let level = |v: f32| v.clamp(0.0, 1.0);
        let cents = |v: f32| v.clamp(-MAX_MOD_CENTS, MAX_MOD_CENTS);

        match update {
            Volume(v) => self.volume = level(v),
            AmpAttack(v) => self.amp_attack = seconds(v),
            AmpDecay(v) => self.amp_decay = seconds(v),
            AmpSustain(v) => self.amp_sustain = level(v),
            AmpRelease(v) => self.amp_release = seconds(v),
            FilterAttack(v) => self.filter_attack = seconds(v),
            FilterDecay(v) => self.filter_decay = seconds(v),
            FilterSustain(v) => self.filter_sustain = level(v),
            FilterRelease(v) => self.filter_release = seconds(v),
            Cutoff(v) => {
                self.cutoff_hz = v.clamp(
                    crate::dsp::filter::CUTOFF_MIN_HZ,
                    crate::dsp::filter::CUTOFF_MAX_HZ,
                )
            }
            Resonance(v) => self.resonance = level(v),
            FilterEnvAmount(v) => self.filter_env_amount = cents(v),
            LfoWaveform(w) => self.lfo_waveform = w,
            LfoRate(v) => self.lfo_rate_hz = v.clamp(0.0, MAX_LFO_RATE_HZ),
            LfoFilterAmount(v) => self.lfo_filter_amount = cents(v),
            LfoOscAmount(v) => self.lfo_osc_amount = cents(v),
        }
    }
}

/// Capacity of the control-to-audio parameter queue. Updates beyond this
/// within a single block are dropped by the producer.
#[cfg(feature = "rtrb")]
pub const PARAM_QUEUE_SIZE: usize = 256;

/// Control-thread side of the parameter handoff.
///
/// Pushes updates into a wait-free single-producer single-consumer ring;
/// the engine drains the ring once at the top of each rendered block, so
/// the audio thread never reads state the control thread is writing.
#[cfg(feature = "rtrb")]
pub struct ParamsHandle {
    tx: rtrb::Producer<ParamUpdate>,
}

#[cfg(feature = "rtrb")]
impl ParamsHandle {
    pub(crate) fn new(tx: rtrb::Producer<ParamUpdate>) -> Self {
        Self { tx }
    }

    /// Queue an update. Returns false if the queue is full (the update is
    /// dropped, never blocked on).
    pub fn set(&mut self, update: ParamUpdate) -> bool {
        self.tx.push(update).is_ok()
    }
}
