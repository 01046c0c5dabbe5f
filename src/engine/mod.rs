//! The monophonic voice engine.
//!
//! [`MonoVoice`] owns the whole signal chain as a plain struct of
//! components ticked in a fixed order each sample - the topology never
//! changes at runtime, so there is no dynamic graph. All state is owned by
//! the engine instance; the host drives it through three calls:
//! [`MonoVoice::set_sample_rate`], [`MonoVoice::activate`] and
//! [`MonoVoice::render`]. Nothing on the render path allocates, locks or
//! blocks.

/// Monophonic last-note-priority tracking.
pub mod note_stack;
/// Parameter snapshot and control-thread handoff.
pub mod params;
/// Sample-accurate event-to-block alignment.
pub mod scheduler;

pub use note_stack::{NoteChange, NoteStack};
#[cfg(feature = "rtrb")]
pub use params::ParamsHandle;
pub use params::{ParamUpdate, SynthParams};
pub use scheduler::{BlockSplitter, Segment};

use crate::dsp::{
    cents_to_ratio,
    envelope::Envelope,
    filter::ResonantLowPass,
    lfo::Lfo,
    midi_note_to_freq,
    oscillator::Oscillator,
};
use crate::io::{NoteEvent, NoteKind};

pub struct MonoVoice {
    params: SynthParams,
    sample_rate: f32,

    note_stack: NoteStack,
    /// Equal-temperament pitch table, one entry per MIDI note.
    note_freqs: [f32; 128],
    /// Frequency of the audible note in Hz, retargeted by the note stack.
    current_freq: f32,

    osc: Oscillator,
    filter: ResonantLowPass,
    amp_env: Envelope,
    filter_env: Envelope,
    lfo: Lfo,

    #[cfg(feature = "rtrb")]
    control: Option<rtrb::Consumer<ParamUpdate>>,
}

impl MonoVoice {
    pub fn new(sample_rate: f32) -> Self {
        let params = SynthParams::default();
        let mut voice = Self {
            params,
            sample_rate,
            note_stack: NoteStack::new(),
            note_freqs: [0.0; 128],
            current_freq: 440.0,
            osc: Oscillator::saw(),
            filter: ResonantLowPass::new(sample_rate),
            amp_env: Envelope::adsr(
                sample_rate,
                params.amp_attack,
                params.amp_decay,
                params.amp_sustain,
                params.amp_release,
            ),
            filter_env: Envelope::adsr(
                sample_rate,
                params.filter_attack,
                params.filter_decay,
                params.filter_sustain,
                params.filter_release,
            ),
            lfo: Lfo::new(sample_rate),
            #[cfg(feature = "rtrb")]
            control: None,
        };
        voice.activate();
        voice
    }

    /// Create a voice together with a control-thread handle for parameter
    /// automation. The handle may live on any thread; updates land at the
    /// next block boundary.
    #[cfg(feature = "rtrb")]
    pub fn with_control(sample_rate: f32) -> (Self, ParamsHandle) {
        let (tx, rx) = rtrb::RingBuffer::new(params::PARAM_QUEUE_SIZE);
        let mut voice = Self::new(sample_rate);
        voice.control = Some(rx);
        (voice, ParamsHandle::new(tx))
    }

    /// Recompute every rate-dependent cache. Call before `activate` when
    /// the host renegotiates the sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.lfo.set_sample_rate(sample_rate);
        self.filter.set_sample_rate(sample_rate);
        self.amp_env.set_sample_rate(sample_rate);
        self.filter_env.set_sample_rate(sample_rate);
    }

    /// Reset all per-voice state and re-apply the current parameter
    /// snapshot. Idempotent: calling twice leaves identical state.
    pub fn activate(&mut self) {
        self.note_stack.reset();
        self.amp_env.reset();
        self.filter_env.reset();
        self.lfo.reset();
        self.filter.reset();
        self.osc.reset();

        for (note, freq) in self.note_freqs.iter_mut().enumerate() {
            *freq = midi_note_to_freq(note as u8);
        }
        self.current_freq = 440.0;
        self.osc.set_frequency(self.current_freq / self.sample_rate);

        self.sync_params();
    }

    /// Change one parameter directly (single-threaded hosts). Threaded
    /// hosts go through [`MonoVoice::with_control`] instead.
    pub fn set_param(&mut self, update: ParamUpdate) {
        self.params.apply(update);
        self.sync_params();
    }

    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Push the parameter snapshot into the owned components.
    fn sync_params(&mut self) {
        let p = &self.params;
        self.amp_env.set_attack(p.amp_attack);
        self.amp_env.set_decay(p.amp_decay);
        self.amp_env.set_sustain(p.amp_sustain);
        self.amp_env.set_release(p.amp_release);
        self.filter_env.set_attack(p.filter_attack);
        self.filter_env.set_decay(p.filter_decay);
        self.filter_env.set_sustain(p.filter_sustain);
        self.filter_env.set_release(p.filter_release);
        self.filter.set_resonance(p.resonance);
        self.lfo.set_waveform(p.lfo_waveform);
        self.lfo.set_rate(p.lfo_rate_hz);
    }

    /// Render one host block: write `outputs[0].len()` mono samples to
    /// every channel, applying `events` at their exact frame offsets.
    ///
    /// Events must be ordered by non-decreasing frame with offsets inside
    /// the block (see [`BlockSplitter`] for the violation policy).
    pub fn render(&mut self, outputs: &mut [&mut [f32]], events: &[NoteEvent]) {
        #[cfg(feature = "rtrb")]
        if let Some(rx) = self.control.as_mut() {
            let mut dirty = false;
            while let Ok(update) = rx.pop() {
                self.params.apply(update);
                dirty = true;
            }
            if dirty {
                self.sync_params();
            }
        }

        let frames = outputs.iter().map(|ch| ch.len()).min().unwrap_or(0);
        debug_assert!(
            outputs.iter().all(|ch| ch.len() == frames),
            "output channels must share one length"
        );

        for segment in BlockSplitter::new(events, frames) {
            for ev in segment.events {
                self.apply_event(ev);
            }

            for i in segment.start..segment.start + segment.len {
                let sample = self.tick();
                for ch in outputs.iter_mut() {
                    ch[i] = sample;
                }
            }
        }
    }

    /// The note currently sounding, if any.
    pub fn current_note(&self) -> Option<u8> {
        self.note_stack.top()
    }

    /// Oscillator target frequency in Hz (before LFO pitch modulation).
    pub fn current_frequency(&self) -> f32 {
        self.current_freq
    }

    pub fn is_active(&self) -> bool {
        self.amp_env.is_active()
    }

    fn apply_event(&mut self, ev: &NoteEvent) {
        let change = match ev.kind {
            // Velocity 0 is a note off by convention, even when the host
            // hands over pre-built NoteEvents instead of raw MIDI bytes.
            NoteKind::NoteOn if ev.velocity > 0 => self.note_stack.note_on(ev.note),
            NoteKind::NoteOn | NoteKind::NoteOff => self.note_stack.note_off(ev.note),
        };

        match change {
            NoteChange::Onset(note) => {
                self.current_freq = self.note_freqs[note as usize];
                self.amp_env.gate(true);
                self.filter_env.gate(true);
            }
            NoteChange::Legato(note) => {
                // Pitch retarget only: the phrase keeps its envelopes.
                self.current_freq = self.note_freqs[note as usize];
            }
            NoteChange::GateOff => {
                self.amp_env.gate(false);
                self.filter_env.gate(false);
            }
            NoteChange::Unchanged => {}
        }
    }

    /// Advance the whole chain by one sample:
    /// LFO → envelopes → modulated cutoff → oscillator → filter → gain.
    #[inline]
    fn tick(&mut self) -> f32 {
        let p = &self.params;

        let lfo_val = self.lfo.tick();
        let fenv_mod = p.filter_env_amount * self.filter_env.process();
        let lfo_mod = p.lfo_filter_amount * lfo_val;
        // set_cutoff clamps the result into [16, 20000] Hz
        self.filter
            .set_cutoff(p.cutoff_hz * cents_to_ratio(lfo_mod + fenv_mod));

        let osc_freq = self.current_freq * cents_to_ratio(p.lfo_osc_amount * lfo_val);
        self.osc.set_frequency(osc_freq / self.sample_rate);

        self.filter.process(self.osc.process()) * self.amp_env.process() * p.volume
    }
}
