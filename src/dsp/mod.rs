//! Low-level DSP primitives used by the monophonic voice engine.
//!
//! These components are allocation-free and realtime-safe, making them safe
//! to embed directly inside the voice struct. They intentionally stay focused
//! on the signal-processing math so the engine layer can own orchestration
//! and modulation routing.

/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Resonant low-pass filter with per-sample cutoff modulation.
pub mod filter;
/// Free-running low-frequency modulator.
pub mod lfo;
/// Phase-accumulator oscillator waveforms.
pub mod oscillator;

pub use envelope::EnvelopeStage;

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69, equal temperament.
///
/// # Example
/// ```
/// use monovoice::dsp::midi_note_to_freq;
/// assert!((midi_note_to_freq(69) - 440.0).abs() < 1e-4);
/// assert!((midi_note_to_freq(81) - 880.0).abs() < 1e-3);
/// ```
#[inline]
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

/// Convert a pitch offset in cents to a frequency ratio.
/// 1200 cents = one octave, so `ratio = 2^(cents/1200)`.
///
/// # Example
/// ```
/// use monovoice::dsp::cents_to_ratio;
/// assert!((cents_to_ratio(1200.0) - 2.0).abs() < 1e-5);
/// assert!((cents_to_ratio(0.0) - 1.0).abs() < 1e-6);
/// assert!((cents_to_ratio(-1200.0) - 0.5).abs() < 1e-5);
/// ```
#[inline]
pub fn cents_to_ratio(cents: f32) -> f32 {
    2.0_f32.powf(cents / 1200.0)
}
