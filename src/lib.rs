pub mod dsp; // Allocation-free signal-processing primitives
pub mod engine; // Monophonic voice: note priority, block splitting, render loop
pub mod io;

/// Floor for envelope stage times: one sample at 48kHz. A configured
/// zero-length stage completes in a single sample instead of dividing by zero.
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
