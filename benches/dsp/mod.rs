//! Benchmarks for low-level DSP primitives.

mod envelope;
mod filter;
mod lfo;
mod oscillator;

pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use lfo::bench_lfo;
pub use oscillator::bench_oscillator;
