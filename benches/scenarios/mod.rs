//! Real-world scenario benchmarks: the complete event-scheduled voice.

mod voice;

pub use voice::bench_voice;
