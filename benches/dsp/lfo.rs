//! Benchmarks for the low-frequency oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovoice::dsp::lfo::{Lfo, LfoWaveform};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_lfo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/lfo");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for waveform in [
            LfoWaveform::Triangle,
            LfoWaveform::Sine,
            LfoWaveform::Exponent,
        ] {
            let mut lfo = Lfo::new(SAMPLE_RATE);
            lfo.set_waveform(waveform);
            lfo.set_rate(8.0);

            let name = format!("{waveform:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for s in buffer.iter_mut() {
                        *s = lfo.tick();
                    }
                    black_box(&mut buffer);
                })
            });
        }
    }

    group.finish();
}
