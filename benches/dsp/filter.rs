//! Benchmarks for the resonant low-pass filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovoice::dsp::filter::ResonantLowPass;
use monovoice::dsp::oscillator::Oscillator;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let mut osc = Oscillator::saw();
        osc.set_frequency(110.0 / SAMPLE_RATE);
        let input: Vec<f32> = (0..size).map(|_| osc.process()).collect();
        let mut buffer = vec![0.0f32; size];

        // Static cutoff
        let mut filter = ResonantLowPass::new(SAMPLE_RATE);
        filter.set_cutoff(2_000.0);
        filter.set_resonance(0.5);
        group.bench_with_input(BenchmarkId::new("static_cutoff", size), &size, |b, _| {
            b.iter(|| {
                for (out, inp) in buffer.iter_mut().zip(&input) {
                    *out = filter.process(*inp);
                }
                black_box(&mut buffer);
            })
        });

        // Per-sample cutoff recompute, as the engine's modulation does
        let mut modulated = ResonantLowPass::new(SAMPLE_RATE);
        modulated.set_resonance(0.5);
        group.bench_with_input(BenchmarkId::new("swept_cutoff", size), &size, |b, _| {
            b.iter(|| {
                for (n, (out, inp)) in buffer.iter_mut().zip(&input).enumerate() {
                    modulated.set_cutoff(500.0 + 10.0 * n as f32);
                    *out = modulated.process(*inp);
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
