//! Benchmarks for the phase-accumulator oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovoice::dsp::oscillator::Oscillator;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut saw = Oscillator::saw();
        saw.set_frequency(440.0 / SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, _| {
            b.iter(|| {
                for s in buffer.iter_mut() {
                    *s = saw.process();
                }
                black_box(&mut buffer);
            })
        });

        let mut sine = Oscillator::sine();
        sine.set_frequency(440.0 / SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                for s in buffer.iter_mut() {
                    *s = sine.process();
                }
                black_box(&mut buffer);
            })
        });

        let mut square = Oscillator::square();
        square.set_frequency(440.0 / SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| {
                for s in buffer.iter_mut() {
                    *s = square.process();
                }
                black_box(&mut buffer);
            })
        });

        // Retargeting the frequency every sample, as the engine does
        let mut retargeted = Oscillator::saw();
        group.bench_with_input(BenchmarkId::new("saw_retargeted", size), &size, |b, _| {
            b.iter(|| {
                for (n, s) in buffer.iter_mut().enumerate() {
                    retargeted.set_frequency((440.0 + n as f32) / SAMPLE_RATE);
                    *s = retargeted.process();
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
