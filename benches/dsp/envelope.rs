//! Benchmarks for the ADSR envelope generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovoice::dsp::envelope::Envelope;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn run(env: &mut Envelope, buffer: &mut [f32]) {
    for s in buffer.iter_mut() {
        *s = env.process();
    }
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Attack phase (ramping up)
        let mut env = Envelope::adsr(SAMPLE_RATE, 10.0, 0.1, 0.7, 0.3);
        env.gate(true);
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| run(black_box(&mut env), black_box(&mut buffer)))
        });

        // Sustain phase (holding steady)
        let mut env = Envelope::adsr(SAMPLE_RATE, 0.001, 0.001, 0.7, 0.3);
        env.gate(true);
        for _ in 0..200 {
            env.process();
        }
        group.bench_with_input(BenchmarkId::new("sustain", size), &size, |b, _| {
            b.iter(|| run(black_box(&mut env), black_box(&mut buffer)))
        });

        // Release phase (ramping down)
        let mut env = Envelope::adsr(SAMPLE_RATE, 0.001, 0.001, 0.7, 10.0);
        env.gate(true);
        for _ in 0..200 {
            env.process();
        }
        env.gate(false);
        group.bench_with_input(BenchmarkId::new("release", size), &size, |b, _| {
            b.iter(|| run(black_box(&mut env), black_box(&mut buffer)))
        });
    }

    group.finish();
}
