//! Benchmarks for the full monophonic voice render, event scheduling
//! included. This is the number that has to fit the realtime deadline.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use monovoice::engine::{MonoVoice, ParamUpdate};
use monovoice::io::NoteEvent;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");

    for &size in BLOCK_SIZES {
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        // Sustained note, no events inside the block: pure render cost
        let mut held = MonoVoice::new(SAMPLE_RATE);
        held.render(&mut [&mut left, &mut right], &[NoteEvent::note_on(0, 45, 100)]);
        group.bench_with_input(BenchmarkId::new("held_note", size), &size, |b, _| {
            b.iter(|| {
                held.render(black_box(&mut [&mut left, &mut right]), &[]);
            })
        });

        // Fully modulated patch: both envelopes + LFO into filter and pitch
        let mut modulated = MonoVoice::new(SAMPLE_RATE);
        modulated.set_param(ParamUpdate::Cutoff(1_500.0));
        modulated.set_param(ParamUpdate::Resonance(0.7));
        modulated.set_param(ParamUpdate::FilterEnvAmount(4_800.0));
        modulated.set_param(ParamUpdate::LfoFilterAmount(2_400.0));
        modulated.set_param(ParamUpdate::LfoOscAmount(50.0));
        modulated.render(&mut [&mut left, &mut right], &[NoteEvent::note_on(0, 45, 100)]);
        group.bench_with_input(BenchmarkId::new("modulated", size), &size, |b, _| {
            b.iter(|| {
                modulated.render(black_box(&mut [&mut left, &mut right]), &[]);
            })
        });

        // Busy block: a note transition every 16 frames
        let mut busy = MonoVoice::new(SAMPLE_RATE);
        let events: Vec<NoteEvent> = (0..size as u32 / 16)
            .flat_map(|n| {
                let frame = n * 16;
                let note = 48 + (n % 12) as u8;
                [
                    NoteEvent::note_off(frame, 48 + ((n + 11) % 12) as u8),
                    NoteEvent::note_on(frame, note, 100),
                ]
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("busy_events", size), &size, |b, _| {
            b.iter(|| {
                busy.render(black_box(&mut [&mut left, &mut right]), black_box(&events));
            })
        });
    }

    group.finish();
}
