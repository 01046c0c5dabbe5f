/// Walks a monophonic phrase through the voice engine and prints the
/// amplitude at each step: onset, legato transitions, and release.
use monovoice::engine::{MonoVoice, ParamUpdate};
use monovoice::io::NoteEvent;

fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn main() {
    println!("=== Monophonic Voice Walkthrough ===\n");

    let sample_rate = 48_000.0;
    let block = 256;

    let mut voice = MonoVoice::new(sample_rate);
    voice.set_param(ParamUpdate::AmpAttack(0.05));
    voice.set_param(ParamUpdate::AmpRelease(0.2));
    voice.set_param(ParamUpdate::Cutoff(4_000.0));
    voice.set_param(ParamUpdate::Resonance(0.4));

    let mut buffer = vec![0.0f32; block];

    let steps: &[(&str, Vec<NoteEvent>)] = &[
        ("press A3 (onset)", vec![NoteEvent::note_on(0, 57, 100)]),
        ("hold", vec![]),
        ("press C4 (legato up)", vec![NoteEvent::note_on(0, 60, 100)]),
        ("press E4 (legato up)", vec![NoteEvent::note_on(0, 64, 100)]),
        ("release E4 (back to C4)", vec![NoteEvent::note_off(0, 64)]),
        ("release C4 (back to A3)", vec![NoteEvent::note_off(0, 60)]),
        ("release A3 (gate off)", vec![NoteEvent::note_off(0, 57)]),
        ("tail", vec![]),
    ];

    for (label, events) in steps {
        voice.render(&mut [&mut buffer], events);
        let note = voice
            .current_note()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{label:<26} note {note:>3}  freq {:8.2} Hz  peak {:.3}",
            voice.current_frequency(),
            peak(&buffer)
        );
    }

    // Let the release finish
    let mut blocks = 0;
    while voice.is_active() {
        voice.render(&mut [&mut buffer], &[]);
        blocks += 1;
    }
    println!("\nrelease tail lasted {blocks} more blocks");
}
