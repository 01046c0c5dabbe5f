/// Renders one second of a modulated bass note block by block, the way a
/// host callback would, and prints a coarse peak meter per 100ms.
use monovoice::engine::{MonoVoice, ParamUpdate};
use monovoice::io::NoteEvent;

fn main() {
    let sample_rate = 48_000.0;
    let block = 128;
    let total_blocks = (sample_rate as usize) / block;

    let mut voice = MonoVoice::new(sample_rate);
    voice.set_param(ParamUpdate::Cutoff(600.0));
    voice.set_param(ParamUpdate::Resonance(0.6));
    voice.set_param(ParamUpdate::FilterEnvAmount(3_600.0));
    voice.set_param(ParamUpdate::FilterDecay(0.4));
    voice.set_param(ParamUpdate::FilterSustain(0.1));
    voice.set_param(ParamUpdate::AmpRelease(0.25));

    let mut left = vec![0.0f32; block];
    let mut right = vec![0.0f32; block];
    let mut rendered = 0usize;
    let mut window_peak = 0.0f32;

    for n in 0..total_blocks {
        // One note held for the first 700ms
        let events = match n {
            0 => vec![NoteEvent::note_on(0, 36, 110)],
            b if b == (0.7 * sample_rate) as usize / block => vec![NoteEvent::note_off(0, 36)],
            _ => vec![],
        };

        voice.render(&mut [&mut left, &mut right], &events);
        rendered += block;

        window_peak = left
            .iter()
            .map(|s| s.abs())
            .fold(window_peak, f32::max);

        if rendered % 4_800 < block {
            let bars = (window_peak * 40.0) as usize;
            println!("{:>5} ms |{}", rendered * 1000 / 48_000, "#".repeat(bars));
            window_peak = 0.0;
        }
    }

    println!("\nRendered {rendered} samples, active = {}", voice.is_active());
}
