// Purpose - external interfaces: host event decoding

pub mod midi;

pub use midi::{NoteEvent, NoteKind, RawMidiEvent};
