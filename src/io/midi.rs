//! Decoding of raw host MIDI events into the engine's note events.
//!
//! Hosts deliver short messages as a frame offset plus up to three bytes of
//! status/data. Only note on/off reaches the monophonic engine; everything
//! else (controllers, pitch bend, oversized sysex fragments) is dropped at
//! this boundary so the render path never sees a malformed event.

/// Gate direction carried by a [`NoteEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    NoteOn,
    NoteOff,
}

/// A decoded, validated note event, sample-accurate within its block.
///
/// `frame` is the offset inside the current audio block; the host guarantees
/// events arrive ordered by non-decreasing frame.
#[derive(Debug, Clone, Copy)]
pub struct NoteEvent {
    pub frame: u32,
    pub kind: NoteKind,
    pub note: u8,     // 0..=127
    pub velocity: u8, // 0..=127
}

impl NoteEvent {
    pub fn note_on(frame: u32, note: u8, velocity: u8) -> Self {
        Self {
            frame,
            kind: NoteKind::NoteOn,
            note,
            velocity,
        }
    }

    pub fn note_off(frame: u32, note: u8) -> Self {
        Self {
            frame,
            kind: NoteKind::NoteOff,
            note,
            velocity: 0,
        }
    }
}

/// Maximum payload of a short MIDI message: status + two data bytes.
pub const MIDI_DATA_SIZE: u32 = 3;

/// A raw short MIDI message as handed over by the host ABI layer.
#[derive(Debug, Clone, Copy)]
pub struct RawMidiEvent {
    pub frame: u32,
    /// Actual payload length; events longer than [`MIDI_DATA_SIZE`] carry
    /// data the engine cannot interpret and are discarded on decode.
    pub size: u32,
    pub data: [u8; 3],
}

impl RawMidiEvent {
    /// Decode into a [`NoteEvent`], or `None` for anything the engine
    /// should ignore: oversized payloads, non-note statuses, and data
    /// bytes with the high bit set (note numbers >= 128).
    pub fn decode(&self) -> Option<NoteEvent> {
        if self.size > MIDI_DATA_SIZE {
            return None;
        }

        // Mask out the MIDI channel in the lower four bits.
        let status = self.data[0] & 0xF0;
        let note = self.data[1];
        let velocity = self.data[2];

        if note & 0x80 != 0 || velocity & 0x80 != 0 {
            return None;
        }

        match status {
            // Note on with velocity 0 is a note off by convention
            0x90 if velocity > 0 => Some(NoteEvent::note_on(self.frame, note, velocity)),
            0x90 | 0x80 => Some(NoteEvent::note_off(self.frame, note)),
            _ => None,
        }
    }
}
