/*
Monophonic last-note-priority tracking.

A fixed-capacity stack of held note numbers plus a held/released flag per
note. The top of the stack is the note currently audible. Releasing a
buried note has no audible effect; it is only unflagged and gets skipped
when the notes above it are released. Releasing the top pops every
consecutive already-released note below it, then either retargets the
pitch to the newly exposed held note (legato) or reports the stack empty
so the caller can close the envelope gates.

Capacity is exactly 128 - one slot per MIDI note - and the no-duplicates
rule (re-pressing a held note is a no-op) guarantees the stack can never
overflow. No allocation, ever.

Retrigger policy: envelopes are gated open only on the first note of a
phrase (`Onset`). Every later transition while notes remain held is
`Legato`, which retargets pitch without restarting the envelopes.
*/

/// What a note event did to the audible state of the voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteChange {
    /// Stack was empty: open the envelope gates and sound this note.
    Onset(u8),
    /// Stack was non-empty: retarget pitch to this note, no retrigger.
    Legato(u8),
    /// Last held note released: close the envelope gates.
    GateOff,
    /// No audible effect (duplicate press, buried release, invalid note).
    Unchanged,
}

pub struct NoteStack {
    stack: [u8; 128],
    len: usize,
    held: [bool; 128],
}

impl NoteStack {
    pub fn new() -> Self {
        Self {
            stack: [0; 128],
            len: 0,
            held: [false; 128],
        }
    }

    /// Press `note`. Out-of-range notes are rejected, re-pressing a note
    /// that is already held is a no-op.
    pub fn note_on(&mut self, note: u8) -> NoteChange {
        if note >= 128 {
            return NoteChange::Unchanged;
        }
        let idx = note as usize;

        if self.held[idx] {
            return NoteChange::Unchanged;
        }

        self.held[idx] = true;
        let was_empty = self.len == 0;
        self.stack[self.len] = note;
        self.len += 1;

        if was_empty {
            NoteChange::Onset(note)
        } else {
            NoteChange::Legato(note)
        }
    }

    /// Release `note`. Only releasing the audible (top) note changes what
    /// sounds; anything below it was already shadowed.
    pub fn note_off(&mut self, note: u8) -> NoteChange {
        if note >= 128 {
            return NoteChange::Unchanged;
        }
        self.held[note as usize] = false;

        if self.len == 0 || self.stack[self.len - 1] != note {
            return NoteChange::Unchanged;
        }

        // Pop the released top plus any notes below it that were released
        // while shadowed.
        while self.len > 0 && !self.held[self.stack[self.len - 1] as usize] {
            self.len -= 1;
        }

        match self.top() {
            Some(next) => NoteChange::Legato(next),
            None => NoteChange::GateOff,
        }
    }

    /// The currently audible note, if any.
    pub fn top(&self) -> Option<u8> {
        if self.len > 0 {
            Some(self.stack[self.len - 1])
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget all held notes.
    pub fn reset(&mut self) {
        self.len = 0;
        self.held = [false; 128];
    }
}

impl Default for NoteStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_note_is_an_onset() {
        let mut stack = NoteStack::new();
        assert_eq!(stack.note_on(60), NoteChange::Onset(60));
        assert_eq!(stack.top(), Some(60));
    }

    #[test]
    fn later_notes_are_legato() {
        let mut stack = NoteStack::new();
        stack.note_on(60);
        assert_eq!(stack.note_on(64), NoteChange::Legato(64));
        assert_eq!(stack.note_on(67), NoteChange::Legato(67));
        assert_eq!(stack.top(), Some(67));
    }

    #[test]
    fn releasing_back_to_first_note_stays_legato() {
        // Press A, B, C; release C then B: A sounds again with no retrigger.
        let mut stack = NoteStack::new();
        stack.note_on(57);
        stack.note_on(59);
        stack.note_on(60);

        assert_eq!(stack.note_off(60), NoteChange::Legato(59));
        assert_eq!(stack.note_off(59), NoteChange::Legato(57));
        assert_eq!(stack.note_off(57), NoteChange::GateOff);
        assert!(stack.is_empty());
    }

    #[test]
    fn buried_release_is_silent_and_skipped_later() {
        let mut stack = NoteStack::new();
        stack.note_on(48);
        stack.note_on(52);
        stack.note_on(55);

        // Release the middle note: nothing audible changes.
        assert_eq!(stack.note_off(52), NoteChange::Unchanged);
        assert_eq!(stack.top(), Some(55));

        // Releasing the top now skips straight past the dead middle note.
        assert_eq!(stack.note_off(55), NoteChange::Legato(48));
    }

    #[test]
    fn duplicate_press_does_not_grow_the_stack() {
        let mut stack = NoteStack::new();
        stack.note_on(60);
        stack.note_on(64);

        assert_eq!(stack.note_on(60), NoteChange::Unchanged);
        assert_eq!(stack.note_on(64), NoteChange::Unchanged);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn release_of_unknown_note_is_ignored() {
        let mut stack = NoteStack::new();
        stack.note_on(60);
        assert_eq!(stack.note_off(61), NoteChange::Unchanged);
        assert_eq!(stack.top(), Some(60));
    }

    #[test]
    fn out_of_range_notes_are_rejected() {
        let mut stack = NoteStack::new();
        assert_eq!(stack.note_on(128), NoteChange::Unchanged);
        assert_eq!(stack.note_off(200), NoteChange::Unchanged);
        assert!(stack.is_empty());
    }

    #[test]
    fn every_note_pressed_cannot_overflow() {
        let mut stack = NoteStack::new();
        for note in 0..128u8 {
            stack.note_on(note);
            // Second press of each is a no-op
            assert_eq!(stack.note_on(note), NoteChange::Unchanged);
        }
        assert_eq!(stack.len(), 128);
        assert_eq!(stack.top(), Some(127));
    }

    #[test]
    fn reset_empties_everything() {
        let mut stack = NoteStack::new();
        stack.note_on(60);
        stack.note_on(64);
        stack.reset();

        assert!(stack.is_empty());
        // Previously held notes behave as fresh onsets again
        assert_eq!(stack.note_on(60), NoteChange::Onset(60));
    }
}
