use crate::io::NoteEvent;

/*
Block splitter: sample-accurate alignment of note events to audio.

A host block of `frames` samples arrives together with the note events
that fall inside it, ordered by frame offset. Rendering the whole block
and applying events afterwards would quantize every gate or pitch change
to the block boundary, so instead the block is cut into contiguous
segments whose boundaries sit exactly on the distinct event offsets:

    events:   NoteOn@0        NoteOff@24       NoteOn@24
    block:    |----------------|------------------------|
    segments: [0, 24)           [24, 64)

Each segment carries the batch of events that share its start frame; the
caller applies the whole batch to the voice state first, then renders the
segment's samples. Later events in a batch override earlier ones for the
same note, since both mutate the same two-state gate.

Contract: offsets are non-decreasing and < `frames`. Violations are a
host bug - debug builds assert, release builds clamp the offending frame
to the end of the block and keep going rather than panicking on the
realtime path.
*/

/// One contiguous sub-range of an audio block, plus the events that take
/// effect at its first sample.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub start: usize,
    pub len: usize,
    pub events: &'a [NoteEvent],
}

/// Iterator that partitions `[0, frames)` into event-aligned segments.
pub struct BlockSplitter<'a> {
    events: &'a [NoteEvent],
    frames: usize,
    pos: usize,
    cur: usize,
}

impl<'a> BlockSplitter<'a> {
    pub fn new(events: &'a [NoteEvent], frames: usize) -> Self {
        #[cfg(debug_assertions)]
        {
            let mut prev = 0u32;
            for ev in events {
                debug_assert!(ev.frame >= prev, "events must be sorted by frame");
                debug_assert!(
                    (ev.frame as usize) < frames.max(1),
                    "event frame {} outside block of {} frames",
                    ev.frame,
                    frames
                );
                prev = ev.frame;
            }
        }

        Self {
            events,
            frames,
            pos: 0,
            cur: 0,
        }
    }

    /// Best-effort frame for an event: in-range offsets pass through,
    /// contract-violating ones land on the last frame of the block.
    #[inline]
    fn event_frame(&self, ev: &NoteEvent) -> usize {
        (ev.frame as usize).min(self.frames - 1)
    }
}

impl<'a> Iterator for BlockSplitter<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.pos >= self.frames {
            return None;
        }
        let start = self.pos;

        // Batch every event landing on this segment's first sample. The
        // `<=` also sweeps up any late (clamped, out-of-order) stragglers.
        let batch_start = self.cur;
        while self.cur < self.events.len() && self.event_frame(&self.events[self.cur]) <= start {
            self.cur += 1;
        }
        let events = &self.events[batch_start..self.cur];

        // Run to the next distinct event frame, or the end of the block.
        let boundary = match self.events.get(self.cur) {
            Some(ev) => self.event_frame(ev),
            None => self.frames,
        };
        let end = boundary.clamp(start + 1, self.frames);

        self.pos = end;
        Some(Segment {
            start,
            len: end - start,
            events,
        })
    }
}
