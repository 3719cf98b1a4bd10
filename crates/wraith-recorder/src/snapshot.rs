//! Deep-copied recorder snapshots.

use wraith_core::{Frame, RestoreError, TickId};

/// An independent, deep copy of a recorder's full state.
///
/// Produced by [`TrailRecorder::snapshot`](crate::TrailRecorder::snapshot)
/// and consumed by [`TrailRecorder::restore`](crate::TrailRecorder::restore).
/// Owns every frame outright; no references into any live buffer. The
/// core imposes no wire format — accessors expose every field so an
/// external save system can serialize it however it likes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecorderSnapshot {
    frames: Vec<Frame>,
    write_idx: usize,
    len: usize,
    current_tick: TickId,
    stopped_at: Option<TickId>,
    last_recorded: Option<TickId>,
}

impl RecorderSnapshot {
    /// Assemble a snapshot from its parts.
    ///
    /// Intended for the recorder itself and for deserializers
    /// rebuilding a snapshot from external storage; restore validates
    /// regardless of origin.
    pub fn new(
        frames: Vec<Frame>,
        write_idx: usize,
        len: usize,
        current_tick: TickId,
        stopped_at: Option<TickId>,
        last_recorded: Option<TickId>,
    ) -> Self {
        Self {
            frames,
            write_idx,
            len,
            current_tick,
            stopped_at,
            last_recorded,
        }
    }

    /// Check internal consistency against a target `capacity`.
    ///
    /// Rejects: more frames than capacity, a declared count that
    /// disagrees with the frame list, two frames mapping to one ring
    /// slot, and a frame tagged ahead of the playhead. The recorder's
    /// own snapshots always pass; this guards data deserialized from
    /// untrusted sources.
    pub fn validate(&self, capacity: usize) -> Result<(), RestoreError> {
        if self.frames.len() > capacity {
            return Err(RestoreError::CountExceedsCapacity {
                count: self.frames.len(),
                capacity,
            });
        }
        if self.len != self.frames.len() {
            return Err(RestoreError::CountMismatch {
                declared: self.len,
                frames: self.frames.len(),
            });
        }
        let mut occupied = vec![false; capacity];
        for frame in &self.frames {
            if frame.tick() > self.current_tick {
                return Err(RestoreError::FrameAheadOfPlayhead {
                    frame: frame.tick(),
                    current: self.current_tick,
                });
            }
            let idx = (frame.tick().0 % capacity as u64) as usize;
            if occupied[idx] {
                return Err(RestoreError::SlotCollision { tick: frame.tick() });
            }
            occupied[idx] = true;
        }
        Ok(())
    }

    /// The held frames, in ring-slot order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The ring write index at capture time.
    pub fn write_idx(&self) -> usize {
        self.write_idx
    }

    /// The frame count at capture time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the snapshot holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The playhead tick at capture time.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// The stop tick at capture time, if recording had stopped.
    pub fn stopped_at(&self) -> Option<TickId> {
        self.stopped_at
    }

    /// The highest recorded tick at capture time, if any.
    pub fn last_recorded(&self) -> Option<TickId> {
        self.last_recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wraith_core::Position;

    fn frame(tick: u64) -> Frame {
        Frame::new(TickId(tick), &[Position::new(tick as i32, 0)])
    }

    #[test]
    fn valid_snapshot_passes() {
        let snap = RecorderSnapshot::new(
            vec![frame(2), frame(3), frame(4)],
            5,
            3,
            TickId(5),
            None,
            Some(TickId(4)),
        );
        assert!(snap.validate(8).is_ok());
    }

    #[test]
    fn count_above_capacity_rejected() {
        let snap = RecorderSnapshot::new(
            (0..5).map(frame).collect(),
            0,
            5,
            TickId(5),
            None,
            Some(TickId(4)),
        );
        match snap.validate(4) {
            Err(RestoreError::CountExceedsCapacity { count: 5, capacity: 4 }) => {}
            other => panic!("expected CountExceedsCapacity, got {other:?}"),
        }
    }

    #[test]
    fn declared_count_mismatch_rejected() {
        let snap = RecorderSnapshot::new(vec![frame(0)], 1, 3, TickId(1), None, Some(TickId(0)));
        match snap.validate(8) {
            Err(RestoreError::CountMismatch { declared: 3, frames: 1 }) => {}
            other => panic!("expected CountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn slot_collision_rejected() {
        // Ticks 1 and 9 both land in slot 1 of an 8-slot ring.
        let snap = RecorderSnapshot::new(
            vec![frame(1), frame(9)],
            2,
            2,
            TickId(10),
            None,
            Some(TickId(9)),
        );
        match snap.validate(8) {
            Err(RestoreError::SlotCollision { tick: TickId(9) }) => {}
            other => panic!("expected SlotCollision, got {other:?}"),
        }
    }

    #[test]
    fn frame_from_the_future_rejected() {
        let snap = RecorderSnapshot::new(vec![frame(7)], 0, 1, TickId(3), None, Some(TickId(7)));
        match snap.validate(8) {
            Err(RestoreError::FrameAheadOfPlayhead {
                frame: TickId(7),
                current: TickId(3),
            }) => {}
            other => panic!("expected FrameAheadOfPlayhead, got {other:?}"),
        }
    }
}
