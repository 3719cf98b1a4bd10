//! Error types for snapshot restore.
//!
//! Expected runtime conditions — an unavailable delayed frame, an
//! inactive recorder at fire time, an empty frame — are `None`/empty
//! results, never errors. The only genuinely invalid state is a
//! snapshot whose counters or frame list are internally inconsistent,
//! which restore rejects with [`RestoreError`].

use std::fmt;

use crate::id::TickId;

/// A snapshot failed validation during restore.
///
/// The core's own snapshot producers never emit such data; these
/// variants exist for snapshots deserialized from untrusted sources
/// (e.g. save files).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreError {
    /// The snapshot holds more frames than the target buffer can.
    CountExceedsCapacity {
        /// Frames in the snapshot.
        count: usize,
        /// Capacity of the target ring buffer.
        capacity: usize,
    },
    /// The snapshot's declared frame count disagrees with its frame list.
    CountMismatch {
        /// The declared count.
        declared: usize,
        /// The actual number of frames in the list.
        frames: usize,
    },
    /// Two snapshot frames map to the same ring slot.
    SlotCollision {
        /// Tick of the second frame hitting an occupied slot.
        tick: TickId,
    },
    /// A snapshot frame is tagged with a tick ahead of the playhead.
    FrameAheadOfPlayhead {
        /// The offending frame's tick.
        frame: TickId,
        /// The snapshot's playhead tick.
        current: TickId,
    },
    /// A rewind entry was handed a snapshot of a different entity kind.
    KindMismatch {
        /// Kind the entry expected.
        expected: &'static str,
        /// Kind actually found in the snapshot.
        found: &'static str,
    },
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountExceedsCapacity { count, capacity } => {
                write!(f, "snapshot holds {count} frames, capacity is {capacity}")
            }
            Self::CountMismatch { declared, frames } => {
                write!(f, "snapshot declares {declared} frames but lists {frames}")
            }
            Self::SlotCollision { tick } => {
                write!(f, "frame at tick {tick} collides with an occupied slot")
            }
            Self::FrameAheadOfPlayhead { frame, current } => {
                write!(f, "frame at tick {frame} is ahead of playhead tick {current}")
            }
            Self::KindMismatch { expected, found } => {
                write!(f, "snapshot kind mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for RestoreError {}
