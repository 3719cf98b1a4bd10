//! Frame-tick-match burst scheduling (the canonical variant).

use std::collections::VecDeque;

use smallvec::SmallVec;

use wraith_core::{Position, TickId};
use wraith_recorder::TrailRecorder;

/// Fired burst positions for one tick.
///
/// Almost always empty or a single element; inline storage covers the
/// occasional simultaneous pair without allocating.
pub type FiredBursts = SmallVec<[Position; 2]>;

/// Schedules bursts keyed to the recorder tick of the triggering
/// action, firing when the *replayed* frame reaches that tick.
///
/// The pending queue is FIFO; simultaneous triggers fire in insertion
/// order. An event whose tick the replay has already passed (possible
/// only under skew that should not normally happen) is discarded as
/// missed rather than fired late.
///
/// # Examples
///
/// ```
/// use wraith_core::Position;
/// use wraith_recorder::{Timing, TrailRecorder};
/// use wraith_scheduler::BurstScheduler;
///
/// let mut recorder = TrailRecorder::with_timing(Timing::from_ticks(2, 8, 1));
/// let mut bursts = BurstScheduler::new();
///
/// // The actor eats at tick 0; remember where the replay must fire.
/// bursts.schedule(recorder.current_tick());
///
/// recorder.record(&[Position::new(4, 4)]);
/// assert!(bursts.process_tick(Some(&recorder)).is_empty());
/// recorder.record(&[Position::new(4, 5)]);
/// assert!(bursts.process_tick(Some(&recorder)).is_empty());
/// recorder.record(&[Position::new(4, 6)]);
///
/// // The replay has reached tick 0: the burst fires at the historical
/// // head, not the live one.
/// let fired = bursts.process_tick(Some(&recorder));
/// assert_eq!(fired.as_slice(), &[Position::new(4, 4)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BurstScheduler {
    pending: VecDeque<TickId>,
}

impl BurstScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a burst for the moment the replay reaches `tick`.
    ///
    /// Callers pass the recorder's
    /// [`current_tick`](TrailRecorder::current_tick) captured at the
    /// triggering action, *before* recording that tick's frame.
    pub fn schedule(&mut self, tick: TickId) {
        self.pending.push_back(tick);
    }

    /// Resolve this tick's bursts against the recorder's replay.
    ///
    /// Must be called after the recorder has recorded (or drained past)
    /// the current tick. Fires every pending burst whose tick equals
    /// the replayed frame's tick, in FIFO order, using that frame's
    /// head position. Pending ticks the replay has already passed are
    /// discarded as missed. With no recorder, no replayed frame, or an
    /// empty frame, nothing can match; a matched burst on an empty
    /// frame is dropped silently (removed, no result).
    pub fn process_tick(&mut self, recorder: Option<&TrailRecorder>) -> FiredBursts {
        let mut fired = FiredBursts::new();
        let Some(frame) = recorder.and_then(TrailRecorder::frame) else {
            return fired;
        };

        let replayed = frame.tick();
        self.pending.retain(|&tick| {
            if tick > replayed {
                return true;
            }
            if tick == replayed {
                // Empty frame: unavailable sample, drop silently.
                if let Some(head) = frame.head() {
                    fired.push(head);
                }
            }
            // tick < replayed: missed, never fired late.
            false
        });
        fired
    }

    /// Number of bursts still pending.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no bursts are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop all pending bursts.
    ///
    /// Bursts lost here are gone for good; the scheduler has no
    /// backlog semantics.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Deep-copy the pending queue.
    pub fn snapshot(&self) -> BurstSchedulerSnapshot {
        BurstSchedulerSnapshot {
            pending: self.pending.iter().copied().collect(),
        }
    }

    /// Replace the pending queue with a snapshot's contents.
    pub fn restore(&mut self, snapshot: &BurstSchedulerSnapshot) {
        self.pending = snapshot.pending.iter().copied().collect();
    }
}

/// An independent copy of a [`BurstScheduler`]'s pending queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BurstSchedulerSnapshot {
    pending: Vec<TickId>,
}

impl BurstSchedulerSnapshot {
    /// The pending ticks, in queue order.
    pub fn pending(&self) -> &[TickId] {
        &self.pending
    }
}
