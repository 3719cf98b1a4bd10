//! Tick-count delay scheduling (the simpler, non-anchored variant).

use std::collections::VecDeque;

use wraith_core::TickId;
use wraith_recorder::TrailRecorder;

use crate::burst::FiredBursts;

/// Schedules events a fixed number of ticks ahead on its own counter,
/// resolving positions from whatever the recorder replays at fire time.
///
/// Unlike [`BurstScheduler`](crate::BurstScheduler), this variant does
/// no tick matching against the recorder: the fire condition is purely
/// "enough `process_tick` calls have elapsed". Use it for cosmetic
/// delays where drifting a cell or two off the historical position
/// under capacity skew is acceptable.
///
/// Because the fire tick is known from the internal counter, a due
/// event whose position cannot be resolved — no recorder, inactive
/// replay, empty trail — is removed and dropped silently rather than
/// left pending.
#[derive(Clone, Debug, Default)]
pub struct DelayQueue {
    pending: VecDeque<TickId>,
    current_tick: TickId,
}

impl DelayQueue {
    /// Create an empty queue at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event to fire `delay_ticks` process calls from now.
    pub fn schedule(&mut self, delay_ticks: u64) {
        self.pending.push_back(TickId(self.current_tick.0 + delay_ticks));
    }

    /// Advance the internal counter and fire every due event.
    ///
    /// Fired positions are the head of the recorder's replayed trail
    /// at this instant. Due events fire (or drop) in FIFO order.
    pub fn process_tick(&mut self, recorder: Option<&TrailRecorder>) -> FiredBursts {
        self.current_tick = self.current_tick.next();

        let head = recorder
            .and_then(TrailRecorder::trail)
            .and_then(|trail| trail.first().copied());

        let mut fired = FiredBursts::new();
        let now = self.current_tick;
        self.pending.retain(|&fire_tick| {
            if fire_tick > now {
                return true;
            }
            // Due. Unresolvable samples drop silently.
            if let Some(position) = head {
                fired.push(position);
            }
            false
        });
        fired
    }

    /// Number of events still pending.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The internal tick counter.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Clear the queue and rewind the counter to zero.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.current_tick = TickId(0);
    }

    /// Deep-copy the queue and counter.
    pub fn snapshot(&self) -> DelayQueueSnapshot {
        DelayQueueSnapshot {
            pending: self.pending.iter().copied().collect(),
            current_tick: self.current_tick,
        }
    }

    /// Replace queue and counter with a snapshot's contents.
    pub fn restore(&mut self, snapshot: &DelayQueueSnapshot) {
        self.pending = snapshot.pending.iter().copied().collect();
        self.current_tick = snapshot.current_tick;
    }
}

/// An independent copy of a [`DelayQueue`]'s state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelayQueueSnapshot {
    pending: Vec<TickId>,
    current_tick: TickId,
}

impl DelayQueueSnapshot {
    /// The pending fire ticks, in queue order.
    pub fn pending(&self) -> &[TickId] {
        &self.pending
    }

    /// The internal tick counter at capture time.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }
}
