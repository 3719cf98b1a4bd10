//! The [`TrailRecorder`] ring buffer.

use wraith_core::{Frame, Position, RestoreError, TickId};

use crate::config::{RecorderConfig, Timing};
use crate::lifecycle::{derive_lifecycle, Lifecycle};
use crate::snapshot::RecorderSnapshot;

/// Records an actor's positions every tick and replays them
/// `delay_ticks` later.
///
/// Frames live in a fixed-length ring of `Option<Frame>` slots indexed
/// by `tick % capacity`. Each slot stores the frame's own tick, so a
/// read that finds a mismatched tick knows the slot was overwritten
/// and reports the tick as unavailable instead of returning stale
/// data. The buffer never grows.
///
/// # Examples
///
/// ```
/// use wraith_core::Position;
/// use wraith_recorder::{Timing, TrailRecorder};
///
/// let mut recorder = TrailRecorder::with_timing(Timing::from_ticks(5, 10, 3));
///
/// // Record ticks 0..=4: the delay has not elapsed yet.
/// for i in 0..5 {
///     recorder.record(&[Position::new(i, 0)]);
///     assert!(recorder.trail().is_none());
/// }
///
/// // Recording tick 5 brings tick 0 into replay.
/// recorder.record(&[Position::new(5, 0)]);
/// assert_eq!(recorder.trail(), Some(&[Position::new(0, 0)][..]));
/// ```
#[derive(Clone, Debug)]
pub struct TrailRecorder {
    slots: Box<[Option<Frame>]>,
    write_idx: usize,
    len: usize,
    current_tick: TickId,
    stopped_at: Option<TickId>,
    last_recorded: Option<TickId>,
    timing: Timing,
}

impl TrailRecorder {
    /// Create a recorder from a wall-clock configuration.
    pub fn new(config: &RecorderConfig) -> Self {
        Self::with_timing(config.resolve())
    }

    /// Create a recorder from tick-denominated timing.
    ///
    /// The floors are re-applied here, so a hand-built `Timing` that
    /// skipped [`Timing::from_ticks`] still ends up with
    /// `capacity >= delay_ticks + 1` and a non-zero fade window.
    pub fn with_timing(timing: Timing) -> Self {
        let timing = Timing::from_ticks(timing.delay_ticks, timing.capacity, timing.fade_ticks);
        Self {
            slots: vec![None; timing.capacity].into_boxed_slice(),
            write_idx: 0,
            len: 0,
            current_tick: TickId(0),
            stopped_at: None,
            last_recorded: None,
            timing,
        }
    }

    /// Record the actor's positions for the current tick.
    ///
    /// Copies `positions` (head-first, any length including zero) into
    /// a new frame tagged with the current tick, then advances the
    /// tick. Always succeeds; when the ring is full the oldest frame
    /// is silently evicted.
    pub fn record(&mut self, positions: &[Position]) {
        let frame = Frame::new(self.current_tick, positions);
        self.slots[self.write_idx] = Some(frame);
        self.write_idx = (self.write_idx + 1) % self.timing.capacity;
        self.len = (self.len + 1).min(self.timing.capacity);
        self.last_recorded = Some(self.current_tick);
        self.current_tick = self.current_tick.next();
    }

    /// Advance the tick without writing a frame.
    ///
    /// Called once per tick after [`stop_recording`](Self::stop_recording)
    /// so the delayed window keeps draining toward
    /// [`Lifecycle::Inactive`] without fabricating new history.
    pub fn advance_playhead(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Stop recording, latching the current tick.
    ///
    /// One-shot: repeated calls are no-ops. Not reversible; use
    /// [`reset`](Self::reset) to start a fresh run.
    pub fn stop_recording(&mut self) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(self.current_tick);
        }
    }

    /// The tick currently being replayed, or `None` while the delay
    /// has not yet elapsed.
    ///
    /// The replay runs `delay_ticks` behind the most recent record:
    /// after `n` record calls the target is tick `n − 1 − delay_ticks`.
    /// This is why `capacity >= delay_ticks + 1` suffices to keep the
    /// target inside the retained window.
    pub fn target_tick(&self) -> Option<TickId> {
        self.current_tick.checked_back(self.timing.delay_ticks + 1)
    }

    /// The delayed frame: the full positional sample being replayed
    /// right now.
    ///
    /// `None` before the delay elapses, or when the target tick's slot
    /// was overwritten or never written. O(1) and side-effect-free.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame_at(self.target_tick()?)
    }

    /// The frame recorded at an arbitrary `tick`, if it is still held.
    ///
    /// Ticks older than `current_tick − capacity` have been
    /// overwritten and return `None` — never stale data from the slot's
    /// new occupant.
    pub fn frame_at(&self, tick: TickId) -> Option<&Frame> {
        let idx = (tick.0 % self.timing.capacity as u64) as usize;
        match &self.slots[idx] {
            Some(frame) if frame.tick() == tick => Some(frame),
            _ => None,
        }
    }

    /// The replayed positions (head-first), if the delayed frame is
    /// available.
    pub fn trail(&self) -> Option<&[Position]> {
        self.frame().map(Frame::positions)
    }

    /// Whether the delayed frame currently resolves.
    pub fn is_active(&self) -> bool {
        self.frame().is_some()
    }

    /// The derived lifecycle phase. Recomputed from tick arithmetic on
    /// every call.
    pub fn lifecycle(&self) -> Lifecycle {
        derive_lifecycle(
            self.current_tick,
            &self.timing,
            self.stopped_at,
            self.last_recorded,
            self.is_active(),
        )
    }

    /// Render opacity for the ghost: 0 while warming or inactive, 1
    /// while active, and a linear ramp over the fade window while
    /// fading (`fade_ticks <= 1` collapses to a hard 1→0 step).
    pub fn opacity(&self) -> f32 {
        match self.lifecycle() {
            Lifecycle::Warming | Lifecycle::Inactive => 0.0,
            Lifecycle::Active => 1.0,
            Lifecycle::Fading => {
                if self.timing.fade_ticks <= 1 {
                    return 0.0;
                }
                let remaining = self.remaining_window();
                (remaining as f32 / (self.timing.fade_ticks - 1) as f32).clamp(0.0, 1.0)
            }
        }
    }

    /// Ticks of recorded history still ahead of the replay target.
    fn remaining_window(&self) -> u64 {
        let (Some(last), Some(target)) = (self.last_recorded, self.target_tick()) else {
            return 0;
        };
        last.0.saturating_sub(target.0)
    }

    /// Deep-copy the full recorder state.
    ///
    /// The snapshot owns independent copies of every held frame and
    /// all counters; it holds no references into the live buffer.
    pub fn snapshot(&self) -> RecorderSnapshot {
        let frames = self.slots.iter().flatten().cloned().collect();
        RecorderSnapshot::new(
            frames,
            self.write_idx,
            self.len,
            self.current_tick,
            self.stopped_at,
            self.last_recorded,
        )
    }

    /// Restore state from a snapshot.
    ///
    /// Clears the live buffer, re-inserts each snapshot frame at
    /// `tick % capacity`, and overwrites all counters verbatim. After
    /// a successful restore, every query reproduces the results from
    /// the moment the snapshot was taken, and subsequent `record`
    /// calls behave identically to an unsnapshotted continuation.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError`] (leaving the recorder untouched) when
    /// the snapshot's counters or frame list are internally
    /// inconsistent — possible only for snapshots deserialized from
    /// untrusted sources.
    pub fn restore(&mut self, snapshot: &RecorderSnapshot) -> Result<(), RestoreError> {
        snapshot.validate(self.timing.capacity)?;

        self.slots.fill(None);
        for frame in snapshot.frames() {
            let idx = (frame.tick().0 % self.timing.capacity as u64) as usize;
            self.slots[idx] = Some(frame.clone());
        }
        self.write_idx = snapshot.write_idx();
        self.len = snapshot.len();
        self.current_tick = snapshot.current_tick();
        self.stopped_at = snapshot.stopped_at();
        self.last_recorded = snapshot.last_recorded();
        Ok(())
    }

    /// Wipe all state back to construction-time defaults.
    ///
    /// Timing (`capacity`, `delay_ticks`, `fade_ticks`) is fixed for
    /// the recorder's lifetime and survives the reset.
    pub fn reset(&mut self) {
        self.slots.fill(None);
        self.write_idx = 0;
        self.len = 0;
        self.current_tick = TickId(0);
        self.stopped_at = None;
        self.last_recorded = None;
    }

    /// The next tick to be recorded (or drained past).
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Number of frames currently held (saturates at capacity).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no frames are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Ring buffer capacity in frames.
    pub fn capacity(&self) -> usize {
        self.timing.capacity
    }

    /// Replay delay in ticks.
    pub fn delay_ticks(&self) -> u64 {
        self.timing.delay_ticks
    }

    /// Fade-out window in ticks.
    pub fn fade_ticks(&self) -> u64 {
        self.timing.fade_ticks
    }

    /// The tick at which recording stopped, if it has.
    pub fn stopped_at(&self) -> Option<TickId> {
        self.stopped_at
    }

    /// The highest tick with a stored frame, if any.
    pub fn last_recorded(&self) -> Option<TickId> {
        self.last_recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(delay: u64, capacity: usize, fade: u64) -> TrailRecorder {
        TrailRecorder::with_timing(Timing::from_ticks(delay, capacity, fade))
    }

    fn body(tick: u64) -> Vec<Position> {
        vec![Position::new(tick as i32, 0), Position::new(tick as i32, 1)]
    }

    #[test]
    fn new_recorder_is_empty_and_warming() {
        let r = recorder(5, 10, 3);
        assert_eq!(r.len(), 0);
        assert!(r.is_empty());
        assert_eq!(r.capacity(), 10);
        assert_eq!(r.current_tick(), TickId(0));
        assert!(r.trail().is_none());
        assert_eq!(r.lifecycle(), Lifecycle::Warming);
        assert_eq!(r.opacity(), 0.0);
    }

    #[test]
    fn trail_is_none_until_delay_elapses() {
        let mut r = recorder(5, 10, 3);
        for tick in 0..5 {
            r.record(&body(tick));
            assert!(r.trail().is_none(), "tick {tick} should still be warming");
        }
    }

    #[test]
    fn trail_replays_the_delayed_frame() {
        let mut r = recorder(5, 10, 3);
        for tick in 0..6 {
            r.record(&body(tick));
        }
        // Ticks 0..=5 recorded, current_tick = 6, target = 0.
        assert_eq!(r.target_tick(), Some(TickId(0)));
        assert_eq!(r.trail(), Some(&body(0)[..]));
        assert_eq!(r.lifecycle(), Lifecycle::Active);
        assert_eq!(r.opacity(), 1.0);
    }

    #[test]
    fn sixth_record_replays_tick_zero() {
        // The concrete case: capacity 10, delay 5. Five records leave
        // the trail empty; the sixth brings tick 0 into replay.
        let mut r = recorder(5, 10, 3);
        for tick in 0..5 {
            r.record(&body(tick));
        }
        assert!(r.trail().is_none());
        r.record(&body(5));
        assert_eq!(r.trail(), Some(&body(0)[..]));
    }

    #[test]
    fn record_copies_positions() {
        let mut r = recorder(0, 4, 1);
        let mut positions = vec![Position::new(1, 2)];
        r.record(&positions);
        positions[0] = Position::new(9, 9);
        assert_eq!(r.trail(), Some(&[Position::new(1, 2)][..]));
    }

    #[test]
    fn overwritten_ticks_are_unavailable() {
        let mut r = recorder(2, 4, 1);
        for tick in 0..8 {
            r.record(&body(tick));
        }
        // Ticks 0..=3 were overwritten by 4..=7.
        for old in 0..4 {
            assert!(r.frame_at(TickId(old)).is_none(), "tick {old} must be gone");
        }
        for held in 4..8 {
            assert_eq!(r.frame_at(TickId(held)).unwrap().tick(), TickId(held));
        }
    }

    #[test]
    fn len_saturates_at_capacity() {
        let mut r = recorder(1, 4, 1);
        for tick in 0..10 {
            r.record(&body(tick));
        }
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn empty_body_records_an_empty_frame() {
        let mut r = recorder(0, 4, 1);
        r.record(&[]);
        let frame = r.frame().unwrap();
        assert!(frame.is_empty());
        // An empty frame still counts as an available sample.
        assert!(r.is_active());
    }

    #[test]
    fn stop_recording_is_idempotent() {
        let mut r = recorder(2, 6, 2);
        for tick in 0..4 {
            r.record(&body(tick));
        }
        r.stop_recording();
        assert_eq!(r.stopped_at(), Some(TickId(4)));
        r.advance_playhead();
        r.stop_recording();
        assert_eq!(r.stopped_at(), Some(TickId(4)));
    }

    #[test]
    fn window_drains_to_inactive_after_stop() {
        let mut r = recorder(2, 6, 1);
        for tick in 0..4 {
            r.record(&body(tick));
        }
        r.stop_recording();
        // last_recorded = 3, target = 1: two more ticks of window.
        assert!(r.is_active());
        r.advance_playhead();
        assert!(r.is_active());
        r.advance_playhead();
        // target = 3 = last_recorded: final buffered tick.
        assert!(r.is_active());
        r.advance_playhead();
        // target = 4 was never recorded.
        assert!(!r.is_active());
        assert_eq!(r.lifecycle(), Lifecycle::Inactive);
        assert_eq!(r.opacity(), 0.0);
    }

    #[test]
    fn fade_ramp_descends_within_the_window() {
        let mut r = recorder(2, 12, 4);
        for tick in 0..8 {
            r.record(&body(tick));
        }
        r.stop_recording();
        // target = 5, last = 7, remaining = 2 < 4: already fading.
        assert_eq!(r.lifecycle(), Lifecycle::Fading);
        let first = r.opacity();
        assert!(first > 0.0 && first < 1.0);
        r.advance_playhead();
        // remaining = 1.
        assert_eq!(r.lifecycle(), Lifecycle::Fading);
        let second = r.opacity();
        assert!(second < first);
        assert!(second > 0.0);
        r.advance_playhead();
        // remaining = 0.
        assert_eq!(r.lifecycle(), Lifecycle::Fading);
        assert_eq!(r.opacity(), 0.0);
    }

    #[test]
    fn degenerate_fade_is_a_hard_step() {
        let mut r = recorder(1, 6, 1);
        for tick in 0..4 {
            r.record(&body(tick));
        }
        r.stop_recording();
        // remaining = 1 >= fade 1: still fully active.
        assert_eq!(r.lifecycle(), Lifecycle::Active);
        assert_eq!(r.opacity(), 1.0);
        r.advance_playhead();
        // remaining = 0: fading, opacity drops straight to 0.
        assert_eq!(r.lifecycle(), Lifecycle::Fading);
        assert_eq!(r.opacity(), 0.0);
    }

    #[test]
    fn reads_are_side_effect_free() {
        let mut r = recorder(1, 4, 1);
        r.record(&body(0));
        r.record(&body(1));
        let first = r.trail().map(<[Position]>::to_vec);
        for _ in 0..10 {
            assert_eq!(r.trail().map(<[Position]>::to_vec), first);
            let _ = r.lifecycle();
            let _ = r.opacity();
        }
        assert_eq!(r.current_tick(), TickId(2));
    }

    #[test]
    fn reset_restores_construction_defaults() {
        let mut r = recorder(2, 6, 2);
        for tick in 0..5 {
            r.record(&body(tick));
        }
        r.stop_recording();
        r.reset();
        assert_eq!(r.current_tick(), TickId(0));
        assert_eq!(r.len(), 0);
        assert_eq!(r.stopped_at(), None);
        assert_eq!(r.last_recorded(), None);
        assert!(r.trail().is_none());
        assert_eq!(r.lifecycle(), Lifecycle::Warming);
        // Timing is untouched.
        assert_eq!(r.capacity(), 6);
        assert_eq!(r.delay_ticks(), 2);
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut r = recorder(3, 8, 2);
        for tick in 0..6 {
            r.record(&body(tick));
        }
        let snap = r.snapshot();
        let trail_before = r.trail().map(<[Position]>::to_vec);

        // Diverge, then restore.
        for tick in 6..12 {
            r.record(&body(tick));
        }
        r.stop_recording();
        r.restore(&snap).unwrap();

        assert_eq!(r.current_tick(), TickId(6));
        assert_eq!(r.stopped_at(), None);
        assert_eq!(r.trail().map(<[Position]>::to_vec), trail_before);
    }

    #[test]
    fn restore_then_record_continues_identically() {
        let mut a = recorder(3, 8, 2);
        for tick in 0..5 {
            a.record(&body(tick));
        }
        let snap = a.snapshot();

        let mut b = recorder(3, 8, 2);
        b.restore(&snap).unwrap();

        for tick in 5..20 {
            a.record(&body(tick));
            b.record(&body(tick));
            assert_eq!(a.trail(), b.trail());
            assert_eq!(a.lifecycle(), b.lifecycle());
        }
    }

    #[test]
    fn restore_rejects_oversized_snapshot() {
        let mut big = recorder(1, 16, 1);
        for tick in 0..16 {
            big.record(&body(tick));
        }
        let snap = big.snapshot();

        let mut small = recorder(1, 4, 1);
        match small.restore(&snap) {
            Err(RestoreError::CountExceedsCapacity { count: 16, capacity: 4 }) => {}
            other => panic!("expected CountExceedsCapacity, got {other:?}"),
        }
        // The failed restore left the recorder untouched.
        assert_eq!(small.current_tick(), TickId(0));
        assert_eq!(small.len(), 0);
    }
}
