//! The [`Rewindable`] trait and the [`RewindState`] sum type.

use wraith_core::RestoreError;
use wraith_recorder::{RecorderSnapshot, TrailRecorder};
use wraith_scheduler::{BurstScheduler, BurstSchedulerSnapshot, DelayQueue, DelayQueueSnapshot};

use crate::group::GroupSnapshot;

/// A captured entity state, one variant per rewindable entity kind.
///
/// Applying a variant to an entity of a different kind fails with
/// [`RestoreError::KindMismatch`] — the registry relies on this to
/// reject snapshots that drifted out of shape.
#[derive(Clone, Debug)]
pub enum RewindState {
    /// A [`TrailRecorder`] state.
    Recorder(RecorderSnapshot),
    /// A [`BurstScheduler`] state.
    Burst(BurstSchedulerSnapshot),
    /// A [`DelayQueue`] state.
    Delay(DelayQueueSnapshot),
    /// A [`ReplayGroup`](crate::ReplayGroup) state.
    Group(GroupSnapshot),
}

impl RewindState {
    /// A static name for the captured entity kind, used in
    /// [`RestoreError::KindMismatch`].
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Recorder(_) => "recorder",
            Self::Burst(_) => "burst-scheduler",
            Self::Delay(_) => "delay-queue",
            Self::Group(_) => "replay-group",
        }
    }
}

/// An entity whose full state can be captured and later restored.
///
/// `capture` must return a deep, independent copy; `apply` must leave
/// the entity bit-identical to the moment the state was captured (or
/// untouched on error).
pub trait Rewindable {
    /// Deep-copy the entity's state.
    fn capture(&self) -> RewindState;

    /// Restore the entity from a captured state.
    ///
    /// # Errors
    ///
    /// [`RestoreError::KindMismatch`] when handed another entity
    /// kind's state; validation errors when the state is internally
    /// inconsistent.
    fn apply(&mut self, state: &RewindState) -> Result<(), RestoreError>;
}

impl Rewindable for TrailRecorder {
    fn capture(&self) -> RewindState {
        RewindState::Recorder(self.snapshot())
    }

    fn apply(&mut self, state: &RewindState) -> Result<(), RestoreError> {
        match state {
            RewindState::Recorder(snapshot) => self.restore(snapshot),
            other => Err(RestoreError::KindMismatch {
                expected: "recorder",
                found: other.kind(),
            }),
        }
    }
}

impl Rewindable for BurstScheduler {
    fn capture(&self) -> RewindState {
        RewindState::Burst(self.snapshot())
    }

    fn apply(&mut self, state: &RewindState) -> Result<(), RestoreError> {
        match state {
            RewindState::Burst(snapshot) => {
                self.restore(snapshot);
                Ok(())
            }
            other => Err(RestoreError::KindMismatch {
                expected: "burst-scheduler",
                found: other.kind(),
            }),
        }
    }
}

impl Rewindable for DelayQueue {
    fn capture(&self) -> RewindState {
        RewindState::Delay(self.snapshot())
    }

    fn apply(&mut self, state: &RewindState) -> Result<(), RestoreError> {
        match state {
            RewindState::Delay(snapshot) => {
                self.restore(snapshot);
                Ok(())
            }
            other => Err(RestoreError::KindMismatch {
                expected: "delay-queue",
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wraith_core::{Position, TickId};
    use wraith_recorder::Timing;

    #[test]
    fn recorder_capture_apply_round_trips() {
        let mut r = TrailRecorder::with_timing(Timing::from_ticks(1, 4, 1));
        r.record(&[Position::new(1, 1)]);
        r.record(&[Position::new(2, 2)]);
        let state = r.capture();

        r.reset();
        r.apply(&state).unwrap();
        assert_eq!(r.current_tick(), TickId(2));
        assert_eq!(r.trail(), Some(&[Position::new(1, 1)][..]));
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut r = TrailRecorder::with_timing(Timing::from_ticks(1, 4, 1));
        let scheduler_state = BurstScheduler::new().capture();
        match r.apply(&scheduler_state) {
            Err(RestoreError::KindMismatch {
                expected: "recorder",
                found: "burst-scheduler",
            }) => {}
            other => panic!("expected KindMismatch, got {other:?}"),
        }
    }

    #[test]
    fn kinds_are_distinct() {
        let names = [
            TrailRecorder::with_timing(Timing::from_ticks(0, 2, 1))
                .capture()
                .kind(),
            BurstScheduler::new().capture().kind(),
            DelayQueue::new().capture().kind(),
        ];
        assert_eq!(names, ["recorder", "burst-scheduler", "delay-queue"]);
    }
}
