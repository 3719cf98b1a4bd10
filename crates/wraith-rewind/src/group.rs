//! The [`ReplayGroup`] aggregator: one recorder + one scheduler as a
//! single rewind unit.

use std::cell::RefCell;
use std::rc::Rc;

use wraith_core::RestoreError;
use wraith_recorder::{RecorderSnapshot, TrailRecorder};
use wraith_scheduler::{BurstScheduler, BurstSchedulerSnapshot};

use crate::state::{Rewindable, RewindState};

/// A fixed pairing of a recorder and its burst scheduler.
///
/// Consumers that must never see the two restored to inconsistent
/// ticks relative to each other (the ghost's buffer says tick 40, its
/// pending bursts say tick 300) treat the pair as one transactional
/// unit through this façade. Members are shared `Rc<RefCell<..>>`
/// handles — the host keeps driving them directly; the group only
/// captures and applies.
///
/// Either member may be absent (not yet constructed); an absent member
/// is captured as `None` and skipped on apply.
#[derive(Clone, Default)]
pub struct ReplayGroup {
    recorder: Option<Rc<RefCell<TrailRecorder>>>,
    scheduler: Option<Rc<RefCell<BurstScheduler>>>,
}

impl ReplayGroup {
    /// Create a group with no members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group over both members.
    pub fn with_members(
        recorder: Rc<RefCell<TrailRecorder>>,
        scheduler: Rc<RefCell<BurstScheduler>>,
    ) -> Self {
        Self {
            recorder: Some(recorder),
            scheduler: Some(scheduler),
        }
    }

    /// Attach (or replace) the recorder member.
    pub fn set_recorder(&mut self, recorder: Rc<RefCell<TrailRecorder>>) {
        self.recorder = Some(recorder);
    }

    /// Attach (or replace) the scheduler member.
    pub fn set_scheduler(&mut self, scheduler: Rc<RefCell<BurstScheduler>>) {
        self.scheduler = Some(scheduler);
    }

    /// Capture both members in one unit.
    pub fn snapshot(&self) -> GroupSnapshot {
        GroupSnapshot {
            recorder: self.recorder.as_ref().map(|r| r.borrow().snapshot()),
            scheduler: self.scheduler.as_ref().map(|s| s.borrow().snapshot()),
        }
    }

    /// Restore both members from one unit.
    ///
    /// A member absent on either side (never constructed, or absent
    /// from the snapshot) is skipped; present pairs restore fully or
    /// the call fails without touching the scheduler.
    pub fn restore(&self, snapshot: &GroupSnapshot) -> Result<(), RestoreError> {
        if let (Some(recorder), Some(snap)) = (&self.recorder, &snapshot.recorder) {
            recorder.borrow_mut().restore(snap)?;
        }
        if let (Some(scheduler), Some(snap)) = (&self.scheduler, &snapshot.scheduler) {
            scheduler.borrow_mut().restore(snap);
        }
        Ok(())
    }
}

impl Rewindable for ReplayGroup {
    fn capture(&self) -> RewindState {
        RewindState::Group(self.snapshot())
    }

    fn apply(&mut self, state: &RewindState) -> Result<(), RestoreError> {
        match state {
            RewindState::Group(snapshot) => self.restore(snapshot),
            other => Err(RestoreError::KindMismatch {
                expected: "replay-group",
                found: other.kind(),
            }),
        }
    }
}

/// A captured [`ReplayGroup`]: both members' snapshots, either
/// possibly absent.
#[derive(Clone, Debug, Default)]
pub struct GroupSnapshot {
    /// The recorder member's state, if one was attached.
    pub recorder: Option<RecorderSnapshot>,
    /// The scheduler member's state, if one was attached.
    pub scheduler: Option<BurstSchedulerSnapshot>,
}
