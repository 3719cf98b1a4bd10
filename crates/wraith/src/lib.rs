//! Wraith: a temporal-replay engine for arcade games.
//!
//! Wraith records an actor's positions every simulation tick and
//! replays them after a fixed delay as a "ghost": a trailing echo that
//! repeats everything the actor did, a few seconds late. Around that
//! core it provides delayed event scheduling anchored to the replayed
//! position, and an atomic snapshot/rewind registry for time-travel
//! across every recorded entity at once.
//!
//! This is the top-level facade crate re-exporting the public API of
//! all Wraith sub-crates; for most users adding `wraith` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wraith::prelude::*;
//!
//! // 5-tick replay delay, 16-frame history, 3-tick fade-out.
//! let mut ghost = TrailRecorder::with_timing(Timing::from_ticks(5, 16, 3));
//! let mut bursts = BurstScheduler::new();
//!
//! // The actor eats an item at tick 0: burst keyed to this tick.
//! bursts.schedule(ghost.current_tick());
//!
//! // Host loop: record, process, read.
//! let mut fired_at = None;
//! for tick in 0..10i32 {
//!     ghost.record(&[Position::new(tick, 0)]);
//!     for position in bursts.process_tick(Some(&ghost)) {
//!         fired_at = Some(position);
//!     }
//! }
//!
//! // The burst fired at the historical position of tick 0, and with
//! // ticks 0..=9 recorded the ghost now replays tick 4.
//! assert_eq!(fired_at, Some(Position::new(0, 0)));
//! assert_eq!(ghost.trail(), Some(&[Position::new(4, 0)][..]));
//! assert_eq!(ghost.lifecycle(), Lifecycle::Active);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wraith-core` | `TickId`, `Position`, `Frame`, `RestoreError` |
//! | [`recorder`] | `wraith-recorder` | `TrailRecorder`, config, lifecycle, snapshots |
//! | [`scheduler`] | `wraith-scheduler` | `BurstScheduler`, `DelayQueue` |
//! | [`rewind`] | `wraith-rewind` | `RewindRegistry`, `ReplayGroup`, `Rewindable` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`wraith-core`).
///
/// Tick counters, positions, frames, and the restore error type.
pub use wraith_core as types;

/// The ring recorder (`wraith-recorder`).
///
/// [`recorder::TrailRecorder`] is the heart of the engine: a
/// fixed-capacity, tick-indexed ring of positional frames replayed
/// after a fixed delay.
pub use wraith_recorder as recorder;

/// Delayed event scheduling (`wraith-scheduler`).
///
/// [`scheduler::BurstScheduler`] fires events at the exact historical
/// position; [`scheduler::DelayQueue`] fires after a fixed tick count.
pub use wraith_scheduler as scheduler;

/// Snapshot and rewind (`wraith-rewind`).
///
/// Register entities in a [`rewind::RewindRegistry`] and roll the
/// whole scene back atomically.
pub use wraith_rewind as rewind;

/// Common imports for typical Wraith usage.
///
/// ```rust
/// use wraith::prelude::*;
/// ```
pub mod prelude {
    pub use wraith_core::{Frame, Position, RestoreError, TickId};

    pub use wraith_recorder::{
        Lifecycle, RecorderConfig, RecorderSnapshot, Timing, TrailRecorder,
    };

    pub use wraith_scheduler::{BurstScheduler, DelayQueue};

    pub use wraith_rewind::{ReplayGroup, RewindRegistry, RewindState, Rewindable};
}
