//! Delayed event scheduling anchored to the Wraith replay position.
//!
//! Gameplay triggers (the actor eating an item, say) want a cosmetic
//! burst where the *ghost* performs the action — `delay_ticks` after
//! the trigger, at the historical position — not where the live actor
//! is at fire time. Two fire-condition strategies exist, deliberately
//! kept as separate types rather than conflated behind a flag:
//!
//! - [`BurstScheduler`] (canonical): keyed by the recorder tick
//!   captured at the trigger; fires when the replayed frame's tick
//!   matches, so the burst lands at the exact historical position,
//!   immune to capacity/overwrite skew.
//! - [`DelayQueue`]: keyed by the scheduler's own tick counter; fires
//!   after a fixed number of `process_tick` calls and resolves the
//!   position from whatever the recorder is replaying then. Suited to
//!   unrelated cosmetic delays where exact positional anchoring does
//!   not matter.
//!
//! Both drop unresolvable events silently — an absent recorder, an
//! inactive replay, or an empty frame at fire time is a normal,
//! frequent outcome, not an error. There is no retry or backlog.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod burst;
pub mod delay;

pub use burst::{BurstScheduler, BurstSchedulerSnapshot, FiredBursts};
pub use delay::{DelayQueue, DelayQueueSnapshot};
