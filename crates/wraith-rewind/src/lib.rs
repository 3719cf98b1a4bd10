//! Atomic multi-entity snapshot and rewind for Wraith replay state.
//!
//! [`RewindRegistry`] maps string ids to rewindable entities and
//! captures or restores them all in one call, so an entire scene's
//! replay state can be rolled back atomically. [`ReplayGroup`] bundles
//! one recorder and one burst scheduler into a single rewind unit, so
//! a ghost's buffer and its pending cosmetic events never restore to
//! mutually inconsistent ticks.
//!
//! The registry is an open extension point: anything implementing
//! [`Rewindable`] can register, and the registry's own code never
//! changes when new recorder types appear.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod group;
pub mod registry;
pub mod state;

pub use group::{GroupSnapshot, ReplayGroup};
pub use registry::{RegistrySnapshot, RewindRegistry, SharedRewindable};
pub use state::{Rewindable, RewindState};
