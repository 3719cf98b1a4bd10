//! Core types for the Wraith temporal-replay engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types shared across the Wraith workspace:
//! the tick counter, positional frames, and the restore error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frame;
pub mod id;

pub use error::RestoreError;
pub use frame::{Frame, Position};
pub use id::TickId;
