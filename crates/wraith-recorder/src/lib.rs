//! Tick-indexed ring recorder for delayed ghost replay.
//!
//! [`TrailRecorder`] owns a fixed-capacity ring of positional frames
//! and replays them after a fixed delay: the host records the actor's
//! positions every tick, and `delay_ticks` later the same positions
//! come back out as the ghost's trail. Lifecycle
//! (warming → active → fading → inactive) is derived from tick
//! arithmetic on every query — there is no stored lifecycle flag to
//! drift out of sync with the buffer.
//!
//! # Per-tick protocol
//!
//! While the actor is live, call [`record`](TrailRecorder::record)
//! once per tick. When its life ends, call
//! [`stop_recording`](TrailRecorder::stop_recording) once and switch
//! to [`advance_playhead`](TrailRecorder::advance_playhead) so the
//! buffered window drains toward inactive without fabricating new
//! history. Read accessors ([`trail`](TrailRecorder::trail),
//! [`frame`](TrailRecorder::frame),
//! [`opacity`](TrailRecorder::opacity)) are side-effect-free and may
//! be called any number of times per tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lifecycle;
pub mod recorder;
pub mod snapshot;

pub use config::{RecorderConfig, Timing};
pub use lifecycle::{derive_lifecycle, Lifecycle};
pub use recorder::TrailRecorder;
pub use snapshot::RecorderSnapshot;
