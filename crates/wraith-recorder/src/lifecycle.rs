//! Derived ghost lifecycle.
//!
//! Lifecycle is a pure function of the recorder's tick counters and
//! the current delayed-frame lookup — never a stored field. Caching it
//! would invite drift between a stale flag and the buffer's actual
//! contents after `reset` or `restore`.

use std::fmt;

use wraith_core::TickId;

use crate::config::Timing;

/// The ghost's lifecycle phase, recomputed on every query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// The replay delay has not yet elapsed; nothing to draw.
    Warming,
    /// Replaying at full strength.
    Active,
    /// Recording has stopped and the remaining buffered window is
    /// inside the fade-out threshold.
    Fading,
    /// The buffer is exhausted after stop; the ghost is gone.
    Inactive,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warming => "warming",
            Self::Active => "active",
            Self::Fading => "fading",
            Self::Inactive => "inactive",
        };
        write!(f, "{name}")
    }
}

/// Derive the lifecycle from tick arithmetic.
///
/// `delayed_frame_available` is the result of the recorder's delayed
/// lookup this instant ([`TrailRecorder::frame`](crate::TrailRecorder::frame)
/// succeeded).
///
/// 1. Before `delay_ticks` ticks have elapsed → [`Lifecycle::Warming`].
/// 2. While recording → [`Lifecycle::Active`] if the delayed frame is
///    available, else still [`Lifecycle::Warming`].
/// 3. After [`stop_recording`](crate::TrailRecorder::stop_recording):
///    an unavailable delayed frame means [`Lifecycle::Inactive`];
///    otherwise `remaining = last_recorded − target` decides between
///    [`Lifecycle::Fading`] (inside the fade window) and
///    [`Lifecycle::Active`].
pub fn derive_lifecycle(
    current: TickId,
    timing: &Timing,
    stopped_at: Option<TickId>,
    last_recorded: Option<TickId>,
    delayed_frame_available: bool,
) -> Lifecycle {
    if current.0 < timing.delay_ticks {
        return Lifecycle::Warming;
    }
    if stopped_at.is_none() {
        return if delayed_frame_available {
            Lifecycle::Active
        } else {
            Lifecycle::Warming
        };
    }
    if !delayed_frame_available {
        return Lifecycle::Inactive;
    }
    // Stopped but the delayed frame still resolves: the window is
    // draining. An available frame implies at least one recorded tick.
    let Some(last) = last_recorded else {
        return Lifecycle::Inactive;
    };
    // Same target the delayed lookup uses: delay_ticks behind the
    // most recent record.
    let target = current.0.saturating_sub(timing.delay_ticks + 1);
    let remaining = last.0.saturating_sub(target);
    if remaining < timing.fade_ticks {
        Lifecycle::Fading
    } else {
        Lifecycle::Active
    }
}
