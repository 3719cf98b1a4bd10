//! Recorder configuration and duration→tick resolution.
//!
//! Hosts configure the recorder in wall-clock durations
//! ([`RecorderConfig`]); the recorder itself runs entirely in ticks
//! ([`Timing`]). Misconfiguration is corrected by clamping to safe
//! minimums rather than rejected — this is gameplay-adjacent
//! infrastructure, and a degraded ghost is preferable to a crashed run.

use std::time::Duration;

/// Wall-clock configuration for a [`TrailRecorder`](crate::TrailRecorder).
///
/// Fixed for the recorder's lifetime. Resolved to tick counts once at
/// construction via [`resolve`](RecorderConfig::resolve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Duration of one simulation tick.
    pub tick_interval: Duration,
    /// Delay between an action happening and the ghost replaying it.
    pub replay_delay: Duration,
    /// How much positional history the ring buffer retains.
    pub history_window: Duration,
    /// How long the ghost fades out after recording stops.
    pub fade_out: Duration,
}

impl Default for RecorderConfig {
    /// A 10 Hz arcade profile: 3 s replay delay, 6 s of history,
    /// 1 s fade-out.
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            replay_delay: Duration::from_secs(3),
            history_window: Duration::from_secs(6),
            fade_out: Duration::from_secs(1),
        }
    }
}

impl RecorderConfig {
    /// Resolve wall-clock durations to tick counts.
    ///
    /// `delay_ticks = ceil(replay_delay / tick_interval)`, capacity
    /// and fade computed the same way with their floors applied. A
    /// zero `tick_interval` is clamped to 1 ns before dividing.
    pub fn resolve(&self) -> Timing {
        let tick = self.tick_interval.max(Duration::from_nanos(1));
        let delay_ticks = ticks_ceil(self.replay_delay, tick);
        let history_ticks = ticks_ceil(self.history_window, tick);
        let fade_ticks = ticks_ceil(self.fade_out, tick);
        Timing::from_ticks(delay_ticks, history_ticks as usize, fade_ticks)
    }
}

/// Tick-denominated timing for a recorder, with all floors applied.
///
/// Invariant: `capacity >= delay_ticks + 1`, so the delayed frame can
/// never be evicted before it is first read. `fade_ticks >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Replay delay in ticks.
    pub delay_ticks: u64,
    /// Ring buffer capacity in frames.
    pub capacity: usize,
    /// Fade-out window in ticks.
    pub fade_ticks: u64,
}

impl Timing {
    /// Build a timing directly from tick counts, clamping to the safe
    /// minimums (`capacity >= delay_ticks + 1`, `fade_ticks >= 1`).
    pub fn from_ticks(delay_ticks: u64, capacity: usize, fade_ticks: u64) -> Self {
        let floor = usize::try_from(delay_ticks)
            .ok()
            .and_then(|d| d.checked_add(1))
            .unwrap_or(usize::MAX);
        Self {
            delay_ticks,
            capacity: capacity.max(floor),
            fade_ticks: fade_ticks.max(1),
        }
    }
}

/// `ceil(duration / tick)` in whole ticks.
fn ticks_ceil(duration: Duration, tick: Duration) -> u64 {
    let num = duration.as_nanos();
    let den = tick.as_nanos();
    u64::try_from(num.div_ceil(den)).unwrap_or(u64::MAX)
}
