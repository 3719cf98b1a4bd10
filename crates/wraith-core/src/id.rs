//! The [`TickId`] simulation tick counter.

use std::fmt;

/// Monotonically increasing simulation tick counter.
///
/// One tick is one discrete simulation step; replay delay and history
/// depth are both measured in ticks. Ticks are unsigned — "before tick
/// zero" states (e.g. a replay target that has not yet elapsed) are
/// expressed as `None` via [`checked_back`](TickId::checked_back),
/// never as a negative sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The successor tick.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The tick `ticks` steps in the past, or `None` if that would
    /// reach before tick zero.
    #[must_use]
    pub fn checked_back(self, ticks: u64) -> Option<Self> {
        self.0.checked_sub(ticks).map(Self)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
