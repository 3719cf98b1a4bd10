//! Benchmark profiles for the Wraith temporal-replay engine.
//!
//! Pre-built [`Timing`] profiles shared by the criterion benches:
//!
//! - [`reference_profile`]: a typical arcade setup (30-tick delay,
//!   120-frame buffer)
//! - [`stress_profile`]: a long-memory setup (600-tick delay,
//!   4096-frame buffer) for worst-case snapshot costs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wraith_recorder::Timing;

/// A typical arcade setup: 3 s of delay and 12 s of history at 10 Hz.
pub fn reference_profile() -> Timing {
    Timing::from_ticks(30, 120, 10)
}

/// A long-memory setup for worst-case snapshot and restore costs.
pub fn stress_profile() -> Timing {
    Timing::from_ticks(600, 4096, 30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_satisfy_the_capacity_floor() {
        let reference = reference_profile();
        assert!(reference.capacity as u64 > reference.delay_ticks);

        let stress = stress_profile();
        assert!(stress.capacity as u64 > stress.delay_ticks);
    }
}
