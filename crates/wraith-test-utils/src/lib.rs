//! Test fixtures and deterministic drivers for Wraith development.
//!
//! Deterministic position data for exercising recorders and schedulers:
//! seeded ChaCha8 random walks (identical sequences for identical
//! seeds) and straight body segments, plus a helper to drive a
//! recorder through a pre-built walk.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use wraith_core::Position;
use wraith_recorder::TrailRecorder;

/// A deterministic random walk: one position vector per tick.
///
/// The walk starts at the origin and moves one cell in a random
/// cardinal direction each tick; the body trails the head with
/// `body_len` segments. Identical seeds produce identical walks.
pub fn walk(seed: u64, ticks: usize, body_len: usize) -> Vec<Vec<Position>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut head = Position::new(0, 0);
    let mut body = vec![head; body_len.max(1)];
    let mut frames = Vec::with_capacity(ticks);

    for _ in 0..ticks {
        head = match rng.random_range(0..4u8) {
            0 => Position::new(head.x + 1, head.y),
            1 => Position::new(head.x - 1, head.y),
            2 => Position::new(head.x, head.y + 1),
            _ => Position::new(head.x, head.y - 1),
        };
        body.rotate_right(1);
        body[0] = head;
        frames.push(body.clone());
    }
    frames
}

/// A straight body segment extending downward from `head`, head-first.
pub fn straight(head: Position, len: usize) -> Vec<Position> {
    (0..len as i32)
        .map(|i| Position::new(head.x, head.y + i))
        .collect()
}

/// Record every frame of a pre-built walk into `recorder`.
pub fn record_walk(recorder: &mut TrailRecorder, walk: &[Vec<Position>]) {
    for frame in walk {
        recorder.record(frame);
    }
}
