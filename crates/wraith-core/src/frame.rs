//! Positional frames: the unit of recorded history.

use std::fmt;

use crate::id::TickId;

/// A 2D integer grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal grid coordinate.
    pub x: i32,
    /// Vertical grid coordinate.
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An immutable snapshot of an actor's positions at one tick.
///
/// Positions are stored head-first, the way the host reports them.
/// [`Frame::new`] copies the caller's slice — a stored frame never
/// aliases caller-owned memory, so later in-place mutation by the host
/// cannot corrupt recorded history. Once stored, a frame is never
/// mutated; `Clone` is a deep copy by construction.
///
/// # Examples
///
/// ```
/// use wraith_core::{Frame, Position, TickId};
///
/// let body = [Position::new(3, 4), Position::new(3, 5)];
/// let frame = Frame::new(TickId(7), &body);
///
/// assert_eq!(frame.tick(), TickId(7));
/// assert_eq!(frame.head(), Some(Position::new(3, 4)));
/// assert_eq!(frame.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    tick: TickId,
    positions: Box<[Position]>,
}

impl Frame {
    /// Create a frame for `tick`, copying `positions`.
    ///
    /// A zero-length slice is valid: the actor may have no body this
    /// tick. Readers must treat an empty frame as "no sample".
    pub fn new(tick: TickId, positions: &[Position]) -> Self {
        Self {
            tick,
            positions: positions.into(),
        }
    }

    /// The tick this frame was recorded at.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The recorded positions, head-first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The head (first) position, or `None` for an empty frame.
    pub fn head(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the frame holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
