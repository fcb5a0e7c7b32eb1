use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`, without wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Head-first trail of occupied cells with a target length.
///
/// The trail is allowed to hold the same cell more than once; a stationary
/// snake keeps pushing its spawn cell until it starts moving.
#[derive(Debug, Clone)]
pub struct Snake {
    trail: VecDeque<Position>,
    capacity: usize,
}

impl Snake {
    /// Creates a one-cell snake at `start` that will grow to `capacity` cells.
    #[must_use]
    pub fn new(start: Position, capacity: usize) -> Self {
        let mut trail = VecDeque::with_capacity(capacity + 1);
        trail.push_front(start);

        Self {
            trail,
            capacity: capacity.max(1),
        }
    }

    /// Creates a snake from explicit trail cells (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, capacity: usize) -> Self {
        assert!(!segments.is_empty(), "snake trail needs at least a head");

        Self {
            trail: VecDeque::from(segments),
            capacity: capacity.max(1),
        }
    }

    /// Pushes a new head, then drops tail cells while the trail is longer
    /// than its capacity.
    pub fn push_head(&mut self, head: Position) {
        self.trail.push_front(head);
        while self.trail.len() > self.capacity {
            let _ = self.trail.pop_back();
        }
    }

    /// Raises the target length by one. The extra cell materialises on the
    /// next push, because that push is no longer trimmed.
    pub fn grow(&mut self) {
        self.capacity += 1;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .trail
            .front()
            .expect("snake trail must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.trail.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.trail.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the target trail length.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of different cells under the trail.
    #[must_use]
    pub fn distinct_cells(&self) -> usize {
        self.trail.iter().collect::<HashSet<_>>().len()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Head-first view of the trail.
    #[must_use]
    pub fn trail(&self) -> &VecDeque<Position> {
        &self.trail
    }

    /// Iterates over trail segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.trail.iter()
    }
}
