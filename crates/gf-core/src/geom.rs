//! Tile-aligned 2D geometry.
//!
//! # Coordinate model
//!
//! The world is a grid of square tiles, [`TILE`] world units on a side.
//! Actor positions are continuous `i32` coordinates in world units, anchored
//! at the bottom-left corner of the actor's tile box: an actor at `pos`
//! occupies the closed box `[pos, pos + TILE - 1]` on both axes.  `Up` is
//! +y.  Grid cell `(gx, gy)` maps to world `(gx * TILE, gy * TILE)`.
//!
//! Integer coordinates keep every containment and distance comparison exact;
//! squared distances are widened to `i64` so they cannot overflow.

use std::fmt;

/// Tile edge length in world units.
pub const TILE: i32 = 16;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Facing / movement direction — the four-way closed set every agent uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order usable for uniform random picks.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of this direction (`Up` is +y).
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, 1),
            Direction::Down  => (0, -1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Human-readable label, useful for logs and demo output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position in continuous world coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dist` units from `self` in `dir`.
    #[inline]
    pub fn step(self, dir: Direction, dist: i32) -> Point {
        let (dx, dy) = dir.offset();
        Point::new(self.x + dx * dist, self.y + dy * dist)
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn dist_sq(self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Does the tile box anchored at `self` contain `p`?
    ///
    /// The box is the closed interval `[self, self + TILE - 1]` on both axes.
    #[inline]
    pub fn box_contains(self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + TILE - 1
            && p.y >= self.y
            && p.y <= self.y + TILE - 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
