//! Geometry primitives for proximity-based focus selection.
//!
//! Each window is reduced to a single *anchor point* on one of its edges
//! (the edge facing the move), and candidates are ranked by Euclidean
//! distance between anchors.  A small fixed [`SHIFT`] applied to the
//! reference anchor makes exact ties deterministic: horizontal moves
//! prefer the topmost candidate, vertical moves the leftmost.
//!
//! The directional predicates are **inclusive** (`<=` / `>=`): a candidate
//! whose anchor lands exactly on the reference anchor still qualifies.
//! Adjacent window edges frequently share a coordinate, so a strict
//! comparison would miss direct neighbours.

/// Tie-break shift, in screen units, subtracted from the reference anchor's
/// perpendicular-axis coordinate.
pub const SHIFT: f64 = 2.0;

/// A point in screen space.  Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether this point is left of `other` (inclusive).
    pub fn left_of(&self, other: &Point) -> bool {
        self.x <= other.x
    }

    /// Whether this point is right of `other` (inclusive).
    pub fn right_of(&self, other: &Point) -> bool {
        self.x >= other.x
    }

    /// Whether this point is above `other` (inclusive).
    pub fn up_of(&self, other: &Point) -> bool {
        self.y <= other.y
    }

    /// Whether this point is below `other` (inclusive).
    pub fn down_of(&self, other: &Point) -> bool {
        self.y >= other.y
    }

    /// This point moved `amount` units to the left.
    pub fn shifted_left(self, amount: f64) -> Point {
        Point {
            x: self.x - amount,
            y: self.y,
        }
    }

    /// This point moved `amount` units up.
    pub fn shifted_up(self, amount: f64) -> Point {
        Point {
            x: self.x,
            y: self.y - amount,
        }
    }
}

/// An axis-aligned rectangle with non-negative dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Midpoint of the left edge.
    pub fn left_anchor(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }

    /// Midpoint of the right edge.
    pub fn right_anchor(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }

    /// Midpoint of the top edge.
    pub fn top_anchor(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }

    /// Midpoint of the bottom edge.
    pub fn bottom_anchor(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height)
    }
}

//  Tests
