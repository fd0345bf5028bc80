//! Core geometry and time types for termouse.
//!
//! Everything here is a plain value: grid positions, sizes and
//! axis-aligned boxes measured in terminal cells.

use std::time::{SystemTime, UNIX_EPOCH};

/// Event timestamp in milliseconds since the Unix epoch.
///
/// Timestamps are only ever compared with each other, so callers replaying
/// recorded input may use any monotonic millisecond origin.
pub type Timestamp = u64;

/// Grid coordinate type.
pub type Coord = i32;

/// Current wall-clock time as a [`Timestamp`].
pub fn now_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Timestamp)
        .unwrap_or(0)
}

// ============================================================================
// Position
// ============================================================================

/// A 0-based cell position on the terminal grid.
///
/// Coordinates may legitimately be negative (e.g. positions relative to a
/// scrolled viewport).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column.
    pub x: Coord,
    /// Row.
    pub y: Coord,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a new position.
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Manhattan distance (`|dx| + |dy|`) between two positions,
    /// saturating at `u32::MAX`.
    pub fn distance(self, other: Position) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Check if `other` lies within `tolerance` cells (Manhattan) of `self`.
    ///
    /// A negative tolerance never matches.
    pub fn within_tolerance(self, other: Position, tolerance: i32) -> bool {
        tolerance >= 0 && self.distance(other) <= tolerance as u32
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Size
// ============================================================================

/// Width and height in cells. Negative inputs are clamped to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: Coord,
    height: Coord,
}

impl Size {
    /// Create a new size, normalizing negative dimensions to 0.
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Width in columns.
    pub fn width(&self) -> Coord {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> Coord {
        self.height
    }

    /// Check if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ============================================================================
// BoundingBox
// ============================================================================

/// An axis-aligned rectangle with half-open containment.
///
/// A box at `(x, y)` with size `w × h` covers columns `[x, x + w)` and rows
/// `[y, y + h)`. Zero-area boxes contain nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    x: Coord,
    y: Coord,
    width: Coord,
    height: Coord,
}

impl BoundingBox {
    /// Create a new bounding box. Negative width/height become 0.
    pub fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Left column.
    pub fn x(&self) -> Coord {
        self.x
    }

    /// Top row.
    pub fn y(&self) -> Coord {
        self.y
    }

    /// Width in columns.
    pub fn width(&self) -> Coord {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> Coord {
        self.height
    }

    /// Top-left corner.
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Size of the box.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the position lies inside the box.
    pub fn contains(&self, pos: Position) -> bool {
        // i64 so boxes near i32::MAX cannot overflow.
        let (px, py) = (i64::from(pos.x), i64::from(pos.y));
        let (bx, by) = (i64::from(self.x), i64::from(self.y));
        px >= bx
            && px < bx + i64::from(self.width)
            && py >= by
            && py < by + i64::from(self.height)
    }
}
