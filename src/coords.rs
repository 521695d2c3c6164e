//! Plain value types for board positions and extents.

use std::fmt;

use crate::constants::MAX_EXTENT;
use crate::error::{Result, ToggleError};

/// An (x, y) position. Any integer pair is representable; whether it names a
/// cell depends on the board's dimensions and topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy) without any wrapping.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Board extents. Both sides lie in `1..=MAX_EXTENT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: i32,
    height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if !(1..=MAX_EXTENT).contains(&width) || !(1..=MAX_EXTENT).contains(&height) {
            return Err(ToggleError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of interior cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `c` lies in [0, width) x [0, height).
    pub fn contains(&self, c: Coordinates) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    /// Row-major index of an interior coordinate.
    pub fn index(&self, c: Coordinates) -> Option<usize> {
        self.contains(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    /// All interior coordinates in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = Coordinates> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coordinates::new(x, y)))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
