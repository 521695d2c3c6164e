//! Board topologies and coordinate resolution.
//!
//! A topology is a pair of per-axis alignments. A wrapping axis reduces any
//! coordinate modulo its extent; a fixed axis accepts only coordinates that
//! are already in range. Resolution is how every out-of-range probe (a ghost
//! position, a neighbor across the edge) finds the interior cell it stands for.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::coords::{Coordinates, Dimensions};
use crate::error::{Result, ToggleError};

/// Wrap rule for a single axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxisAlignment {
    /// Coordinates outside [0, extent) have no equivalent.
    None,
    /// Coordinates are reduced modulo the extent.
    Wrap,
}

impl AxisAlignment {
    /// Resolve a single axis coordinate against an extent.
    #[inline]
    pub fn resolve(self, k: i32, extent: i32) -> Option<i32> {
        match self {
            AxisAlignment::Wrap => Some(k.rem_euclid(extent)),
            AxisAlignment::None => (0..extent).contains(&k).then_some(k),
        }
    }

    pub fn wraps(self) -> bool {
        self == AxisAlignment::Wrap
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum BoardType {
    #[strum(to_string = "rectangle")]
    Rectangle,
    /// Wraps horizontally: the left and right edges meet.
    #[strum(to_string = "cylinder-x")]
    CylinderX,
    /// Wraps vertically: the top and bottom edges meet.
    #[strum(to_string = "cylinder-y")]
    CylinderY,
    #[strum(to_string = "torus")]
    Torus,
}

impl BoardType {
    pub fn from_axes(x: AxisAlignment, y: AxisAlignment) -> Self {
        match (x, y) {
            (AxisAlignment::None, AxisAlignment::None) => BoardType::Rectangle,
            (AxisAlignment::Wrap, AxisAlignment::None) => BoardType::CylinderX,
            (AxisAlignment::None, AxisAlignment::Wrap) => BoardType::CylinderY,
            (AxisAlignment::Wrap, AxisAlignment::Wrap) => BoardType::Torus,
        }
    }

    pub fn x_axis(self) -> AxisAlignment {
        match self {
            BoardType::CylinderX | BoardType::Torus => AxisAlignment::Wrap,
            BoardType::Rectangle | BoardType::CylinderY => AxisAlignment::None,
        }
    }

    pub fn y_axis(self) -> AxisAlignment {
        match self {
            BoardType::CylinderY | BoardType::Torus => AxisAlignment::Wrap,
            BoardType::Rectangle | BoardType::CylinderX => AxisAlignment::None,
        }
    }

    /// Parse a board type name, reporting failures as [`ToggleError`].
    pub fn parse(name: &str) -> Result<Self> {
        BoardType::from_str(name).map_err(|_| ToggleError::UnknownBoardType(name.to_string()))
    }

    /// Map (x, y) to its in-range equivalent, if this topology has one.
    pub fn convert(self, dim: Dimensions, x: i32, y: i32) -> Option<Coordinates> {
        let rx = self.x_axis().resolve(x, dim.width())?;
        let ry = self.y_axis().resolve(y, dim.height())?;
        Some(Coordinates::new(rx, ry))
    }
}

/// Resolve any integer coordinate to its interior equivalent.
///
/// Returns `None` when a fixed axis is out of range; this is an expected
/// answer for border probes, not a failure.
pub fn resolve(dim: Dimensions, board_type: BoardType, x: i32, y: i32) -> Option<Coordinates> {
    board_type.convert(dim, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn dim(w: i32, h: i32) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_wrap_axis_is_total() {
        for extent in 1..6 {
            for k in -20..20 {
                let r = AxisAlignment::Wrap.resolve(k, extent).unwrap();
                assert!((0..extent).contains(&r));
                assert_eq!((r - k) % extent, 0, "k={k} extent={extent}");
            }
        }
    }

    #[test]
    fn test_fixed_axis_is_exclusive() {
        for extent in 1..6 {
            for k in -20..20 {
                let r = AxisAlignment::None.resolve(k, extent);
                if (0..extent).contains(&k) {
                    assert_eq!(r, Some(k));
                } else {
                    assert_eq!(r, None);
                }
            }
        }
    }

    #[test]
    fn test_cylinder_x_resolution() {
        let d = dim(4, 4);
        assert_eq!(
            resolve(d, BoardType::CylinderX, -1, 2),
            Some(Coordinates::new(3, 2))
        );
        assert_eq!(resolve(d, BoardType::CylinderX, 2, -1), None);
    }

    #[test]
    fn test_torus_corner_resolution() {
        let d = dim(4, 3);
        assert_eq!(
            resolve(d, BoardType::Torus, 4, 3),
            Some(Coordinates::new(0, 0))
        );
        assert_eq!(
            resolve(d, BoardType::Torus, -1, -1),
            Some(Coordinates::new(3, 2))
        );
    }

    #[test]
    fn test_rectangle_rejects_outside() {
        let d = dim(3, 3);
        assert_eq!(resolve(d, BoardType::Rectangle, 3, 0), None);
        assert_eq!(resolve(d, BoardType::Rectangle, 0, -1), None);
        assert_eq!(
            resolve(d, BoardType::Rectangle, 2, 2),
            Some(Coordinates::new(2, 2))
        );
    }

    #[test]
    fn test_axes_roundtrip() {
        for bt in BoardType::iter() {
            assert_eq!(BoardType::from_axes(bt.x_axis(), bt.y_axis()), bt);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(BoardType::parse("torus"), Ok(BoardType::Torus));
        assert_eq!(BoardType::parse("Cylinder-X"), Ok(BoardType::CylinderX));
        assert_eq!(BoardType::CylinderY.to_string(), "cylinder-y");
        assert_eq!(
            BoardType::parse("sphere"),
            Err(ToggleError::UnknownBoardType("sphere".to_string()))
        );
    }
}
