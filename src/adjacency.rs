//! Topology-aware neighborhoods.

use std::collections::BTreeSet;

use crate::constants::NEIGHBOR_OFFSETS;
use crate::coords::{Coordinates, Dimensions};
use crate::topology::{BoardType, resolve};

/// The in-range Moore neighbors of an interior coordinate.
///
/// Each of the 8 offsets is resolved through the topology and dropped if it
/// has no equivalent. On small wrapping boards several offsets can land on the
/// same cell (or on `c` itself); the set keeps one copy, and `c` is never its
/// own neighbor.
pub fn adjacent_to(dim: Dimensions, board_type: BoardType, c: Coordinates) -> BTreeSet<Coordinates> {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dx, dy)| c.offset(dx, dy))
        .filter_map(|n| resolve(dim, board_type, n.x, n.y))
        .filter(|&n| n != c)
        .collect()
}
