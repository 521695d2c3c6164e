//! Ghost cells: the one-cell border that mirrors interior cells across a
//! wrapping edge.
//!
//! On a wrapping axis the rendered grid grows by one position on each side.
//! Those positions are out of range, but each resolves through the topology
//! to exactly one interior cell, whose face it shows and to which its clicks
//! are forwarded. Fixed axes get no border at all.

use std::collections::{BTreeMap, BTreeSet};

use crate::coords::{Coordinates, Dimensions};
use crate::topology::{BoardType, resolve};

/// Rendered grid position of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPlacement {
    pub row: usize,
    pub column: usize,
}

/// Immutable raw-to-interior lookup for one board.
#[derive(Clone, Debug)]
pub struct GhostCellMap {
    dim: Dimensions,
    board_type: BoardType,
    /// Ghost position -> interior cell it mirrors.
    ghosts: BTreeMap<Coordinates, Coordinates>,
    /// Interior cell -> ghost positions mirroring it.
    mirrors: BTreeMap<Coordinates, Vec<Coordinates>>,
}

impl GhostCellMap {
    pub fn new(dim: Dimensions, board_type: BoardType) -> Self {
        let mut ghosts = BTreeMap::new();
        let mut mirrors: BTreeMap<Coordinates, Vec<Coordinates>> = BTreeMap::new();
        for g in Self::ghost_ring_for(board_type, dim) {
            // Every ring position resolves: it is only generated on wrapping axes.
            if let Some(interior) = resolve(dim, board_type, g.x, g.y) {
                ghosts.insert(g, interior);
                mirrors.entry(interior).or_default().push(g);
            }
        }
        Self {
            dim,
            board_type,
            ghosts,
            mirrors,
        }
    }

    /// The border positions to render for a topology.
    ///
    /// Side rows exist only along wrapping axes; the four diagonal corners
    /// exist only when both axes wrap.
    pub fn ghost_ring_for(board_type: BoardType, dim: Dimensions) -> BTreeSet<Coordinates> {
        let (w, h) = (dim.width(), dim.height());
        let wrap_x = board_type.x_axis().wraps();
        let wrap_y = board_type.y_axis().wraps();
        let mut ring = BTreeSet::new();

        if wrap_x {
            for y in 0..h {
                ring.insert(Coordinates::new(-1, y));
                ring.insert(Coordinates::new(w, y));
            }
        }
        if wrap_y {
            for x in 0..w {
                ring.insert(Coordinates::new(x, -1));
                ring.insert(Coordinates::new(x, h));
            }
        }
        if wrap_x && wrap_y {
            for (x, y) in [(-1, -1), (-1, h), (w, -1), (w, h)] {
                ring.insert(Coordinates::new(x, y));
            }
        }
        ring
    }

    /// Interior cell behind a rendered position.
    ///
    /// Interior positions map to themselves, so every click can be routed
    /// through here. Positions outside the board and its ring have no mapping.
    pub fn interior_of(&self, raw: Coordinates) -> Option<Coordinates> {
        if self.dim.contains(raw) {
            return Some(raw);
        }
        self.ghosts.get(&raw).copied()
    }

    pub fn is_ghost(&self, raw: Coordinates) -> bool {
        self.ghosts.contains_key(&raw)
    }

    /// Ghost positions mirroring an interior cell.
    pub fn mirrors_of(&self, interior: Coordinates) -> &[Coordinates] {
        self.mirrors
            .get(&interior)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All ghost positions with the cell each mirrors.
    pub fn ghosts(&self) -> impl Iterator<Item = (Coordinates, Coordinates)> + '_ {
        self.ghosts.iter().map(|(&g, &c)| (g, c))
    }

    /// Border width on the x and y axes.
    pub fn offsets(&self) -> (usize, usize) {
        (
            usize::from(self.board_type.x_axis().wraps()),
            usize::from(self.board_type.y_axis().wraps()),
        )
    }

    /// Rendered grid size as (rows, columns).
    pub fn grid_size(&self) -> (usize, usize) {
        let (ox, oy) = self.offsets();
        (
            self.dim.height() as usize + 2 * oy,
            self.dim.width() as usize + 2 * ox,
        )
    }

    /// Rendered placement of an interior or ghost position.
    pub fn placement(&self, raw: Coordinates) -> Option<GridPlacement> {
        self.interior_of(raw)?;
        let (ox, oy) = self.offsets();
        Some(GridPlacement {
            row: (raw.y + oy as i32) as usize,
            column: (raw.x + ox as i32) as usize,
        })
    }
}
