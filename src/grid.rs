//! Renderable grid description.
//!
//! Each rendered cell is a plain value: where it sits, which interior cell
//! it stands for, and the face it shows. No behavior is attached; clicks are
//! routed by position through [`crate::selection::SelectionPathEngine`].

use crate::board::BoardProvider;
use crate::coords::Coordinates;
use crate::ghost::{GhostCellMap, GridPlacement};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderCell {
    /// Position as clicked; out of range for ghosts.
    pub position: Coordinates,
    /// Interior cell this position stands for.
    pub interior: Coordinates,
    pub content: String,
    pub placement: GridPlacement,
    pub ghost: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderGrid {
    pub rows: usize,
    pub columns: usize,
    /// Interior cells first (row-major), then ghosts.
    pub cells: Vec<RenderCell>,
}

impl RenderGrid {
    pub fn build<B: BoardProvider>(board: &B, ghosts: &GhostCellMap) -> Self {
        let (rows, columns) = ghosts.grid_size();
        let dim = board.dimensions();
        let interior = dim.interior().map(|c| (c, c, false));
        let ring = ghosts.ghosts().map(|(g, c)| (g, c, true));

        let cells = interior
            .chain(ring)
            .filter_map(|(position, interior, ghost)| {
                let content = if ghost {
                    board.out_of_bounds_content_at(position.x, position.y)?
                } else {
                    board.content_at(position)?
                };
                Some(RenderCell {
                    position,
                    interior,
                    content: content.to_string(),
                    placement: ghosts.placement(position)?,
                    ghost,
                })
            })
            .collect();

        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn cell(&self, position: Coordinates) -> Option<&RenderCell> {
        self.cells.iter().find(|cell| cell.position == position)
    }

    pub fn ghost_cells(&self) -> impl Iterator<Item = &RenderCell> {
        self.cells.iter().filter(|cell| cell.ghost)
    }

    /// Text rendering; `selected` decides which interior cells are bracketed.
    ///
    /// Interior cells render as ` A `, ghosts as `(A)`, selected cells and
    /// their ghosts as `[A]`, and empty grid slots as blanks.
    pub fn render(&self, selected: impl Fn(Coordinates) -> bool) -> String {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.content.chars().count())
            .max()
            .unwrap_or(1);
        let blank = " ".repeat(width + 2);
        let mut slots = vec![vec![blank; self.columns]; self.rows];

        for cell in &self.cells {
            let (open, close) = if selected(cell.interior) {
                ('[', ']')
            } else if cell.ghost {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            slots[cell.placement.row][cell.placement.column] =
                format!("{open}{:<width$}{close}", cell.content);
        }

        let mut out = String::new();
        for row in slots {
            out.push_str(row.join(" ").trim_end());
            out.push('\n');
        }
        out
    }
}

/// Build the renderable grid for a board: interior cells plus its ghost ring.
pub fn initialize<B: BoardProvider>(board: &B) -> RenderGrid {
    let ghosts = GhostCellMap::new(board.dimensions(), board.board_type());
    RenderGrid::build(board, &ghosts)
}
