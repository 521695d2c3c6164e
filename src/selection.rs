//! The selection path state machine.
//!
//! A player spells a word by clicking a chain of adjacent cells. Every click
//! is routed through the ghost map to its interior cell and then applies one
//! of three transitions, checked in order:
//!
//! 1. **Undo** - the clicked cell is the last one selected: pop it.
//! 2. **Extend** - the clicked cell is unselected and adjacent to the last
//!    one: push it.
//! 3. **Restart** - anything else (empty path, a non-last selected cell, a
//!    non-adjacent cell): clear the path and start over at the clicked cell.
//!
//! The engine never mutates visuals; it reports a [`SelectionChange`] and the
//! presentation layer re-renders from it.

use std::fmt;

use strum::Display;
use tracing::{debug, error, info};

use crate::board::BoardProvider;
use crate::coords::Coordinates;
use crate::error::{Result, ToggleError};
use crate::ghost::GhostCellMap;
use crate::grid::RenderGrid;

/// Which rule a click applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Transition {
    Undo,
    Extend,
    Restart,
}

/// Cells whose selection state changed after one click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub transition: Transition,
    /// Newly selected cell (`None` on undo).
    pub selected: Option<Coordinates>,
    /// Cells that are no longer selected, most recent first. A restart on an
    /// already selected cell does not list that cell, since it stays selected.
    pub deselected: Vec<Coordinates>,
}

impl SelectionChange {
    /// Rendered positions to highlight: the selected cell and its ghosts.
    pub fn highlighted_positions(&self, ghosts: &GhostCellMap) -> Vec<Coordinates> {
        self.selected
            .iter()
            .flat_map(|&c| with_mirrors(ghosts, c))
            .collect()
    }

    /// Rendered positions to unhighlight: deselected cells and their ghosts.
    pub fn unhighlighted_positions(&self, ghosts: &GhostCellMap) -> Vec<Coordinates> {
        self.deselected
            .iter()
            .flat_map(|&c| with_mirrors(ghosts, c))
            .collect()
    }
}

impl fmt::Display for SelectionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.transition)?;
        if let Some(c) = self.selected {
            write!(f, " +{c}")?;
        }
        for c in &self.deselected {
            write!(f, " -{c}")?;
        }
        Ok(())
    }
}

fn with_mirrors(ghosts: &GhostCellMap, c: Coordinates) -> impl Iterator<Item = Coordinates> + '_ {
    std::iter::once(c).chain(ghosts.mirrors_of(c).iter().copied())
}

/// Holds the selection path for one board.
///
/// The board and ghost map are read-only after construction; the path is
/// only changed by [`toggle`](Self::toggle) and [`clear`](Self::clear).
pub struct SelectionPathEngine<B> {
    board: B,
    ghosts: GhostCellMap,
    grid: RenderGrid,
    path: Vec<Coordinates>,
}

impl<B: BoardProvider> SelectionPathEngine<B> {
    pub fn new(board: B) -> Self {
        let ghosts = GhostCellMap::new(board.dimensions(), board.board_type());
        let grid = RenderGrid::build(&board, &ghosts);
        info!(
            board_type = %board.board_type(),
            dimensions = %board.dimensions(),
            ghosts = grid.ghost_cells().count(),
            "selection engine ready"
        );
        Self {
            board,
            ghosts,
            grid,
            path: Vec::new(),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn ghosts(&self) -> &GhostCellMap {
        &self.ghosts
    }

    pub fn grid(&self) -> &RenderGrid {
        &self.grid
    }

    /// Snapshot of the selected cells, in selection order.
    pub fn current_path(&self) -> &[Coordinates] {
        &self.path
    }

    pub fn is_selected(&self, c: Coordinates) -> bool {
        self.path.contains(&c)
    }

    /// Faces along the path, concatenated.
    pub fn word(&self) -> String {
        self.path
            .iter()
            .filter_map(|&c| self.board.content_at(c))
            .collect()
    }

    /// Empty the path, returning the cleared cells most recent first.
    pub fn clear(&mut self) -> Vec<Coordinates> {
        let cleared: Vec<_> = self.path.drain(..).rev().collect();
        debug!(cleared = cleared.len(), "cleared path");
        cleared
    }

    /// Apply one click at a rendered (possibly ghost) position.
    ///
    /// # Errors
    /// [`ToggleError::Unmapped`] if no rendered cell occupies `raw`. The
    /// presentation layer only produces positions from the render grid, so
    /// this is a caller defect rather than a user mistake.
    pub fn toggle(&mut self, raw: Coordinates) -> Result<SelectionChange> {
        let Some(clicked) = self.ghosts.interior_of(raw) else {
            error!(%raw, "click on a position with no interior cell");
            return Err(ToggleError::Unmapped(raw));
        };

        let change = match self.path.last().copied() {
            Some(last) if last == clicked => {
                self.path.pop();
                SelectionChange {
                    transition: Transition::Undo,
                    selected: None,
                    deselected: vec![clicked],
                }
            }
            Some(last)
                if !self.path.contains(&clicked)
                    && self.board.adjacencies(last).contains(&clicked) =>
            {
                self.path.push(clicked);
                SelectionChange {
                    transition: Transition::Extend,
                    selected: Some(clicked),
                    deselected: Vec::new(),
                }
            }
            _ => {
                let deselected = self.path.drain(..).rev().filter(|&c| c != clicked).collect();
                self.path.push(clicked);
                SelectionChange {
                    transition: Transition::Restart,
                    selected: Some(clicked),
                    deselected,
                }
            }
        };

        debug!(
            transition = %change.transition,
            %raw,
            %clicked,
            path_len = self.path.len(),
            "toggled"
        );
        Ok(change)
    }
}

impl<B: BoardProvider> fmt::Display for SelectionPathEngine<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid.render(|c| self.is_selected(c)))
    }
}
