//! Random play on a selection engine.
//!
//! A playout feeds the engine clicks chosen at random, either anywhere on the
//! rendered grid (ghosts included) or as a walk through unselected neighbors.
//! The demo uses these to show the engine at work; the tests use them to
//! drive long click sequences through the path invariants.

use fastrand::Rng;

use crate::board::BoardProvider;
use crate::error::Result;
use crate::selection::{SelectionChange, SelectionPathEngine};

/// Click `n` uniformly chosen rendered positions.
pub fn random_clicks<B: BoardProvider>(
    engine: &mut SelectionPathEngine<B>,
    n: usize,
    rng: &mut Rng,
) -> Result<Vec<SelectionChange>> {
    let positions: Vec<_> = engine.grid().cells.iter().map(|cell| cell.position).collect();
    if positions.is_empty() {
        return Ok(Vec::new());
    }
    let mut changes = Vec::with_capacity(n);
    for _ in 0..n {
        let raw = positions[rng.usize(..positions.len())];
        changes.push(engine.toggle(raw)?);
    }
    Ok(changes)
}

/// Build a random contiguous path of up to `len` cells.
///
/// Starts from a random interior cell on an empty path and keeps extending
/// through a random unselected neighbor until `len` is reached or the walk is
/// boxed in. Returns the length reached.
pub fn random_path<B: BoardProvider>(
    engine: &mut SelectionPathEngine<B>,
    len: usize,
    rng: &mut Rng,
) -> Result<usize> {
    engine.clear();
    if len == 0 {
        return Ok(0);
    }
    let interior: Vec<_> = engine.board().dimensions().interior().collect();
    engine.toggle(interior[rng.usize(..interior.len())])?;

    while engine.current_path().len() < len {
        let Some(&last) = engine.current_path().last() else {
            break;
        };
        let candidates: Vec<_> = engine
            .board()
            .adjacencies(last)
            .into_iter()
            .filter(|&c| !engine.is_selected(c))
            .collect();
        if candidates.is_empty() {
            break;
        }
        engine.toggle(candidates[rng.usize(..candidates.len())])?;
    }
    Ok(engine.current_path().len())
}
