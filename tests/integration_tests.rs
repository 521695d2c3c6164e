//! Integration tests for toggle-rust
//!
//! Scenario tests walk through concrete click sequences on each topology;
//! property tests sweep every board type over a range of sizes, and use
//! seeded random clicks to check the selection path invariants.

use std::collections::BTreeSet;

use fastrand::Rng;
use strum::IntoEnumIterator;

use toggle_rust::adjacency::adjacent_to;
use toggle_rust::board::{Board, BoardProvider};
use toggle_rust::coords::{Coordinates, Dimensions};
use toggle_rust::error::ToggleError;
use toggle_rust::ghost::GhostCellMap;
use toggle_rust::grid::initialize;
use toggle_rust::playout::{random_clicks, random_path};
use toggle_rust::selection::{SelectionPathEngine, Transition};
use toggle_rust::topology::{AxisAlignment, BoardType, resolve};

// =============================================================================
// Helper functions
// =============================================================================

fn c(x: i32, y: i32) -> Coordinates {
    Coordinates::new(x, y)
}

fn dim(w: i32, h: i32) -> Dimensions {
    Dimensions::new(w, h).unwrap()
}

/// A board whose faces are "0", "1", ... in row-major order, so every cell
/// shows a distinct face.
fn numbered_board(board_type: BoardType, w: i32, h: i32) -> Board {
    let d = dim(w, h);
    Board::new(board_type, d, (0..d.area()).map(|i| i.to_string())).unwrap()
}

/// Sizes swept by the property tests, including degenerate 1- and 2-wide boards.
fn sizes() -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for w in 1..=5 {
        for h in 1..=5 {
            out.push((w, h));
        }
    }
    out
}

/// Assert the selection path invariants: distinct cells, each consecutive
/// pair adjacent.
fn assert_path_invariants<B: BoardProvider>(engine: &SelectionPathEngine<B>) {
    let path = engine.current_path();
    let distinct: BTreeSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "duplicate cell in {path:?}");
    for pair in path.windows(2) {
        assert!(
            engine.board().adjacencies(pair[0]).contains(&pair[1]),
            "{} and {} are not adjacent in {path:?}",
            pair[0],
            pair[1]
        );
    }
    for &cell in path {
        assert!(engine.board().dimensions().contains(cell));
    }
}

// =============================================================================
// Topology resolution
// =============================================================================

#[test]
fn test_resolve_totality_on_wrapping_axes() {
    for (w, h) in sizes() {
        let d = dim(w, h);
        for x in -12..12 {
            for y in -12..12 {
                let r = resolve(d, BoardType::Torus, x, y).unwrap();
                assert_eq!(r, c(x.rem_euclid(w), y.rem_euclid(h)));
            }
        }
    }
}

#[test]
fn test_resolve_exclusivity_on_fixed_axes() {
    for (w, h) in sizes() {
        let d = dim(w, h);
        for x in -6..10 {
            for y in -6..10 {
                let inside = d.contains(c(x, y));
                assert_eq!(resolve(d, BoardType::Rectangle, x, y).is_some(), inside);
                if inside {
                    assert_eq!(resolve(d, BoardType::Rectangle, x, y), Some(c(x, y)));
                }
            }
        }
    }
}

#[test]
fn test_resolve_mixed_axes() {
    for bt in BoardType::iter() {
        let d = dim(4, 4);
        for x in -5..9 {
            for y in -5..9 {
                let rx = bt.x_axis().resolve(x, 4);
                let ry = bt.y_axis().resolve(y, 4);
                let expected = rx.zip(ry).map(|(x, y)| c(x, y));
                assert_eq!(resolve(d, bt, x, y), expected, "{bt} ({x},{y})");
            }
        }
    }
}

#[test]
fn test_cylinder_scenario() {
    let d = dim(4, 4);
    assert_eq!(resolve(d, BoardType::CylinderX, -1, 2), Some(c(3, 2)));
    assert_eq!(resolve(d, BoardType::CylinderX, 2, -1), None);
    assert_eq!(BoardType::CylinderX.y_axis(), AxisAlignment::None);
}

// =============================================================================
// Adjacency
// =============================================================================

#[test]
fn test_adjacency_symmetry() {
    for bt in BoardType::iter() {
        for (w, h) in sizes() {
            let d = dim(w, h);
            for a in d.interior() {
                for b in adjacent_to(d, bt, a) {
                    assert!(
                        adjacent_to(d, bt, b).contains(&a),
                        "{bt} {d}: {a} -> {b} but not back"
                    );
                }
            }
        }
    }
}

#[test]
fn test_torus_always_has_eight_neighbors() {
    for w in 3..=6 {
        for h in 3..=6 {
            let d = dim(w, h);
            for a in d.interior() {
                assert_eq!(adjacent_to(d, BoardType::Torus, a).len(), 8, "{d} {a}");
            }
        }
    }
}

#[test]
fn test_torus_scenario() {
    let adj = adjacent_to(dim(4, 4), BoardType::Torus, c(0, 0));
    let expected: BTreeSet<_> = [
        c(3, 3),
        c(3, 0),
        c(3, 1),
        c(0, 3),
        c(0, 1),
        c(1, 3),
        c(1, 0),
        c(1, 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(adj, expected);
}

#[test]
fn test_rectangle_neighbor_counts() {
    let d = dim(4, 4);
    let counts: Vec<usize> = d
        .interior()
        .map(|a| adjacent_to(d, BoardType::Rectangle, a).len())
        .collect();
    assert_eq!(counts, vec![3, 5, 5, 3, 5, 8, 8, 5, 5, 8, 8, 5, 3, 5, 5, 3]);
}

#[test]
fn test_neighbors_are_interior_and_exclude_self() {
    for bt in BoardType::iter() {
        for (w, h) in sizes() {
            let d = dim(w, h);
            for a in d.interior() {
                let adj = adjacent_to(d, bt, a);
                assert!(!adj.contains(&a));
                assert!(adj.iter().all(|&n| d.contains(n)));
            }
        }
    }
}

// =============================================================================
// Ghost cells
// =============================================================================

#[test]
fn test_ghost_mirroring() {
    for bt in BoardType::iter() {
        for (w, h) in sizes() {
            let board = numbered_board(bt, w, h);
            let map = GhostCellMap::new(board.dimensions(), bt);
            let grid = initialize(&board);
            for cell in grid.ghost_cells() {
                let interior = map.interior_of(cell.position).unwrap();
                assert_eq!(interior, cell.interior);
                assert_eq!(Some(cell.content.as_str()), board.content_at(interior));
                assert_eq!(
                    board.adjacencies(cell.interior),
                    adjacent_to(board.dimensions(), bt, interior)
                );
            }
        }
    }
}

#[test]
fn test_ghost_ring_only_on_wrapping_axes() {
    for bt in BoardType::iter() {
        let d = dim(4, 3);
        for g in GhostCellMap::ghost_ring_for(bt, d) {
            assert!(!d.contains(g));
            if !(0..4).contains(&g.x) {
                assert!(bt.x_axis().wraps(), "{bt}: {g}");
                assert!(g.x == -1 || g.x == 4);
            }
            if !(0..3).contains(&g.y) {
                assert!(bt.y_axis().wraps(), "{bt}: {g}");
                assert!(g.y == -1 || g.y == 3);
            }
        }
    }
}

#[test]
fn test_interior_of_is_identity_inside() {
    for bt in BoardType::iter() {
        let d = dim(3, 5);
        let map = GhostCellMap::new(d, bt);
        for a in d.interior() {
            assert_eq!(map.interior_of(a), Some(a));
        }
        assert_eq!(map.interior_of(c(-2, -2)), None);
        assert_eq!(map.interior_of(c(3, 5 + 1)), None);
    }
}

#[test]
fn test_grid_covers_every_slot_on_torus() {
    let grid = initialize(&numbered_board(BoardType::Torus, 4, 3));
    assert_eq!((grid.rows, grid.columns), (5, 6));
    let slots: BTreeSet<_> = grid
        .cells
        .iter()
        .map(|cell| (cell.placement.row, cell.placement.column))
        .collect();
    assert_eq!(slots.len(), 30);
    assert_eq!(grid.cells.len(), 30);
}

// =============================================================================
// Selection path scenarios
// =============================================================================

#[test]
fn test_rectangle_scenario() {
    let board = numbered_board(BoardType::Rectangle, 3, 3);
    let mut engine = SelectionPathEngine::new(&board);

    engine.toggle(c(0, 0)).unwrap();
    assert_eq!(engine.current_path(), &[c(0, 0)]);

    engine.toggle(c(0, 1)).unwrap();
    assert_eq!(engine.current_path(), &[c(0, 0), c(0, 1)]);

    let change = engine.toggle(c(0, 0)).unwrap();
    assert_eq!(change.transition, Transition::Restart);
    assert_eq!(engine.current_path(), &[c(0, 0)]);

    engine.toggle(c(1, 1)).unwrap();
    assert_eq!(engine.current_path(), &[c(0, 0), c(1, 1)]);
}

#[test]
fn test_undo_twice_returns_two_clicks_back() {
    let board = numbered_board(BoardType::Rectangle, 4, 4);
    let mut engine = SelectionPathEngine::new(&board);
    engine.toggle(c(0, 0)).unwrap();
    engine.toggle(c(1, 1)).unwrap();
    engine.toggle(c(2, 2)).unwrap();
    let before = engine.current_path().to_vec();

    engine.toggle(c(3, 3)).unwrap();
    let first = engine.toggle(c(3, 3)).unwrap();
    assert_eq!(first.transition, Transition::Undo);
    assert_eq!(engine.current_path(), before.as_slice());

    // The next click on the same cell follows the ordinary rules: (3,3) is
    // adjacent to the new last element, so it extends again.
    let second = engine.toggle(c(3, 3)).unwrap();
    assert_eq!(second.transition, Transition::Extend);
}

#[test]
fn test_wrapped_word_across_torus_edge() {
    let board = Board::parse(BoardType::Torus, dim(4, 4), "TOGGLEBOARDWORDS").unwrap();
    let mut engine = SelectionPathEngine::new(&board);

    // W(3,2) -> O(0,3) through the right ghost column, R(1,3) directly,
    // then D(2,3) through the top ghost row.
    engine.toggle(c(3, 2)).unwrap();
    assert_eq!(engine.toggle(c(4, 3)).unwrap().transition, Transition::Extend);
    assert_eq!(engine.toggle(c(1, 3)).unwrap().transition, Transition::Extend);
    assert_eq!(engine.toggle(c(2, -1)).unwrap().transition, Transition::Extend);
    assert_eq!(engine.current_path(), &[c(3, 2), c(0, 3), c(1, 3), c(2, 3)]);
    assert_eq!(engine.word(), "WORD");
}

#[test]
fn test_wrap_is_not_adjacent_on_rectangle() {
    let board = numbered_board(BoardType::Rectangle, 4, 4);
    let mut engine = SelectionPathEngine::new(&board);
    engine.toggle(c(0, 0)).unwrap();
    let change = engine.toggle(c(3, 0)).unwrap();
    assert_eq!(change.transition, Transition::Restart);
    assert_eq!(change.deselected, vec![c(0, 0)]);
}

#[test]
fn test_ghost_click_on_rectangle_is_unmapped() {
    let board = numbered_board(BoardType::Rectangle, 3, 3);
    let mut engine = SelectionPathEngine::new(&board);
    assert_eq!(engine.toggle(c(-1, 0)), Err(ToggleError::Unmapped(c(-1, 0))));
    assert!(engine.current_path().is_empty());
}

#[test]
fn test_change_reports_ghost_positions() {
    let board = numbered_board(BoardType::CylinderX, 3, 3);
    let mut engine = SelectionPathEngine::new(&board);
    let change = engine.toggle(c(3, 1)).unwrap();
    assert_eq!(change.selected, Some(c(0, 1)));
    assert_eq!(change.highlighted_positions(engine.ghosts()), vec![c(0, 1), c(3, 1)]);

    let change = engine.toggle(c(0, 1)).unwrap();
    assert_eq!(change.transition, Transition::Undo);
    assert_eq!(
        change.unhighlighted_positions(engine.ghosts()),
        vec![c(0, 1), c(3, 1)]
    );
}

// =============================================================================
// Selection path properties
// =============================================================================

#[test]
fn test_random_clicks_preserve_invariants() {
    for bt in BoardType::iter() {
        for (w, h) in sizes() {
            let board = numbered_board(bt, w, h);
            let mut engine = SelectionPathEngine::new(&board);
            let mut rng = Rng::with_seed((w * 31 + h) as u64);
            for _ in 0..200 {
                random_clicks(&mut engine, 1, &mut rng).unwrap();
                assert_path_invariants(&engine);
            }
        }
    }
}

#[test]
fn test_change_matches_path_delta() {
    let board = numbered_board(BoardType::Torus, 4, 4);
    let mut engine = SelectionPathEngine::new(&board);
    let mut rng = Rng::with_seed(99);
    for _ in 0..500 {
        let before: BTreeSet<_> = engine.current_path().iter().copied().collect();
        let change = random_clicks(&mut engine, 1, &mut rng).unwrap().remove(0);
        let after: BTreeSet<_> = engine.current_path().iter().copied().collect();

        let removed: BTreeSet<_> = before.difference(&after).copied().collect();
        let added: BTreeSet<_> = after.difference(&before).copied().collect();
        assert_eq!(change.deselected.iter().copied().collect::<BTreeSet<_>>(), removed);
        assert_eq!(change.deselected.len(), removed.len());
        match change.transition {
            Transition::Undo => assert!(change.selected.is_none() && added.is_empty()),
            _ => {
                let selected = change.selected.unwrap();
                assert_eq!(engine.current_path().last(), Some(&selected));
                assert!(added.is_empty() || added == BTreeSet::from([selected]));
            }
        }
    }
}

#[test]
fn test_random_path_is_contiguous() {
    for bt in BoardType::iter() {
        let board = numbered_board(bt, 5, 5);
        let mut engine = SelectionPathEngine::new(&board);
        let mut rng = Rng::with_seed(11);
        for len in 0..10 {
            let reached = random_path(&mut engine, len, &mut rng).unwrap();
            assert!(reached <= len);
            assert_eq!(engine.current_path().len(), reached);
            assert_path_invariants(&engine);
        }
    }
}
