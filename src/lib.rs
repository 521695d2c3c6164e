//! Toggle-Rust: topology-aware word paths for Boggle-style grids.
//!
//! Boards may wrap on neither, one, or both axes (rectangle, cylinder,
//! torus). This crate resolves coordinates across those wraps, computes
//! neighborhoods, mirrors interior cells into a ghost border so wrapped
//! adjacency can be seen and clicked, and tracks the player's selection path.
//!
//! ## Modules
//!
//! - [`coords`] - Coordinate and dimension value types
//! - [`topology`] - Axis alignments, board types, coordinate resolution
//! - [`adjacency`] - Topology-aware Moore neighborhoods
//! - [`board`] - Board provider trait and in-memory board
//! - [`ghost`] - Ghost ring and raw-to-interior mapping
//! - [`grid`] - Renderable grid description
//! - [`selection`] - Selection path state machine
//! - [`playout`] - Random click sequences
//! - [`protocol`] - Text command protocol
//! - [`constants`] - Defaults and protocol constants
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```
//! use toggle_rust::board::Board;
//! use toggle_rust::coords::{Coordinates, Dimensions};
//! use toggle_rust::selection::SelectionPathEngine;
//! use toggle_rust::topology::BoardType;
//!
//! let dim = Dimensions::new(4, 4).unwrap();
//! let board = Board::parse(BoardType::Torus, dim, "TOGGLEBOARDWORDS").unwrap();
//! let mut engine = SelectionPathEngine::new(&board);
//!
//! // Click a cell, then the ghost left of the board that mirrors (3,0).
//! engine.toggle(Coordinates::new(0, 0)).unwrap();
//! engine.toggle(Coordinates::new(-1, 0)).unwrap();
//! assert_eq!(engine.current_path(), &[Coordinates::new(0, 0), Coordinates::new(3, 0)]);
//! assert_eq!(engine.word(), "TG");
//! ```

pub mod adjacency;
pub mod board;
pub mod constants;
pub mod coords;
pub mod error;
pub mod ghost;
pub mod grid;
pub mod playout;
pub mod protocol;
pub mod selection;
pub mod topology;
