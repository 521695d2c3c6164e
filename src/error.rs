//! Error type shared by board construction and the selection engine.
//!
//! "No mapping" answers from topology and ghost lookups are `Option`s, not
//! errors; an error here always means a caller broke a contract.

use thiserror::Error;

use crate::constants::MAX_EXTENT;
use crate::coords::Coordinates;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("board dimensions must lie in 1..={max} (got {width}x{height})", max = MAX_EXTENT)]
    InvalidDimensions { width: i32, height: i32 },

    #[error("a {width}x{height} board needs {expected} faces, got {actual}")]
    FaceCount {
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },

    /// A click arrived on a position that no rendered cell occupies.
    #[error("coordinate {0} has no interior mapping")]
    Unmapped(Coordinates),

    #[error("unknown board type: {0}")]
    UnknownBoardType(String),
}

pub type Result<T> = std::result::Result<T, ToggleError>;
