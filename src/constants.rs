//! Constants for default boards, neighborhood offsets, and protocol parameters.
//!
//! The default board is the classic 4x4 layout played on a torus, so that
//! every cell has a full neighborhood out of the box.

use crate::topology::BoardType;

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest board extent. The far ghost sits at `x == width`, and its
/// rendered column at `width + 1`, both of which must fit in an `i32`.
pub const MAX_EXTENT: i32 = i32::MAX - 1;

/// Default board width.
pub const DEFAULT_WIDTH: i32 = 4;

/// Default board height.
pub const DEFAULT_HEIGHT: i32 = 4;

/// Default board topology.
pub const DEFAULT_BOARD_TYPE: BoardType = BoardType::Torus;

/// Default faces for a 4x4 board, one character per die.
pub const DEFAULT_FACES: &str = "TOGGLEBOARDWORDS";

/// Moore neighborhood offsets (dx, dy), excluding (0, 0).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Face the single letter `Q` expands to when faces are parsed from a letter string.
pub const Q_FACE: &str = "Qu";

// =============================================================================
// Text Protocol
// =============================================================================

/// Engine name reported by the `name` command.
pub const ENGINE_NAME: &str = "toggle-rust";

/// Protocol version reported by `protocol_version`.
pub const PROTOCOL_VERSION: &str = "1";

// =============================================================================
// Demo Parameters
// =============================================================================

/// Default number of random clicks in the demo playout.
pub const DEMO_CLICKS: usize = 12;

/// Default seed for the demo playout.
pub const DEMO_SEED: u64 = 2018;

/// Target length of the random word path shown in the demo.
pub const DEMO_PATH_LEN: usize = 6;
