//! Board content providers.
//!
//! The selection engine only ever reads a board: its dimensions, topology,
//! the face shown on each cell, and the adjacency set of each interior cell.
//! [`BoardProvider`] is that read-only surface; [`Board`] is the in-memory
//! implementation used by the CLI and tests.

use std::collections::BTreeSet;
use std::fmt;

use tracing::info;

use crate::adjacency::adjacent_to;
use crate::constants::Q_FACE;
use crate::coords::{Coordinates, Dimensions};
use crate::error::{Result, ToggleError};
use crate::topology::BoardType;

/// Read-only view of a board.
pub trait BoardProvider {
    fn dimensions(&self) -> Dimensions;

    fn board_type(&self) -> BoardType;

    /// Face of an interior cell, `None` off the board.
    fn content_at(&self, c: Coordinates) -> Option<&str>;

    /// Face shown at a possibly out-of-range position.
    ///
    /// Defaults to the face of the interior cell the position resolves to.
    fn out_of_bounds_content_at(&self, x: i32, y: i32) -> Option<&str> {
        let c = self.board_type().convert(self.dimensions(), x, y)?;
        self.content_at(c)
    }

    /// Neighbors of an interior cell.
    fn adjacencies(&self, c: Coordinates) -> BTreeSet<Coordinates> {
        adjacent_to(self.dimensions(), self.board_type(), c)
    }
}

impl<T: BoardProvider + ?Sized> BoardProvider for &T {
    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }

    fn board_type(&self) -> BoardType {
        (**self).board_type()
    }

    fn content_at(&self, c: Coordinates) -> Option<&str> {
        (**self).content_at(c)
    }

    fn out_of_bounds_content_at(&self, x: i32, y: i32) -> Option<&str> {
        (**self).out_of_bounds_content_at(x, y)
    }

    fn adjacencies(&self, c: Coordinates) -> BTreeSet<Coordinates> {
        (**self).adjacencies(c)
    }
}

/// A board with fixed faces and precomputed adjacency.
#[derive(Clone, Debug)]
pub struct Board {
    dim: Dimensions,
    board_type: BoardType,
    /// Row-major faces.
    faces: Vec<String>,
    /// Row-major adjacency sets.
    adjacency: Vec<BTreeSet<Coordinates>>,
}

impl Board {
    pub fn new<I, S>(board_type: BoardType, dim: Dimensions, faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let faces: Vec<String> = faces.into_iter().map(Into::into).collect();
        if faces.len() != dim.area() {
            return Err(ToggleError::FaceCount {
                width: dim.width(),
                height: dim.height(),
                expected: dim.area(),
                actual: faces.len(),
            });
        }
        Ok(Self::assemble(board_type, dim, faces))
    }

    /// Precompute adjacency for validated faces.
    fn assemble(board_type: BoardType, dim: Dimensions, faces: Vec<String>) -> Self {
        let adjacency = dim
            .interior()
            .map(|c| adjacent_to(dim, board_type, c))
            .collect();
        info!(%board_type, dimensions = %dim, "built board");
        Self {
            dim,
            board_type,
            faces,
            adjacency,
        }
    }

    /// Build a board from a face string.
    ///
    /// Faces are separated by whitespace or commas. A single token whose
    /// length equals the board area is split into one face per character,
    /// uppercased, with `Q` standing for `Qu`. This includes 1x1 boards, so
    /// `"q"` is `Qu` there too.
    pub fn parse(board_type: BoardType, dim: Dimensions, text: &str) -> Result<Self> {
        Self::new(board_type, dim, parse_faces(text, dim.area()))
    }

    /// Same faces and dimensions under a different topology.
    pub fn with_board_type(&self, board_type: BoardType) -> Self {
        Self::assemble(board_type, self.dim, self.faces.clone())
    }

    pub fn faces(&self) -> &[String] {
        &self.faces
    }
}

impl BoardProvider for Board {
    fn dimensions(&self) -> Dimensions {
        self.dim
    }

    fn board_type(&self) -> BoardType {
        self.board_type
    }

    fn content_at(&self, c: Coordinates) -> Option<&str> {
        self.dim.index(c).map(|i| self.faces[i].as_str())
    }

    fn adjacencies(&self, c: Coordinates) -> BTreeSet<Coordinates> {
        self.dim
            .index(c)
            .map(|i| self.adjacency[i].clone())
            .unwrap_or_default()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.faces.chunks(self.dim.width() as usize) {
            let line: Vec<String> = row.iter().map(|face| format!("{face:<2}")).collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

fn parse_faces(text: &str, area: usize) -> Vec<String> {
    let tokens: Vec<&str> = text
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|t| !t.is_empty())
        .collect();
    match tokens.as_slice() {
        [single] if single.chars().count() == area => single
            .chars()
            .map(|ch| {
                if ch.eq_ignore_ascii_case(&'q') {
                    Q_FACE.to_string()
                } else {
                    ch.to_ascii_uppercase().to_string()
                }
            })
            .collect(),
        _ => tokens.into_iter().map(str::to_string).collect(),
    }
}
