//! Line-oriented text protocol for driving a board from a terminal or a
//! front end.
//!
//! Framing follows GTP: an optional numeric id, then a command and its
//! arguments. Success is answered with `=id message`, failure with
//! `?id message`, each followed by a blank line. Lines starting with `#` are
//! ignored.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit` - Exit the loop
//! - `setboard <type> <width> <height> <faces>` - Replace the board
//! - `topology <type>` - Keep the faces, change the topology
//! - `clear` - Empty the selection path
//! - `click <x> <y>` - Toggle the cell at a rendered position
//! - `path` - Selected coordinates, in order
//! - `word` - Faces along the path
//! - `adjacent <x> <y>` - Neighbors of an interior cell
//! - `resolve <x> <y>` - Interior equivalent of any coordinate
//! - `showboard` - Render the grid with the current selection
//!
//! ## Example
//!
//! ```ignore
//! use toggle_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new()?;
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Board, BoardProvider};
use crate::constants::{
    DEFAULT_BOARD_TYPE, DEFAULT_FACES, DEFAULT_HEIGHT, DEFAULT_WIDTH, ENGINE_NAME,
    PROTOCOL_VERSION,
};
use crate::coords::{Coordinates, Dimensions};
use crate::error::Result;
use crate::selection::SelectionPathEngine;
use crate::topology::{BoardType, resolve};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "adjacent",
    "clear",
    "click",
    "known_command",
    "list_commands",
    "name",
    "path",
    "protocol_version",
    "quit",
    "resolve",
    "setboard",
    "showboard",
    "topology",
    "version",
    "word",
];

/// Protocol session state.
pub struct ProtocolEngine {
    engine: SelectionPathEngine<Board>,
}

impl ProtocolEngine {
    /// Start on the default board.
    pub fn new() -> Result<Self> {
        let dim = Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
        let board = Board::parse(DEFAULT_BOARD_TYPE, dim, DEFAULT_FACES)?;
        Ok(Self::with_board(board))
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            engine: SelectionPathEngine::new(board),
        }
    }

    pub fn engine(&self) -> &SelectionPathEngine<Board> {
        &self.engine
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn parse_point(args: &[&str]) -> std::result::Result<Coordinates, String> {
        match args {
            [x, y, ..] => match (x.parse::<i32>(), y.parse::<i32>()) {
                (Ok(x), Ok(y)) => Ok(Coordinates::new(x, y)),
                _ => Err("invalid coordinate".to_string()),
            },
            _ => Err("missing arguments".to_string()),
        }
    }

    fn format_points(points: impl IntoIterator<Item = Coordinates>) -> String {
        points
            .into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "execute");
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, PROTOCOL_VERSION.to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "setboard" => {
                let [kind, width, height, faces @ ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let board_type = match BoardType::parse(kind) {
                    Ok(bt) => bt,
                    Err(e) => return (false, e.to_string()),
                };
                let (Ok(width), Ok(height)) = (width.parse::<i32>(), height.parse::<i32>()) else {
                    return (false, "invalid size".to_string());
                };
                let board = Dimensions::new(width, height)
                    .and_then(|dim| Board::parse(board_type, dim, &faces.join(" ")));
                match board {
                    Ok(board) => {
                        self.engine = SelectionPathEngine::new(board);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "topology" => {
                let Some(kind) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match BoardType::parse(kind) {
                    Ok(bt) => {
                        let board = self.engine.board().with_board_type(bt);
                        self.engine = SelectionPathEngine::new(board);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "clear" => {
                self.engine.clear();
                (true, String::new())
            }

            "click" => {
                let raw = match Self::parse_point(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                match self.engine.toggle(raw) {
                    Ok(change) => (true, change.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "path" => (
                true,
                Self::format_points(self.engine.current_path().iter().copied()),
            ),

            "word" => (true, self.engine.word()),

            "adjacent" => {
                let c = match Self::parse_point(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let board = self.engine.board();
                if !board.dimensions().contains(c) {
                    return (false, format!("{c} is not an interior cell"));
                }
                (true, Self::format_points(board.adjacencies(c)))
            }

            "resolve" => {
                let c = match Self::parse_point(args) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let board = self.engine.board();
                match resolve(board.dimensions(), board.board_type(), c.x, c.y) {
                    Some(r) => (true, r.to_string()),
                    None => (true, "none".to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.engine)),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
