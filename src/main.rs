//! Toggle-Rust: word paths on wrapping grids.
//!
//! ## Usage
//!
//! - `toggle-rust` - Show a demo
//! - `toggle-rust play` - Start the text protocol on stdin/stdout
//! - `toggle-rust demo --seed 7` - Run the demo with another playout
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;
use tracing_subscriber::EnvFilter;

use toggle_rust::board::{Board, BoardProvider};
use toggle_rust::constants::{
    DEFAULT_BOARD_TYPE, DEFAULT_FACES, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEMO_CLICKS, DEMO_PATH_LEN,
    DEMO_SEED,
};
use toggle_rust::coords::Dimensions;
use toggle_rust::playout::{random_clicks, random_path};
use toggle_rust::protocol::ProtocolEngine;
use toggle_rust::selection::SelectionPathEngine;
use toggle_rust::topology::BoardType;

/// Toggle-Rust: word paths on wrapping grids
#[derive(Parser)]
#[command(name = "toggle-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board width
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Board height
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Board topology: rectangle, cylinder-x, cylinder-y or torus
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_TYPE)]
    topology: BoardType,

    /// Faces, either one letter per cell or separated by spaces/commas
    #[arg(long, global = true, default_value = DEFAULT_FACES)]
    faces: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol for use with a front end
    Play,
    /// Render the board and run a random playout
    Demo {
        /// Number of random clicks
        #[arg(long, default_value_t = DEMO_CLICKS)]
        clicks: usize,
        /// Playout seed
        #[arg(long, default_value_t = DEMO_SEED)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dim = Dimensions::new(cli.width, cli.height).context("invalid board size")?;
    let board = Board::parse(cli.topology, dim, &cli.faces).context("invalid board faces")?;

    match cli.command {
        Some(Commands::Play) => {
            let mut engine = ProtocolEngine::with_board(board);
            engine.run().context("protocol I/O failed")?;
        }
        Some(Commands::Demo { clicks, seed }) => run_demo(&board, clicks, seed)?,
        None => run_demo(&board, DEMO_CLICKS, DEMO_SEED)?,
    }
    Ok(())
}

fn run_demo(board: &Board, clicks: usize, seed: u64) -> Result<()> {
    println!("Toggle-Rust: word paths on wrapping grids\n");

    // Demo 1: Board faces, then the rendered grid with its ghost ring
    println!("=== Faces ===");
    println!("{board}");
    let mut engine = SelectionPathEngine::new(board);
    println!(
        "=== {} {} board ({} ghost cells) ===",
        engine.board().board_type(),
        engine.board().dimensions(),
        engine.grid().ghost_cells().count()
    );
    println!("{engine}");

    // Demo 2: Random clicks, ghosts included
    println!("=== {clicks} random clicks (seed {seed}) ===");
    let mut rng = Rng::with_seed(seed);
    for change in random_clicks(&mut engine, clicks, &mut rng)? {
        println!("{change}");
    }
    println!("Word: {:?}", engine.word());
    println!("{engine}");

    // Demo 3: Random contiguous path
    println!("=== Random word path ===");
    let reached = random_path(&mut engine, DEMO_PATH_LEN, &mut rng)?;
    println!("Reached {reached} cells, word: {:?}", engine.word());
    println!("{engine}");
    Ok(())
}
