mod collision;
mod config;
mod error;
mod game;
mod logging;
mod maze;
mod projectile;
mod render;
mod spatial;
mod tank;
mod types;

use clap::Parser;
use log::{LevelFilter, error, info};
use macroquad::prelude::*;

use crate::config::{
    MAZE_COLS, MAZE_ROWS, PLAYFIELD_MARGIN, WALL_THICKNESS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::types::Rect;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze width in cells.
    #[arg(long, default_value_t = MAZE_COLS)]
    cols: usize,

    /// Maze height in cells.
    #[arg(long, default_value_t = MAZE_ROWS)]
    rows: usize,

    /// Wall thickness in pixels.
    #[arg(long, default_value_t = WALL_THICKNESS)]
    wall_thickness: f64,

    /// Debug filter to specify log topics (e.g., "maze,index,projectile,tank")
    /// Available topics: maze, index, projectile, tank
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Tank Maze".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Tank Maze...");

    let playfield = Rect::new(
        PLAYFIELD_MARGIN,
        PLAYFIELD_MARGIN,
        WINDOW_WIDTH as f64 - 2.0 * PLAYFIELD_MARGIN,
        WINDOW_HEIGHT as f64 - 2.0 * PLAYFIELD_MARGIN,
    );

    let mut game = match game::Game::new(playfield, args.cols, args.rows, args.wall_thickness) {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to set up game: {}", e);
            std::process::exit(1);
        }
    };

    let mut renderer = render::Renderer::new();
    info!("Renderer initialized.");

    game.run(&mut renderer).await;
}
