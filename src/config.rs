//! Configuration constants for the maze tank game.

// Window and playfield
pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 800;
pub const PLAYFIELD_MARGIN: f64 = 10.0; // Gap between window edge and playfield

// Maze defaults (overridable from the command line)
pub const MAZE_COLS: usize = 24; // Maze width in cells
pub const MAZE_ROWS: usize = 14; // Maze height in cells
pub const WALL_THICKNESS: f64 = 7.0; // Pixels; also pads segment ends so corners overlap

// Tank
pub const TANK_WIDTH: f64 = 50.0;
pub const TANK_HEIGHT: f64 = 70.0;
pub const CANNON_LENGTH: f64 = 60.0; // Projectiles spawn this far from the hull center
pub const TANK_SPIN_SPEED: f64 = 3.0; // Radians per second
pub const TANK_MAX_SPEED: f64 = 200.0; // Pixels per second, also the projectile speed

// Projectiles
pub const PROJECTILE_SIZE: f64 = 4.0; // Square side length in pixels

// Simulation
pub const TICK_RATE: u32 = 120; // Fixed logical updates per second, decoupled from render rate

// Spatial index tuning
pub const INDEX_BUCKET_SIZE: usize = 8; // Walls per node before it subdivides
pub const INDEX_MAX_DEPTH: usize = 6;
