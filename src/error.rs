// Startup validation errors. The running simulation has no recoverable
// error surface; degenerate conditions there are handled as policy.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SetupError {
    #[error("maze grid must span at least one cell, got {cols}x{rows}")]
    DegenerateGrid { cols: usize, rows: usize },
    #[error(
        "playfield {width:.0}x{height:.0} is too small for a {cols}x{rows} maze \
         with {thickness:.0}px walls"
    )]
    PlayfieldTooSmall {
        cols: usize,
        rows: usize,
        width: f64,
        height: f64,
        thickness: f64,
    },
}
