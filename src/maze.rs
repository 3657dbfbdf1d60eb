//! Recursive space-partition maze generation.
//!
//! The grid is split in half along alternating axes. Every split walls off
//! the two halves except for exactly one doorway cell, which is what keeps
//! the maze fully connected: skip the doorway and the halves can never reach
//! each other again. Cell flags live only for the duration of generation;
//! the output is a list of wall rectangles scaled into the target bounds.

use crate::types::Rect;
use rand::Rng;

/// Per-cell edge flags, kept only while the maze is generated.
#[derive(Debug, Clone, Copy, Default)]
struct CellWalls {
    above: bool, // Wall along the cell's top edge
    right: bool, // Wall along the cell's right edge
}

/// Counters accumulated while the grid is subdivided. Every split must open
/// exactly one doorway, so `splits == doorways` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStats {
    pub splits: u32,
    pub doorways: u32,
}

/// Finished maze: wall rectangles ready for the spatial index.
#[derive(Debug, Clone)]
pub struct Maze {
    pub walls: Vec<Rect>,
    pub stats: MazeStats,
}

#[derive(Debug)]
struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<CellWalls>,
    stats: MazeStats,
}

impl Grid {
    fn new(cols: usize, rows: usize) -> Self {
        Grid {
            cols,
            rows,
            cells: vec![CellWalls::default(); cols * rows],
            stats: MazeStats::default(),
        }
    }

    fn at(&self, col: usize, row: usize) -> CellWalls {
        self.cells[row * self.cols + col]
    }

    fn at_mut(&mut self, col: usize, row: usize) -> &mut CellWalls {
        &mut self.cells[row * self.cols + col]
    }

    /// Splits the inclusive cell region `[x1,x2] x [y1,y2]`, alternating the
    /// split axis each level. A region that cannot be split along the
    /// requested axis falls through without emitting anything.
    fn subdivide(
        &mut self,
        x1: usize,
        x2: usize,
        y1: usize,
        y2: usize,
        split_rows: bool,
        rng: &mut impl Rng,
    ) {
        if x1 == x2 && y1 == y2 {
            return;
        }

        if split_rows && y1 != y2 {
            let ymid = rng.gen_range(y1..y2);
            self.subdivide(x1, x2, y1, ymid, false, rng);
            self.subdivide(x1, x2, ymid + 1, y2, false, rng);

            let doorway = rng.gen_range(x1..=x2);
            let mut emitted = 0u32;
            for col in x1..=x2 {
                if col != doorway {
                    self.at_mut(col, ymid).above = true;
                    emitted += 1;
                }
            }
            self.stats.splits += 1;
            self.stats.doorways += (x2 - x1 + 1) as u32 - emitted;
        } else if !split_rows && x1 != x2 {
            let xmid = rng.gen_range(x1..x2);
            self.subdivide(xmid + 1, x2, y1, y2, true, rng);
            self.subdivide(x1, xmid, y1, y2, true, rng);

            let doorway = rng.gen_range(y1..=y2);
            let mut emitted = 0u32;
            for row in y1..=y2 {
                if row != doorway {
                    self.at_mut(xmid, row).right = true;
                    emitted += 1;
                }
            }
            self.stats.splits += 1;
            self.stats.doorways += (y2 - y1 + 1) as u32 - emitted;
        }
    }
}

/// Generates a `cols x rows` maze scaled to fit `bounds`, with the grid
/// centered inside it. Wall segments are extended by `thickness` so the
/// corners at junctions overlap instead of leaving pinhole gaps.
pub fn generate(
    bounds: &Rect,
    cols: usize,
    rows: usize,
    thickness: f64,
    rng: &mut impl Rng,
) -> Maze {
    let mut grid = Grid::new(cols, rows);
    grid.subdivide(0, cols - 1, 0, rows - 1, true, rng);

    let cell = (bounds.h / rows as f64).min(bounds.w / cols as f64);
    let span_w = cell * cols as f64;
    let span_h = cell * rows as f64;
    let ox = bounds.x + (bounds.w - span_w) / 2.0;
    let oy = bounds.y + (bounds.h - span_h) / 2.0;

    let mut walls = Vec::new();

    // Perimeter: bottom, left, right, top.
    walls.push(Rect::new(ox, oy, span_w + thickness, thickness));
    walls.push(Rect::new(ox, oy, thickness, span_h + thickness));
    walls.push(Rect::new(ox + span_w, oy, thickness, span_h + thickness));
    walls.push(Rect::new(ox, oy + span_h, span_w + thickness, thickness));

    for col in 0..cols {
        for row in 0..rows {
            let flags = grid.at(col, row);
            if flags.above {
                walls.push(Rect::new(
                    ox + col as f64 * cell,
                    oy + (row + 1) as f64 * cell,
                    cell + thickness,
                    thickness,
                ));
            }
            if flags.right {
                walls.push(Rect::new(
                    ox + (col + 1) as f64 * cell,
                    oy + row as f64 * cell,
                    thickness,
                    cell + thickness,
                ));
            }
        }
    }

    crate::debug_maze!(
        "Subdivided {}x{} grid: {} splits, {} doorways, {} wall rects",
        cols,
        rows,
        grid.stats.splits,
        grid.stats.doorways,
        walls.len()
    );

    Maze {
        walls,
        stats: grid.stats,
    }
}
