use crate::config;
use crate::error::SetupError;
use crate::maze;
use crate::projectile::Projectile;
use crate::render::Renderer;
use crate::spatial::{Wall, WallIndex};
use crate::tank::Tank;
use crate::types::{Drawable, EntityKind, InputState, Point, Rect};
use log::info;
use macroquad::prelude::{get_frame_time, next_frame};
use rand::thread_rng;

/// The Game struct owns the whole simulation state: playfield, wall index,
/// tank, and the active projectile list.
#[derive(Debug)]
pub struct Game {
    pub playfield: Rect,
    pub walls: WallIndex,
    pub tank: Tank,
    pub projectiles: Vec<Projectile>,
    time_accumulator: f32,
    tick_duration: f32,
}

impl Game {
    /// Builds the session: validates the maze parameters, generates the maze,
    /// and loads every wall into the spatial index.
    pub fn new(
        playfield: Rect,
        cols: usize,
        rows: usize,
        wall_thickness: f64,
    ) -> Result<Self, SetupError> {
        if cols == 0 || rows == 0 {
            return Err(SetupError::DegenerateGrid { cols, rows });
        }
        let cell = (playfield.h / rows as f64).min(playfield.w / cols as f64);
        if cell <= wall_thickness * 2.0 {
            return Err(SetupError::PlayfieldTooSmall {
                cols,
                rows,
                width: playfield.w,
                height: playfield.h,
                thickness: wall_thickness,
            });
        }

        let mut rng = thread_rng();
        let maze = maze::generate(&playfield, cols, rows, wall_thickness, &mut rng);
        info!(
            "Generated {}x{} maze: {} wall rects, {} doorways",
            cols,
            rows,
            maze.walls.len(),
            maze.stats.doorways
        );

        let mut walls = WallIndex::new(playfield);
        for rect in maze.walls {
            walls.insert(Wall { rect });
        }
        let stats = walls.stats();
        info!(
            "Wall index ready: {} walls across {} nodes, depth {}",
            stats.walls, stats.nodes, stats.max_depth
        );

        let tank = Tank::new(Point {
            x: playfield.x + playfield.w / 2.0,
            y: playfield.y + playfield.h / 2.0,
        });

        Ok(Game {
            playfield,
            walls,
            tank,
            projectiles: Vec::new(),
            time_accumulator: 0.0,
            tick_duration: 1.0 / config::TICK_RATE as f32,
        })
    }

    /// Run the main loop: fixed-rate simulation ticks driven by an
    /// accumulator, then one rendered frame per display refresh.
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");

        while !Renderer::window_should_close() {
            let frame_time = get_frame_time();
            self.time_accumulator += frame_time;

            // Key state cannot change mid-frame, so one snapshot serves
            // every tick consumed this frame.
            let input = Renderer::sample_input();
            while self.time_accumulator >= self.tick_duration {
                self.time_accumulator -= self.tick_duration;
                self.update_simulation(&input, self.tick_duration as f64);
            }

            renderer.draw_frame(&self.drawables());
            next_frame().await;
        }

        info!("Exiting Tank Maze.");
    }

    /// One fixed simulation tick: tank first, then every active projectile,
    /// then retired projectiles leave the list.
    pub fn update_simulation(&mut self, input: &InputState, dt: f64) {
        if let Some(projectile) = self.tank.update(input, dt) {
            self.projectiles.push(projectile);
        }

        for projectile in self.projectiles.iter_mut() {
            projectile.update(dt, &self.walls, &self.playfield);
        }
        self.projectiles.retain(|p| !p.retired);
    }

    /// Drawable primitives for the renderer: every wall, the tank hull and
    /// cannon, and each live projectile.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out = Vec::new();

        for wall in self.walls.walls() {
            out.push(Drawable::Rect {
                rect: wall.rect,
                rotation: 0.0,
                kind: EntityKind::Wall,
            });
        }

        let hull = Rect::new(
            self.tank.position.x - self.tank.width / 2.0,
            self.tank.position.y - self.tank.height / 2.0,
            self.tank.width,
            self.tank.height,
        );
        out.push(Drawable::Rect {
            rect: hull,
            rotation: self.tank.rotation,
            kind: EntityKind::Tank,
        });
        out.push(Drawable::Line {
            from: self.tank.position,
            to: self.tank.cannon_tip(),
        });

        for projectile in &self.projectiles {
            if !projectile.retired {
                out.push(Drawable::Rect {
                    rect: projectile.bbox(),
                    rotation: 0.0,
                    kind: EntityKind::Projectile,
                });
            }
        }

        out
    }
}
