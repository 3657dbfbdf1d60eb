//! Thin macroquad wrapper: draws the simulation's drawable primitives and
//! samples the keyboard into an input snapshot.

use crate::config::WINDOW_HEIGHT;
use crate::types::{Drawable, EntityKind, InputState, Point};
use macroquad::prelude::*;

const WALL_COLOR: Color = LIGHTGRAY;
const TANK_COLOR: Color = DARKGREEN;
const PROJECTILE_COLOR: Color = YELLOW;
const CANNON_THICKNESS: f32 = 6.0;

// Simulation space is y-up with the origin at the lower left; the screen is
// y-down with the origin at the top left.
fn to_screen(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, WINDOW_HEIGHT as f32 - p.y as f32)
}

fn kind_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Wall => WALL_COLOR,
        EntityKind::Tank => TANK_COLOR,
        EntityKind::Projectile => PROJECTILE_COLOR,
    }
}

// Handles rendering the simulation state using macroquad
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    pub fn draw_frame(&mut self, drawables: &[Drawable]) {
        clear_background(BLACK);

        for drawable in drawables {
            match *drawable {
                Drawable::Rect {
                    rect,
                    rotation,
                    kind,
                } => {
                    let center = to_screen(Point {
                        x: rect.x + rect.w / 2.0,
                        y: rect.y + rect.h / 2.0,
                    });
                    draw_rectangle_ex(
                        center.x,
                        center.y,
                        rect.w as f32,
                        rect.h as f32,
                        DrawRectangleParams {
                            offset: vec2(0.5, 0.5),
                            // The y flip mirrors the sense of rotation.
                            rotation: -rotation as f32,
                            color: kind_color(kind),
                        },
                    );
                }
                Drawable::Line { from, to } => {
                    let a = to_screen(from);
                    let b = to_screen(to);
                    draw_line(a.x, a.y, b.x, b.y, CANNON_THICKNESS, TANK_COLOR);
                }
            }
        }
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }

    /// Keyboard snapshot consumed by the simulation tick.
    pub fn sample_input() -> InputState {
        InputState {
            turn_left: is_key_down(KeyCode::Left),
            turn_right: is_key_down(KeyCode::Right),
            forward: is_key_down(KeyCode::Up),
            backward: is_key_down(KeyCode::Down),
            fire: is_key_down(KeyCode::Space),
        }
    }
}
