//! Projectile motion with multi-bounce swept collision response.

use crate::collision::swept_aabb;
use crate::spatial::WallIndex;
use crate::types::{Kinematics, Point, Rect};

/// A fired shell. The bounding box is always derived from the current
/// position and size, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Point, // Lower-left corner of the bounding box
    pub size: f64,
    pub motion: Kinematics,
    pub retired: bool,
}

impl Projectile {
    /// Spawns a projectile centered on the given point.
    pub fn new(center: Point, motion: Kinematics, size: f64) -> Self {
        Projectile {
            position: Point {
                x: center.x - size / 2.0,
                y: center.y - size / 2.0,
            },
            size,
            motion,
            retired: false,
        }
    }

    pub fn bbox(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, self.size)
    }

    /// True once the bounding box lies entirely past any playfield edge.
    fn out_of_bounds(&self, playfield: &Rect) -> bool {
        let bbox = self.bbox();
        bbox.x > playfield.right()
            || bbox.y > playfield.top()
            || bbox.right() < playfield.x
            || bbox.top() < playfield.y
    }

    /// Advances the projectile by `dt`, bouncing off any walls crossed on the
    /// way. A single tick can resolve several bounces: each hit consumes part
    /// of the step and the remainder is replayed with the reflected velocity.
    pub fn update(&mut self, dt: f64, walls: &WallIndex, playfield: &Rect) {
        if self.retired {
            return;
        }
        if self.out_of_bounds(playfield) {
            crate::debug_projectile!(
                "Retiring projectile at ({:.1}, {:.1})",
                self.position.x,
                self.position.y
            );
            self.retired = true;
            return;
        }

        let bbox = self.bbox();
        let new_x = self.position.x + self.motion.vx * dt;
        let new_y = self.position.y + self.motion.vy * dt;

        // Envelope covering the current box and the naive end-of-step box.
        let broadphase = bbox.union(&Rect::new(new_x, new_y, self.size, self.size));
        for wall in walls.query(&broadphase) {
            // Skip walls the projectile already touches; sweeping against
            // them would re-resolve the same contact at entry time zero.
            if wall.rect.intersects(&bbox) {
                continue;
            }
            let Some(hit) = swept_aabb(&bbox, &self.motion, &wall.rect, dt) else {
                continue;
            };

            // First hit in iteration order wins. Advance to the impact point
            // and reflect the velocity component along the struck axis.
            self.position.x += self.motion.vx * dt * hit.entry;
            self.position.y += self.motion.vy * dt * hit.entry;
            if hit.normal.0 != 0.0 {
                self.motion.vx = -self.motion.vx;
            } else {
                self.motion.vy = -self.motion.vy;
            }
            crate::debug_projectile!(
                "Bounce at ({:.1}, {:.1}), normal ({}, {}), {:.0}% of step left",
                self.position.x,
                self.position.y,
                hit.normal.0,
                hit.normal.1,
                (1.0 - hit.entry) * 100.0
            );

            self.update((1.0 - hit.entry) * dt, walls, playfield);
            return;
        }

        self.position = Point { x: new_x, y: new_y };
    }
}
