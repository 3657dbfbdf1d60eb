//! Shared geometry, kinematics, and input types for the simulation.
//!
//! Simulation space is y-up with the origin at the lower left; rectangles are
//! positioned by their lower-left corner. The renderer owns the conversion to
//! screen space.

/// A point in simulation space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned rectangle positioned by its lower-left corner.
/// Width and height are always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap test; rectangles that only share an edge do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// True when `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.top() <= self.top()
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.top().max(other.top()) - y,
        }
    }
}

/// Linear velocity, attached only to entities that move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub vx: f64,
    pub vy: f64,
}

/// Input snapshot sampled once per tick and handed to the tank update.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub fire: bool,
}

/// What kind of entity a drawable primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Wall,
    Tank,
    Projectile,
}

/// Primitive handed to the renderer each frame. Rotation is visual only;
/// collision stays axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable {
    Rect {
        rect: Rect,
        rotation: f64,
        kind: EntityKind,
    },
    Line {
        from: Point,
        to: Point,
    },
}
