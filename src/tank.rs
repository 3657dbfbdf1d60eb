//! Player tank: turning, drive, and cannon fire.

use crate::config;
use crate::projectile::Projectile;
use crate::types::{InputState, Kinematics, Point};

/// The player's tank. One per session; never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tank {
    pub position: Point, // Center of the hull
    pub rotation: f64,   // Radians, counterclockwise; zero faces straight up
    pub motion: Kinematics,
    pub width: f64,
    pub height: f64,
}

impl Tank {
    pub fn new(position: Point) -> Self {
        Tank {
            position,
            rotation: 0.0,
            motion: Kinematics::default(),
            width: config::TANK_WIDTH,
            height: config::TANK_HEIGHT,
        }
    }

    /// Unit vector the cannon points along for the current rotation.
    pub fn facing(&self) -> (f64, f64) {
        (-self.rotation.sin(), self.rotation.cos())
    }

    /// Tip of the cannon, where projectiles spawn.
    pub fn cannon_tip(&self) -> Point {
        let (fx, fy) = self.facing();
        Point {
            x: self.position.x + fx * config::CANNON_LENGTH,
            y: self.position.y + fy * config::CANNON_LENGTH,
        }
    }

    /// Advances one tick from the sampled input. Turning applies before the
    /// fire check, so a shot leaves along the new facing. Returns a
    /// projectile for every tick the fire signal is held.
    pub fn update(&mut self, input: &InputState, dt: f64) -> Option<Projectile> {
        if input.turn_left && !input.turn_right {
            self.rotation += config::TANK_SPIN_SPEED * dt;
        } else if input.turn_right && !input.turn_left {
            self.rotation -= config::TANK_SPIN_SPEED * dt;
        }

        let (fx, fy) = self.facing();

        let fired = if input.fire {
            crate::debug_tank!(
                "Fired from ({:.1}, {:.1}) facing {:.2} rad",
                self.position.x,
                self.position.y,
                self.rotation
            );
            Some(Projectile::new(
                self.cannon_tip(),
                Kinematics {
                    vx: fx * config::TANK_MAX_SPEED,
                    vy: fy * config::TANK_MAX_SPEED,
                },
                config::PROJECTILE_SIZE,
            ))
        } else {
            None
        };

        // No coasting: velocity is either full speed along the facing or
        // zero, decided fresh every tick.
        if input.forward && !input.backward {
            self.motion = Kinematics {
                vx: fx * config::TANK_MAX_SPEED,
                vy: fy * config::TANK_MAX_SPEED,
            };
        } else if input.backward && !input.forward {
            self.motion = Kinematics {
                vx: -fx * config::TANK_MAX_SPEED,
                vy: -fy * config::TANK_MAX_SPEED,
            };
        } else {
            self.motion = Kinematics::default();
        }

        self.position.x += self.motion.vx * dt;
        self.position.y += self.motion.vy * dt;

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const DT: f64 = 1.0 / 120.0;

    fn tank() -> Tank {
        Tank::new(Point { x: 100.0, y: 100.0 })
    }

    fn input() -> InputState {
        InputState::default()
    }

    #[test]
    fn test_no_input_is_idempotent() {
        let mut t = tank();
        for _ in 0..100 {
            let fired = t.update(&input(), DT);
            assert!(fired.is_none());
        }
        assert_approx_eq!(t.position.x, 100.0);
        assert_approx_eq!(t.position.y, 100.0);
        assert_approx_eq!(t.rotation, 0.0);
        assert_eq!(t.motion, Kinematics::default());
    }

    #[test]
    fn test_turning_left_and_right() {
        let mut t = tank();
        t.update(
            &InputState {
                turn_left: true,
                ..input()
            },
            DT,
        );
        assert_approx_eq!(t.rotation, config::TANK_SPIN_SPEED * DT);

        let mut t = tank();
        t.update(
            &InputState {
                turn_right: true,
                ..input()
            },
            DT,
        );
        assert_approx_eq!(t.rotation, -config::TANK_SPIN_SPEED * DT);
    }

    #[test]
    fn test_both_turn_signals_cancel() {
        let mut t = tank();
        t.update(
            &InputState {
                turn_left: true,
                turn_right: true,
                ..input()
            },
            DT,
        );
        assert_approx_eq!(t.rotation, 0.0);
    }

    #[test]
    fn test_forward_moves_along_facing() {
        let mut t = tank();
        t.update(
            &InputState {
                forward: true,
                ..input()
            },
            DT,
        );
        // Zero rotation faces straight up.
        assert_approx_eq!(t.motion.vx, 0.0);
        assert_approx_eq!(t.motion.vy, config::TANK_MAX_SPEED);
        assert_approx_eq!(t.position.y, 100.0 + config::TANK_MAX_SPEED * DT);
        assert_approx_eq!(t.position.x, 100.0);
    }

    #[test]
    fn test_backward_reverses_facing() {
        let mut t = tank();
        t.update(
            &InputState {
                backward: true,
                ..input()
            },
            DT,
        );
        assert_approx_eq!(t.motion.vy, -config::TANK_MAX_SPEED);
        assert_approx_eq!(t.position.y, 100.0 - config::TANK_MAX_SPEED * DT);
    }

    #[test]
    fn test_opposed_drive_signals_stop_dead() {
        let mut t = tank();
        // Get the tank moving first, then hold both directions.
        t.update(
            &InputState {
                forward: true,
                ..input()
            },
            DT,
        );
        let parked = t.position;
        t.update(
            &InputState {
                forward: true,
                backward: true,
                ..input()
            },
            DT,
        );
        assert_eq!(t.motion, Kinematics::default());
        assert_eq!(t.position, parked);
    }

    #[test]
    fn test_fire_spawns_at_cannon_tip() {
        let mut t = tank();
        let p = t
            .update(
                &InputState {
                    fire: true,
                    ..input()
                },
                DT,
            )
            .expect("fire signal should spawn a projectile");

        // Facing up: tip sits one cannon length above center, and the
        // projectile bounding box is centered on it.
        let half = config::PROJECTILE_SIZE / 2.0;
        assert_approx_eq!(p.position.x, 100.0 - half);
        assert_approx_eq!(p.position.y, 100.0 + config::CANNON_LENGTH - half);
        assert_approx_eq!(p.motion.vx, 0.0);
        assert_approx_eq!(p.motion.vy, config::TANK_MAX_SPEED);
        assert!(!p.retired);
    }

    #[test]
    fn test_fire_follows_same_tick_rotation() {
        let mut t = tank();
        let p = t
            .update(
                &InputState {
                    turn_left: true,
                    fire: true,
                    ..input()
                },
                DT,
            )
            .expect("fire signal should spawn a projectile");

        let rot = config::TANK_SPIN_SPEED * DT;
        assert_approx_eq!(p.motion.vx, -rot.sin() * config::TANK_MAX_SPEED);
        assert_approx_eq!(p.motion.vy, rot.cos() * config::TANK_MAX_SPEED);
    }

    #[test]
    fn test_held_fire_spawns_every_tick() {
        let mut t = tank();
        let held = InputState {
            fire: true,
            ..input()
        };
        for _ in 0..5 {
            assert!(t.update(&held, DT).is_some());
        }
    }
}
