use crate::{Config, GameRng};
use glam::Vec2;
use rand::seq::SliceRandom;
use std::fmt;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Paddle component - a player's bat
///
/// `x` and `y` are the top-left corner. `x` never changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

impl Paddle {
    /// Paddle at its side's inset, vertically centred, at rest
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
            vy: 0.0,
        }
    }

    /// Move by the commanded velocity, then clamp into the field
    pub fn advance(&mut self, config: &Config) {
        self.y = config.clamp_paddle_y(self.y + self.vy);
    }
}

/// Ball component - the square pong ball
///
/// `pos` is the top-left corner of the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the field centre with a random diagonal serve
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let vx = *[-config.ball_speed_x, config.ball_speed_x]
            .choose(&mut rng.0)
            .unwrap_or(&config.ball_speed_x);
        let vy = *[-config.ball_speed_y, config.ball_speed_y]
            .choose(&mut rng.0)
            .unwrap_or(&config.ball_speed_y);
        Self::new(config.ball_spawn(), Vec2::new(vx, vy))
    }

    /// Integrate one tick and reflect off the top/bottom walls.
    ///
    /// The position is not pushed back inside the field; only `vel.y` flips.
    /// Returns true when a wall bounce happened.
    pub fn advance(&mut self, config: &Config) -> bool {
        self.pos += self.vel;

        if self.pos.y <= 0.0 || self.pos.y >= config.bottom_wall_y() {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }
}
