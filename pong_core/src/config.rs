use crate::error::ConfigError;
use crate::{Params, Side};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Game configuration
///
/// Immutable once handed to a [`crate::Match`]. Fields missing from a JSON
/// document fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ball_speed_increase: f32,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry in which paddles or the ball cannot fit the field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} exceeds field_height {}",
                self.paddle_height, self.field_height
            )));
        }
        if self.ball_size > self.field_height {
            return Err(ConfigError::Invalid(format!(
                "ball_size {} exceeds field_height {}",
                self.ball_size, self.field_height
            )));
        }
        if !(self.paddle_inset.is_finite() && self.paddle_inset >= 0.0)
            || 2.0 * (self.paddle_inset + self.paddle_width) > self.field_width
        {
            return Err(ConfigError::Invalid(format!(
                "paddles with inset {} and width {} do not fit field_width {}",
                self.paddle_inset, self.paddle_width, self.field_width
            )));
        }
        let finite = [
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("ball_speed_increase", self.ball_speed_increase),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Highest allowed paddle Y (top edge)
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp paddle Y to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle Y at the start of a match, vertically centred
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.field_height / 2.0).floor() - (self.paddle_height / 2.0).floor()
    }

    /// Ball position at the start of a match
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.field_width / 2.0).floor(),
            (self.field_height / 2.0).floor(),
        )
    }

    /// X at or past which the ball has left through the right side
    pub fn right_goal_x(&self) -> f32 {
        self.field_width - self.ball_size
    }

    /// Y at or past which the ball bounces off the bottom wall
    pub fn bottom_wall_y(&self) -> f32 {
        self.field_height - self.ball_size
    }

    /// Wall-clock duration of one tick when paced for display
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}
