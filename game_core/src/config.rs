use std::time::Duration;

use glam::Vec2;

use crate::map::Aabb;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_serve_speed: f32,
    pub max_deflect_speed: f32,
    pub match_duration: Duration,
    pub tick_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            max_deflect_speed: Params::MAX_DEFLECT_SPEED,
            match_duration: Duration::from_secs(Params::MATCH_DURATION_SECS),
            tick_dt: Params::TICK_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting body for a paddle, vertically centered against its side edge
    pub fn paddle_body(&self, player_id: u8) -> Aabb {
        let inset = self.paddle_margin + self.paddle_width / 2.0;
        let center_x = if player_id == 0 {
            inset
        } else {
            self.arena_width - inset
        };
        Aabb::from_center_size(
            Vec2::new(center_x, self.arena_height / 2.0),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Shift a paddle body back inside the arena's vertical range
    pub fn clamp_paddle(&self, body: Aabb) -> Aabb {
        if body.min.y < 0.0 {
            body.translated_y(-body.min.y)
        } else if body.max.y > self.arena_height {
            body.translated_y(self.arena_height - body.max.y)
        } else {
            body
        }
    }
}
