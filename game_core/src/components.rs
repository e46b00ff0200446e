use glam::Vec2;

use crate::map::Aabb;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left (player one), 1 = right (player two)
    pub body: Aabb,
    pub speed: f32, // pixels per second
}

impl Paddle {
    pub fn new(player_id: u8, body: Aabb, speed: f32) -> Self {
        Self {
            player_id,
            body,
            speed,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve velocity: both axes at `speed`, signs picked by `rng`.
    /// Not a fixed up-right serve: the seed decides who receives first.
    pub fn serve_velocity(speed: f32, rng: &mut crate::GameRng) -> Vec2 {
        use rand::Rng;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        Vec2::new(sx * speed, sy * speed)
    }

    /// Put the ball back at `center`, keeping its current velocity
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // 1 = up, 0 = stop, -1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_serve_velocity_has_both_axes_at_speed() {
        let mut rng = GameRng::new(7);
        for _ in 0..16 {
            let vel = Ball::serve_velocity(400.0, &mut rng);
            assert_eq!(vel.x.abs(), 400.0);
            assert_eq!(vel.y.abs(), 400.0);
        }
    }

    #[test]
    fn test_recenter_keeps_velocity() {
        let mut ball = Ball::new(Vec2::new(-3.0, 120.0), Vec2::new(-400.0, 250.0));
        ball.recenter(Vec2::new(400.0, 300.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(-400.0, 250.0));
    }
}
