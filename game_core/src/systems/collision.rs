use crate::{Aabb, Ball, Config, Events, GameMap, Paddle};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle data before borrowing the ball mutably
    let paddles: Vec<(u8, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.body))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls: only flip when heading further out, so a ball
        // still past the edge on the next tick is not flipped back
        if (ball.pos.y < 0.0 && ball.vel.y < 0.0) || (ball.pos.y > map.height && ball.vel.y > 0.0)
        {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for &(player_id, body) in &paddles {
            if paddle_contact(player_id, &body, ball.pos, ball.vel) {
                ball.vel = deflect(&body, ball.pos, ball.vel, config.max_deflect_speed);
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}

/// Whether the ball has crossed a paddle's near edge within its vertical span
/// while travelling toward it
pub fn paddle_contact(player_id: u8, body: &Aabb, pos: Vec2, vel: Vec2) -> bool {
    if !body.spans_y(pos.y) {
        return false;
    }
    if player_id == 0 {
        pos.x < body.max.x && vel.x < 0.0
    } else {
        pos.x > body.min.x && vel.x > 0.0
    }
}

/// Velocity after hitting a paddle.
///
/// Horizontal speed is mirrored unchanged. Vertical speed is a linear map of
/// where the ball met the paddle: -`max_vy` at the bottom edge, 0 at the
/// middle, +`max_vy` at the top edge.
pub fn deflect(body: &Aabb, pos: Vec2, vel: Vec2, max_vy: f32) -> Vec2 {
    let relative = body.relative_y(pos.y).clamp(0.0, 1.0);
    Vec2::new(-vel.x, (relative - 0.5) * 2.0 * max_vy)
}
