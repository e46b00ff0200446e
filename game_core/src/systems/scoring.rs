use crate::{Ball, Events, GameMap, Score};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(world: &mut World, map: &GameMap, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            // Player two scores
            score.increment_right();
            events.right_scored = true;
            ball.recenter(map.ball_spawn());
        } else if ball.pos.x > map.width {
            // Player one scores
            score.increment_left();
            events.left_scored = true;
            ball.recenter(map.ball_spawn());
        }
    }
}
