use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued intents to the matching paddles
pub fn ingest_intents(world: &mut World, intents: &mut IntentQueue) {
    for &(player_id, dir) in &intents.inputs {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player_id == player_id {
                intent.dir = dir;
            }
        }
    }

    // Clear processed inputs
    intents.clear();
}
