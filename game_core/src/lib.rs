pub mod clock;
pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    intents: &mut IntentQueue,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics. A zero, negative or NaN
    // tick_dt falls back to the floor so the loop always advances.
    let tick_dt = config.tick_dt.max(Params::MIN_TICK_DT);
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(tick_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // Clear events at start of tick
        events.clear();

        // 1. Ingest intents (apply to paddle intents)
        ingest_intents(world, intents);

        // 2. Move paddles based on intents
        move_paddles(world, &step_time, config);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Check collisions (ball vs paddles, walls)
        check_collisions(world, map, config, events);

        // 5. Check scoring (ball exited arena)
        check_scoring(world, map, score, events);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, config: &Config, player_id: u8) -> hecs::Entity {
    let paddle = Paddle::new(player_id, config.paddle_body(player_id), config.paddle_speed);
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
