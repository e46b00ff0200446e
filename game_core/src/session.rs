//! Match session: owns the world and every resource, and turns wall-clock
//! time into fixed simulation ticks.

use std::time::{Duration, Instant};

use glam::Vec2;
use hecs::World;

use crate::*;

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Clock running, physics ticking
    Active,
    /// Clock ran out or the window was closed
    Over,
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    TimeUp,
    WindowClosed,
}

/// Abstract time source so sessions can be driven by tests
pub trait Environment {
    fn now(&self) -> u64; // ms
}

/// Monotonic wall clock, counted from construction
pub struct SystemEnv {
    started: Instant,
}

impl SystemEnv {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub ball: Vec2,
    pub paddles: [Aabb; 2],
    pub score: Score,
    pub remaining: Duration,
    pub state: MatchState,
}

pub struct GameSession {
    pub env: Box<dyn Environment>,
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub intents: IntentQueue,
    pub clock: MatchClock,
    match_state: MatchState,
    tick: u32,
    last_tick_time: u64, // ms
    accumulator: u64,    // ms not yet simulated
}

impl GameSession {
    pub fn new(env: Box<dyn Environment>, seed: u64) -> Self {
        Self::with_config(env, Config::default(), seed)
    }

    pub fn with_config(env: Box<dyn Environment>, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let map = GameMap::from_config(&config);
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &config, 0);
        create_paddle(&mut world, &config, 1);

        let ball_vel = Ball::serve_velocity(config.ball_serve_speed, &mut rng);
        create_ball(&mut world, map.ball_spawn(), ball_vel);

        let now = env.now();
        let clock = MatchClock::new(now, config.match_duration);

        log::info!(
            "Match started: {}s on the clock, serve velocity ({}, {})",
            clock.duration().as_secs(),
            ball_vel.x,
            ball_vel.y
        );

        Self {
            env,
            world,
            time: Time::new(config.tick_dt, 0.0),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            intents: IntentQueue::new(),
            clock,
            match_state: MatchState::Active,
            tick: 0,
            last_tick_time: now,
            accumulator: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.match_state
    }

    pub fn is_over(&self) -> bool {
        self.match_state == MatchState::Over
    }

    pub fn ticks(&self) -> u32 {
        self.tick
    }

    /// Queue a paddle direction for the next tick. Ignored once the match is over.
    pub fn push_intent(&mut self, player_id: u8, dir: i8) {
        if self.match_state == MatchState::Active {
            self.intents.push_input(player_id, dir);
        }
    }

    /// Advance the clock to now and run every whole tick that has come due
    pub fn update(&mut self) {
        if self.match_state != MatchState::Active {
            return;
        }

        let now = self.env.now();
        self.clock.update(now);
        if self.clock.is_expired() {
            self.finish(FinishReason::TimeUp);
            return;
        }

        let max_catch_up = (Params::MAX_DT * 1000.0) as u64;
        let tick_ms = self.tick_ms();
        self.accumulator =
            (self.accumulator + now.saturating_sub(self.last_tick_time)).min(max_catch_up);
        self.last_tick_time = now;

        while self.accumulator >= tick_ms {
            self.accumulator -= tick_ms;
            self.step_once(tick_ms as f32 / 1000.0);
        }
    }

    fn tick_ms(&self) -> u64 {
        let tick_dt = self.config.tick_dt.max(Params::MIN_TICK_DT);
        ((tick_dt * 1000.0).round() as u64).max(1)
    }

    fn step_once(&mut self, dt: f32) {
        self.time.dt = dt;
        self.tick += 1;

        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.intents,
        );

        if self.events.ball_hit_paddle {
            log::debug!("Ball returned by a paddle at tick {}", self.tick);
        }
        if self.events.ball_hit_wall {
            log::debug!("Ball bounced off a wall at tick {}", self.tick);
        }

        if self.events.any_score() {
            let scorer = if self.events.left_scored { 1 } else { 2 };
            log::info!(
                "Point for player {}: {} - {}",
                scorer,
                self.score.left,
                self.score.right
            );
        }

        if self.tick % 100 == 0 {
            log::debug!(
                "Tick {}, {:.2}s simulated, {:.1}s remaining",
                self.tick,
                self.time.now,
                self.clock.remaining().as_secs_f32()
            );
        }
    }

    /// The window is going away; end the match where it stands
    pub fn close_requested(&mut self) {
        self.finish(FinishReason::WindowClosed);
    }

    /// Move to `Over`. Returns true only for the call that made the transition.
    pub fn finish(&mut self, reason: FinishReason) -> bool {
        if self.match_state == MatchState::Over {
            return false;
        }

        self.match_state = MatchState::Over;
        self.intents.clear();
        log::info!(
            "Match over ({:?}) after {:.1}s: {} - {}",
            reason,
            self.clock.elapsed().as_secs_f32(),
            self.score.left,
            self.score.right
        );
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.pos)
            .unwrap_or_else(|| self.map.ball_spawn());

        let mut paddles = [self.config.paddle_body(0), self.config.paddle_body(1)];
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            if let Some(slot) = paddles.get_mut(paddle.player_id as usize) {
                *slot = paddle.body;
            }
        }

        Snapshot {
            ball,
            paddles,
            score: self.score,
            remaining: self.clock.remaining(),
            state: self.match_state,
        }
    }
}
