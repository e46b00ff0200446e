/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, y-up, origin bottom-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 700.0; // pixels per second

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_SPEED: f32 = 400.0; // per axis
    pub const MAX_DEFLECT_SPEED: f32 = 400.0; // |vy| after a paddle hit

    // Match
    pub const MATCH_DURATION_SECS: u64 = 60;

    // Physics
    pub const TICK_DT: f32 = 0.010; // 100 Hz
    pub const MIN_TICK_DT: f32 = 0.001; // Floor for a misconfigured tick_dt
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
