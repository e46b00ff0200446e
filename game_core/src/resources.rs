/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::TICK_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player one
    pub right: u32, // Player two
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Score for a player id (0 = left, anything else = right)
    pub fn for_player(&self, player_id: u8) -> u32 {
        if player_id == 0 {
            self.left
        } else {
            self.right
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn any_score(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Queued paddle intents waiting to be applied on the next tick
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pub inputs: Vec<(u8, i8)>, // (player_id, direction)
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player_id: u8, dir: i8) {
        self.inputs.push((player_id, dir.signum()));
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.increment_right();
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn test_score_for_player() {
        let score = Score { left: 2, right: 5 };
        assert_eq!(score.for_player(0), 2);
        assert_eq!(score.for_player(1), 5);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.any_score());
    }

    #[test]
    fn test_intent_queue_push_input() {
        let mut queue = IntentQueue::new();
        queue.push_input(0, -1);
        queue.push_input(1, 1);

        assert_eq!(queue.inputs.len(), 2);
        assert_eq!(queue.inputs[0], (0, -1));
        assert_eq!(queue.inputs[1], (1, 1));
    }

    #[test]
    fn test_intent_queue_normalizes_direction() {
        let mut queue = IntentQueue::new();
        queue.push_input(0, 5);
        queue.push_input(1, -3);
        assert_eq!(queue.inputs, vec![(0, 1), (1, -1)]);
    }

    #[test]
    fn test_intent_queue_clear() {
        let mut queue = IntentQueue::new();
        queue.push_input(0, -1);
        queue.push_input(1, 1);

        queue.clear();
        assert!(queue.is_empty());
    }
}
