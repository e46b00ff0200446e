//! Keyboard input handling

use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub player_id: u8,
    pub up: KeyCode,
    pub down: KeyCode,
}

pub const PLAYER_ONE: KeyBindings = KeyBindings {
    player_id: 0,
    up: KeyCode::KeyW,
    down: KeyCode::KeyS,
};

pub const PLAYER_TWO: KeyBindings = KeyBindings {
    player_id: 1,
    up: KeyCode::ArrowUp,
    down: KeyCode::ArrowDown,
};

/// Keys currently held down
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// 1 = up, -1 = down, 0 when neither or both are held
    pub fn direction(&self, bindings: &KeyBindings) -> i8 {
        match (self.is_held(bindings.up), self.is_held(bindings.down)) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }

    /// Current (player_id, direction) for both paddles
    pub fn intents(&self) -> [(u8, i8); 2] {
        [PLAYER_ONE, PLAYER_TWO].map(|b| (b.player_id, self.direction(&b)))
    }

    /// Forget held keys, e.g. when the window loses focus and releases go missing
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_without_keys() {
        let input = InputState::new();
        assert_eq!(input.intents(), [(0, 0), (1, 0)]);
    }

    #[test]
    fn test_player_one_keys() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        assert_eq!(input.direction(&PLAYER_ONE), 1);

        input.handle_key(KeyCode::KeyW, false);
        input.handle_key(KeyCode::KeyS, true);
        assert_eq!(input.direction(&PLAYER_ONE), -1);
        assert_eq!(input.direction(&PLAYER_TWO), 0, "Player two unaffected");
    }

    #[test]
    fn test_player_two_keys() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::ArrowDown, true);
        assert_eq!(input.intents(), [(0, 0), (1, -1)]);

        input.handle_key(KeyCode::ArrowDown, false);
        input.handle_key(KeyCode::ArrowUp, true);
        assert_eq!(input.intents(), [(0, 0), (1, 1)]);
    }

    #[test]
    fn test_both_players_at_once() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyS, true);
        input.handle_key(KeyCode::ArrowUp, true);
        assert_eq!(input.intents(), [(0, -1), (1, 1)]);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::KeyS, true);
        assert_eq!(input.direction(&PLAYER_ONE), 0);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Space, true);
        input.handle_key(KeyCode::KeyA, true);
        assert_eq!(input.intents(), [(0, 0), (1, 0)]);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::ArrowDown, true);
        input.clear();
        assert_eq!(input.intents(), [(0, 0), (1, 0)]);
    }
}
