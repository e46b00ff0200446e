//! On-screen text: match clock, scores and the final score overlay

use std::time::Duration;

use game_core::{Config, MatchState, Snapshot};
use glam::Vec2;

/// A block of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub origin: Vec2, // bottom-left of the first line
    pub scale: f32,
}

/// Whole remaining seconds as `MM:SS`, truncating any fraction
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn time_label(remaining: Duration) -> String {
    format!("Tiempo restante: {}", format_clock(remaining))
}

/// `player_id` is 0-based; labels count from one
pub fn score_label(player_id: u8, score: u32) -> String {
    format!("Jugador {}: {}", player_id + 1, score)
}

pub fn final_score_label(left: u32, right: u32) -> String {
    format!("Marcador final\n Jugador 1: {left}\n Jugador 2: {right}")
}

/// Text for the current frame, laid out for the configured arena
pub fn hud_text(snapshot: &Snapshot, config: &Config) -> Vec<TextItem> {
    let top = config.arena_height;
    let mut items = vec![TextItem {
        text: time_label(snapshot.remaining),
        origin: Vec2::new(10.0, top - 20.0),
        scale: 2.0,
    }];

    for player_id in 0..2u8 {
        items.push(TextItem {
            text: score_label(player_id, snapshot.score.for_player(player_id)),
            origin: Vec2::new(10.0, top - 60.0 - 20.0 * player_id as f32),
            scale: 2.0,
        });
    }

    if snapshot.state == MatchState::Over {
        items.push(TextItem {
            text: final_score_label(snapshot.score.left, snapshot.score.right),
            origin: Vec2::new(config.arena_width / 2.0 - 120.0, config.arena_height / 2.0),
            scale: 3.0,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Score;

    fn snapshot(state: MatchState, remaining: Duration) -> Snapshot {
        let config = Config::new();
        Snapshot {
            ball: Vec2::new(400.0, 300.0),
            paddles: [config.paddle_body(0), config.paddle_body(1)],
            score: Score { left: 4, right: 11 },
            remaining,
            state,
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_secs(60)), "01:00");
        assert_eq!(format_clock(Duration::from_secs(59)), "00:59");
        assert_eq!(format_clock(Duration::from_millis(9_999)), "00:09");
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_secs(754)), "12:34");
    }

    #[test]
    fn test_labels() {
        assert_eq!(time_label(Duration::from_secs(42)), "Tiempo restante: 00:42");
        assert_eq!(score_label(0, 3), "Jugador 1: 3");
        assert_eq!(score_label(1, 0), "Jugador 2: 0");
        assert_eq!(
            final_score_label(2, 5),
            "Marcador final\n Jugador 1: 2\n Jugador 2: 5"
        );
    }

    #[test]
    fn test_active_hud_has_clock_and_scores() {
        let items = hud_text(&snapshot(MatchState::Active, Duration::from_secs(30)), &Config::new());
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Tiempo restante: 00:30", "Jugador 1: 4", "Jugador 2: 11"]
        );
        assert_eq!(items[0].origin, Vec2::new(10.0, 580.0));
        assert_eq!(items[1].origin, Vec2::new(10.0, 540.0));
        assert_eq!(items[2].origin, Vec2::new(10.0, 520.0));
    }

    #[test]
    fn test_final_overlay_only_when_over() {
        let config = Config::new();
        let over = hud_text(&snapshot(MatchState::Over, Duration::ZERO), &config);
        assert_eq!(over.len(), 4);
        assert_eq!(over[3].text, final_score_label(4, 11));
        assert_eq!(over[3].scale, 3.0);

        let origin = over[3].origin;
        assert!((0.0..config.arena_width).contains(&origin.x));
        assert!((0.0..config.arena_height).contains(&origin.y));
    }
}
