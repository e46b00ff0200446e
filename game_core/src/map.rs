use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether `y` lies within the vertical span, edges included
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.max.y
    }

    /// Relative position of `y` within the vertical span: 0 at min, 1 at max
    pub fn relative_y(&self, y: f32) -> f32 {
        (y - self.min.y) / self.height()
    }

    pub fn translated_y(&self, dy: f32) -> Self {
        let offset = Vec2::new(0.0, dy);
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Playing field bounds and spawn points
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    /// Ball starts (and restarts after a point) at the center of the screen
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_relative_y() {
        let body = Aabb::new(Vec2::new(10.0, 250.0), Vec2::new(20.0, 350.0));
        assert_eq!(body.relative_y(250.0), 0.0);
        assert_eq!(body.relative_y(300.0), 0.5);
        assert_eq!(body.relative_y(350.0), 1.0);
    }

    #[test]
    fn test_aabb_spans_y_includes_edges() {
        let body = Aabb::new(Vec2::new(10.0, 250.0), Vec2::new(20.0, 350.0));
        assert!(body.spans_y(250.0));
        assert!(body.spans_y(350.0));
        assert!(!body.spans_y(249.9));
        assert!(!body.spans_y(350.1));
    }

    #[test]
    fn test_aabb_from_center_size() {
        let aabb = Aabb::from_center_size(Vec2::new(400.0, 300.0), Vec2::new(20.0, 20.0));
        assert_eq!(aabb.min, Vec2::new(390.0, 290.0));
        assert_eq!(aabb.center(), Vec2::new(400.0, 300.0));
        assert_eq!(aabb.max, Vec2::new(410.0, 310.0));
        assert_eq!(aabb.size(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_ball_spawn_is_screen_center() {
        let map = GameMap::new();
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 300.0));
    }
}
