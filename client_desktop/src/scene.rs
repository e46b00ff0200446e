//! Turns a session snapshot into GPU instances

use game_core::{Aabb, Config, Snapshot};

use crate::font;
use crate::hud;
use crate::renderer::resources::InstanceData;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Instances for one frame: every rectangle (paddles and text pixels) plus the ball
#[derive(Debug, Clone)]
pub struct Scene {
    pub rects: Vec<InstanceData>,
    pub ball: InstanceData,
}

impl Scene {
    pub fn build(snapshot: &Snapshot, config: &Config) -> Self {
        let mut rects: Vec<InstanceData> = snapshot.paddles.iter().map(rect_instance).collect();

        for item in hud::hud_text(snapshot, config) {
            rects.extend(
                font::layout(&item.text, item.origin, item.scale)
                    .into_iter()
                    .map(|center| InstanceData {
                        transform: [center.x, center.y, item.scale, item.scale],
                        tint: WHITE,
                    }),
            );
        }

        let diameter = config.ball_radius * 2.0;
        let ball = InstanceData {
            transform: [snapshot.ball.x, snapshot.ball.y, diameter, diameter],
            tint: WHITE,
        };

        Self { rects, ball }
    }
}

fn rect_instance(body: &Aabb) -> InstanceData {
    let center = body.center();
    let size = body.size();
    InstanceData {
        transform: [center.x, center.y, size.x, size.y],
        tint: WHITE,
    }
}
