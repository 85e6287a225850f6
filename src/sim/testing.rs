//! Level fixtures shared by the simulation tests

use glam::Vec2;

use super::geom::Rect;
use super::level::{BridgeSpec, Color, LevelLayout, LevelModel, SwitchSpec};
use super::rating::RatingThresholds;

pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Switch resting on the floor at `x`
pub fn switch(key: &str, name: &str, x: f32, is_active: bool) -> SwitchSpec {
    SwitchSpec {
        key: key.to_string(),
        color: RED,
        position: Vec2::new(x, 15.0),
        reversed: false,
        name: name.to_string(),
        is_active,
    }
}

/// Floor-to-100 wall bridge at `x`
pub fn bridge(key: &str, x: f32) -> BridgeSpec {
    BridgeSpec {
        key: key.to_string(),
        color: RED,
        rect: Rect::new(x, 0.0, 20.0, 100.0),
    }
}

/// Level 1: 1000x600 box, actor on the floor at x=20, goal at x=900
pub fn level_with(switches: Vec<SwitchSpec>, bridges: Vec<BridgeSpec>) -> LevelModel {
    LevelModel {
        level_num: 1,
        layout: LevelLayout {
            overlay_path: String::new(),
            physics_border_path: String::new(),
            bounds: Rect::new(0.0, 0.0, 1000.0, 600.0),
            start_position: Vec2::new(20.0, 17.5),
            start_reversed: false,
            finish_position: Vec2::new(900.0, 32.0),
            finish_reversed: false,
        },
        rating: RatingThresholds::new(30.0, 20.0, 10.0),
        switches,
        bridges,
        bodies: Vec::new(),
        arrows: Vec::new(),
        rainbows: Vec::new(),
    }
}
