//! Level model
//!
//! Static description of one level, decoded from JSON once per play session.
//! Immutable after load.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::rating::RatingThresholds;
use crate::consts::{GOAL_HEIGHT, GOAL_WIDTH};
use crate::error::{LevelError, LevelResult};

/// RGBA tint, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Start/finish placement and level bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Decorative overlay asset (opaque to the simulation)
    #[serde(default)]
    pub overlay_path: String,
    /// Border asset (opaque to the simulation; `bounds` is the solid border)
    #[serde(default)]
    pub physics_border_path: String,
    pub bounds: Rect,
    pub start_position: Vec2,
    #[serde(default)]
    pub start_reversed: bool,
    pub finish_position: Vec2,
    #[serde(default)]
    pub finish_reversed: bool,
}

impl LevelLayout {
    /// The region the actor must reach
    pub fn goal_rect(&self) -> Rect {
        Rect::centered(self.finish_position, GOAL_WIDTH, GOAL_HEIGHT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchSpec {
    pub key: String,
    pub color: Color,
    pub position: Vec2,
    /// Drawn upside down (mounted on a ceiling)
    #[serde(default)]
    pub reversed: bool,
    pub name: String,
    /// Activated at level load
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSpec {
    pub key: String,
    pub color: Color,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowSpec {
    pub position: Vec2,
    #[serde(default)]
    pub reversed: bool,
    /// Rotated a quarter turn with the alternating animation
    #[serde(default)]
    pub alternative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainbowSpec {
    pub position: Vec2,
    #[serde(default)]
    pub rotation: f32,
}

/// Complete description of one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelModel {
    pub level_num: u32,
    pub layout: LevelLayout,
    pub rating: RatingThresholds,
    #[serde(default)]
    pub switches: Vec<SwitchSpec>,
    #[serde(default)]
    pub bridges: Vec<BridgeSpec>,
    #[serde(default)]
    pub bodies: Vec<BodySpec>,
    #[serde(default)]
    pub arrows: Vec<ArrowSpec>,
    #[serde(default)]
    pub rainbows: Vec<RainbowSpec>,
}

impl LevelModel {
    /// Decode and validate the JSON for level `level`
    pub fn from_json(level: u32, json: &str) -> LevelResult<Self> {
        let model: LevelModel =
            serde_json::from_str(json).map_err(|source| LevelError::Decode { level, source })?;
        model.validate(level)?;
        Ok(model)
    }

    fn validate(&self, level: u32) -> LevelResult<()> {
        let invalid = |reason: String| LevelError::Invalid { level, reason };

        if self.level_num != level {
            return Err(invalid(format!("file declares level {}", self.level_num)));
        }
        let bounds = self.layout.bounds;
        if !bounds.has_area() {
            return Err(invalid(format!("bounds {bounds:?} have no area")));
        }
        if !bounds.contains(self.layout.start_position) {
            return Err(invalid("start position outside bounds".to_string()));
        }
        if !bounds.contains(self.layout.finish_position) {
            return Err(invalid("finish position outside bounds".to_string()));
        }
        if !self.rating.is_finite() {
            return Err(invalid("rating thresholds must be finite".to_string()));
        }
        if let Some(body) = self.bodies.iter().find(|b| !b.rect.has_area()) {
            return Err(invalid(format!("body {:?} has no area", body.rect)));
        }
        Ok(())
    }
}
