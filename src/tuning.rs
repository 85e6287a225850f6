//! Data-driven physics and input constants
//!
//! Defaults mirror `consts`; a host may load overrides from JSON. Missing
//! fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PersistResult;
use crate::persistence;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravity acceleration magnitude (px/s²)
    pub gravity: f32,
    /// Horizontal walking speed (px/s)
    pub walk_speed: f32,
    /// Vertical speed above which steering is disabled (px/s)
    pub steer_threshold: f32,
    /// Distance at which switches become tappable
    pub switch_range: f32,
    /// Actor drift allowed for a tap to count as a gravity inversion
    pub tap_tolerance: f32,
    /// Drag length at which a drag starts driving the actor
    pub drag_min_length: f32,
    /// Gravity arrow visibility after an inversion (s)
    pub gravity_cue_secs: f32,
    /// Flip animation duration (s)
    pub flip_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_ACCEL,
            walk_speed: MAX_WALK_SPEED,
            steer_threshold: STEER_VY_THRESHOLD,
            switch_range: SWITCH_RANGE,
            tap_tolerance: TAP_TOLERANCE,
            drag_min_length: DRAG_MIN_LENGTH,
            gravity_cue_secs: GRAVITY_CUE_SECS,
            flip_duration: FLIP_DURATION,
        }
    }
}

impl Tuning {
    /// Read overrides from a JSON file
    pub fn load(path: &Path) -> PersistResult<Self> {
        let tuning = persistence::read_json(path)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
