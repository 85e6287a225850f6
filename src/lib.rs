//! Gravity Travel - a gravity-inversion puzzle game core
//!
//! Core modules:
//! - `sim`: Level simulation (physics, switches/bridges, completion, input gestures)
//! - `flow`: Scene state machine (menu, level select, play, completion)
//! - `game`: Flow driver owning the active session, settings and collaborators
//! - `levels`: Level catalog (embedded or on-disk JSON)
//! - `platform`: Rendering collaborator seam
//! - `persistence`: Atomic JSON save/load
//! - `tuning`: Data-driven physics constants
//! - `view`: Draw list for the active session

pub mod audio;
pub mod error;
pub mod flow;
pub mod game;
pub mod levels;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod view;

pub use error::{FlowError, LevelError, PersistError};
pub use flow::{FlowEvent, Scene};
pub use game::Game;
pub use settings::{Settings, Theme};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Actor sprite edge length; the physics body is the inscribed circle
    pub const ACTOR_SIZE: f32 = 35.0;
    pub const ACTOR_RADIUS: f32 = ACTOR_SIZE / 2.0;

    /// Gravity acceleration magnitude (5 m/s² at 150 px per meter)
    pub const GRAVITY_ACCEL: f32 = 750.0;
    /// Horizontal walking speed (px/s)
    pub const MAX_WALK_SPEED: f32 = 100.0;
    /// Above this vertical speed the actor counts as falling and cannot steer
    pub const STEER_VY_THRESHOLD: f32 = 1.0;

    /// Distance at which a switch becomes tappable
    pub const SWITCH_RANGE: f32 = 60.0;
    /// Radius of the solid switch body
    pub const SWITCH_RADIUS: f32 = 15.0;

    /// Max actor drift between press and release that still counts as a tap
    pub const TAP_TOLERANCE: f32 = 20.0;
    /// Min drag length before a drag starts driving the actor
    pub const DRAG_MIN_LENGTH: f32 = 2.0 * ACTOR_SIZE / 3.0;

    /// How long gravity arrows stay visible after an inversion (seconds)
    pub const GRAVITY_CUE_SECS: f32 = 2.0;
    /// Duration of the 180° flip after an inversion (seconds)
    pub const FLIP_DURATION: f32 = 0.3;

    /// Goal region size, centered on the finish position
    pub const GOAL_WIDTH: f32 = 44.0;
    pub const GOAL_HEIGHT: f32 = 64.0;
}

/// Vector from `from` to `to`
#[inline]
pub fn displacement(from: Vec2, to: Vec2) -> Vec2 {
    to - from
}

/// Angle of a vector measured from the +x axis, in (-π, π]
#[inline]
pub fn angle_from_x_axis(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Move `current` toward `target` by at most `max_delta`
#[inline]
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(delta)
    }
}
