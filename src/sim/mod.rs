//! Deterministic simulation module
//!
//! All gameplay logic for one level attempt lives here:
//! - Fixed timestep only
//! - Stable iteration order (level declaration order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod geom;
pub mod gravity;
pub mod input;
pub mod level;
pub mod network;
pub mod physics;
pub mod rating;
pub mod state;
pub mod tick;

#[cfg(test)]
pub mod testing;

pub use actor::{ActorState, Direction};
pub use collision::CollisionResult;
pub use geom::{Collider, Rect};
pub use gravity::{CueArrows, Gravity, GravityCue};
pub use input::{GestureCommand, HitTarget, PointerEvent, PointerPhase};
pub use level::LevelModel;
pub use network::ActivationNetwork;
pub use rating::{Completion, Rating, RatingThresholds};
pub use state::{PlaySession, SessionEvent, SessionPhase};
pub use tick::{apply_pointer, tick};
