//! Play session state
//!
//! Everything owned by one `Play(n)` scene. Built fresh from a level model
//! on every load, so nothing leaks between sessions.

use serde::{Deserialize, Serialize};

use super::actor::ActorState;
use super::geom::{Collider, Rect};
use super::gravity::{Gravity, GravityCue};
use super::input::GestureController;
use super::level::LevelModel;
use super::network::ActivationNetwork;
use super::rating::{Completion, CompletionTracker};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ticks and input are processed
    Running,
    /// Goal reached; the simulation is frozen
    Completed,
}

/// Something the host or flow layer should react to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Fired exactly once per session
    Completed(Completion),
    GravityInverted { reversed: bool },
    GravityCueCleared,
    SwitchToggled { name: String, activated: bool },
    ResetRequested,
    BackRequested,
}

/// Complete state of one level attempt
#[derive(Debug, Clone)]
pub struct PlaySession {
    pub level: LevelModel,
    pub tuning: Tuning,
    pub actor: ActorState,
    pub gravity: Gravity,
    pub cue: GravityCue,
    pub network: ActivationNetwork,
    pub gestures: GestureController,
    pub completion: CompletionTracker,
    pub phase: SessionPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Level bodies, fixed for the whole session
    static_solids: Vec<Collider>,
}

impl PlaySession {
    pub fn new(level: LevelModel, tuning: Tuning) -> Self {
        let layout = &level.layout;
        let actor = ActorState::new(layout.start_position, layout.start_reversed);
        let gravity = Gravity::new(layout.start_reversed);
        let network = ActivationNetwork::from_level(&level);
        let static_solids = level.bodies.iter().map(|b| Collider::Rect(b.rect)).collect();

        Self {
            level,
            tuning,
            actor,
            gravity,
            cue: GravityCue::default(),
            network,
            gestures: GestureController::new(),
            completion: CompletionTracker::new(),
            phase: SessionPhase::Running,
            time_ticks: 0,
            static_solids,
        }
    }

    pub fn level_num(&self) -> u32 {
        self.level.level_num
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn goal_rect(&self) -> Rect {
        self.level.layout.goal_rect()
    }

    pub fn bounds(&self) -> Rect {
        self.level.layout.bounds
    }

    /// Level bodies plus the current enabled bridges and switch bodies
    pub fn solids(&self) -> Vec<Collider> {
        self.static_solids
            .iter()
            .copied()
            .chain(self.network.colliders())
            .collect()
    }

    /// Flip gravity and the actor with it, restarting the arrow cue
    pub fn invert_gravity(&mut self) -> bool {
        let reversed = self.gravity.invert();
        self.actor.set_reversed(reversed);
        self.cue.trigger(reversed, self.tuning.gravity_cue_secs);
        log::debug!("gravity inverted (reversed: {reversed})");
        reversed
    }
}
