//! Scene flow
//!
//! A pure `(Scene, FlowEvent) -> Transition` function. The caller applies
//! the returned effects (loading a level, dropping the session) before
//! committing the new scene.

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, FlowResult};
use crate::sim::rating::Rating;

/// The single active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    Menu,
    Settings,
    LevelSelect,
    Play { level: u32 },
    LevelCompletion { level: u32, rating: Rating },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Menu: go to level select
    Start,
    /// Menu: open settings
    OpenSettings,
    /// Leave the current screen for the menu
    Back,
    SelectLevel(u32),
    /// The play session reached its goal
    Completed { level: u32, rating: Rating },
    /// Reload the current level fresh
    Reset,
    Retry,
    Next,
}

/// Side effects the caller must perform for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    /// Build a fresh session for this level
    LoadLevel(u32),
    /// Drop the current session
    EndSession,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub scene: Scene,
    pub effects: Vec<FlowEffect>,
}

impl Transition {
    fn to(scene: Scene) -> Self {
        Self {
            scene,
            effects: Vec::new(),
        }
    }

    fn play(level: u32) -> Self {
        Self {
            scene: Scene::Play { level },
            effects: vec![FlowEffect::LoadLevel(level)],
        }
    }

    fn with(mut self, effect: FlowEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Whether the completion screen for `level` offers "next"
pub fn offers_next(level: u32, level_count: u32) -> bool {
    level < level_count
}

/// Compute the transition for `event` in `scene`. Levels are numbered
/// `1..=level_count`.
pub fn transition(scene: Scene, event: FlowEvent, level_count: u32) -> FlowResult<Transition> {
    use FlowEvent as E;
    use Scene as S;

    let transition = match (scene, event) {
        (S::Menu, E::Start) => Transition::to(S::LevelSelect),
        (S::Menu, E::OpenSettings) => Transition::to(S::Settings),
        (S::Settings, E::Back) | (S::LevelSelect, E::Back) => Transition::to(S::Menu),

        (S::LevelSelect, E::SelectLevel(level)) => {
            if level == 0 || level > level_count {
                return Err(FlowError::UnknownLevel(level));
            }
            Transition::play(level)
        }

        (S::Play { level }, E::Completed { level: done, rating }) if done == level => {
            Transition::to(S::LevelCompletion { level, rating }).with(FlowEffect::EndSession)
        }
        (S::Play { level }, E::Reset) => Transition::play(level),
        (S::Play { .. }, E::Back) => Transition::to(S::Menu).with(FlowEffect::EndSession),

        (S::LevelCompletion { level, .. }, E::Retry) => Transition::play(level),
        (S::LevelCompletion { level, .. }, E::Next) => {
            if !offers_next(level, level_count) {
                return Err(FlowError::NoSuccessorLevel(level));
            }
            Transition::play(level + 1)
        }
        (S::LevelCompletion { .. }, E::Back) => Transition::to(S::Menu),

        (scene, event) => return Err(FlowError::InvalidTransition { scene, event }),
    };
    Ok(transition)
}
