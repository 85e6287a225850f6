//! Pointer gestures in a running level
//!
//! A press on the actor starts tracking. Dragging far enough drives the
//! actor toward the pointer; releasing stops it. A release on the actor
//! that barely moved it is a tap, which inverts gravity. Taps on switches
//! and buttons are resolved directly from the host's hit-test result.

use glam::Vec2;

use super::actor::Direction;
use crate::tuning::Tuning;
use crate::{angle_from_x_axis, displacement};

/// What the host's hit-test found under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Actor,
    /// A switch, by its level-defined name
    Switch(String),
    ResetButton,
    BackButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    Cancel,
}

/// Normalized input event (world-space point)
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub point: Vec2,
    pub target: Option<HitTarget>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, point: Vec2, target: Option<HitTarget>) -> Self {
        Self {
            phase,
            point,
            target,
        }
    }
}

/// Command for the session produced by a gesture
#[derive(Debug, Clone, PartialEq)]
pub enum GestureCommand {
    Drive(Direction),
    Stop,
    InvertGravity,
    ToggleSwitch(String),
    Reset,
    Back,
}

/// Drag feedback drawn from the actor toward the pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragIndicator {
    pub visible: bool,
    pub length: f32,
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum GestureState {
    #[default]
    Idle,
    /// Press landed on the actor; `anchor` is where the actor was then
    Tracking { anchor: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct GestureController {
    state: GestureState,
    indicator: DragIndicator,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    pub fn indicator(&self) -> DragIndicator {
        self.indicator
    }

    /// Feed one pointer event; `actor` is the actor's current position
    pub fn handle(&mut self, event: &PointerEvent, actor: Vec2, tuning: &Tuning) -> Vec<GestureCommand> {
        match event.phase {
            PointerPhase::Press => self.press(event, actor),
            PointerPhase::Move => self.drag(event.point, actor, tuning),
            PointerPhase::Release => self.release(event, actor, tuning),
            PointerPhase::Cancel => self.end(),
        }
    }

    fn press(&mut self, event: &PointerEvent, actor: Vec2) -> Vec<GestureCommand> {
        match &event.target {
            Some(HitTarget::Actor) => {
                self.state = GestureState::Tracking { anchor: actor };
                Vec::new()
            }
            Some(HitTarget::Switch(name)) => vec![GestureCommand::ToggleSwitch(name.clone())],
            Some(HitTarget::ResetButton) => vec![GestureCommand::Reset],
            Some(HitTarget::BackButton) => vec![GestureCommand::Back],
            None => Vec::new(),
        }
    }

    fn drag(&mut self, pointer: Vec2, actor: Vec2, tuning: &Tuning) -> Vec<GestureCommand> {
        if !self.is_tracking() {
            return Vec::new();
        }
        let vector = displacement(actor, pointer);
        self.indicator.length = vector.length();
        self.indicator.angle = angle_from_x_axis(vector);

        // Too close to tell a drag from a tap
        if self.indicator.length < tuning.drag_min_length {
            self.indicator.visible = false;
            return vec![GestureCommand::Stop];
        }

        self.indicator.visible = true;
        vec![GestureCommand::Drive(Direction::toward(actor.x, pointer.x))]
    }

    fn release(&mut self, event: &PointerEvent, actor: Vec2, tuning: &Tuning) -> Vec<GestureCommand> {
        let anchor = match self.state {
            GestureState::Tracking { anchor } => Some(anchor),
            GestureState::Idle => None,
        };
        let mut commands = self.end();

        let on_actor = event.target == Some(HitTarget::Actor);
        let barely_moved = anchor.is_some_and(|a| a.distance(actor) <= tuning.tap_tolerance);
        if on_actor && barely_moved {
            commands.push(GestureCommand::InvertGravity);
        }
        commands
    }

    /// Release or cancel: stop driving and hide the indicator
    fn end(&mut self) -> Vec<GestureCommand> {
        let was_tracking = self.is_tracking();
        self.state = GestureState::Idle;
        self.indicator.visible = false;
        if was_tracking {
            vec![GestureCommand::Stop]
        } else {
            Vec::new()
        }
    }
}
