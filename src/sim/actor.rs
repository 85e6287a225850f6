//! The traveler: the player-controlled actor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::approach;
use crate::consts::ACTOR_RADIUS;

/// Horizontal facing / drive direction (screen space)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Sign of the horizontal axis for this direction
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Direction pointing from `from_x` toward `to_x`
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x > from_x {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Dynamic state of the actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Gravity polarity as experienced by the actor
    pub is_reversed: bool,
    /// Walking intent; velocity is applied by the physics step
    pub is_moving: bool,
    pub facing: Direction,
    /// Visual rotation (radians). Eases to 0 or π after a reversal;
    /// physics never rotates the actor.
    pub orientation: f32,
}

impl ActorState {
    pub fn new(start: Vec2, reversed: bool) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            radius: ACTOR_RADIUS,
            is_reversed: reversed,
            is_moving: false,
            facing: Direction::default(),
            orientation: Self::target_orientation(reversed),
        }
    }

    fn target_orientation(reversed: bool) -> f32 {
        if reversed { std::f32::consts::PI } else { 0.0 }
    }

    /// Start (or keep) walking toward `direction`
    pub fn walk(&mut self, direction: Direction) {
        self.facing = direction;
        self.is_moving = true;
    }

    /// Stop walking and drop horizontal speed immediately
    pub fn stop(&mut self) {
        self.is_moving = false;
        self.vel.x = 0.0;
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.is_reversed = reversed;
    }

    /// Horizontal sprite mirroring: flipped again while upside down so the
    /// actor keeps looking the way it walks.
    pub fn mirror_x(&self) -> f32 {
        let polarity = if self.is_reversed { -1.0 } else { 1.0 };
        polarity * self.facing.sign()
    }

    /// Advance the flip animation toward the current polarity
    pub fn advance_orientation(&mut self, dt: f32, flip_duration: f32) {
        let target = Self::target_orientation(self.is_reversed);
        if flip_duration <= 0.0 {
            self.orientation = target;
            return;
        }
        let rate = std::f32::consts::PI / flip_duration;
        self.orientation = approach(self.orientation, target, rate * dt);
    }
}
