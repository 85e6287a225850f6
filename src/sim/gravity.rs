//! Gravity polarity and the inversion cue
//!
//! Gravity is a signed scalar on the vertical axis that only flips through
//! an explicit inversion. Each inversion shows directional arrows for a
//! fixed time; a new inversion restarts the timer instead of stacking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Vertical gravity polarity for the running level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gravity {
    /// -1.0 pulls down (normal), +1.0 pulls up (reversed)
    sign: f32,
}

impl Gravity {
    pub fn new(reversed: bool) -> Self {
        Self {
            sign: if reversed { 1.0 } else { -1.0 },
        }
    }

    pub fn sign(&self) -> f32 {
        self.sign
    }

    pub fn is_reversed(&self) -> bool {
        self.sign > 0.0
    }

    /// Flip polarity; returns whether gravity is now reversed
    pub fn invert(&mut self) -> bool {
        self.sign = -self.sign;
        self.is_reversed()
    }

    pub fn acceleration(&self, magnitude: f32) -> Vec2 {
        Vec2::new(0.0, self.sign * magnitude)
    }
}

/// Which arrows the cue shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueArrows {
    /// Gravity now pulls up
    Up,
    /// Gravity now pulls down
    Down,
}

/// Self-clearing visual cue shown after a gravity inversion
///
/// Expiry is driven by simulation time through `advance`. Hosts that run
/// their own timers can call `expire` with the generation returned by
/// `trigger`; a stale generation is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GravityCue {
    arrows: Option<CueArrows>,
    remaining: f32,
    generation: u64,
}

impl GravityCue {
    /// Show the cue for `duration` seconds, replacing any running cue
    pub fn trigger(&mut self, reversed: bool, duration: f32) -> u64 {
        self.generation += 1;
        self.arrows = Some(if reversed { CueArrows::Up } else { CueArrows::Down });
        self.remaining = duration;
        self.generation
    }

    /// Count down; returns true on the tick the cue clears
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.arrows.is_none() {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.clear();
            return true;
        }
        false
    }

    /// Clear the cue if `generation` is still the current one
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.arrows.is_none() {
            return false;
        }
        self.clear();
        true
    }

    fn clear(&mut self) {
        self.arrows = None;
        self.remaining = 0.0;
    }

    pub fn arrows(&self) -> Option<CueArrows> {
        self.arrows
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
