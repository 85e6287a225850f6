//! Switch-bridge activation network
//!
//! Switches and bridges are linked by a shared activation key, not by
//! references. Bridges are indexed by key at load time; toggling a switch
//! writes its new state to every bridge under that key.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Collider, Rect};
use super::level::{Color, LevelModel};
use crate::consts::SWITCH_RADIUS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchState {
    pub key: String,
    pub name: String,
    pub color: Color,
    pub position: Vec2,
    pub reversed: bool,
    /// Toggle state
    pub is_activated: bool,
    /// Actor is close enough to tap it
    pub is_in_range: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeState {
    pub key: String,
    pub color: Color,
    pub rect: Rect,
    /// Solid when enabled, pass-through when disabled
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ActivationNetwork {
    switches: Vec<SwitchState>,
    bridges: Vec<BridgeState>,
    bridges_by_key: HashMap<String, Vec<usize>>,
}

impl ActivationNetwork {
    /// Build the network for a level and apply switches that start active
    pub fn from_level(level: &LevelModel) -> Self {
        let switches = level
            .switches
            .iter()
            .map(|s| SwitchState {
                key: s.key.clone(),
                name: s.name.clone(),
                color: s.color,
                position: s.position,
                reversed: s.reversed,
                is_activated: false,
                is_in_range: false,
            })
            .collect();

        let bridges: Vec<BridgeState> = level
            .bridges
            .iter()
            .map(|b| BridgeState {
                key: b.key.clone(),
                color: b.color,
                rect: b.rect,
                is_enabled: false,
            })
            .collect();

        let mut bridges_by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, bridge) in bridges.iter().enumerate() {
            bridges_by_key.entry(bridge.key.clone()).or_default().push(index);
        }

        let mut network = Self {
            switches,
            bridges,
            bridges_by_key,
        };

        for (index, spec) in level.switches.iter().enumerate() {
            if spec.is_active {
                network.force_toggle(index);
            }
        }

        network
    }

    /// Refresh which switches the actor can reach
    pub fn update_proximity(&mut self, actor: Vec2, range: f32) {
        for switch in &mut self.switches {
            switch.is_in_range = actor.distance(switch.position) <= range;
        }
    }

    /// Toggle a switch the actor is in range of. Returns the new state, or
    /// `None` if the switch is out of range or does not exist.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if !self.switches.get(index)?.is_in_range {
            return None;
        }
        self.force_toggle(index)
    }

    /// Toggle regardless of proximity (level load)
    pub fn force_toggle(&mut self, index: usize) -> Option<bool> {
        let switch = self.switches.get_mut(index)?;
        switch.is_activated = !switch.is_activated;
        let activated = switch.is_activated;

        if let Some(indices) = self.bridges_by_key.get(&switch.key) {
            for &i in indices {
                self.bridges[i].is_enabled = activated;
            }
        }
        log::debug!("switch '{}' ({}) -> {}", switch.name, switch.key, activated);
        Some(activated)
    }

    pub fn switch_index(&self, name: &str) -> Option<usize> {
        self.switches.iter().position(|s| s.name == name)
    }

    pub fn switches(&self) -> &[SwitchState] {
        &self.switches
    }

    pub fn bridges(&self) -> &[BridgeState] {
        &self.bridges
    }

    /// Colliders for every enabled bridge and every switch body
    pub fn colliders(&self) -> impl Iterator<Item = Collider> + '_ {
        let bridges = self
            .bridges
            .iter()
            .filter(|b| b.is_enabled)
            .map(|b| Collider::Rect(b.rect));
        let switches = self.switches.iter().map(|s| Collider::Circle {
            center: s.position,
            radius: SWITCH_RADIUS,
        });
        bridges.chain(switches)
    }
}
