//! Actor motion under gravity and horizontal drive
//!
//! Vertical motion comes only from gravity and contact response. Horizontal
//! motion is the walking drive, applied only while the actor is not falling.

use super::actor::ActorState;
use super::collision::{
    CollisionResult, apply_contact, circle_bounds_collision, circle_collider_collision,
};
use super::geom::{Collider, Rect};
use super::gravity::Gravity;
use crate::tuning::Tuning;

/// Upper bound on collision substeps per tick
const MAX_COLLISION_SUBSTEPS: u32 = 16;

/// Apply walking speed if the actor wants to move and is not falling.
/// Returns whether the drive was applied.
pub fn apply_drive(actor: &mut ActorState, tuning: &Tuning) -> bool {
    if !actor.is_moving || !can_steer(actor, tuning) {
        return false;
    }
    actor.vel.x = actor.facing.sign() * tuning.walk_speed;
    true
}

/// Advance the actor by `dt` against the static world
pub fn step(
    actor: &mut ActorState,
    gravity: &Gravity,
    solids: &[Collider],
    bounds: &Rect,
    tuning: &Tuning,
    dt: f32,
) {
    apply_drive(actor, tuning);

    actor.vel += gravity.acceleration(tuning.gravity) * dt;
    actor.vel.x = actor.vel.x.clamp(-tuning.walk_speed, tuning.walk_speed);

    // Keep each move under half a radius so fast falls cannot tunnel
    let travel = actor.vel.length() * dt;
    let substeps = ((travel / (actor.radius * 0.5)).ceil() as u32).clamp(1, MAX_COLLISION_SUBSTEPS);
    let sub_dt = dt / substeps as f32;

    for _ in 0..substeps {
        actor.pos += actor.vel * sub_dt;
        // Resting on any surface that faces against gravity, including the
        // slope of a round switch body, counts as grounded
        if resolve_contacts(actor, solids, bounds, gravity) {
            actor.vel.y = 0.0;
        }
    }
}

/// Push the actor out of everything it overlaps. Returns whether any
/// contact normal opposes gravity.
fn resolve_contacts(actor: &mut ActorState, solids: &[Collider], bounds: &Rect, gravity: &Gravity) -> bool {
    let mut supported = false;
    let mut resolve = |actor: &mut ActorState, contact: CollisionResult| {
        if contact.hit && contact.normal.y * gravity.sign() < 0.0 {
            supported = true;
        }
        apply_contact(&mut actor.pos, &mut actor.vel, &contact);
    };

    for contact in circle_bounds_collision(actor.pos, actor.radius, bounds) {
        resolve(actor, contact);
    }
    for collider in solids {
        let contact = circle_collider_collision(actor.pos, actor.radius, collider);
        resolve(actor, contact);
    }
    supported
}

/// The actor may steer only while its vertical speed is near zero
pub fn can_steer(actor: &ActorState, tuning: &Tuning) -> bool {
    actor.vel.y.abs() <= tuning.steer_threshold
}
