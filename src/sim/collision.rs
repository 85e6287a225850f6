//! Collision detection and response
//!
//! The actor is a circle; level bodies and enabled bridges are pinned
//! rectangles, switches are pinned circles, and the level bounds contain
//! everything. Response has zero restitution: the actor is pushed out of
//! the obstacle and loses the velocity component into its surface, so it
//! rests flush instead of bouncing.

use glam::Vec2;

use super::geom::{Collider, Rect};

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the obstacle surface
    pub point: Vec2,
    /// Surface normal, pointing from the obstacle toward the actor center
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circle against a solid axis-aligned rectangle
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.closest_point(center);
    let offset = center - closest;
    let dist_sq = offset.length_squared();

    if dist_sq > 0.0 {
        if dist_sq >= radius * radius {
            return CollisionResult::miss();
        }
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: offset / dist,
            penetration: radius - dist,
        };
    }

    // Center inside the rect (tunneling): leave through the nearest face
    let min = rect.min();
    let max = rect.max();
    let faces = [
        (center.x - min.x, Vec2::NEG_X, Vec2::new(min.x, center.y)),
        (max.x - center.x, Vec2::X, Vec2::new(max.x, center.y)),
        (center.y - min.y, Vec2::NEG_Y, Vec2::new(center.x, min.y)),
        (max.y - center.y, Vec2::Y, Vec2::new(center.x, max.y)),
    ];
    let (depth, normal, point) = faces
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((0.0, Vec2::Y, center));

    CollisionResult {
        hit: true,
        point,
        normal,
        penetration: depth + radius,
    }
}

/// Circle against a solid circle
pub fn circle_circle_collision(
    center: Vec2,
    radius: f32,
    other_center: Vec2,
    other_radius: f32,
) -> CollisionResult {
    let offset = center - other_center;
    let dist = offset.length();
    let reach = radius + other_radius;
    if dist >= reach {
        return CollisionResult::miss();
    }
    let normal = if dist > 1e-6 { offset / dist } else { Vec2::Y };
    CollisionResult {
        hit: true,
        point: other_center + normal * other_radius,
        normal,
        penetration: reach - dist,
    }
}

/// Circle against any static collider
pub fn circle_collider_collision(center: Vec2, radius: f32, collider: &Collider) -> CollisionResult {
    match *collider {
        Collider::Rect(ref rect) => circle_rect_collision(center, radius, rect),
        Collider::Circle {
            center: other,
            radius: other_radius,
        } => circle_circle_collision(center, radius, other, other_radius),
    }
}

/// Circle that must stay inside `bounds`. Returns the horizontal and
/// vertical wall contacts.
pub fn circle_bounds_collision(center: Vec2, radius: f32, bounds: &Rect) -> [CollisionResult; 2] {
    let min = bounds.min() + Vec2::splat(radius);
    let max = bounds.max() - Vec2::splat(radius);

    let wall = |depth: f32, normal: Vec2, point: Vec2| CollisionResult {
        hit: true,
        point,
        normal,
        penetration: depth,
    };

    let horizontal = if center.x < min.x {
        wall(min.x - center.x, Vec2::X, Vec2::new(bounds.x, center.y))
    } else if center.x > max.x {
        wall(center.x - max.x, Vec2::NEG_X, Vec2::new(bounds.x + bounds.w, center.y))
    } else {
        CollisionResult::miss()
    };

    let vertical = if center.y < min.y {
        wall(min.y - center.y, Vec2::Y, Vec2::new(center.x, bounds.y))
    } else if center.y > max.y {
        wall(center.y - max.y, Vec2::NEG_Y, Vec2::new(center.x, bounds.y + bounds.h))
    } else {
        CollisionResult::miss()
    };

    [horizontal, vertical]
}

/// Push out of the contact and remove the velocity component into the surface
pub fn apply_contact(pos: &mut Vec2, vel: &mut Vec2, contact: &CollisionResult) {
    if !contact.hit {
        return;
    }
    *pos += contact.normal * contact.penetration;
    let into_surface = vel.dot(contact.normal);
    if into_surface < 0.0 {
        *vel -= contact.normal * into_surface;
    }
}
