//! Edge colliders: static line segments the ball sweeps against
//!
//! Each edge carries a unit surface normal (the left-hand normal of its
//! tangent). Impact times are only meaningful when that normal points into
//! the playable area, so edges must be wound with the field on their left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{left_normal, normalize};
use super::state::Side;

/// A line segment `a -> b` with a derived center and inward surface normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeCollider {
    pub a: Vec2,
    pub b: Vec2,
    pub center: Vec2,
    /// Unit normal pointing into the play-field
    pub surface_normal: Vec2,
    /// Paddle guarding this edge, if any. A guarded edge only deflects the
    /// ball when the paddle covers it.
    pub guard: Option<Side>,
}

impl EdgeCollider {
    /// Unit direction `a -> b` (zero for degenerate segments)
    pub fn tangent(&self) -> Vec2 {
        normalize(self.b - self.a)
    }

    /// Signed distance of `point` from the edge's line, positive on the field side
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        (point - self.a).dot(self.surface_normal)
    }
}

/// Build an edge collider, deriving its center and surface normal
pub fn make_edge_collider(a: Vec2, b: Vec2, guard: Option<Side>) -> EdgeCollider {
    EdgeCollider {
        a,
        b,
        center: (a + b) * 0.5,
        surface_normal: left_normal(normalize(b - a)),
        guard,
    }
}

/// The four play-field edges in fixed order: bottom, right, top, left
///
/// `left_face` and `right_face` are the x positions of the paddles' inner
/// faces; the side edges sit there and are guarded by the matching paddle.
/// Top and bottom are plain bounces along the field bounds (y-up).
pub fn play_field_edges(field: Vec2, left_face: f32, right_face: f32) -> Vec<EdgeCollider> {
    let (w, h) = (field.x, field.y);
    vec![
        make_edge_collider(Vec2::new(0.0, 0.0), Vec2::new(w, 0.0), None),
        make_edge_collider(
            Vec2::new(right_face, 0.0),
            Vec2::new(right_face, h),
            Some(Side::Right),
        ),
        make_edge_collider(Vec2::new(w, h), Vec2::new(0.0, h), None),
        make_edge_collider(
            Vec2::new(left_face, h),
            Vec2::new(left_face, 0.0),
            Some(Side::Left),
        ),
    ]
}
