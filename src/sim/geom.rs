//! Geometry primitives: axis-aligned regions and 1-D ranges
//!
//! Vectors are `glam::Vec2`; this module adds the few helpers the edge
//! collision code needs on top of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Normalize a vector, leaving the zero vector unchanged
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Left-hand normal: the vector rotated +90° (`(x, y) -> (-y, x)`)
#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    v.perp()
}

/// Closed 1-D interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Touching endpoints count as overlapping
    pub fn overlaps(&self, other: &Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Axis-aligned bounding region (`min <= max` component-wise)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min: Vec2,
    pub max: Vec2,
}

impl Region {
    /// Build a region from its center and half-extent
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        let half_extent = half_extent.abs();
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Corners in winding order: min/min, max/min, max/max, min/max
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Scalar projection of the four corners onto `axis`
    pub fn project(&self, axis: Vec2) -> Range {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for corner in self.corners() {
            let d = corner.dot(axis);
            min = min.min(d);
            max = max.max(d);
        }
        Range { min, max }
    }
}
