//! Math utilities and types
//!
//! Provides the 2D math types used by the scene simulation.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned bounding box, stored as a center point plus full extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec2,

    /// Full extents (width, height)
    pub size: Vec2,
}

impl Aabb {
    /// Create a box from its center and full extents
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Minimum corner of the box
    pub fn min(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    /// Maximum corner of the box
    pub fn max(&self) -> Vec2 {
        self.center + self.size * 0.5
    }

    /// Check overlap against another box, touching edges included
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
    }

    /// Check whether a point lies inside the box
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// Math utility functions
pub mod utils {
    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Frame-rate independent exponential smoothing factor.
    ///
    /// Returns the fraction of the remaining distance covered after `dt`
    /// seconds when approaching at the given per-second rate. Equivalent to
    /// a constant per-frame gain only at a fixed cadence.
    pub fn damp_factor(rate: f32, dt: f32) -> f32 {
        1.0 - (-rate * dt).exp()
    }
}
