//! Drawing-surface abstraction
//!
//! The engine draws through the [`Canvas`] trait so hosts can supply any 2D
//! surface. Every frame is fully repainted: `clear`, then a stream of draw
//! calls in entity-list order. Nothing persists on the surface between
//! frames.

pub mod ship;

use crate::assets::ImageData;
use crate::foundation::math::{Aabb, Vec2};

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Cockpit / burst cyan
    pub const CYAN: Color = Color::rgb(0.0, 0.94, 1.0);

    /// Neon trim magenta
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 0.667);

    /// Nose cannon laser green
    pub const LASER_GREEN: Color = Color::rgb(0.0, 1.0, 0.533);

    /// Engine flame core orange
    pub const FLAME_ORANGE: Color = Color::rgb(1.0, 0.4, 0.0);

    /// Engine flame glow yellow
    pub const FLAME_YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    /// Dark hull grey
    pub const HULL: Color = Color::rgb(0.133, 0.133, 0.133);

    /// Wing grey
    pub const WING: Color = Color::rgb(0.2, 0.2, 0.2);

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Copy of this color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// 8-bit channel view for rasterizing hosts
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// A 2D drawing surface the engine renders into
pub trait Canvas {
    /// Current surface size in scene pixels (width, height)
    fn size(&self) -> (f32, f32);

    /// Clear the whole surface to the background
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Aabb, color: Color);

    /// Fill a convex polygon given in draw order
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Fill an ellipse
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);

    /// Stroke a line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Draw a decoded sprite stretched over `rect`
    fn draw_sprite(&mut self, image: &ImageData, rect: Aabb);
}

/// Canvas that reports a size and ignores all draw calls.
///
/// Useful for headless runs and for driving the engine in tests.
#[derive(Debug, Clone, Copy)]
pub struct NullCanvas {
    width: f32,
    height: f32,
}

impl NullCanvas {
    /// Create a null canvas with the given reported size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Change the reported size
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

impl Canvas for NullCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {}

    fn fill_rect(&mut self, _rect: Aabb, _color: Color) {}

    fn fill_polygon(&mut self, _points: &[Vec2], _color: Color) {}

    fn fill_ellipse(&mut self, _center: Vec2, _radii: Vec2, _color: Color) {}

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Color) {}

    fn draw_sprite(&mut self, _image: &ImageData, _rect: Aabb) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8_clamps() {
        let c = Color::rgba(1.5, -0.2, 0.5, 1.0);
        assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::CYAN.with_alpha(0.25);
        assert_eq!(c.r, Color::CYAN.r);
        assert_eq!(c.a, 0.25);
    }
}
