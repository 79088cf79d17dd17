//! Vector art for the ship
//!
//! The ship is repainted from primitives every frame: engine flame,
//! fuselage, cockpit, wings, and neon trim lines. Offsets are in scene
//! pixels relative to the ship center, matching the entity coordinate
//! space.

use super::{Canvas, Color};
use crate::foundation::math::Vec2;

/// Paint the ship at `center` with the current flame height.
pub(crate) fn draw(canvas: &mut dyn Canvas, center: Vec2, flame_height: f32) {
    let p = |dx: f32, dy: f32| Vec2::new(center.x + dx, center.y + dy);

    // Engine flame: inner core, then the shorter glow on top of it
    canvas.fill_polygon(
        &[p(-8.0, 30.0), p(0.0, 30.0 + flame_height), p(8.0, 30.0)],
        Color::FLAME_ORANGE,
    );
    canvas.fill_polygon(
        &[p(-5.0, 30.0), p(0.0, 30.0 + flame_height * 0.6), p(5.0, 30.0)],
        Color::FLAME_YELLOW,
    );

    // Fuselage, nose at the top
    canvas.fill_polygon(
        &[
            p(0.0, -30.0),
            p(15.0, 10.0),
            p(10.0, 30.0),
            p(-10.0, 30.0),
            p(-15.0, 10.0),
        ],
        Color::HULL,
    );

    // Cockpit glass
    canvas.fill_ellipse(p(0.0, -5.0), Vec2::new(6.0, 12.0), Color::CYAN);

    // Wings
    canvas.fill_polygon(&[p(10.0, 0.0), p(35.0, 25.0), p(15.0, 25.0)], Color::WING);
    canvas.fill_polygon(&[p(-10.0, 0.0), p(-35.0, 25.0), p(-15.0, 25.0)], Color::WING);

    // Neon trim
    canvas.stroke_line(p(0.0, -30.0), p(0.0, -17.0), 2.0, Color::MAGENTA);
    canvas.stroke_line(p(35.0, 25.0), p(15.0, 25.0), 2.0, Color::CYAN);
    canvas.stroke_line(p(-35.0, 25.0), p(-15.0, 25.0), 2.0, Color::CYAN);
}
