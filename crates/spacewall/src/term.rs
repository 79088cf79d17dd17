//! ANSI terminal canvas
//!
//! Rasterizes engine draw calls into a small pixel grid and prints it with
//! truecolor escape codes, packing two pixels into each character cell via
//! the upper-half-block glyph. The engine keeps working in scene pixels;
//! this canvas owns the mapping down to terminal cells.

use scene_engine::prelude::*;
use std::io::{self, Write};

/// Background tint behind the scene
const BACKGROUND: [f32; 3] = [0.02, 0.02, 0.06];

/// Terminal-backed implementation of [`Canvas`]
pub struct TermCanvas {
    cols: usize,
    pixel_rows: usize,
    scene_width: f32,
    scene_height: f32,
    pixels: Vec<[f32; 3]>,
    frame: String,
}

impl TermCanvas {
    /// Create a canvas of `cols` x `rows` character cells presenting a
    /// scene of the given size. Each cell holds two vertically stacked
    /// pixels.
    pub fn new(cols: usize, rows: usize, scene_width: f32, scene_height: f32) -> Self {
        let pixel_rows = rows * 2;
        Self {
            cols,
            pixel_rows,
            scene_width,
            scene_height,
            pixels: vec![BACKGROUND; cols * pixel_rows],
            frame: String::new(),
        }
    }

    fn to_px(&self, p: Vec2) -> (f32, f32) {
        (
            p.x / self.scene_width * self.cols as f32,
            p.y / self.scene_height * self.pixel_rows as f32,
        )
    }

    fn to_scene(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            px / self.cols as f32 * self.scene_width,
            py / self.pixel_rows as f32 * self.scene_height,
        )
    }

    fn blend(&mut self, px: i64, py: i64, color: Color) {
        if px < 0 || py < 0 || px >= self.cols as i64 || py >= self.pixel_rows as i64 {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        let dst = &mut self.pixels[py as usize * self.cols + px as usize];
        dst[0] = dst[0] * (1.0 - a) + color.r * a;
        dst[1] = dst[1] * (1.0 - a) + color.g * a;
        dst[2] = dst[2] * (1.0 - a) + color.b * a;
    }

    /// Pixel-space bounds of a scene-space box, clamped to the grid
    fn px_bounds(&self, rect: Aabb) -> (i64, i64, i64, i64) {
        let (x0, y0) = self.to_px(rect.min());
        let (x1, y1) = self.to_px(rect.max());
        (
            (x0.floor() as i64).max(0),
            (y0.floor() as i64).max(0),
            (x1.ceil() as i64).min(self.cols as i64),
            (y1.ceil() as i64).min(self.pixel_rows as i64),
        )
    }

    /// Write the current frame to `out`, repainting in place
    pub fn present<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.frame.clear();
        self.frame.push_str("\x1b[H");
        for row in 0..self.pixel_rows / 2 {
            for col in 0..self.cols {
                let top = color_bytes(self.pixels[row * 2 * self.cols + col]);
                let bottom = color_bytes(self.pixels[(row * 2 + 1) * self.cols + col]);
                self.frame.push_str(&format!(
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
                ));
            }
            self.frame.push_str("\x1b[0m\n");
        }
        out.write_all(self.frame.as_bytes())?;
        out.flush()
    }
}

fn color_bytes(rgb: [f32; 3]) -> [u8; 3] {
    let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [q(rgb[0]), q(rgb[1]), q(rgb[2])]
}

/// Even-odd crossing test against a polygon given in scene coordinates
fn point_in_polygon(point: Vec2, points: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

impl Canvas for TermCanvas {
    fn size(&self) -> (f32, f32) {
        (self.scene_width, self.scene_height)
    }

    fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let (x0, y0, x1, y1) = self.px_bounds(rect);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min = points
            .iter()
            .fold(points[0], |m, p| Vec2::new(m.x.min(p.x), m.y.min(p.y)));
        let max = points
            .iter()
            .fold(points[0], |m, p| Vec2::new(m.x.max(p.x), m.y.max(p.y)));
        let bbox = Aabb::new((min + max) * 0.5, max - min);
        let (x0, y0, x1, y1) = self.px_bounds(bbox);
        for py in y0..y1 {
            for px in x0..x1 {
                let center = self.to_scene(px as f32 + 0.5, py as f32 + 0.5);
                if point_in_polygon(center, points) {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let bbox = Aabb::new(center, radii * 2.0);
        let (x0, y0, x1, y1) = self.px_bounds(bbox);
        for py in y0..y1 {
            for px in x0..x1 {
                let p = self.to_scene(px as f32 + 0.5, py as f32 + 0.5);
                let dx = (p.x - center.x) / radii.x;
                let dy = (p.y - center.y) / radii.y;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let (x0, y0) = self.to_px(from);
        let (x1, y1) = self.to_px(to);
        let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
        let half = (width * 0.5).max(0.5);
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let p = from + (to - from) * t;
            // Splat a small square at each sample; widths are tiny at
            // terminal resolution.
            self.fill_rect(Aabb::new(p, Vec2::new(half * 2.0, half * 2.0)), color);
        }
    }

    fn draw_sprite(&mut self, image: &ImageData, rect: Aabb) {
        let (x0, y0, x1, y1) = self.px_bounds(rect);
        let (min, max) = (rect.min(), rect.max());
        let span = max - min;
        if span.x <= 0.0 || span.y <= 0.0 {
            return;
        }
        for py in y0..y1 {
            for px in x0..x1 {
                let p = self.to_scene(px as f32 + 0.5, py as f32 + 0.5);
                let u = ((p.x - min.x) / span.x).clamp(0.0, 1.0);
                let v = ((p.y - min.y) / span.y).clamp(0.0, 1.0);
                let sx = ((u * image.width as f32) as u32).min(image.width.saturating_sub(1));
                let sy = ((v * image.height as f32) as u32).min(image.height.saturating_sub(1));
                if let Some([r, g, b, a]) = image.pixel(sx, sy) {
                    let color = Color::rgba(
                        f32::from(r) / 255.0,
                        f32::from(g) / 255.0,
                        f32::from(b) / 255.0,
                        f32::from(a) / 255.0,
                    );
                    self.blend(px, py, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_touches_expected_cells() {
        let mut canvas = TermCanvas::new(10, 5, 100.0, 100.0);
        canvas.fill_rect(
            Aabb::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0)),
            Color::WHITE,
        );
        // Fully covered surface: every pixel is white.
        assert!(canvas.pixels.iter().all(|p| p.iter().all(|c| *c >= 0.99)));
    }

    #[test]
    fn test_out_of_bounds_draws_are_ignored() {
        let mut canvas = TermCanvas::new(10, 5, 100.0, 100.0);
        canvas.fill_rect(
            Aabb::new(Vec2::new(-500.0, -500.0), Vec2::new(10.0, 10.0)),
            Color::WHITE,
        );
        assert!(canvas.pixels.iter().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_point_in_polygon_triangle() {
        let tri = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 10.0),
        ];
        assert!(point_in_polygon(Vec2::new(5.0, 3.0), &tri));
        assert!(!point_in_polygon(Vec2::new(0.0, 9.0), &tri));
    }

    #[test]
    fn test_present_emits_one_line_per_row() {
        let mut canvas = TermCanvas::new(4, 3, 40.0, 30.0);
        let mut out = Vec::new();
        canvas.present(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 3);
        assert_eq!(text.matches('\u{2580}').count(), 4 * 3);
    }
}
