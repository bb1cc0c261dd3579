use cover_core::{Circle, Color, DrawSurface, FontId, IconId, OverlayError, Rect, Result};
use std::path::Path;

/// One recorded draw call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    RoundedRect {
        rect: Rect,
        color: Color,
        radius: i32,
    },
    Disk {
        circle: Circle,
        color: Color,
    },
    Icon {
        x: i32,
        y: i32,
        id: IconId,
        size: i32,
        rotation: f32,
    },
    Text {
        x: i32,
        y: i32,
        font: FontId,
        text: String,
    },
}

/// CPU-side RGBA8 surface.  No anti-aliasing; rounded corners are a hard
/// inside/outside test, which is plenty for tests and demo output.
pub struct RasterSurface {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
    /// Every draw call in order, for z-order assertions.
    pub ops: Vec<DrawOp>,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        let bg = background.to_rgba8();
        let mut pixels = vec![0u8; (width.max(0) * height.max(0)) as usize * 4];
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
        Self {
            width,
            height,
            pixels,
            ops: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixel at `(x, y)`; out of bounds returns transparent black.
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn blend(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let a = color[3] as u32;
        if a == 255 {
            self.pixels[i..i + 4].copy_from_slice(&color);
            return;
        }
        for c in 0..3 {
            let src = color[c] as u32;
            let dst = self.pixels[i + c] as u32;
            self.pixels[i + c] = ((src * a + dst * (255 - a)) / 255) as u8;
        }
        let dst_a = self.pixels[i + 3] as u32;
        self.pixels[i + 3] = (a + dst_a * (255 - a) / 255) as u8;
    }

    fn fill_rounded(&mut self, rect: Rect, color: [u8; 4], radius: i32) {
        if rect.is_empty() {
            return;
        }
        let r = radius.clamp(0, rect.w.min(rect.h) / 2);
        let rr = (r * r) as i64;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if r > 0 {
                    // Distance check against the nearest corner disk center.
                    let cx = if x < rect.x + r {
                        Some(rect.x + r)
                    } else if x >= rect.right() - r {
                        Some(rect.right() - r - 1)
                    } else {
                        None
                    };
                    let cy = if y < rect.y + r {
                        Some(rect.y + r)
                    } else if y >= rect.bottom() - r {
                        Some(rect.bottom() - r - 1)
                    } else {
                        None
                    };
                    if let (Some(cx), Some(cy)) = (cx, cy) {
                        let dx = (x - cx) as i64;
                        let dy = (y - cy) as i64;
                        if dx * dx + dy * dy > rr {
                            continue;
                        }
                    }
                }
                self.blend(x, y, color);
            }
        }
    }

    /// Encode the buffer as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let img = image::RgbaImage::from_raw(
            self.width.max(0) as u32,
            self.height.max(0) as u32,
            self.pixels.clone(),
        )
        .ok_or_else(|| OverlayError::Surface("buffer/dimension mismatch".to_string()))?;
        img.save(path.as_ref())
            .map_err(|e| OverlayError::Surface(format!("PNG encode failed: {e}")))
    }
}

impl DrawSurface for RasterSurface {
    fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: i32) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            color,
            radius,
        });
        self.fill_rounded(rect, color.to_rgba8(), radius);
    }

    fn draw_disk(&mut self, circle: Circle, color: Color) {
        self.ops.push(DrawOp::Disk { circle, color });
        let c = color.to_rgba8();
        let rr = (circle.r * circle.r) as i64;
        for y in circle.cy - circle.r..circle.cy + circle.r {
            for x in circle.cx - circle.r..circle.cx + circle.r {
                let dx = (x - circle.cx) as i64;
                let dy = (y - circle.cy) as i64;
                if dx * dx + dy * dy < rr {
                    self.blend(x, y, c);
                }
            }
        }
    }

    fn draw_icon(&mut self, x: i32, y: i32, icon: IconId, size: i32, alpha: f32, rotation: f32) {
        self.ops.push(DrawOp::Icon {
            x,
            y,
            id: icon,
            size,
            rotation,
        });
        // No icon assets here; blit a neutral glyph block so demo output
        // shows where the icon sits.
        let inset = size / 4;
        self.fill_rounded(
            Rect::new(x + inset, y + inset, size - 2 * inset, size - 2 * inset),
            Color::WHITE.with_alpha(alpha).to_rgba8(),
            1,
        );
    }

    fn draw_text(&mut self, x: i32, y: i32, font: FontId, text: &str, color: Color) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            font,
            text: text.to_string(),
        });
        // Greeked text: one block per character above the baseline.
        let c = color.to_rgba8();
        let mut cx = x;
        for _ in text.chars() {
            self.fill_rounded(Rect::new(cx, y - 6, 4, 6), c, 0);
            cx += 5;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rect_fills_corners() {
        let mut s = RasterSurface::new(20, 20, Color::TRANSPARENT);
        s.draw_rounded_rect(Rect::new(2, 2, 10, 10), Color::WHITE, 0);
        assert_eq!(s.pixel(2, 2), [255, 255, 255, 255]);
        assert_eq!(s.pixel(11, 11), [255, 255, 255, 255]);
        assert_eq!(s.pixel(12, 12), [0, 0, 0, 0]);
    }

    #[test]
    fn rounded_rect_clips_corners_keeps_center_edges() {
        let mut s = RasterSurface::new(40, 40, Color::TRANSPARENT);
        s.draw_rounded_rect(Rect::new(0, 0, 20, 20), Color::WHITE, 6);
        assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(s.pixel(10, 0), [255, 255, 255, 255]);
        assert_eq!(s.pixel(0, 10), [255, 255, 255, 255]);
        assert_eq!(s.pixel(10, 10), [255, 255, 255, 255]);
    }

    #[test]
    fn disk_is_bounded_by_its_radius() {
        let mut s = RasterSurface::new(40, 40, Color::TRANSPARENT);
        s.draw_disk(Circle::new(20, 20, 8), Color::WHITE);
        assert_eq!(s.pixel(20, 20), [255, 255, 255, 255]);
        assert_eq!(s.pixel(20, 13), [255, 255, 255, 255]);
        assert_eq!(s.pixel(28, 28), [0, 0, 0, 0]);
    }

    #[test]
    fn alpha_blends_over_existing_pixels() {
        let mut s = RasterSurface::new(4, 4, Color::BLACK);
        s.draw_rounded_rect(Rect::new(0, 0, 4, 4), Color::WHITE.with_alpha(0.5), 0);
        let px = s.pixel(1, 1);
        assert!(px[0] > 100 && px[0] < 160, "got {px:?}");
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped() {
        let mut s = RasterSurface::new(8, 8, Color::TRANSPARENT);
        s.draw_rounded_rect(Rect::new(-4, -4, 20, 20), Color::WHITE, 0);
        assert_eq!(s.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(s.pixel(7, 7), [255, 255, 255, 255]);
    }

    #[test]
    fn ops_record_in_issue_order() {
        let mut s = RasterSurface::new(8, 8, Color::TRANSPARENT);
        s.draw_rounded_rect(Rect::new(0, 0, 4, 4), Color::WHITE, 0);
        s.draw_disk(Circle::new(4, 4, 2), Color::BLACK);
        assert!(matches!(s.ops[0], DrawOp::RoundedRect { .. }));
        assert!(matches!(s.ops[1], DrawOp::Disk { .. }));
    }
}
