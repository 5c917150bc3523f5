//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use crate::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The result keeps the higher
/// of the two alphas so translucent surfaces stay translucent.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_a = (bg >> 24) & 0xFF;
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_a = (fg >> 24) & 0xFF;
    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    (bg_a.max(fg_a) << 24) | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels relative to the window. Out-of-bounds
/// operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a single pixel (color is ARGB, alpha taken from the color)
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha >= 1.0 {
            self.buffer[idx] = color;
        } else if alpha > 0.0 {
            self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
        }
    }

    /// Fill a rectangle, alpha blending translucent colors
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Fill a rectangle with rounded corners of the given radius
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: u32) {
        let radius = radius.min(rect.width / 2).min(rect.height / 2).max(0);

        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if in_rounded_rect(rect, radius, x, y) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a 1px outline of a rounded rectangle
    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: i32, color: u32) {
        let radius = radius.min(rect.width / 2).min(rect.height / 2).max(0);
        let inner = Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2);
        let inner_radius = (radius - 1).max(0);

        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if in_rounded_rect(rect, radius, x, y)
                    && !in_rounded_rect(inner, inner_radius, x, y)
                {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Fill a triangle given its three corners
    pub fn fill_triangle(&mut self, a: (i32, i32), b: (i32, i32), c: (i32, i32), color: u32) {
        let min_x = a.0.min(b.0).min(c.0).max(0);
        let max_x = a.0.max(b.0).max(c.0).min(self.width as i32 - 1);
        let min_y = a.1.min(b.1).min(c.1).max(0);
        let max_y = a.1.max(b.1).max(c.1).min(self.height as i32 - 1);

        let edge = |p: (i32, i32), q: (i32, i32), x: i32, y: i32| -> i64 {
            (q.0 - p.0) as i64 * (y - p.1) as i64 - (q.1 - p.1) as i64 * (x - p.0) as i64
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let e0 = edge(a, b, x, y);
                let e1 = edge(b, c, x, y);
                let e2 = edge(c, a, x, y);
                let inside = (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0);
                if inside {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }
}

/// Whether pixel (x, y) lies inside `rect` with corners rounded by `radius`
fn in_rounded_rect(rect: Rect, radius: i32, x: i32, y: i32) -> bool {
    if x < rect.x || y < rect.y || x >= rect.right() || y >= rect.bottom() {
        return false;
    }
    if radius == 0 {
        return true;
    }

    // Nearest corner circle center, if the pixel is in a corner square
    let cx = if x < rect.x + radius {
        rect.x + radius
    } else if x >= rect.right() - radius {
        rect.right() - radius - 1
    } else {
        return true;
    };
    let cy = if y < rect.y + radius {
        rect.y + radius
    } else if y >= rect.bottom() - radius {
        rect.bottom() - radius - 1
    } else {
        return true;
    };

    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= radius * radius
}
