use crate::models::{BACKGROUND, BADGE, CALENDAR, HEADER};
use image::{ImageBuffer, Rgb, RgbImage};

/// A pixel box whose corners are both painted, i.e. `[x0, x1]` spans the
/// continuous range `x0 .. x1 + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBox {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0 + 1
    }

    /// True when every pixel of the box lies on a `size x size` canvas.
    pub fn fits_within(&self, size: u32) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < size && self.y1 < size
    }

    /// The pixel whose center is nearest the middle of the box.
    pub fn center_pixel(&self) -> (u32, u32) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    fn edges(&self) -> (f32, f32, f32, f32) {
        (
            self.x0 as f32,
            self.y0 as f32,
            (self.x1 + 1) as f32,
            (self.y1 + 1) as f32,
        )
    }

    fn contains_rounded(&self, px: f32, py: f32, radius: u32) -> bool {
        let (left, top, right, bottom) = self.edges();
        if px < left || px > right || py < top || py > bottom {
            return false;
        }
        // Corner radius can't exceed half the shorter side.
        let r = (radius as f32)
            .min((right - left) / 2.0)
            .min((bottom - top) / 2.0);
        if r <= 0.0 {
            return true;
        }
        let cx = px.clamp(left + r, right - r);
        let cy = py.clamp(top + r, bottom - r);
        let (dx, dy) = (px - cx, py - cy);
        dx * dx + dy * dy <= r * r
    }

    fn contains_ellipse(&self, px: f32, py: f32) -> bool {
        let (left, top, right, bottom) = self.edges();
        let rx = (right - left) / 2.0;
        let ry = (bottom - top) / 2.0;
        let dx = (px - (left + rx)) / rx;
        let dy = (py - (top + ry)) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Shape geometry of the calendar glyph for one icon size.
///
/// Every offset is derived from `size` with integer division, so small sizes
/// round down but never collapse a shape to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub radius: u32,
    pub body: PixelBox,
    pub header: PixelBox,
    pub badge: PixelBox,
}

impl IconLayout {
    pub fn new(size: u32) -> Self {
        let margin = size / 8;
        let cal_width = size - 2 * margin;
        let cal_height = cal_width * 4 / 5;
        let cal_x = margin;
        let cal_y = margin + size / 16;
        let top = cal_y + cal_height / 8;

        let body = PixelBox {
            x0: cal_x,
            y0: top,
            x1: cal_x + cal_width,
            y1: cal_y + cal_height,
        };
        let header = PixelBox {
            y1: cal_y + cal_height / 3,
            ..body
        };

        let badge_size = size / 8;
        let badge_x = cal_x + cal_width - badge_size - size / 16;
        let badge_y = cal_y + cal_height / 2;
        let badge = PixelBox {
            x0: badge_x,
            y0: badge_y,
            x1: badge_x + badge_size,
            y1: badge_y + badge_size,
        };

        Self {
            size,
            radius: size / 32,
            body,
            header,
            badge,
        }
    }

    /// Color of pixel `(x, y)`, checking the topmost shape first.
    pub fn color_at(&self, x: u32, y: u32) -> Rgb<u8> {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if self.badge.contains_ellipse(px, py) {
            BADGE
        } else if self.header.contains_rounded(px, py, self.radius) {
            HEADER
        } else if self.body.contains_rounded(px, py, self.radius) {
            CALENDAR
        } else {
            BACKGROUND
        }
    }
}

/// Renders the calendar icon as a `size x size` RGB raster.
pub fn render_icon(size: u32) -> RgbImage {
    let layout = IconLayout::new(size);
    let mut image = ImageBuffer::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = layout.color_at(x, y);
    }
    image
}
