//! RGBA pixel buffer used by every renderer
//!
//! Renderers write straight into a `width * height * 4` byte array, which
//! iced displays as an image. Drawing calls clip silently at the edges.

use iced::widget::image::Handle;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Composite `self` over an opaque-or-not destination ("source over")
    pub fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            255 => self,
            0 => dst,
            a => {
                let a = a as u32;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
                Rgba::new(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    (a + dst.a as u32 * inv / 255).min(255) as u8,
                )
            }
        }
    }
}

/// Owned RGBA raster
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Buffer filled with one color
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut buffer = Self::new(width, height);
        buffer.fill(color);
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, row-major RGBA
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Image handle for iced's image widget
    pub fn to_handle(&self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.data.clone())
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.offset(x, y).map(|i| {
            let p = &self.data[i..i + 4];
            Rgba::new(p[0], p[1], p[2], p[3])
        })
    }

    /// Overwrite one pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Composite one pixel over what's there
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(dst) = self.pixel(x, y) {
            self.set_pixel(x, y, color.over(dst));
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Composite a rectangle (clipped to the buffer)
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Full-height vertical line
    pub fn vline(&mut self, x: i32, thickness: i32, color: Rgba) {
        self.fill_rect(x, 0, thickness.max(1), self.height as i32, color);
    }

    /// Full-width horizontal line
    pub fn hline(&mut self, y: i32, thickness: i32, color: Rgba) {
        self.fill_rect(0, y, self.width as i32, thickness.max(1), color);
    }

    /// Bresenham line between two points, both ends inclusive
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.pixels().len(), 24);
        assert_eq!(buffer.pixel(2, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(-1, 0), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = PixelBuffer::filled(4, 4, Rgba::BLACK);
        buffer.fill_rect(2, 2, 10, 10, Rgba::WHITE);
        assert_eq!(buffer.pixel(1, 1), Some(Rgba::BLACK));
        assert_eq!(buffer.pixel(2, 2), Some(Rgba::WHITE));
        assert_eq!(buffer.pixel(3, 3), Some(Rgba::WHITE));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut buffer = PixelBuffer::filled(1, 1, Rgba::BLACK);
        buffer.blend_pixel(0, 0, Rgba::new(255, 255, 255, 128));
        let px = buffer.pixel(0, 0).unwrap();
        assert_eq!(px.r, 128);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_line_endpoints() {
        let mut buffer = PixelBuffer::new(5, 5);
        buffer.line(0, 4, 4, 0, Rgba::WHITE);
        for i in 0..5 {
            assert_eq!(buffer.pixel(i, 4 - i), Some(Rgba::WHITE));
        }
        assert_eq!(buffer.pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_vline_covers_column() {
        let mut buffer = PixelBuffer::filled(3, 3, Rgba::BLACK);
        buffer.vline(1, 1, Rgba::WHITE);
        for y in 0..3 {
            assert_eq!(buffer.pixel(1, y), Some(Rgba::WHITE));
            assert_eq!(buffer.pixel(0, y), Some(Rgba::BLACK));
        }
    }
}
