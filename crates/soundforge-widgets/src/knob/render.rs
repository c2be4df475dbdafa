//! Rotary knob raster
//!
//! Angles here are compass degrees: 0 at twelve o'clock, increasing
//! clockwise. The value arc starts at 225 (seven-thirty) and covers up to
//! 270 degrees.

use crate::raster::{PixelBuffer, Rgba};
use crate::theme;

/// Compass angle where the value arc starts
pub const ARC_START_DEGREES: f32 = 225.0;

/// Total travel of the knob
pub const ARC_SPAN_DEGREES: f32 = 270.0;

/// Inner radius of the arc ring relative to the outer radius
const RING_INNER: f32 = 0.72;

/// Compass angle of the vector (dx, dy) in screen space (y down), in [0, 360)
pub fn compass_degrees(dx: f32, dy: f32) -> f32 {
    dx.atan2(-dy).to_degrees().rem_euclid(360.0)
}

/// Color of the arc ring at a compass angle for a given sweep
pub fn arc_color(angle: f32, sweep_degrees: f32) -> Option<Rgba> {
    let offset = (angle - ARC_START_DEGREES).rem_euclid(360.0);
    if offset <= sweep_degrees {
        Some(theme::PRIMARY)
    } else if offset <= ARC_SPAN_DEGREES {
        Some(theme::MUTED)
    } else {
        None
    }
}

/// Render a knob of `size` x `size` pixels
///
/// `sweep_degrees` is the filled part of the arc, `rotation_degrees` the
/// indicator angle relative to twelve o'clock (-135..=135).
pub fn render_knob(size: u32, sweep_degrees: f32, rotation_degrees: f32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(size, size);
    if size == 0 {
        return buffer;
    }

    let center = size as f32 / 2.0;
    let outer = center - 1.0;
    let inner = outer * RING_INNER;
    let body = inner - 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            let color = if distance <= body {
                Some(theme::KNOB_BODY)
            } else if distance >= inner && distance <= outer {
                arc_color(compass_degrees(dx, dy), sweep_degrees)
            } else {
                None
            };
            if let Some(color) = color {
                buffer.set_pixel(x as i32, y as i32, color);
            }
        }
    }

    // Indicator dot
    let angle = rotation_degrees.to_radians();
    let reach = body * 0.7;
    let dot_x = center + angle.sin() * reach;
    let dot_y = center - angle.cos() * reach;
    let dot_radius = (size as f32 / 16.0).max(2.0);
    let (x0, x1) = ((dot_x - dot_radius).floor() as i32, (dot_x + dot_radius).ceil() as i32);
    let (y0, y1) = ((dot_y - dot_radius).floor() as i32, (dot_y + dot_radius).ceil() as i32);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - dot_x;
            let dy = y as f32 + 0.5 - dot_y;
            if dx * dx + dy * dy <= dot_radius * dot_radius {
                buffer.set_pixel(x, y, Rgba::WHITE);
            }
        }
    }

    buffer
}
