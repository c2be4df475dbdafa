//! Shared color constants for the studio renderers and widgets

use iced::Color;

use crate::raster::Rgba;

/// Canvas background
pub const BACKGROUND: Rgba = Rgba::rgb(18, 18, 24);

/// Horizontal / vertical grid lines
pub const GRID: Rgba = Rgba::new(255, 255, 255, 28);

/// Beat lines in the piano roll (subdivision lines use `GRID`)
pub const GRID_STRONG: Rgba = Rgba::new(255, 255, 255, 70);

/// Primary accent (waveform, knob value arc)
pub const PRIMARY: Rgba = Rgba::rgb(99, 102, 241);

/// Secondary accent (unselected notes)
pub const ACCENT: Rgba = Rgba::rgb(45, 190, 170);

/// Muted track color (knob track, black-key rows)
pub const MUTED: Rgba = Rgba::rgb(48, 48, 58);

/// Playhead
pub const DESTRUCTIVE: Rgba = Rgba::rgb(235, 70, 70);

/// Selection band fill
pub const SELECTION: Rgba = PRIMARY.with_alpha(52);

/// Velocity strip inside piano-roll notes
pub const VELOCITY: Rgba = Rgba::new(255, 255, 255, 150);

/// Knob body
pub const KNOB_BODY: Rgba = Rgba::rgb(34, 34, 42);

/// Convert a raster color for use in iced styles
pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a as f32 / 255.0)
}

/// Label text color
pub const LABEL: Color = Color::from_rgb(0.6, 0.6, 0.65);

/// Value text color
pub const VALUE_TEXT: Color = Color::from_rgb(0.85, 0.85, 0.9);
