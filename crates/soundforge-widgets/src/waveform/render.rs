//! Waveform raster renderer
//!
//! Full clear-and-redraw on every call: background, grid, envelope,
//! selection band and playhead.

use soundforge_core::config::EnvelopeStyle;
use soundforge_core::{Region, Sample};

use super::envelope::compute_envelope;
use crate::raster::PixelBuffer;
use crate::theme;

/// Fraction of the canvas height a full-scale sample spans above (or below) center
pub const AMPLITUDE_SCALE: f32 = 0.45;

/// Sample window currently on screen (`start..end`, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: usize,
    pub end: usize,
}

impl ViewWindow {
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Horizontal pixel for a sample index: `(index - start) / len * width`
    pub fn index_to_x(&self, index: usize, width: f32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        (index as f32 - self.start as f32) / self.len() as f32 * width
    }

    /// Sample index under a horizontal pixel, clamped into the window
    pub fn x_to_index(&self, x: f32, width: f32) -> usize {
        if self.is_empty() || width <= 0.0 {
            return self.start;
        }
        let fraction = (x / width).clamp(0.0, 1.0);
        let offset = (fraction * self.len() as f32).floor() as usize;
        self.start + offset.min(self.len() - 1)
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct WaveformScene<'a> {
    pub samples: &'a [Sample],
    pub window: ViewWindow,
    pub selection: Option<Region>,
    pub playhead: usize,
    pub style: EnvelopeStyle,
    pub grid_lines: u32,
}

impl<'a> WaveformScene<'a> {
    /// Whole array, no overlays
    pub fn new(samples: &'a [Sample]) -> Self {
        Self {
            samples,
            window: ViewWindow::full(samples.len()),
            selection: None,
            playhead: 0,
            style: EnvelopeStyle::default(),
            grid_lines: 10,
        }
    }
}

/// Canvas row for an amplitude (positive amplitudes go up)
fn amplitude_to_y(amplitude: Sample, height: u32) -> i32 {
    let center = height as f32 / 2.0;
    (center - amplitude * height as f32 * AMPLITUDE_SCALE).round() as i32
}

/// Render a waveform frame
pub fn render_waveform(scene: &WaveformScene<'_>, width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(width, height, theme::BACKGROUND);
    if width == 0 || height == 0 {
        return buffer;
    }

    if scene.grid_lines > 0 {
        for i in 0..=scene.grid_lines {
            let y = (i as f32 / scene.grid_lines as f32 * height as f32) as i32;
            buffer.hline(y.min(height as i32 - 1), 1, theme::GRID);
        }
    }

    let start = scene.window.start.min(scene.samples.len());
    let end = scene.window.end.min(scene.samples.len());
    let visible = &scene.samples[start..end];
    let envelope = compute_envelope(visible, width as usize);

    match scene.style {
        EnvelopeStyle::MinMax => {
            for (x, point) in envelope.iter().enumerate() {
                let top = amplitude_to_y(point.max, height);
                let bottom = amplitude_to_y(point.min, height);
                buffer.fill_rect(x as i32, top, 1, bottom - top + 1, theme::PRIMARY);
            }
        }
        EnvelopeStyle::MaxTrace => {
            let mut previous: Option<(i32, i32)> = None;
            for (x, point) in envelope.iter().enumerate() {
                let current = (x as i32, amplitude_to_y(point.max, height));
                match previous {
                    Some((px, py)) => buffer.line(px, py, current.0, current.1, theme::PRIMARY),
                    None => buffer.set_pixel(current.0, current.1, theme::PRIMARY),
                }
                previous = Some(current);
            }
        }
    }

    let w = width as f32;
    if let Some(region) = scene.selection {
        let x0 = scene.window.index_to_x(region.start, w).floor() as i32;
        let x1 = scene.window.index_to_x(region.end + 1, w).ceil() as i32;
        buffer.fill_rect(x0, 0, (x1 - x0).max(1), height as i32, theme::SELECTION);
        buffer.vline(x0, 2, theme::PRIMARY);
        buffer.vline(x1 - 1, 2, theme::PRIMARY);
    }

    let in_view = scene.playhead >= scene.window.start && scene.playhead < scene.window.end;
    if in_view {
        let x = scene.window.index_to_x(scene.playhead, w) as i32;
        buffer.vline(x, 2, theme::DESTRUCTIVE);
    }

    log::debug!(
        "Waveform rendered: {}x{}, samples: {} ({} visible)",
        width,
        height,
        scene.samples.len(),
        visible.len()
    );
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Rgba;

    fn is_color(px: Option<Rgba>, color: Rgba) -> bool {
        px == Some(color)
    }

    #[test]
    fn test_empty_samples_render_background_and_grid() {
        let mut scene = WaveformScene::new(&[]);
        scene.grid_lines = 2;
        let buffer = render_waveform(&scene, 20, 10);
        assert_eq!(buffer.width(), 20);
        assert!(is_color(buffer.pixel(5, 5), theme::GRID.over(theme::BACKGROUND)));
        assert!(is_color(buffer.pixel(5, 4), theme::BACKGROUND));
    }

    #[test]
    fn test_zero_size_does_not_panic() {
        let samples = [0.5; 10];
        let scene = WaveformScene::new(&samples);
        assert_eq!(render_waveform(&scene, 0, 10).pixels().len(), 0);
    }

    #[test]
    fn test_min_max_column_spans_envelope() {
        let samples = [1.0, -1.0, 0.0, 0.0];
        let mut scene = WaveformScene::new(&samples);
        scene.grid_lines = 0;
        scene.playhead = 3;
        let buffer = render_waveform(&scene, 2, 100);

        // Column 0 spans +1..-1: rows 5..=95
        assert!(is_color(buffer.pixel(0, 5), theme::PRIMARY));
        assert!(is_color(buffer.pixel(0, 95), theme::PRIMARY));
        assert!(is_color(buffer.pixel(0, 50), theme::PRIMARY));
        assert!(is_color(buffer.pixel(0, 2), theme::BACKGROUND));
    }

    #[test]
    fn test_max_trace_ignores_minimum() {
        let samples = [0.0, -1.0, 0.0, -1.0];
        let mut scene = WaveformScene::new(&samples);
        scene.style = EnvelopeStyle::MaxTrace;
        scene.grid_lines = 0;
        scene.playhead = usize::MAX;
        scene.window = ViewWindow::full(samples.len());
        let buffer = render_waveform(&scene, 2, 100);
        assert!(is_color(buffer.pixel(0, 50), theme::PRIMARY));
        assert!(is_color(buffer.pixel(0, 95), theme::BACKGROUND));
    }

    #[test]
    fn test_playhead_position_is_linear() {
        let samples = vec![0.0; 1000];
        let mut scene = WaveformScene::new(&samples);
        scene.grid_lines = 0;
        scene.playhead = 500;
        let buffer = render_waveform(&scene, 100, 40);
        assert!(is_color(buffer.pixel(50, 3), theme::DESTRUCTIVE));
        assert!(is_color(buffer.pixel(49, 3), theme::BACKGROUND));
    }

    #[test]
    fn test_selection_band() {
        let samples = vec![0.0; 100];
        let mut scene = WaveformScene::new(&samples);
        scene.grid_lines = 0;
        scene.playhead = usize::MAX;
        scene.selection = Some(Region::new(20, 60));
        let buffer = render_waveform(&scene, 100, 40);
        assert!(is_color(buffer.pixel(40, 3), theme::SELECTION.over(theme::BACKGROUND)));
        assert!(is_color(buffer.pixel(10, 3), theme::BACKGROUND));
        assert!(is_color(buffer.pixel(20, 3), theme::PRIMARY));
    }

    #[test]
    fn test_window_mapping() {
        let window = ViewWindow { start: 100, end: 300 };
        assert_eq!(window.index_to_x(200, 400.0), 200.0);
        assert_eq!(window.x_to_index(0.0, 400.0), 100);
        assert_eq!(window.x_to_index(400.0, 400.0), 299);
        assert_eq!(window.x_to_index(-20.0, 400.0), 100);
    }
}
