//! Spectrogram raster renderer
//!
//! Nearest-neighbour mapping of the magnitude matrix onto the pixel grid:
//! time runs left to right, frequency bottom to top.

use soundforge_core::sample::SpectrogramMatrix;

use crate::raster::{PixelBuffer, Rgba};

/// Blue (quiet) to red (loud) color map
pub fn intensity_color(magnitude: f32) -> Rgba {
    let intensity = (magnitude * 255.0).floor().clamp(0.0, 255.0) as u8;
    Rgba::rgb(intensity, intensity / 2, 255 - intensity)
}

/// Time slice under pixel column `x`
pub fn time_index(x: u32, width: u32, slices: usize) -> usize {
    ((x as f64 / width as f64) * slices as f64).floor() as usize
}

/// Frequency bin under pixel row `y`, clamped so row 0 maps to the top bin
pub fn freq_index(y: u32, height: u32, bins: usize) -> usize {
    let index = ((1.0 - y as f64 / height as f64) * bins as f64).floor() as usize;
    index.min(bins.saturating_sub(1))
}

/// Render the matrix into an opaque `width` x `height` raster
///
/// An empty matrix renders solid black.
pub fn render_spectrogram(matrix: &SpectrogramMatrix, width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(width, height, Rgba::BLACK);
    if matrix.is_empty() || width == 0 || height == 0 {
        return buffer;
    }

    let slices = matrix.time_slices();
    for x in 0..width {
        let Some(spectrum) = matrix.slice(time_index(x, width, slices)) else {
            continue;
        };
        let bins = spectrum.len();
        for y in 0..height {
            let magnitude = spectrum
                .get(freq_index(y, height, bins))
                .copied()
                .unwrap_or(0.0);
            buffer.set_pixel(x as i32, y as i32, intensity_color(magnitude));
        }
    }

    log::debug!(
        "Spectrogram rendered: {}x{} from {} slices x {} bins",
        width,
        height,
        slices,
        matrix.freq_bins()
    );
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_map_endpoints() {
        assert_eq!(intensity_color(0.0), Rgba::new(0, 0, 255, 255));
        assert_eq!(intensity_color(1.0), Rgba::new(255, 127, 0, 255));
        assert_eq!(intensity_color(0.5), Rgba::new(127, 63, 128, 255));
        assert_eq!(intensity_color(3.0), intensity_color(1.0));
        assert_eq!(intensity_color(-1.0), intensity_color(0.0));
    }

    #[test]
    fn test_index_mapping() {
        assert_eq!(time_index(0, 100, 10), 0);
        assert_eq!(time_index(99, 100, 10), 9);
        assert_eq!(freq_index(0, 200, 256), 255);
        assert_eq!(freq_index(199, 200, 256), 1);
        assert_eq!(freq_index(100, 200, 256), 128);
    }

    #[test]
    fn test_empty_matrix_is_black() {
        let buffer = render_spectrogram(&SpectrogramMatrix::default(), 4, 4);
        assert!(buffer.pixels().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_low_bins_at_bottom() {
        // Two slices, two bins: bin 0 silent, bin 1 loud
        let matrix = SpectrogramMatrix::new(vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        let buffer = render_spectrogram(&matrix, 4, 4);
        assert_eq!(buffer.pixel(0, 0), Some(intensity_color(1.0)));
        assert_eq!(buffer.pixel(3, 1), Some(intensity_color(1.0)));
        assert_eq!(buffer.pixel(0, 3), Some(intensity_color(0.0)));
    }

    #[test]
    fn test_time_slices_left_to_right() {
        let matrix = SpectrogramMatrix::new(vec![vec![0.0], vec![1.0]]);
        let buffer = render_spectrogram(&matrix, 10, 2);
        assert_eq!(buffer.pixel(4, 0), Some(intensity_color(0.0)));
        assert_eq!(buffer.pixel(5, 0), Some(intensity_color(1.0)));
    }
}
