//! Spectrogram display state

use iced::widget::image::Handle;
use rand::Rng;
use soundforge_core::config::SpectrogramConfig;
use soundforge_core::sample::SpectrogramMatrix;

use super::render::render_spectrogram;

/// Raster width the spectrogram is rendered at
pub const RENDER_WIDTH: u32 = 800;

/// Matrix plus its cached raster
#[derive(Debug, Clone)]
pub struct SpectrogramState {
    matrix: SpectrogramMatrix,
    height: u32,
    handle: Handle,
}

impl SpectrogramState {
    pub fn new(matrix: SpectrogramMatrix, height: u32) -> Self {
        let height = height.max(1);
        let handle = render_spectrogram(&matrix, RENDER_WIDTH, height).to_handle();
        Self { matrix, height, handle }
    }

    /// Random matrix sized from the config
    pub fn random<R: Rng + ?Sized>(config: &SpectrogramConfig, rng: &mut R) -> Self {
        let matrix = SpectrogramMatrix::random(config.time_slices, config.freq_bins, config.max_magnitude, rng);
        Self::new(matrix, config.height)
    }

    pub fn matrix(&self) -> &SpectrogramMatrix {
        &self.matrix
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}
