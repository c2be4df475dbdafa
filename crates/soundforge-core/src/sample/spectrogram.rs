//! Time x frequency magnitude matrix

use rand::Rng;

/// Magnitudes in [0, 1], one inner vector per time slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectrogramMatrix {
    slices: Vec<Vec<f32>>,
}

impl SpectrogramMatrix {
    pub fn new(slices: Vec<Vec<f32>>) -> Self {
        Self { slices }
    }

    /// Generate a random matrix with magnitudes uniform in [0, max_magnitude)
    pub fn random<R: Rng + ?Sized>(
        time_slices: usize,
        freq_bins: usize,
        max_magnitude: f32,
        rng: &mut R,
    ) -> Self {
        let max = max_magnitude.clamp(0.0, 1.0);
        let slices = (0..time_slices)
            .map(|_| (0..freq_bins).map(|_| rng.gen::<f32>() * max).collect())
            .collect();
        Self { slices }
    }

    pub fn time_slices(&self) -> usize {
        self.slices.len()
    }

    /// Bin count of the first slice (slices are expected to agree)
    pub fn freq_bins(&self) -> usize {
        self.slices.first().map_or(0, Vec::len)
    }

    pub fn slice(&self, index: usize) -> Option<&[f32]> {
        self.slices.get(index).map(Vec::as_slice)
    }

    /// Magnitude at a cell, 0.0 when out of range
    pub fn magnitude(&self, time: usize, bin: usize) -> f32 {
        self.slices
            .get(time)
            .and_then(|s| s.get(bin))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty() || self.freq_bins() == 0
    }
}
