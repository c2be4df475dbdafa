//! Sample arrays and the destructive edits the audio editor offers
//!
//! Samples are mono amplitudes in [-1, 1]. Edits replace the buffer
//! contents in place; there is no undo.

mod spectrogram;

pub use spectrogram::SpectrogramMatrix;

use rand::Rng;

use crate::error::{EditError, EditResult};
use crate::types::{Region, Sample};

/// An in-memory mono sample buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleArray {
    samples: Vec<Sample>,
}

impl SampleArray {
    /// Wrap existing samples
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Generate `len` uniform random samples in [-1, 1)
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let samples = (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Self { samples }
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute amplitude (0.0 for an empty buffer)
    pub fn peak(&self) -> Sample {
        self.samples.iter().fold(0.0, |acc, s| acc.max(s.abs()))
    }

    /// Scale so the loudest sample reaches full scale
    ///
    /// Silent buffers are left untouched.
    pub fn normalize(&mut self) {
        let peak = self.peak();
        if peak > 0.0 {
            for s in &mut self.samples {
                *s /= peak;
            }
            log::info!("normalize: scaled {} samples by 1/{:.3}", self.samples.len(), peak);
        }
    }

    /// Reverse sample order
    pub fn reverse(&mut self) {
        self.samples.reverse();
    }

    /// Linear fade from silence at `region.start` to full level at `region.end`
    pub fn fade_in(&mut self, region: Region) -> EditResult<()> {
        self.apply_ramp(region, |progress| progress)
    }

    /// Linear fade from full level at `region.start` to silence at `region.end`
    pub fn fade_out(&mut self, region: Region) -> EditResult<()> {
        self.apply_ramp(region, |progress| 1.0 - progress)
    }

    fn apply_ramp(&mut self, region: Region, gain: impl Fn(f32) -> f32) -> EditResult<()> {
        self.check_region(region)?;

        let span = (region.end - region.start) as f32;
        for i in region.start..=region.end {
            // Single-sample regions count as fully progressed
            let progress = if span > 0.0 {
                (i - region.start) as f32 / span
            } else {
                1.0
            };
            self.samples[i] *= gain(progress);
        }
        Ok(())
    }

    fn check_region(&self, region: Region) -> EditResult<()> {
        if region.end >= self.samples.len() {
            return Err(EditError::RegionOutOfBounds {
                start: region.start,
                end: region.end,
                len: self.samples.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Sample>> for SampleArray {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}
