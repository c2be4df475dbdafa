//! Envelope generation for waveform display
//!
//! Downsamples a sample array to one min/max pair per pixel column.

use soundforge_core::Sample;

/// Min/max amplitude of one pixel column
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    pub min: Sample,
    pub max: Sample,
}

/// Samples per column: `ceil(len / width)`
///
/// Returns 0 when either side is empty.
pub fn bucket_size(len: usize, width: usize) -> usize {
    if len == 0 || width == 0 {
        return 0;
    }
    len.div_ceil(width)
}

/// Compute exactly `width` envelope points for the samples
///
/// Column `x` covers `[x * b, min((x + 1) * b, len))` with `b = bucket_size`.
/// When there are fewer samples than columns, the trailing columns have no
/// data and are treated as silence. Empty input or zero width yields an
/// empty vector.
pub fn compute_envelope(samples: &[Sample], width: usize) -> Vec<Envelope> {
    let len = samples.len();
    let bucket = bucket_size(len, width);
    if bucket == 0 {
        return Vec::new();
    }

    (0..width)
        .map(|col| {
            let start = (col * bucket).min(len);
            let end = ((col + 1) * bucket).min(len);

            let chunk = &samples[start..end];
            if chunk.is_empty() {
                return Envelope::default();
            }

            let (min, max) = chunk
                .iter()
                .fold((Sample::INFINITY, Sample::NEG_INFINITY), |(lo, hi), &s| (lo.min(s), hi.max(s)));
            Envelope { min, max }
        })
        .collect()
}

/// Per-column maximum only
pub fn max_trace(samples: &[Sample], width: usize) -> Vec<Sample> {
    compute_envelope(samples, width).into_iter().map(|e| e.max).collect()
}
