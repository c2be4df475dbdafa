//! Common types and constants for SoundForge
//!
//! Ranges shared between the editing model and the widgets that display it.

/// Audio sample type (normalized amplitude, -1.0 to 1.0)
pub type Sample = f32;

/// Highest legal MIDI pitch / velocity value
pub const MIDI_MAX: u8 = 127;

/// Lowest velocity a sounding note may carry
pub const MIN_VELOCITY: u8 = 1;

/// Velocity given to notes inserted with the draw tool
pub const DEFAULT_VELOCITY: u8 = 100;

/// Track volume range (percent)
pub const VOLUME_MIN: u8 = 0;
pub const VOLUME_MAX: u8 = 100;

/// Track pan range (-50 = hard left, 50 = hard right)
pub const PAN_MIN: i8 = -50;
pub const PAN_MAX: i8 = 50;

/// Length of the mock audio buffer created for the editor
pub const DEFAULT_SAMPLE_COUNT: usize = 2000;

/// Dimensions of the mock spectrogram (time slices x frequency bins)
pub const DEFAULT_TIME_SLICES: usize = 100;
pub const DEFAULT_FREQ_BINS: usize = 256;

/// An inclusive range of sample indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Create a region from two indices in either order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Number of samples covered (inclusive)
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Regions are never empty; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether an index lies inside the region
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_orders_bounds() {
        let region = Region::new(40, 10);
        assert_eq!(region.start, 10);
        assert_eq!(region.end, 40);
        assert_eq!(region.len(), 31);
        assert!(region.contains(10));
        assert!(region.contains(40));
        assert!(!region.contains(41));
    }
}
