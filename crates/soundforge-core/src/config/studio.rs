//! Studio settings tree
//!
//! Stored as YAML; every section uses `#[serde(default)]` so a partial file
//! only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::notes::SnapValue;
use crate::types::{DEFAULT_FREQ_BINS, DEFAULT_SAMPLE_COUNT, DEFAULT_TIME_SLICES, MIDI_MAX};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub piano_roll: PianoRollConfig,
    pub waveform: WaveformConfig,
    pub spectrogram: SpectrogramConfig,
    pub transport: TransportConfig,
    pub knob: KnobConfig,
}

/// Piano roll grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PianoRollConfig {
    /// Lowest pitch shown on the grid (36 = C2)
    pub lowest_pitch: u8,
    /// Highest pitch shown on the grid (96 = C7)
    pub highest_pitch: u8,
    /// Grid length in beats
    pub total_beats: u32,
    /// Row height in pixels
    pub note_height: f32,
    /// Initial zoom (beat width = zoom * 2 px)
    pub default_zoom: u32,
    pub default_snap: SnapValue,
    /// Quantize strength in percent
    pub default_quantize_strength: u8,
    /// Humanize amount in percent
    pub default_humanize_amount: u8,
}

impl Default for PianoRollConfig {
    fn default() -> Self {
        Self {
            lowest_pitch: 36,
            highest_pitch: 96,
            total_beats: 32,
            note_height: 16.0,
            default_zoom: 50,
            default_snap: SnapValue::Sixteenth,
            default_quantize_strength: 100,
            default_humanize_amount: 0,
        }
    }
}

impl PianoRollConfig {
    /// Pitch bounds clamped to the MIDI range and put in order
    pub fn pitch_bounds(&self) -> (u8, u8) {
        let lo = self.lowest_pitch.min(MIDI_MAX);
        let hi = self.highest_pitch.min(MIDI_MAX);
        (lo.min(hi), lo.max(hi))
    }
}

/// How the waveform envelope is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStyle {
    /// Filled band between per-pixel min and max
    #[default]
    MinMax,
    /// Single line through the per-pixel maximum
    MaxTrace,
}

/// Waveform editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    /// Length of the generated mock buffer
    pub sample_count: usize,
    pub envelope: EnvelopeStyle,
    /// Canvas height in pixels
    pub height: u32,
    /// Horizontal grid divisions
    pub grid_lines: u32,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            envelope: EnvelopeStyle::MinMax,
            height: 200,
            grid_lines: 10,
        }
    }
}

/// Spectrogram settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    pub time_slices: usize,
    pub freq_bins: usize,
    /// Upper bound of the generated magnitudes
    pub max_magnitude: f32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            time_slices: DEFAULT_TIME_SLICES,
            freq_bins: DEFAULT_FREQ_BINS,
            max_magnitude: 0.8,
            height: 200,
        }
    }
}

/// Simulated playback clock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Position wraps to zero after this many seconds
    pub loop_length_secs: f64,
    /// Tick interval in milliseconds
    pub tick_ms: u64,
    /// Seconds advanced per tick
    pub step_secs: f64,
    pub bpm: f64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            loop_length_secs: 64.0,
            tick_ms: 100,
            step_secs: 0.1,
            bpm: 120.0,
        }
    }
}

/// Rotary knob settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    /// Vertical drag distance that sweeps the full range
    pub drag_range_px: f32,
    /// Knob diameter in pixels
    pub size: u32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            drag_range_px: 200.0,
            size: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.piano_roll.pitch_bounds(), (36, 96));
        assert_eq!(config.piano_roll.total_beats, 32);
        assert_eq!(config.waveform.sample_count, 2000);
        assert_eq!(config.waveform.envelope, EnvelopeStyle::MinMax);
        assert_eq!(config.transport.loop_length_secs, 64.0);
        assert_eq!(config.knob.drag_range_px, 200.0);
    }

    #[test]
    fn test_pitch_bounds_are_ordered_and_clamped() {
        let config = PianoRollConfig {
            lowest_pitch: 200,
            highest_pitch: 60,
            ..Default::default()
        };
        assert_eq!(config.pitch_bounds(), (60, 127));
    }

    #[test]
    fn test_envelope_style_yaml_names() {
        let yaml = serde_yaml::to_string(&EnvelopeStyle::MaxTrace).unwrap();
        assert_eq!(yaml.trim(), "max_trace");
    }
}
