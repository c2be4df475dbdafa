//! SoundForge Studio widgets
//!
//! Renderers that turn editor data into RGBA rasters, plus the iced views
//! that display them and report pointer input:
//!
//! - [`waveform`]: per-pixel envelope plot with selection and playhead
//! - [`spectrogram`]: colorized time x frequency matrix
//! - [`piano_roll`]: note grid with click-to-edit
//! - [`knob`]: drag-controlled rotary value
//! - [`error_panel`]: fallback shown when an edit is rejected
//!
//! All drawing goes through [`raster::PixelBuffer`]; views show the raster
//! with iced's image widget under a transparent [`pointer::PointerLayer`].

pub mod error_panel;
pub mod knob;
pub mod piano_roll;
pub mod pointer;
pub mod raster;
pub mod spectrogram;
pub mod theme;
pub mod waveform;

pub use error_panel::{error_panel, ErrorReport};
pub use knob::{Knob, KnobEvent};
pub use piano_roll::{piano_roll_view, GridLayout, PianoRollState};
pub use pointer::{PointerEvent, PointerLayer};
pub use raster::{PixelBuffer, Rgba};
pub use spectrogram::{render_spectrogram, spectrogram_view, SpectrogramState};
pub use waveform::{compute_envelope, render_waveform, waveform_view, Envelope, WaveformEvent, WaveformState};
