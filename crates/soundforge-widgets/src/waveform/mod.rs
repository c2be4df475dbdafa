//! Waveform editor
//!
//! - [`envelope`]: per-pixel min/max downsampling
//! - [`render`]: envelope, grid, selection and playhead into a [`PixelBuffer`](crate::raster::PixelBuffer)
//! - [`state`]: sample buffer, zoom window, click/drag selection
//! - [`view`]: iced element

pub mod envelope;
pub mod render;
pub mod state;
pub mod view;

pub use envelope::{bucket_size, compute_envelope, max_trace, Envelope};
pub use render::{render_waveform, ViewWindow, WaveformScene, AMPLITUDE_SCALE};
pub use state::{WaveformEvent, WaveformState, MAX_ZOOM, MIN_ZOOM, RENDER_WIDTH};
pub use view::waveform_view;
