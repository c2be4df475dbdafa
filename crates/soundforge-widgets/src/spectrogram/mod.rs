//! Spectrogram display
//!
//! Colorized time x frequency view of a [`SpectrogramMatrix`](soundforge_core::sample::SpectrogramMatrix).
//! Display only: the spectrogram has no pointer interaction.

pub mod render;
pub mod state;
pub mod view;

pub use render::{freq_index, intensity_color, render_spectrogram, time_index};
pub use state::SpectrogramState;
pub use view::spectrogram_view;
