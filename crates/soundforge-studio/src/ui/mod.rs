//! UI module for SoundForge Studio
//!
//! Built with iced. One screen: transport bar on top, waveform /
//! spectrogram editor and piano roll on the left, effects rack and track
//! list on the right.

pub mod app;
pub mod editor_view;
pub mod effects_panel;
pub mod piano_roll_panel;
pub mod track_list;
pub mod transport_bar;
