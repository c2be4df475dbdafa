//! Piano-roll grid widget
//!
//! The editing model lives in [`soundforge_core::notes::PianoRoll`]; this
//! module maps it to pixels and pointer presses back to [`NoteEdit`]s.
//!
//! [`NoteEdit`]: soundforge_core::notes::NoteEdit

pub mod layout;
pub mod render;
pub mod state;
pub mod view;

pub use layout::{GridLayout, NoteRect, MIN_NOTE_WIDTH, NOTE_HEIGHT};
pub use render::render_piano_roll;
pub use state::PianoRollState;
pub use view::piano_roll_view;
