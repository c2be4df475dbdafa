//! MIDI note model and the piano-roll editor state
//!
//! - `Note` / `NoteId`: the note records
//! - `SnapValue`: grid subdivisions for quantize
//! - `transform`: whole-list transforms (quantize, humanize)
//! - `PianoRoll`: tool-mode click handling, selection, duplicate/delete

mod editor;
mod snap;
pub mod transform;

pub use editor::{ClickOutcome, ClickTarget, NoteEdit, PianoRoll, PlaybackMode, Tool, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use snap::SnapValue;

use std::fmt;

/// Unique note identifier (never reused within a piano roll)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single note event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub id: NoteId,
    /// MIDI pitch (0-127)
    pub pitch: u8,
    /// Start position in beats
    pub start: f64,
    /// Length in beats
    pub duration: f64,
    /// MIDI velocity (0-127)
    pub velocity: u8,
}

impl Note {
    /// End position in beats
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}
