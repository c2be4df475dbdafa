//! Edit error types
//!
//! Every editing operation in the model is synchronous and local, so the
//! only failures are requests that don't make sense for the current state.

use thiserror::Error;

/// Errors returned by editing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// Pitch outside the configured grid or the MIDI range
    #[error("Pitch {pitch} outside range {lowest}..={highest}")]
    PitchOutOfRange { pitch: i32, lowest: u8, highest: u8 },

    /// Beat position outside the grid
    #[error("Beat {beat:.3} outside grid of {total_beats} beats")]
    BeatOutOfRange { beat: f64, total_beats: u32 },

    /// No note with this id
    #[error("Note not found: {0}")]
    NoteNotFound(u64),

    /// No clip with this id
    #[error("Clip not found: {0}")]
    ClipNotFound(String),

    /// No track with this id
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// Split position doesn't fall strictly inside the clip
    #[error("Split position {position:.2}s outside clip {clip_id}")]
    SplitOutsideClip { clip_id: String, position: f64 },

    /// Stretch ratio must be positive
    #[error("Invalid stretch ratio: {0}%")]
    InvalidStretchRatio(f64),

    /// Unparseable snap value (expected 1/4, 1/8, 1/16 or 1/32)
    #[error("Invalid snap value: {0}")]
    InvalidSnap(String),

    /// NaN or infinite parameter value
    #[error("Non-finite value for {param}")]
    NonFiniteValue { param: &'static str },

    /// Parameter doesn't belong to the effect
    #[error("{effect} has no parameter {param}")]
    UnknownParameter { effect: &'static str, param: &'static str },

    /// No effect of this kind in the rack
    #[error("Effect not in rack: {0}")]
    EffectNotFound(&'static str),

    /// Region falls outside the sample array
    #[error("Region {start}..={end} outside {len} samples")]
    RegionOutOfBounds { start: usize, end: usize, len: usize },
}

/// Result type for editing operations
pub type EditResult<T> = Result<T, EditError>;
