//! Piano-roll grid geometry
//!
//! Pitches run top (highest) to bottom (lowest), one row each; beats run
//! left to right at `zoom * 2` pixels per beat.

use soundforge_core::notes::{ClickTarget, Note, PianoRoll};

/// Row height of one pitch in pixels
pub const NOTE_HEIGHT: f32 = 16.0;

/// Notes are never drawn narrower than this
pub const MIN_NOTE_WIDTH: f32 = 8.0;

/// Axis-aligned rectangle in grid pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NoteRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub lowest_pitch: u8,
    pub highest_pitch: u8,
    pub total_beats: u32,
    pub note_height: f32,
    pub beat_width: f32,
}

impl GridLayout {
    /// Layout for a piano roll at its current zoom
    pub fn for_roll(roll: &PianoRoll, note_height: f32) -> Self {
        let (lowest_pitch, highest_pitch) = roll.pitch_range();
        Self {
            lowest_pitch,
            highest_pitch,
            total_beats: roll.total_beats(),
            note_height,
            beat_width: roll.zoom() as f32 * 2.0,
        }
    }

    pub fn rows(&self) -> u32 {
        (self.highest_pitch - self.lowest_pitch) as u32 + 1
    }

    pub fn width(&self) -> f32 {
        self.total_beats as f32 * self.beat_width
    }

    pub fn height(&self) -> f32 {
        self.rows() as f32 * self.note_height
    }

    /// Top edge of a pitch row
    pub fn pitch_y(&self, pitch: u8) -> f32 {
        self.highest_pitch.saturating_sub(pitch) as f32 * self.note_height
    }

    /// Pitch of the row under `y`, `None` outside the grid
    pub fn pitch_at(&self, y: f32) -> Option<u8> {
        if y < 0.0 || y >= self.height() {
            return None;
        }
        let row = (y / self.note_height).floor() as u32;
        Some(self.highest_pitch - row.min(self.rows() - 1) as u8)
    }

    /// Unsnapped beat under `x`, `None` outside the grid
    pub fn beat_at(&self, x: f32) -> Option<f64> {
        if x < 0.0 || x >= self.width() {
            return None;
        }
        Some((x / self.beat_width) as f64)
    }

    /// Where a note is drawn (inset by one pixel vertically)
    pub fn note_rect(&self, note: &Note) -> NoteRect {
        let width = note.duration as f32 * self.beat_width;
        NoteRect {
            x: note.start as f32 * self.beat_width,
            y: self.pitch_y(note.pitch) + 1.0,
            width: (width - 2.0).max(MIN_NOTE_WIDTH),
            height: self.note_height - 2.0,
        }
    }

    /// Resolve a click position to a note or an empty cell
    ///
    /// Later notes are drawn on top, so they win overlaps.
    pub fn hit_test(&self, notes: &[Note], x: f32, y: f32) -> Option<ClickTarget> {
        if let Some(note) = notes.iter().rev().find(|n| self.note_rect(n).contains(x, y)) {
            return Some(ClickTarget::Note(note.id));
        }
        let pitch = self.pitch_at(y)?;
        let beat = self.beat_at(x)?;
        Some(ClickTarget::Cell { pitch, beat })
    }
}
