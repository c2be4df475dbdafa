//! Pitch naming utilities for the piano roll
//!
//! MIDI pitch 60 is middle C, written `C4`.

/// Note names within an octave, sharps only
pub const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Semitone offsets of the black keys within an octave
const BLACK_KEYS: [u8; 5] = [1, 3, 6, 8, 10];

/// Whether a pitch falls on a black piano key
pub fn is_black_key(pitch: u8) -> bool {
    BLACK_KEYS.contains(&(pitch % 12))
}

/// Octave number in scientific pitch notation (60 -> 4)
pub fn octave(pitch: u8) -> i8 {
    (pitch / 12) as i8 - 1
}

/// Display name for a pitch, e.g. `C4`, `F#2`, `C-1`
pub fn note_name(pitch: u8) -> String {
    format!("{}{}", NOTE_NAMES[(pitch % 12) as usize], octave(pitch))
}
