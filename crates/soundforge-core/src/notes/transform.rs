//! Whole-list note transforms
//!
//! Both transforms touch every note in the slice; callers that want to
//! limit them to a selection pass a filtered slice.

use rand::Rng;

use super::Note;
use crate::types::{MIDI_MAX, MIN_VELOCITY};

/// Maximum start offset (beats) at 100% humanize, either direction
pub const HUMANIZE_TIMING_RANGE: f64 = 0.1;

/// Maximum velocity offset at 100% humanize, either direction
pub const HUMANIZE_VELOCITY_RANGE: f64 = 20.0;

/// Round half up, matching the editor's historical grid rounding
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Nearest grid position for a start time
pub fn snap_position(start: f64, snap_beats: f64) -> f64 {
    round_half_up(start / snap_beats) * snap_beats
}

/// Move each note's start toward the nearest multiple of `snap_beats`
///
/// `strength_percent` blends between the raw start (0) and the snapped
/// position (100). Values outside 0-100 are clamped. A non-positive snap
/// leaves the notes alone.
pub fn quantize(notes: &mut [Note], snap_beats: f64, strength_percent: f64) {
    if snap_beats <= 0.0 {
        log::warn!("quantize: ignoring non-positive snap {}", snap_beats);
        return;
    }

    let strength = strength_percent.clamp(0.0, 100.0) / 100.0;
    for note in notes.iter_mut() {
        let target = snap_position(note.start, snap_beats);
        // Weighted form so 0% and 100% land exactly on the raw and snapped starts
        note.start = note.start * (1.0 - strength) + target * strength;
    }
}

/// Randomly perturb note starts and velocities
///
/// Start moves by up to `±amount * 0.05` beats and never goes negative;
/// velocity moves by up to `±amount * 10` and stays within 1-127.
/// Durations are not changed.
pub fn humanize<R: Rng + ?Sized>(notes: &mut [Note], amount_percent: f64, rng: &mut R) {
    let amount = amount_percent.clamp(0.0, 100.0) / 100.0;
    if amount == 0.0 {
        return;
    }

    for note in notes.iter_mut() {
        let timing = (rng.gen::<f64>() - 0.5) * amount * HUMANIZE_TIMING_RANGE;
        note.start = (note.start + timing).max(0.0);

        let velocity = note.velocity as f64 + (rng.gen::<f64>() - 0.5) * amount * HUMANIZE_VELOCITY_RANGE;
        note.velocity = velocity.round().clamp(MIN_VELOCITY as f64, MIDI_MAX as f64) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::NoteId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn note(id: u64, start: f64, velocity: u8) -> Note {
        Note {
            id: NoteId(id),
            pitch: 60,
            start,
            duration: 1.0,
            velocity,
        }
    }

    fn starts(notes: &[Note]) -> Vec<f64> {
        notes.iter().map(|n| n.start).collect()
    }

    #[test]
    fn test_half_strength_quantize() {
        let mut notes = vec![note(1, 0.3, 100)];
        quantize(&mut notes, 1.0, 50.0);
        assert!((notes[0].start - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_full_strength_snaps() {
        let mut notes = vec![note(1, 0.3, 100), note(2, 1.13, 100), note(3, 2.5, 100)];
        quantize(&mut notes, 0.25, 100.0);
        assert_eq!(starts(&notes), vec![0.25, 1.25, 2.5]);
    }

    #[test]
    fn test_midpoint_rounds_up() {
        let mut notes = vec![note(1, 0.5, 100)];
        quantize(&mut notes, 1.0, 100.0);
        assert_eq!(notes[0].start, 1.0);
    }

    #[test]
    fn test_full_strength_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        for snap in [1.0, 0.5, 0.25, 0.125] {
            let mut notes: Vec<Note> = (0..50)
                .map(|i| note(i, rng.gen_range(0.0..32.0), 100))
                .collect();
            quantize(&mut notes, snap, 100.0);
            let once = starts(&notes);
            quantize(&mut notes, snap, 100.0);
            assert_eq!(starts(&notes), once);
        }
    }

    #[test]
    fn test_zero_strength_noop() {
        let mut notes = vec![note(1, 0.37, 100), note(2, 3.91, 100)];
        quantize(&mut notes, 0.25, 0.0);
        assert_eq!(starts(&notes), vec![0.37, 3.91]);
    }

    #[test]
    fn test_humanize_zero_amount_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = vec![note(1, 1.0, 100), note(2, 2.0, 64)];
        let mut notes = original.clone();
        humanize(&mut notes, 0.0, &mut rng);
        assert_eq!(notes, original);
    }

    #[test]
    fn test_humanize_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut notes = vec![note(1, 0.0, 1), note(2, 4.0, 127), note(3, 8.0, 64)];
        for _ in 0..200 {
            let before = notes.clone();
            humanize(&mut notes, 100.0, &mut rng);
            for (b, a) in before.iter().zip(&notes) {
                assert!(a.start >= 0.0);
                assert!((a.start - b.start).abs() <= HUMANIZE_TIMING_RANGE / 2.0 + 1e-12);
                assert!((MIN_VELOCITY..=MIDI_MAX).contains(&a.velocity));
                assert_eq!(a.duration, b.duration);
                assert_eq!(a.pitch, b.pitch);
            }
        }
    }
}
