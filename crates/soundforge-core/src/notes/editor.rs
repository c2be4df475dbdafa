//! Piano-roll editor state
//!
//! Owns the note list, the multi-selection and the current tool. Every
//! edit is applied immediately; there is no undo history.

use rand::Rng;

use super::transform::{humanize, quantize};
use super::{Note, NoteId, SnapValue};
use crate::config::PianoRollConfig;
use crate::error::{EditError, EditResult};
use crate::types::{DEFAULT_VELOCITY, MIDI_MAX};

/// Zoom range for the grid (beat width = zoom * 2 px)
pub const MIN_ZOOM: u32 = 25;
pub const MAX_ZOOM: u32 = 200;
pub const ZOOM_STEP: u32 = 25;

/// Active editing tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    Select,
    #[default]
    Draw,
    Erase,
}

/// Playback behaviour at the end of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    #[default]
    Loop,
    Once,
}

/// What a grid click landed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    /// An existing note
    Note(NoteId),
    /// An empty cell at a pitch and (unsnapped) beat position
    Cell { pitch: u8, beat: f64 },
}

/// Result of a grid click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Selection replaced by / extended with this note
    Selected(NoteId),
    /// Note removed from the selection (additive click on a selected note)
    Deselected(NoteId),
    /// New note created
    Inserted(NoteId),
    /// Note deleted
    Erased(NoteId),
    /// Click had no effect for the current tool
    Ignored,
}

/// Edits that can be dispatched to a piano roll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteEdit {
    SetTool(Tool),
    Click { target: ClickTarget, additive: bool },
    Quantize,
    Humanize,
    DuplicateSelected,
    DeleteSelected,
    SetSnap(SnapValue),
    SetQuantizeStrength(u8),
    SetHumanizeAmount(u8),
    SetZoom(u32),
    TogglePlaybackMode,
    ToggleVelocityLanes,
}

/// Piano-roll editor state
#[derive(Debug, Clone)]
pub struct PianoRoll {
    notes: Vec<Note>,
    selection: Vec<NoteId>,
    tool: Tool,
    snap: SnapValue,
    quantize_strength: u8,
    humanize_amount: u8,
    zoom: u32,
    playback_mode: PlaybackMode,
    show_velocity: bool,
    lowest_pitch: u8,
    highest_pitch: u8,
    total_beats: u32,
    next_id: u64,
}

impl PianoRoll {
    /// Create an empty piano roll from grid settings
    pub fn new(config: &PianoRollConfig) -> Self {
        let (lowest_pitch, highest_pitch) = config.pitch_bounds();
        Self {
            notes: Vec::new(),
            selection: Vec::new(),
            tool: Tool::default(),
            snap: config.default_snap,
            quantize_strength: config.default_quantize_strength.min(100),
            humanize_amount: config.default_humanize_amount.min(100),
            zoom: clamp_zoom(config.default_zoom),
            playback_mode: PlaybackMode::default(),
            show_velocity: false,
            lowest_pitch,
            highest_pitch,
            total_beats: config.total_beats.max(1),
            next_id: 1,
        }
    }

    /// Piano roll seeded with a C major arpeggio (C4 E4 G4 C5)
    pub fn with_demo_notes(config: &PianoRollConfig) -> Self {
        let mut roll = Self::new(config);
        for (pitch, start, duration, velocity) in
            [(60, 0.0, 1.0, 100), (64, 1.0, 1.0, 90), (67, 2.0, 1.0, 95), (72, 3.0, 2.0, 85)]
        {
            // Seed pitches may fall outside a narrowed grid; skip those
            let _ = roll.insert_note(pitch, start, duration, velocity);
        }
        roll
    }

    // --- accessors ---

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn selection(&self) -> &[NoteId] {
        &self.selection
    }

    pub fn is_selected(&self, id: NoteId) -> bool {
        self.selection.contains(&id)
    }

    /// The single selected note, if exactly one is selected
    pub fn single_selected(&self) -> Option<&Note> {
        match self.selection.as_slice() {
            [id] => self.note(*id),
            _ => None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn snap(&self) -> SnapValue {
        self.snap
    }

    pub fn quantize_strength(&self) -> u8 {
        self.quantize_strength
    }

    pub fn humanize_amount(&self) -> u8 {
        self.humanize_amount
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn playback_mode(&self) -> PlaybackMode {
        self.playback_mode
    }

    pub fn show_velocity(&self) -> bool {
        self.show_velocity
    }

    pub fn pitch_range(&self) -> (u8, u8) {
        (self.lowest_pitch, self.highest_pitch)
    }

    pub fn total_beats(&self) -> u32 {
        self.total_beats
    }

    // --- edits ---

    /// Dispatch an edit
    ///
    /// `rng` is only consulted by `Humanize`.
    pub fn apply<R: Rng + ?Sized>(&mut self, edit: NoteEdit, rng: &mut R) -> EditResult<ClickOutcome> {
        match edit {
            NoteEdit::SetTool(tool) => self.tool = tool,
            NoteEdit::Click { target, additive } => return self.click(target, additive),
            NoteEdit::Quantize => self.quantize(),
            NoteEdit::Humanize => self.humanize(rng),
            NoteEdit::DuplicateSelected => {
                self.duplicate_selected();
            }
            NoteEdit::DeleteSelected => {
                self.delete_selected();
            }
            NoteEdit::SetSnap(snap) => self.snap = snap,
            NoteEdit::SetQuantizeStrength(v) => self.quantize_strength = v.min(100),
            NoteEdit::SetHumanizeAmount(v) => self.humanize_amount = v.min(100),
            NoteEdit::SetZoom(zoom) => self.zoom = clamp_zoom(zoom),
            NoteEdit::TogglePlaybackMode => {
                self.playback_mode = match self.playback_mode {
                    PlaybackMode::Loop => PlaybackMode::Once,
                    PlaybackMode::Once => PlaybackMode::Loop,
                }
            }
            NoteEdit::ToggleVelocityLanes => self.show_velocity = !self.show_velocity,
        }
        Ok(ClickOutcome::Ignored)
    }

    /// Handle a click on the grid according to the active tool
    ///
    /// `additive` is the multi-select modifier (Ctrl / Cmd).
    pub fn click(&mut self, target: ClickTarget, additive: bool) -> EditResult<ClickOutcome> {
        match (self.tool, target) {
            (Tool::Erase, ClickTarget::Note(id)) => {
                self.remove_note(id)?;
                Ok(ClickOutcome::Erased(id))
            }
            (Tool::Select | Tool::Draw, ClickTarget::Note(id)) => {
                if self.note(id).is_none() {
                    return Err(EditError::NoteNotFound(id.0));
                }
                Ok(self.select(id, additive))
            }
            (Tool::Draw, ClickTarget::Cell { pitch, beat }) => {
                self.check_beat(beat)?;
                let id = self.insert_note(pitch, beat.floor(), 1.0, DEFAULT_VELOCITY)?;
                Ok(ClickOutcome::Inserted(id))
            }
            (Tool::Select | Tool::Erase, ClickTarget::Cell { .. }) => Ok(ClickOutcome::Ignored),
        }
    }

    /// Add a note, returning its fresh id
    pub fn insert_note(&mut self, pitch: u8, start: f64, duration: f64, velocity: u8) -> EditResult<NoteId> {
        self.check_pitch(pitch)?;
        let id = self.allocate_id();
        self.notes.push(Note {
            id,
            pitch,
            start: start.max(0.0),
            duration,
            velocity: velocity.min(MIDI_MAX),
        });
        log::debug!("piano roll: inserted note {} pitch {} at beat {:.2}", id, pitch, start);
        Ok(id)
    }

    /// Remove one note (also drops it from the selection)
    pub fn remove_note(&mut self, id: NoteId) -> EditResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(EditError::NoteNotFound(id.0))?;
        self.selection.retain(|s| *s != id);
        Ok(self.notes.remove(index))
    }

    /// Quantize every note with the current snap and strength
    pub fn quantize(&mut self) {
        quantize(&mut self.notes, self.snap.beats(), self.quantize_strength as f64);
        log::info!(
            "piano roll: quantized {} notes to {} at {}%",
            self.notes.len(),
            self.snap,
            self.quantize_strength
        );
    }

    /// Humanize every note with the current amount
    pub fn humanize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        humanize(&mut self.notes, self.humanize_amount as f64, rng);
        log::info!("piano roll: humanized {} notes at {}%", self.notes.len(), self.humanize_amount);
    }

    /// Clone each selected note right after itself
    ///
    /// Returns the ids of the clones. Originals and the selection are unchanged.
    pub fn duplicate_selected(&mut self) -> Vec<NoteId> {
        let sources: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| self.selection.contains(&n.id))
            .copied()
            .collect();

        let mut created = Vec::with_capacity(sources.len());
        for source in sources {
            let id = self.allocate_id();
            self.notes.push(Note {
                id,
                start: source.start + source.duration,
                ..source
            });
            created.push(id);
        }
        created
    }

    /// Remove every selected note and clear the selection
    ///
    /// Returns how many notes were removed.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.notes.len();
        let selection = std::mem::take(&mut self.selection);
        self.notes.retain(|n| !selection.contains(&n.id));
        before - self.notes.len()
    }

    fn select(&mut self, id: NoteId, additive: bool) -> ClickOutcome {
        if !additive {
            self.selection = vec![id];
            return ClickOutcome::Selected(id);
        }

        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
            ClickOutcome::Deselected(id)
        } else {
            self.selection.push(id);
            ClickOutcome::Selected(id)
        }
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_pitch(&self, pitch: u8) -> EditResult<()> {
        if pitch < self.lowest_pitch || pitch > self.highest_pitch {
            return Err(EditError::PitchOutOfRange {
                pitch: pitch as i32,
                lowest: self.lowest_pitch,
                highest: self.highest_pitch,
            });
        }
        Ok(())
    }

    fn check_beat(&self, beat: f64) -> EditResult<()> {
        if !(0.0..self.total_beats as f64).contains(&beat) {
            return Err(EditError::BeatOutOfRange {
                beat,
                total_beats: self.total_beats,
            });
        }
        Ok(())
    }
}

fn clamp_zoom(zoom: u32) -> u32 {
    // Bounds are multiples of the step, so rounding after the clamp stays in range
    let bounded = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    ((bounded + ZOOM_STEP / 2) / ZOOM_STEP) * ZOOM_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roll() -> PianoRoll {
        PianoRoll::with_demo_notes(&PianoRollConfig::default())
    }

    fn ids(roll: &PianoRoll) -> Vec<NoteId> {
        roll.notes().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_demo_notes() {
        let roll = roll();
        let pitches: Vec<u8> = roll.notes().iter().map(|n| n.pitch).collect();
        assert_eq!(pitches, vec![60, 64, 67, 72]);
        assert_eq!(roll.tool(), Tool::Draw);
        assert!(roll.selection().is_empty());
    }

    #[test]
    fn test_draw_inserts_unit_note_on_floored_beat() {
        let mut roll = roll();
        let outcome = roll
            .click(ClickTarget::Cell { pitch: 62, beat: 5.8 }, false)
            .unwrap();
        let ClickOutcome::Inserted(id) = outcome else {
            panic!("expected insert, got {:?}", outcome);
        };
        let note = roll.note(id).unwrap();
        assert_eq!(note.pitch, 62);
        assert_eq!(note.start, 5.0);
        assert_eq!(note.duration, 1.0);
        assert_eq!(note.velocity, DEFAULT_VELOCITY);
    }

    #[test]
    fn test_draw_rejects_out_of_grid() {
        let mut roll = roll();
        assert!(matches!(
            roll.click(ClickTarget::Cell { pitch: 20, beat: 1.0 }, false),
            Err(EditError::PitchOutOfRange { pitch: 20, .. })
        ));
        assert!(matches!(
            roll.click(ClickTarget::Cell { pitch: 60, beat: 32.0 }, false),
            Err(EditError::BeatOutOfRange { .. })
        ));
        assert_eq!(roll.notes().len(), 4);
    }

    #[test]
    fn test_select_exclusive_and_additive() {
        let mut roll = roll();
        roll.apply(NoteEdit::SetTool(Tool::Select), &mut StdRng::seed_from_u64(0)).unwrap();
        let [a, b, c, _] = ids(&roll)[..] else { unreachable!() };

        roll.click(ClickTarget::Note(a), false).unwrap();
        roll.click(ClickTarget::Note(b), false).unwrap();
        assert_eq!(roll.selection(), &[b]);

        roll.click(ClickTarget::Note(c), true).unwrap();
        assert_eq!(roll.selection(), &[b, c]);

        assert_eq!(roll.click(ClickTarget::Note(b), true).unwrap(), ClickOutcome::Deselected(b));
        assert_eq!(roll.selection(), &[c]);
        assert_eq!(roll.single_selected().unwrap().pitch, 67);
    }

    #[test]
    fn test_select_ignores_empty_cells() {
        let mut roll = roll();
        roll.apply(NoteEdit::SetTool(Tool::Select), &mut StdRng::seed_from_u64(0)).unwrap();
        let outcome = roll.click(ClickTarget::Cell { pitch: 60, beat: 10.0 }, false).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(roll.notes().len(), 4);
    }

    #[test]
    fn test_erase_removes_note_and_selection() {
        let mut roll = roll();
        let id = ids(&roll)[1];
        roll.click(ClickTarget::Note(id), false).unwrap();
        assert_eq!(roll.selection(), &[id]);

        roll.apply(NoteEdit::SetTool(Tool::Erase), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(roll.click(ClickTarget::Note(id), false).unwrap(), ClickOutcome::Erased(id));
        assert!(roll.note(id).is_none());
        assert!(roll.selection().is_empty());
        assert_eq!(roll.click(ClickTarget::Note(id), false), Err(EditError::NoteNotFound(id.0)));
    }

    #[test]
    fn test_duplicate_leaves_originals() {
        let mut roll = roll();
        let before = roll.notes().to_vec();
        let [_, _, g, c5] = ids(&roll)[..] else { unreachable!() };
        roll.click(ClickTarget::Note(g), false).unwrap();
        roll.click(ClickTarget::Note(c5), true).unwrap();

        let clones = roll.duplicate_selected();
        assert_eq!(clones.len(), 2);
        assert_eq!(&roll.notes()[..4], &before[..]);
        for id in &clones {
            assert!(!before.iter().any(|n| n.id == *id));
        }
        assert_ne!(clones[0], clones[1]);

        let g_clone = roll.note(clones[0]).unwrap();
        assert_eq!(g_clone.pitch, 67);
        assert_eq!(g_clone.start, 3.0);
        let c5_clone = roll.note(clones[1]).unwrap();
        assert_eq!(c5_clone.start, 5.0);
        assert_eq!(c5_clone.duration, 2.0);
        assert_eq!(roll.selection(), &[g, c5]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut roll = roll();
        let last = *ids(&roll).last().unwrap();
        roll.click(ClickTarget::Note(last), false).unwrap();
        assert_eq!(roll.delete_selected(), 1);
        let fresh = roll.insert_note(60, 8.0, 1.0, 100).unwrap();
        assert!(fresh > last);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut roll = roll();
        let [a, b, ..] = ids(&roll)[..] else { unreachable!() };
        roll.click(ClickTarget::Note(a), false).unwrap();
        roll.click(ClickTarget::Note(b), true).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        roll.apply(NoteEdit::DeleteSelected, &mut rng).unwrap();
        assert_eq!(roll.notes().len(), 2);
        assert!(roll.selection().is_empty());
    }

    #[test]
    fn test_quantize_uses_snap_and_strength() {
        let mut roll = PianoRoll::new(&PianoRollConfig::default());
        let id = roll.insert_note(60, 0.3, 1.0, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        roll.apply(NoteEdit::SetSnap(SnapValue::Quarter), &mut rng).unwrap();
        roll.apply(NoteEdit::SetQuantizeStrength(50), &mut rng).unwrap();
        roll.apply(NoteEdit::Quantize, &mut rng).unwrap();
        assert!((roll.note(id).unwrap().start - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_settings_are_clamped() {
        let mut roll = roll();
        let mut rng = StdRng::seed_from_u64(0);
        roll.apply(NoteEdit::SetQuantizeStrength(250), &mut rng).unwrap();
        roll.apply(NoteEdit::SetZoom(1000), &mut rng).unwrap();
        assert_eq!(roll.quantize_strength(), 100);
        assert_eq!(roll.zoom(), MAX_ZOOM);
        roll.apply(NoteEdit::SetZoom(0), &mut rng).unwrap();
        assert_eq!(roll.zoom(), MIN_ZOOM);
        roll.apply(NoteEdit::SetZoom(60), &mut rng).unwrap();
        assert_eq!(roll.zoom(), 50);
    }

    #[test]
    fn test_huge_configured_zoom_is_clamped() {
        let config = PianoRollConfig {
            default_zoom: u32::MAX,
            ..PianoRollConfig::default()
        };
        assert_eq!(PianoRoll::new(&config).zoom(), MAX_ZOOM);

        let mut roll = roll();
        let mut rng = StdRng::seed_from_u64(0);
        roll.apply(NoteEdit::SetZoom(u32::MAX), &mut rng).unwrap();
        assert_eq!(roll.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_toggles() {
        let mut roll = roll();
        let mut rng = StdRng::seed_from_u64(0);
        roll.apply(NoteEdit::TogglePlaybackMode, &mut rng).unwrap();
        roll.apply(NoteEdit::ToggleVelocityLanes, &mut rng).unwrap();
        assert_eq!(roll.playback_mode(), PlaybackMode::Once);
        assert!(roll.show_velocity());
    }
}
