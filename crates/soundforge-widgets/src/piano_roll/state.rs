//! Piano-roll widget state: editor model plus cached raster

use iced::widget::image::Handle;
use rand::Rng;
use soundforge_core::notes::{ClickOutcome, NoteEdit, PianoRoll};
use soundforge_core::EditResult;

use super::layout::GridLayout;
use super::render::render_piano_roll;
use crate::pointer::PointerEvent;

#[derive(Debug, Clone)]
pub struct PianoRollState {
    roll: PianoRoll,
    note_height: f32,
    layout: GridLayout,
    handle: Handle,
}

impl PianoRollState {
    pub fn new(roll: PianoRoll, note_height: f32) -> Self {
        let note_height = note_height.max(4.0);
        let layout = GridLayout::for_roll(&roll, note_height);
        let handle = render_piano_roll(&roll, &layout).to_handle();
        Self {
            roll,
            note_height,
            layout,
            handle,
        }
    }

    pub fn roll(&self) -> &PianoRoll {
        &self.roll
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Translate a pointer press into a click edit
    ///
    /// Only presses matter; drags and releases, and presses outside the
    /// grid, produce nothing.
    pub fn edit_for_pointer(&self, event: PointerEvent) -> Option<NoteEdit> {
        let PointerEvent::Pressed { position, additive, .. } = event else {
            return None;
        };
        let target = self.layout.hit_test(self.roll.notes(), position.x, position.y)?;
        Some(NoteEdit::Click { target, additive })
    }

    /// Apply an edit and re-render
    ///
    /// The raster is refreshed even when the edit fails so the view never
    /// shows a half-applied state.
    pub fn apply<R: Rng + ?Sized>(&mut self, edit: NoteEdit, rng: &mut R) -> EditResult<ClickOutcome> {
        let result = self.roll.apply(edit, rng);
        self.layout = GridLayout::for_roll(&self.roll, self.note_height);
        self.handle = render_piano_roll(&self.roll, &self.layout).to_handle();
        result
    }

    /// Replace the whole model (e.g. after a reset)
    pub fn set_roll(&mut self, roll: PianoRoll) {
        *self = Self::new(roll, self.note_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piano_roll::layout::NOTE_HEIGHT;
    use iced::{Point, Size};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use soundforge_core::config::PianoRollConfig;
    use soundforge_core::notes::{ClickTarget, Tool};

    fn press(x: f32, y: f32, additive: bool) -> PointerEvent {
        PointerEvent::Pressed {
            position: Point::new(x, y),
            size: Size::new(3200.0, 976.0),
            additive,
        }
    }

    #[test]
    fn test_press_on_empty_cell_draws_note() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = PianoRollState::new(PianoRoll::new(&PianoRollConfig::default()), NOTE_HEIGHT);
        let y = state.layout().pitch_y(62) + 4.0;
        let edit = state.edit_for_pointer(press(530.0, y, false)).unwrap();

        let outcome = state.apply(edit, &mut rng).unwrap();
        let ClickOutcome::Inserted(id) = outcome else {
            panic!("expected insert, got {outcome:?}");
        };
        let note = state.roll().note(id).unwrap();
        assert_eq!(note.pitch, 62);
        assert_eq!(note.start, 5.0);
        assert_eq!(note.duration, 1.0);
    }

    #[test]
    fn test_press_on_note_carries_modifier() {
        let state = PianoRollState::new(PianoRoll::with_demo_notes(&PianoRollConfig::default()), NOTE_HEIGHT);
        let c4 = state.roll().notes()[0].id;
        let y = state.layout().pitch_y(60) + 8.0;
        assert_eq!(
            state.edit_for_pointer(press(20.0, y, true)),
            Some(NoteEdit::Click {
                target: ClickTarget::Note(c4),
                additive: true
            })
        );
    }

    #[test]
    fn test_drag_and_outside_presses_ignored() {
        let state = PianoRollState::new(PianoRoll::with_demo_notes(&PianoRollConfig::default()), NOTE_HEIGHT);
        let drag = PointerEvent::Dragged {
            position: Point::new(20.0, 20.0),
            size: Size::new(100.0, 100.0),
        };
        assert_eq!(state.edit_for_pointer(drag), None);
        assert_eq!(state.edit_for_pointer(press(-10.0, 20.0, false)), None);
    }

    #[test]
    fn test_zoom_changes_layout() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = PianoRollState::new(PianoRoll::new(&PianoRollConfig::default()), NOTE_HEIGHT);
        assert_eq!(state.layout().beat_width, 100.0);
        state.apply(NoteEdit::SetZoom(100), &mut rng).unwrap();
        assert_eq!(state.layout().beat_width, 200.0);
        state.apply(NoteEdit::SetTool(Tool::Erase), &mut rng).unwrap();
        assert_eq!(state.roll().tool(), Tool::Erase);
    }
}
