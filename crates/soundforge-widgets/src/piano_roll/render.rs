//! Piano-roll raster renderer

use soundforge_core::music::is_black_key;
use soundforge_core::notes::PianoRoll;
use soundforge_core::MIDI_MAX;

use super::layout::GridLayout;
use crate::raster::PixelBuffer;
use crate::theme;

/// Grid subdivisions per beat (sixteenth lines)
pub const SUBDIVISIONS: u32 = 4;

/// Height of the velocity strip drawn inside notes when velocity lanes are on
const VELOCITY_STRIP: i32 = 3;

/// Render the grid and notes at 1:1 pixel scale
pub fn render_piano_roll(roll: &PianoRoll, layout: &GridLayout) -> PixelBuffer {
    let width = layout.width().max(1.0) as u32;
    let height = layout.height().max(1.0) as u32;
    let mut buffer = PixelBuffer::filled(width, height, theme::BACKGROUND);
    let row_height = layout.note_height as i32;

    for pitch in layout.lowest_pitch..=layout.highest_pitch {
        let y = layout.pitch_y(pitch) as i32;
        if is_black_key(pitch) {
            buffer.fill_rect(0, y, width as i32, row_height, theme::MUTED);
        }
        buffer.hline(y + row_height - 1, 1, theme::GRID);
    }

    let lines = layout.total_beats * SUBDIVISIONS;
    for i in 0..=lines {
        let x = (i as f32 * layout.beat_width / SUBDIVISIONS as f32) as i32;
        let color = if i % SUBDIVISIONS == 0 {
            theme::GRID_STRONG
        } else {
            theme::GRID
        };
        buffer.vline(x.min(width as i32 - 1), 1, color);
    }

    for note in roll.notes() {
        let rect = layout.note_rect(note);
        let (x, y) = (rect.x as i32, rect.y as i32);
        let (w, h) = (rect.width as i32, rect.height as i32);
        let color = if roll.is_selected(note.id) {
            theme::PRIMARY
        } else {
            theme::ACCENT
        };
        buffer.fill_rect(x, y, w, h, color);

        if roll.show_velocity() {
            let strip = (w as f32 * note.velocity as f32 / MIDI_MAX as f32).round() as i32;
            buffer.fill_rect(x, y + h - VELOCITY_STRIP, strip, VELOCITY_STRIP, theme::VELOCITY);
        }
    }

    log::debug!(
        "Piano roll rendered: {}x{}, {} notes ({} selected)",
        width,
        height,
        roll.notes().len(),
        roll.selection().len()
    );
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piano_roll::layout::NOTE_HEIGHT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use soundforge_core::config::PianoRollConfig;
    use soundforge_core::notes::{ClickTarget, NoteEdit};

    fn setup() -> (PianoRoll, GridLayout) {
        let config = PianoRollConfig {
            lowest_pitch: 60,
            highest_pitch: 71,
            total_beats: 8,
            ..PianoRollConfig::default()
        };
        let roll = PianoRoll::with_demo_notes(&config);
        let layout = GridLayout::for_roll(&roll, NOTE_HEIGHT);
        (roll, layout)
    }

    #[test]
    fn test_raster_matches_layout() {
        let (roll, layout) = setup();
        let buffer = render_piano_roll(&roll, &layout);
        assert_eq!(buffer.width(), 800);
        assert_eq!(buffer.height(), 12 * 16);
    }

    #[test]
    fn test_notes_drawn_in_accent_then_primary_when_selected() {
        let (mut roll, layout) = setup();
        // C4 occupies beat 0..1 on the bottom row
        let y = layout.pitch_y(60) as i32 + 8;
        let buffer = render_piano_roll(&roll, &layout);
        assert_eq!(buffer.pixel(50, y), Some(theme::ACCENT));

        let id = roll.notes()[0].id;
        let mut rng = StdRng::seed_from_u64(1);
        roll.apply(
            NoteEdit::Click {
                target: ClickTarget::Note(id),
                additive: false,
            },
            &mut rng,
        )
        .unwrap();
        let buffer = render_piano_roll(&roll, &layout);
        assert_eq!(buffer.pixel(50, y), Some(theme::PRIMARY));
    }

    #[test]
    fn test_black_key_rows_are_shaded() {
        let (roll, layout) = setup();
        let buffer = render_piano_roll(&roll, &layout);
        // C#4 row, away from grid lines and notes
        let y = layout.pitch_y(61) as i32 + 8;
        assert_eq!(buffer.pixel(310, y), Some(theme::MUTED));
        let y = layout.pitch_y(62) as i32 + 8;
        assert_eq!(buffer.pixel(310, y), Some(theme::BACKGROUND));
    }

    #[test]
    fn test_every_beat_line_is_strong() {
        let (roll, layout) = setup();
        let buffer = render_piano_roll(&roll, &layout);
        // D4 row holds no notes; beats are 100 px apart, sixteenths 25 px
        let y = layout.pitch_y(62) as i32 + 8;
        let strong = theme::GRID_STRONG.over(theme::BACKGROUND);
        let weak = theme::GRID.over(theme::BACKGROUND);
        for beat in 1..4 {
            assert_eq!(buffer.pixel(beat * 100, y), Some(strong));
            assert_eq!(buffer.pixel(beat * 100 + 25, y), Some(weak));
        }
    }
}
