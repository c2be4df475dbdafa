//! Piano-roll view
//!
//! ```text
//! [C7 ] [grid raster + pointer layer ...]
//! [B6 ] [                               ]
//!  ...
//! ```
//! Keyboard labels and grid scroll together in both directions.

use iced::widget::{canvas, column, container, image, row, scrollable, stack, text};
use iced::{mouse, Element, Length};
use soundforge_core::music::{is_black_key, note_name};
use soundforge_core::notes::NoteEdit;

use super::state::PianoRollState;
use crate::pointer::PointerLayer;
use crate::theme;

/// Width of the keyboard label column
const KEYBOARD_WIDTH: f32 = 48.0;

/// Create the piano-roll element
///
/// `on_edit` receives a click edit for every press that lands on the grid.
/// `viewport_height` bounds the visible area; the rest scrolls.
pub fn piano_roll_view<'a, Message: Clone + 'a>(
    state: &'a PianoRollState,
    viewport_height: f32,
    on_edit: impl Fn(NoteEdit) -> Message + 'a,
) -> Element<'a, Message> {
    let layout = *state.layout();
    let grid_width = Length::Fixed(layout.width());
    let grid_height = Length::Fixed(layout.height());

    let keys = (layout.lowest_pitch..=layout.highest_pitch).rev().map(|pitch| -> Element<'a, Message> {
        let black = is_black_key(pitch);
        container(text(note_name(pitch)).size(10).color(if black { theme::LABEL } else { theme::VALUE_TEXT }))
            .width(Length::Fixed(KEYBOARD_WIDTH))
            .height(Length::Fixed(layout.note_height))
            .padding([0, 4])
            .style(move |_| container::Style {
                background: Some(theme::to_color(if black { theme::MUTED } else { theme::KNOB_BODY }).into()),
                ..Default::default()
            })
            .into()
    });
    let keyboard = column(keys);

    let raster = image(state.handle().clone()).width(grid_width).height(grid_height);

    let pointer = canvas(PointerLayer {
        on_event: move |event| state.edit_for_pointer(event).map(&on_edit),
        cursor: mouse::Interaction::Pointer,
    })
    .width(grid_width)
    .height(grid_height);

    let content = row![keyboard, stack![raster, pointer]];

    scrollable(content)
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(viewport_height))
        .into()
}
