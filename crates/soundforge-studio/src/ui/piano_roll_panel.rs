//! Piano-roll section: tool bar, transform controls and the grid

use iced::widget::{button, column, pick_list, row, slider, text, Space};
use iced::{Center, Element, Fill};
use soundforge_core::music::note_name;
use soundforge_core::notes::{NoteEdit, PianoRoll, PlaybackMode, SnapValue, Tool, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use soundforge_widgets::{piano_roll_view, theme, PianoRollState};

use super::app::Message;

/// Visible height of the grid; the rest scrolls
const GRID_VIEWPORT_HEIGHT: f32 = 320.0;

const TOOLS: [(Tool, &str); 3] = [(Tool::Select, "Select"), (Tool::Draw, "Draw"), (Tool::Erase, "Erase")];

fn edit(edit: NoteEdit) -> Message {
    Message::PianoRoll(edit)
}

fn labeled_slider<'a>(label: &'a str, value: u8, on_change: fn(u8) -> NoteEdit) -> Element<'a, Message> {
    row![
        text(format!("{label} {value}%")).size(11).color(theme::LABEL),
        slider(0.0..=100.0, value as f32, move |v| edit(on_change(v.round() as u8))).width(100),
    ]
    .spacing(4)
    .align_y(Center)
    .into()
}

/// One-line summary of the current selection
pub fn selection_summary(roll: &PianoRoll) -> String {
    match roll.selection().len() {
        0 => "No notes selected".to_string(),
        1 => match roll.single_selected() {
            Some(note) => format!(
                "{} | start {:.2} | length {:.2} | velocity {}",
                note_name(note.pitch),
                note.start,
                note.duration,
                note.velocity
            ),
            None => "1 note selected".to_string(),
        },
        n => format!("{n} notes selected"),
    }
}

pub fn piano_roll_panel(state: &PianoRollState) -> Element<'_, Message> {
    let roll = state.roll();

    let tools = TOOLS.iter().fold(row![].spacing(2), |tools, &(tool, label)| {
        let style = if roll.tool() == tool { button::primary } else { button::secondary };
        tools.push(button(text(label).size(12)).style(style).on_press(edit(NoteEdit::SetTool(tool))))
    });

    let has_selection = !roll.selection().is_empty();
    let zoom = roll.zoom();
    let playback_label = match roll.playback_mode() {
        PlaybackMode::Loop => "Loop",
        PlaybackMode::Once => "Once",
    };

    let toolbar = row![
        tools,
        Space::new().width(12),
        text("Snap").size(11).color(theme::LABEL),
        pick_list(&SnapValue::ALL[..], Some(roll.snap()), |snap| edit(NoteEdit::SetSnap(snap))).text_size(12),
        button(text("Quantize").size(12)).on_press(edit(NoteEdit::Quantize)),
        labeled_slider("Strength", roll.quantize_strength(), NoteEdit::SetQuantizeStrength),
        button(text("Humanize").size(12)).on_press(edit(NoteEdit::Humanize)),
        labeled_slider("Amount", roll.humanize_amount(), NoteEdit::SetHumanizeAmount),
    ]
    .spacing(6)
    .align_y(Center);

    let actions = row![
        button(text("Duplicate").size(12)).on_press_maybe(has_selection.then(|| edit(NoteEdit::DuplicateSelected))),
        button(text("Delete").size(12)).on_press_maybe(has_selection.then(|| edit(NoteEdit::DeleteSelected))),
        Space::new().width(12),
        button(text("-").size(12)).on_press_maybe((zoom > MIN_ZOOM).then(|| edit(NoteEdit::SetZoom(zoom - ZOOM_STEP)))),
        text(format!("Zoom {zoom}%")).size(11).color(theme::LABEL),
        button(text("+").size(12)).on_press_maybe((zoom < MAX_ZOOM).then(|| edit(NoteEdit::SetZoom(zoom + ZOOM_STEP)))),
        Space::new().width(12),
        button(text(playback_label).size(12)).on_press(edit(NoteEdit::TogglePlaybackMode)),
        button(text(if roll.show_velocity() { "Hide Velocity" } else { "Show Velocity" }).size(12))
            .on_press(edit(NoteEdit::ToggleVelocityLanes)),
        Space::new().width(Fill),
        text(selection_summary(roll)).size(11).color(theme::VALUE_TEXT),
    ]
    .spacing(6)
    .align_y(Center);

    column![toolbar, actions, piano_roll_view(state, GRID_VIEWPORT_HEIGHT, edit)]
        .spacing(6)
        .into()
}
