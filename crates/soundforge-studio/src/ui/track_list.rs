//! Track list: mute/solo/arm, volume and pan per track, clip actions

use iced::widget::{button, column, container, row, slider, text, Column, Space};
use iced::{Center, Element, Fill};
use soundforge_core::arrangement::{Arrangement, AudioClip, Track};
use soundforge_core::{PAN_MAX, PAN_MIN, VOLUME_MAX, VOLUME_MIN};
use soundforge_widgets::theme;

use super::app::{ClipAction, Message, TrackAction};

fn toggle<'a>(label: &'a str, active: bool, message: Message) -> Element<'a, Message> {
    let style = if active { button::primary } else { button::secondary };
    button(text(label).size(11)).style(style).on_press(message).into()
}

fn clip_row(clip: &AudioClip, playhead: f64) -> Element<'_, Message> {
    let id = clip.id.clone();
    let action = move |action: ClipAction| Message::Clip(id.clone(), action);
    let under_playhead = playhead > clip.start_time && playhead < clip.end_time();

    row![
        text(format!("{} ({:.1}s - {:.1}s)", clip.name, clip.start_time, clip.end_time()))
            .size(11)
            .color(theme::VALUE_TEXT),
        Space::new().width(Fill),
        button(text("Split").size(10)).on_press_maybe(under_playhead.then(|| action(ClipAction::SplitAtPlayhead))),
        button(text("½x").size(10)).on_press(action(ClipAction::Stretch(50.0))),
        button(text("2x").size(10)).on_press(action(ClipAction::Stretch(200.0))),
        button(text("Remove").size(10)).on_press(action(ClipAction::Remove)),
    ]
    .spacing(4)
    .align_y(Center)
    .into()
}

fn track_row<'a>(arrangement: &'a Arrangement, track: &'a Track, playhead: f64) -> Element<'a, Message> {
    let id = track.id.clone();
    let msg = move |action: TrackAction| Message::Track(id.clone(), action);
    let volume_msg = msg.clone();
    let pan_msg = msg.clone();

    let audible = if arrangement.is_audible(&track.id) { "●" } else { "○" };

    let controls = row![
        text(format!("{audible} {}", track.name)).size(13),
        Space::new().width(Fill),
        toggle("M", track.muted, msg(TrackAction::ToggleMute)),
        toggle("S", track.solo, msg(TrackAction::ToggleSolo)),
        toggle("R", track.armed, msg(TrackAction::ToggleArm)),
    ]
    .spacing(4)
    .align_y(Center);

    let mixer = row![
        text(format!("Vol {}", track.volume)).size(11).color(theme::LABEL),
        slider(VOLUME_MIN as f32..=VOLUME_MAX as f32, track.volume as f32, move |v| {
            volume_msg(TrackAction::SetVolume(v))
        })
        .width(120),
        text(format!("Pan {:+}", track.pan)).size(11).color(theme::LABEL),
        slider(PAN_MIN as f32..=PAN_MAX as f32, track.pan as f32, move |v| pan_msg(TrackAction::SetPan(v)))
            .width(100),
    ]
    .spacing(6)
    .align_y(Center);

    let clips = track
        .clips
        .iter()
        .fold(Column::new().spacing(2), |clips, clip| clips.push(clip_row(clip, playhead)));

    container(column![controls, mixer, clips].spacing(4))
        .padding(6)
        .width(Fill)
        .style(|_| container::Style {
            background: Some(theme::to_color(theme::KNOB_BODY).into()),
            ..Default::default()
        })
        .into()
}

pub fn track_list(arrangement: &Arrangement, playhead: f64) -> Element<'_, Message> {
    arrangement
        .tracks()
        .iter()
        .fold(column![text("Tracks").size(16)].spacing(6), |list, track| {
            list.push(track_row(arrangement, track, playhead))
        })
        .into()
}
