//! Header: transport controls, time readout and view mode

use iced::widget::{button, row, text, Row, Space};
use iced::{Center, Element, Fill};
use soundforge_core::transport::Transport;
use soundforge_widgets::theme;

use super::app::Message;
use super::editor_view::ViewMode;

pub fn transport_bar(transport: &Transport, view_mode: ViewMode) -> Element<'_, Message> {
    let title = text("SOUNDFORGE STUDIO").size(22);

    let play_label = if transport.is_playing() { "Pause" } else { "Play" };
    let controls = row![
        button(text(play_label).size(13)).on_press(Message::TogglePlay),
        button(text("Stop").size(13)).on_press(Message::Stop),
    ]
    .spacing(4);

    let time = text(transport.display_time()).size(20);
    let position = text(format!(
        "{:.1} / {:.0}s  |  beat {:.2}  |  {:.0} BPM",
        transport.position(),
        transport.loop_length(),
        transport.position_beats(),
        transport.bpm()
    ))
    .size(12)
    .color(theme::LABEL);

    let modes = ViewMode::ALL.iter().fold(Row::new().spacing(2), |modes, &mode| {
        let style = if mode == view_mode { button::primary } else { button::secondary };
        modes.push(
            button(text(mode.label()).size(12))
                .style(style)
                .on_press(Message::SetViewMode(mode)),
        )
    });

    row![
        title,
        Space::new().width(Fill),
        controls,
        time,
        position,
        Space::new().width(Fill),
        modes,
    ]
    .spacing(16)
    .align_y(Center)
    .padding(6)
    .into()
}
