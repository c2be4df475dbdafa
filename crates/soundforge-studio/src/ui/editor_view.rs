//! Sample editor section: waveform and/or spectrogram with edit tools

use iced::widget::{button, column, row, slider, text, Space};
use iced::{Center, Element, Fill};
use soundforge_core::config::EnvelopeStyle;
use soundforge_widgets::waveform::{MAX_ZOOM, MIN_ZOOM};
use soundforge_widgets::{spectrogram_view, theme, waveform_view, SpectrogramState, WaveformEvent, WaveformState};

use super::app::Message;

/// Which displays the sample editor shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Waveform,
    Spectrogram,
    Both,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Waveform, ViewMode::Spectrogram, ViewMode::Both];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Waveform => "Waveform",
            ViewMode::Spectrogram => "Spectrogram",
            ViewMode::Both => "Both",
        }
    }

    pub fn shows_waveform(&self) -> bool {
        matches!(self, ViewMode::Waveform | ViewMode::Both)
    }

    pub fn shows_spectrogram(&self) -> bool {
        matches!(self, ViewMode::Spectrogram | ViewMode::Both)
    }
}

fn tool_button(label: &str, message: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(12)).on_press_maybe(message).into()
}

pub fn editor_view<'a>(
    waveform: &'a WaveformState,
    spectrogram: &'a SpectrogramState,
    mode: ViewMode,
) -> Element<'a, Message> {
    let has_selection = waveform.selection().is_some();
    let fade = |event: WaveformEvent| has_selection.then(|| Message::Waveform(event));

    let next_style = match waveform.style() {
        EnvelopeStyle::MinMax => EnvelopeStyle::MaxTrace,
        EnvelopeStyle::MaxTrace => EnvelopeStyle::MinMax,
    };
    let style_label = match waveform.style() {
        EnvelopeStyle::MinMax => "Min/Max",
        EnvelopeStyle::MaxTrace => "Peak Trace",
    };

    let toolbar = row![
        tool_button("Normalize", Some(Message::Waveform(WaveformEvent::Normalize))),
        tool_button("Reverse", Some(Message::Waveform(WaveformEvent::Reverse))),
        tool_button("Fade In", fade(WaveformEvent::FadeIn)),
        tool_button("Fade Out", fade(WaveformEvent::FadeOut)),
        tool_button("Clear Selection", fade(WaveformEvent::ClearSelection)),
        Space::new().width(Fill),
        tool_button(style_label, Some(Message::Waveform(WaveformEvent::SetStyle(next_style)))),
        text("Zoom").size(12).color(theme::LABEL),
        slider(MIN_ZOOM as f32..=MAX_ZOOM as f32, waveform.zoom() as f32, |zoom| {
            Message::Waveform(WaveformEvent::SetZoom(zoom.round() as u32))
        })
        .step(25.0)
        .width(160),
        tool_button("Regenerate", Some(Message::RegenerateSamples)),
    ]
    .spacing(6)
    .align_y(Center);

    let mut displays = column![].spacing(6);
    if mode.shows_waveform() {
        displays = displays.push(waveform_view(waveform, Message::Waveform));
    }
    if mode.shows_spectrogram() {
        displays = displays.push(spectrogram_view(spectrogram));
    }

    let selection = match waveform.selection() {
        Some(region) => format!("Selection: {}..={} ({} samples)", region.start, region.end, region.len()),
        None => "No selection".to_string(),
    };
    let info = text(format!(
        "Length: {} samples  |  Playhead: {}  |  {}  |  Zoom: {}%",
        waveform.samples().len(),
        waveform.playhead(),
        selection,
        waveform.zoom()
    ))
    .size(11)
    .color(theme::LABEL);

    column![toolbar, displays, info].spacing(8).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_visibility() {
        assert!(ViewMode::Waveform.shows_waveform());
        assert!(!ViewMode::Waveform.shows_spectrogram());
        assert!(ViewMode::Both.shows_waveform() && ViewMode::Both.shows_spectrogram());
        assert!(!ViewMode::Spectrogram.shows_waveform());
    }
}
