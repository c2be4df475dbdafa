use iced::widget::image;
use iced::{ContentFit, Element, Length};

use super::state::SpectrogramState;

/// Spectrogram element stretched to the available width
pub fn spectrogram_view<'a, Message: 'a>(state: &'a SpectrogramState) -> Element<'a, Message> {
    image(state.handle().clone())
        .content_fit(ContentFit::Fill)
        .width(Length::Fill)
        .height(Length::Fixed(state.height() as f32))
        .into()
}
