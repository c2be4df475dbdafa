//! Waveform view: cached raster under a pointer layer

use iced::widget::{canvas, image, stack};
use iced::{mouse, ContentFit, Element, Length};

use super::state::{WaveformEvent, WaveformState};
use crate::pointer::PointerLayer;

/// Create a waveform element
///
/// The raster is stretched to the available width; pointer positions are
/// reported relative to the displayed size, so clicks map onto samples
/// regardless of how wide the widget ends up.
pub fn waveform_view<'a, Message: Clone + 'a>(
    state: &'a WaveformState,
    on_event: impl Fn(WaveformEvent) -> Message + 'a,
) -> Element<'a, Message> {
    let height = Length::Fixed(state.height() as f32);

    let raster = image(state.handle().clone())
        .content_fit(ContentFit::Fill)
        .width(Length::Fill)
        .height(height);

    let pointer = canvas(PointerLayer {
        on_event: move |event| Some(on_event(WaveformEvent::Pointer(event))),
        cursor: mouse::Interaction::Crosshair,
    })
    .width(Length::Fill)
    .height(height);

    stack![raster, pointer].into()
}
