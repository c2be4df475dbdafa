//! Transparent canvas layer that turns mouse input into pointer events
//!
//! Stacked over a raster image, it reports positions in the widget's own
//! coordinates. Once a press starts inside the bounds, moves and the
//! release are reported even when the cursor leaves the widget, so drags
//! behave like global listeners for their duration.

use iced::widget::canvas::{self, Event, Geometry, Program};
use iced::{keyboard, mouse, Point, Rectangle, Size, Theme};

/// Pointer input in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Left button pressed inside the widget
    Pressed {
        position: Point,
        size: Size,
        /// Ctrl (or Cmd) held
        additive: bool,
    },
    /// Cursor moved while the button is held
    Dragged { position: Point, size: Size },
    /// Button released (anywhere)
    Released { position: Point, size: Size },
}

/// Per-widget interaction state kept by iced between events
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInteraction {
    pressed: bool,
    modifiers: keyboard::Modifiers,
}

/// Canvas program that draws nothing and publishes pointer events
///
/// `on_event` may return `None` to swallow an event.
pub struct PointerLayer<F> {
    pub on_event: F,
    pub cursor: mouse::Interaction,
}

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl<F> PointerLayer<F> {
    fn publish<Message>(&self, event: PointerEvent) -> Option<canvas::Action<Message>>
    where
        F: Fn(PointerEvent) -> Option<Message>,
    {
        (self.on_event)(event).map(canvas::Action::publish)
    }
}

impl<Message, F> Program<Message> for PointerLayer<F>
where
    Message: Clone,
    F: Fn(PointerEvent) -> Option<Message>,
{
    type State = PointerInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let size = bounds.size();

        match event {
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                interaction.modifiers = *modifiers;
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                interaction.pressed = true;
                let additive = interaction.modifiers.command();
                self.publish(PointerEvent::Pressed {
                    position,
                    size,
                    additive,
                })
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if interaction.pressed => {
                let position = local(*position, bounds);
                self.publish(PointerEvent::Dragged { position, size })
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if interaction.pressed => {
                interaction.pressed = false;
                let position = cursor
                    .position()
                    .map(|p| local(p, bounds))
                    .unwrap_or(Point::ORIGIN);
                self.publish(PointerEvent::Released { position, size })
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.pressed || cursor.is_over(bounds) {
            self.cursor
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        _renderer: &iced::Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }
}
