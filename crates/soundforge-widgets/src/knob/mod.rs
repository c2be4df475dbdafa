//! Rotary knob control
//!
//! A bounded value driven by vertical drags: dragging up increases it,
//! the full range spans [`DEFAULT_DRAG_RANGE`] pixels of travel.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In your app state
//! let mut knob = Knob::new(0.0, 100.0, 50.0);
//!
//! // In your view function
//! knob.view(|event| Message::Knob(event))
//!
//! // In your update function
//! if let Some(value) = knob.handle_event(event) {
//!     // Value changed
//! }
//! ```

pub mod render;

use iced::widget::image::Handle;
use iced::widget::{canvas, image, stack};
use iced::{mouse, Element, Length};

pub use render::{arc_color, compass_degrees, render_knob, ARC_SPAN_DEGREES, ARC_START_DEGREES};

use crate::pointer::{PointerEvent, PointerLayer};

/// Pixels of vertical travel that cover the whole range
pub const DEFAULT_DRAG_RANGE: f32 = 200.0;

/// Default knob diameter in pixels
pub const DEFAULT_SIZE: u32 = 64;

/// Pointer input for a knob, reduced to the vertical axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobEvent {
    /// Button pressed at widget-local y
    Pressed(f32),
    /// Pointer moved to y (continues outside the widget while held)
    Moved(f32),
    Released,
}

impl From<PointerEvent> for KnobEvent {
    fn from(event: PointerEvent) -> Self {
        match event {
            PointerEvent::Pressed { position, .. } => KnobEvent::Pressed(position.y),
            PointerEvent::Dragged { position, .. } => KnobEvent::Moved(position.y),
            PointerEvent::Released { .. } => KnobEvent::Released,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_y: f32,
    start_value: f32,
}

#[derive(Debug, Clone)]
pub struct Knob {
    min: f32,
    max: f32,
    value: f32,
    drag_range: f32,
    size: u32,
    drag: Option<Drag>,
    handle: Handle,
}

impl Knob {
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        let mut knob = Self {
            min,
            max,
            value: min,
            drag_range: DEFAULT_DRAG_RANGE,
            size: DEFAULT_SIZE,
            drag: None,
            handle: Handle::from_rgba(1, 1, vec![0; 4]),
        };
        knob.value = knob.clamp(value);
        knob.redraw();
        knob
    }

    /// Change the pixel travel for the full range
    pub fn with_drag_range(mut self, pixels: f32) -> Self {
        if pixels > 0.0 {
            self.drag_range = pixels;
        }
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(8);
        self.redraw();
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the value programmatically (clamped, non-finite values ignored)
    pub fn set_value(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        let value = self.clamp(value);
        if value != self.value {
            self.value = value;
            self.redraw();
        }
    }

    /// Position in the range, 0.0 for a degenerate range
    pub fn normalized(&self) -> f32 {
        if !self.has_range() {
            return 0.0;
        }
        (self.value - self.min) / (self.max - self.min)
    }

    /// Indicator angle from twelve o'clock, -135 to 135
    pub fn rotation_degrees(&self) -> f32 {
        self.normalized() * ARC_SPAN_DEGREES - 135.0
    }

    /// Filled part of the arc, 0 to 270
    pub fn sweep_degrees(&self) -> f32 {
        self.normalized() * ARC_SPAN_DEGREES
    }

    /// Value change per pixel of drag
    pub fn sensitivity(&self) -> f32 {
        (self.max - self.min).max(0.0) / self.drag_range
    }

    /// Handle a knob event and return the new value while dragging
    ///
    /// Every move during a drag reports the value, changed or not.
    pub fn handle_event(&mut self, event: KnobEvent) -> Option<f32> {
        match event {
            KnobEvent::Pressed(y) => {
                self.drag = Some(Drag {
                    start_y: y,
                    start_value: self.value,
                });
                None
            }
            KnobEvent::Moved(y) => {
                let drag = self.drag?;
                // Up is positive
                let delta = drag.start_y - y;
                self.set_value(drag.start_value + delta * self.sensitivity());
                Some(self.value)
            }
            KnobEvent::Released => {
                self.drag = None;
                None
            }
        }
    }

    /// Create the view element for this knob
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        on_event: impl Fn(KnobEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        let side = Length::Fixed(self.size as f32);
        let raster = image(self.handle.clone()).width(side).height(side);
        let pointer = canvas(PointerLayer {
            on_event: move |event: PointerEvent| Some(on_event(event.into())),
            cursor: mouse::Interaction::ResizingVertically,
        })
        .width(side)
        .height(side);

        stack![raster, pointer].into()
    }

    fn clamp(&self, value: f32) -> f32 {
        if !self.has_range() || value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// False for empty, inverted or NaN bounds (f32::clamp panics on those)
    fn has_range(&self) -> bool {
        self.max > self.min
    }

    fn redraw(&mut self) {
        self.handle = render_knob(self.size, self.sweep_degrees(), self.rotation_degrees()).to_handle();
    }
}
