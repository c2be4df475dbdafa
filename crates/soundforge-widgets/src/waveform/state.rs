//! Waveform editor state
//!
//! Owns the sample buffer together with the view parameters (zoom,
//! playhead, selection) and a cached raster of the last render. Every
//! mutation goes through [`WaveformState::update`], which re-renders the
//! raster when anything visible changed.

use iced::widget::image::Handle;
use iced::Point;
use rand::Rng;
use soundforge_core::config::{EnvelopeStyle, WaveformConfig};
use soundforge_core::sample::SampleArray;
use soundforge_core::{EditResult, Region};

use super::render::{render_waveform, ViewWindow, WaveformScene};
use crate::pointer::PointerEvent;

/// Raster width the waveform is rendered at (the image widget scales it)
pub const RENDER_WIDTH: u32 = 1200;

/// Zoom bounds in percent
pub const MIN_ZOOM: u32 = 100;
pub const MAX_ZOOM: u32 = 800;

/// Pixels the pointer must travel before a press becomes a selection drag
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Messages handled by the waveform editor
#[derive(Debug, Clone, PartialEq)]
pub enum WaveformEvent {
    Pointer(PointerEvent),
    Normalize,
    Reverse,
    /// Fade in over the current selection (no-op without one)
    FadeIn,
    /// Fade out over the current selection (no-op without one)
    FadeOut,
    SetZoom(u32),
    ClearSelection,
    SetStyle(EnvelopeStyle),
}

/// In-progress press on the waveform
#[derive(Debug, Clone, Copy)]
struct DragState {
    origin: Point,
    anchor: usize,
    selecting: bool,
    /// Window at press time; pointer positions map through it until release
    window: ViewWindow,
}

#[derive(Debug, Clone)]
pub struct WaveformState {
    samples: SampleArray,
    playhead: usize,
    selection: Option<Region>,
    zoom: u32,
    style: EnvelopeStyle,
    grid_lines: u32,
    height: u32,
    drag: Option<DragState>,
    handle: Handle,
}

impl WaveformState {
    pub fn new(samples: SampleArray, config: &WaveformConfig) -> Self {
        let mut state = Self {
            samples,
            playhead: 0,
            selection: None,
            zoom: MIN_ZOOM,
            style: config.envelope,
            grid_lines: config.grid_lines,
            height: config.height.max(1),
            drag: None,
            handle: Handle::from_rgba(1, 1, vec![0; 4]),
        };
        state.redraw();
        state
    }

    /// Fresh random buffer sized from the config
    pub fn random<R: Rng + ?Sized>(config: &WaveformConfig, rng: &mut R) -> Self {
        Self::new(SampleArray::random(config.sample_count, rng), config)
    }

    pub fn samples(&self) -> &SampleArray {
        &self.samples
    }

    pub fn playhead(&self) -> usize {
        self.playhead
    }

    pub fn selection(&self) -> Option<Region> {
        self.selection
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn style(&self) -> EnvelopeStyle {
        self.style
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cached raster of the current state
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Sample range currently on screen
    ///
    /// The whole buffer at 100%; above that, `len * 100 / zoom` samples
    /// centred on the playhead and clamped to the buffer. While a press is
    /// held the window stays where it was when the press started.
    pub fn visible_window(&self) -> ViewWindow {
        if let Some(drag) = self.drag {
            return drag.window;
        }
        let len = self.samples.len();
        if self.zoom <= MIN_ZOOM || len == 0 {
            return ViewWindow::full(len);
        }
        let span = (len * MIN_ZOOM as usize / self.zoom as usize).max(1);
        let start = self.playhead.saturating_sub(span / 2).min(len - span);
        ViewWindow { start, end: start + span }
    }

    /// Sample index under a widget-local x for a widget of the given width
    pub fn sample_at(&self, x: f32, width: f32) -> usize {
        self.visible_window().x_to_index(x, width)
    }

    /// Move the playhead (clamped to the buffer)
    pub fn set_playhead(&mut self, index: usize) {
        let clamped = index.min(self.samples.len().saturating_sub(1));
        if clamped != self.playhead {
            self.playhead = clamped;
            self.redraw();
        }
    }

    pub fn update(&mut self, event: WaveformEvent) -> EditResult<()> {
        match event {
            WaveformEvent::Pointer(pointer) => {
                self.handle_pointer(pointer);
                return Ok(());
            }
            WaveformEvent::Normalize => {
                self.samples.normalize();
            }
            WaveformEvent::Reverse => {
                self.samples.reverse();
                log::info!("Waveform reversed");
            }
            WaveformEvent::FadeIn => {
                let Some(region) = self.selection else {
                    return Ok(());
                };
                self.samples.fade_in(region)?;
                log::info!("Fade in over {}..={}", region.start, region.end);
            }
            WaveformEvent::FadeOut => {
                let Some(region) = self.selection else {
                    return Ok(());
                };
                self.samples.fade_out(region)?;
                log::info!("Fade out over {}..={}", region.start, region.end);
            }
            WaveformEvent::SetZoom(zoom) => {
                self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
            }
            WaveformEvent::ClearSelection => {
                self.selection = None;
            }
            WaveformEvent::SetStyle(style) => {
                self.style = style;
            }
        }
        self.redraw();
        Ok(())
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed { position, size, .. } => {
                let window = self.visible_window();
                let index = window.x_to_index(position.x, size.width);
                self.drag = Some(DragState {
                    origin: position,
                    anchor: index,
                    selecting: false,
                    window,
                });
                self.playhead = index;
                self.redraw();
            }
            PointerEvent::Dragged { position, size } => {
                let Some(drag) = self.drag.as_mut() else {
                    return;
                };
                let index = drag.window.x_to_index(position.x, size.width);
                if !drag.selecting && (position.x - drag.origin.x).abs() < DRAG_THRESHOLD {
                    return;
                }
                drag.selecting = true;
                self.selection = Some(Region::new(drag.anchor, index));
                self.redraw();
            }
            PointerEvent::Released { .. } => {
                if let Some(drag) = self.drag.take() {
                    if drag.selecting {
                        if let Some(region) = self.selection {
                            log::debug!("Selection {}..={} ({} samples)", region.start, region.end, region.len());
                        }
                    }
                    // Window recentres on the new playhead
                    self.redraw();
                }
            }
        }
    }

    fn redraw(&mut self) {
        let scene = WaveformScene {
            samples: self.samples.as_slice(),
            window: self.visible_window(),
            selection: self.selection,
            playhead: self.playhead,
            style: self.style,
            grid_lines: self.grid_lines,
        };
        self.handle = render_waveform(&scene, RENDER_WIDTH, self.height).to_handle();
    }
}
