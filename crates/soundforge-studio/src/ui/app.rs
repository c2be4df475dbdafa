//! Main iced application for SoundForge Studio
//!
//! Owns every editor model and routes messages to them. Rejected edits
//! are captured into an [`ErrorReport`] and replace the editor body with a
//! fallback panel until the user retries or resets.

use std::time::Duration;

use iced::time;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Fill, Length, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use soundforge_core::arrangement::Arrangement;
use soundforge_core::config::StudioConfig;
use soundforge_core::effect::{EffectKind, EffectParam, EffectsRack};
use soundforge_core::notes::{ClickOutcome, NoteEdit, PianoRoll};
use soundforge_core::transport::Transport;
use soundforge_core::EditResult;
use soundforge_widgets::{error_panel, theme, ErrorReport, Knob, KnobEvent, PianoRollState, SpectrogramState, WaveformEvent, WaveformState};

use super::editor_view::{editor_view, ViewMode};
use super::effects_panel::effects_panel;
use super::piano_roll_panel::piano_roll_panel;
use super::track_list::track_list;
use super::transport_bar::transport_bar;

/// Track-level actions
#[derive(Debug, Clone, PartialEq)]
pub enum TrackAction {
    ToggleMute,
    ToggleSolo,
    ToggleArm,
    SetVolume(f32),
    SetPan(f32),
}

/// Clip-level actions
#[derive(Debug, Clone, PartialEq)]
pub enum ClipAction {
    /// Split at the transport position
    SplitAtPlayhead,
    /// Scale duration by a percentage
    Stretch(f64),
    Remove,
}

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Transport clock tick (only subscribed while playing)
    Tick,
    TogglePlay,
    Stop,
    SetViewMode(ViewMode),
    /// Waveform pointer input and sample edits
    Waveform(WaveformEvent),
    /// Replace the waveform and spectrogram with fresh random data
    RegenerateSamples,
    PianoRoll(NoteEdit),
    SelectEffect(EffectKind),
    ToggleEffect(EffectKind),
    ResetEffect(EffectKind),
    /// Knob input for the parameter at this index of the selected effect
    EffectKnob(usize, KnobEvent),
    Track(String, TrackAction),
    Clip(String, ClipAction),
    /// Dismiss the error panel and show the editor again
    DismissError,
    /// Dismiss the error panel and rebuild all editor state
    ResetEditor,
}

/// Application state
pub struct StudioApp {
    config: StudioConfig,
    rng: StdRng,
    transport: Transport,
    view_mode: ViewMode,
    waveform: WaveformState,
    spectrogram: SpectrogramState,
    piano_roll: PianoRollState,
    rack: EffectsRack,
    selected_effect: EffectKind,
    /// Knobs for the selected effect, in parameter order
    effect_knobs: Vec<(EffectParam, Knob)>,
    arrangement: Arrangement,
    /// Last captured error; while set the editor body shows the fallback panel
    error: Option<ErrorReport>,
    status: String,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new(config: StudioConfig) -> Self {
        let mut rng = StdRng::from_entropy();
        let waveform = WaveformState::random(&config.waveform, &mut rng);
        let spectrogram = SpectrogramState::random(&config.spectrogram, &mut rng);
        let piano_roll = PianoRollState::new(
            PianoRoll::with_demo_notes(&config.piano_roll),
            config.piano_roll.note_height,
        );
        let arrangement = Arrangement::demo(&mut rng);

        let mut app = Self {
            transport: Transport::new(&config.transport),
            view_mode: ViewMode::default(),
            waveform,
            spectrogram,
            piano_roll,
            rack: EffectsRack::default(),
            selected_effect: EffectKind::Reverb,
            effect_knobs: Vec::new(),
            arrangement,
            error: None,
            status: "Ready".to_string(),
            config,
            rng,
        };
        app.rebuild_knobs();
        log::info!(
            "Studio ready: {} samples, {} notes, {} tracks",
            app.waveform.samples().len(),
            app.piano_roll.roll().notes().len(),
            app.arrangement.tracks().len()
        );
        app
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.transport.tick();
                self.sync_playhead();
            }
            Message::TogglePlay => {
                self.transport.toggle_play();
            }
            Message::Stop => {
                self.transport.stop();
                self.sync_playhead();
            }
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
            }
            Message::Waveform(event) => {
                let result = self.waveform.update(event);
                self.check(result);
            }
            Message::RegenerateSamples => {
                self.waveform = WaveformState::random(&self.config.waveform, &mut self.rng);
                self.spectrogram = SpectrogramState::random(&self.config.spectrogram, &mut self.rng);
                self.status = "Generated new sample data".to_string();
            }
            Message::PianoRoll(edit) => {
                let result = self.piano_roll.apply(edit, &mut self.rng);
                if let Some(outcome) = self.check(result) {
                    self.describe_outcome(outcome);
                }
            }
            Message::SelectEffect(kind) => {
                self.selected_effect = kind;
                self.rebuild_knobs();
            }
            Message::ToggleEffect(kind) => {
                let result = self.rack.toggle(kind);
                if let Some(enabled) = self.check(result) {
                    self.status = format!("{} {}", kind.name(), if enabled { "enabled" } else { "bypassed" });
                }
            }
            Message::ResetEffect(kind) => {
                let result = self.rack.reset(kind);
                self.check(result);
                self.rebuild_knobs();
            }
            Message::EffectKnob(index, event) => {
                let changed = self
                    .effect_knobs
                    .get_mut(index)
                    .and_then(|(param, knob)| knob.handle_event(event).map(|value| (*param, value)));
                if let Some((param, value)) = changed {
                    let result = self.rack.set(self.selected_effect, param, value);
                    self.check(result);
                }
            }
            Message::Track(track_id, action) => self.update_track(&track_id, action),
            Message::Clip(clip_id, action) => self.update_clip(&clip_id, action),
            Message::DismissError => {
                self.error = None;
            }
            Message::ResetEditor => {
                let config = self.config.clone();
                *self = Self::new(config);
                self.status = "Editor reset".to_string();
            }
        }
        Task::none()
    }

    fn update_track(&mut self, track_id: &str, action: TrackAction) {
        let result = match action {
            TrackAction::ToggleMute => self.arrangement.toggle_mute(track_id).map(drop),
            TrackAction::ToggleSolo => self.arrangement.toggle_solo(track_id).map(drop),
            TrackAction::ToggleArm => self.arrangement.toggle_arm(track_id).map(drop),
            TrackAction::SetVolume(volume) => self.arrangement.set_volume(track_id, volume.round() as i32).map(drop),
            TrackAction::SetPan(pan) => self.arrangement.set_pan(track_id, pan.round() as i32).map(drop),
        };
        self.check(result);
    }

    fn update_clip(&mut self, clip_id: &str, action: ClipAction) {
        match action {
            ClipAction::SplitAtPlayhead => {
                let result = self.arrangement.split_clip(clip_id, self.transport.position());
                if let Some(new_id) = self.check(result) {
                    self.status = format!("Split {} -> {}", clip_id, new_id);
                }
            }
            ClipAction::Stretch(ratio) => {
                let result = self.arrangement.stretch_clip(clip_id, ratio);
                if let Some(duration) = self.check(result) {
                    self.status = format!("{} now {:.2}s", clip_id, duration);
                }
            }
            ClipAction::Remove => {
                let result = self.arrangement.remove_clip(clip_id);
                if let Some(clip) = self.check(result) {
                    self.status = format!("Removed {}", clip.name);
                }
            }
        }
    }

    /// Capture an edit error into the fallback panel
    fn check<T>(&mut self, result: EditResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.error = Some(ErrorReport::capture(&e, &mut self.rng));
                None
            }
        }
    }

    fn describe_outcome(&mut self, outcome: ClickOutcome) {
        let roll = self.piano_roll.roll();
        self.status = match outcome {
            ClickOutcome::Inserted(id) => format!("Inserted note {}", id),
            ClickOutcome::Erased(id) => format!("Erased note {}", id),
            ClickOutcome::Selected(_) | ClickOutcome::Deselected(_) => {
                format!("{} note(s) selected", roll.selection().len())
            }
            ClickOutcome::Ignored => return,
        };
    }

    /// Move the waveform playhead to the transport position
    fn sync_playhead(&mut self) {
        let len = self.waveform.samples().len();
        if len > 0 {
            let index = (self.transport.progress() * len as f64) as usize;
            self.waveform.set_playhead(index);
        }
    }

    fn rebuild_knobs(&mut self) {
        let Some(effect) = self.rack.effect(self.selected_effect) else {
            self.effect_knobs.clear();
            return;
        };
        let knob_config = &self.config.knob;
        self.effect_knobs = effect
            .params()
            .map(|(spec, value)| {
                let knob = Knob::new(spec.min, spec.max, value)
                    .with_drag_range(knob_config.drag_range_px)
                    .with_size(knob_config.size);
                (spec.param, knob)
            })
            .collect();
    }

    /// Subscription: transport ticks while playing
    pub fn subscription(&self) -> Subscription<Message> {
        if self.transport.is_playing() {
            time::every(Duration::from_millis(self.config.transport.tick_ms.max(1))).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = transport_bar(&self.transport, self.view_mode);

        let body: Element<'_, Message> = match &self.error {
            Some(report) => error_panel(report, Message::DismissError, Message::ResetEditor),
            None => {
                // Left: sample editor + piano roll | Right: effects + tracks
                let left_column = column![
                    editor_view(&self.waveform, &self.spectrogram, self.view_mode),
                    piano_roll_panel(&self.piano_roll),
                ]
                .spacing(12)
                .width(Length::FillPortion(3));

                let right_column = column![
                    effects_panel(&self.rack, self.selected_effect, &self.effect_knobs),
                    track_list(&self.arrangement, self.transport.position()),
                ]
                .spacing(12)
                .width(Length::FillPortion(2));

                scrollable(row![left_column, right_column].spacing(12)).height(Fill).into()
            }
        };

        // Status bar
        let status_bar = container(text(&self.status).size(12).color(theme::LABEL)).padding(5);

        let content = column![header, body, status_bar].spacing(10).padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
