//! Tracks and audio clips on the arrangement timeline
//!
//! Times are in seconds. Clip waveforms are display-only amplitude
//! summaries (0..1), not audio.

use rand::Rng;

use crate::error::{EditError, EditResult};
use crate::types::{PAN_MAX, PAN_MIN, VOLUME_MAX, VOLUME_MIN};

/// An audio clip placed on a track
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub id: String,
    pub name: String,
    /// Start position in seconds
    pub start_time: f64,
    /// Length in seconds
    pub duration: f64,
    pub track_id: String,
    /// Color tag used by the timeline view
    pub color: String,
    /// Display waveform (one amplitude per column)
    pub waveform: Vec<f32>,
}

impl AudioClip {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}

/// A mixer track with its clips
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Volume in percent (0-100)
    pub volume: u8,
    /// Pan (-50 left .. 50 right)
    pub pan: i8,
    pub muted: bool,
    pub solo: bool,
    pub armed: bool,
    pub clips: Vec<AudioClip>,
}

impl Track {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            volume: 75,
            pan: 0,
            muted: false,
            solo: false,
            armed: false,
            clips: Vec::new(),
        }
    }
}

/// The ordered track list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    tracks: Vec<Track>,
}

impl Arrangement {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The four seed tracks shown in a fresh session
    pub fn demo<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut lead = Track::new("track-1", "Lead Synth", "primary");
        lead.clips.push(mock_clip("clip-1", "Synth Lead 1", 0.0, 8.0, &lead, 100, 0.1..0.9, rng));
        lead.clips.push(mock_clip("clip-2", "Synth Lead 2", 16.0, 12.0, &lead, 150, 0.2..0.8, rng));

        let mut bass = Track::new("track-2", "Bass Line", "accent");
        bass.volume = 80;
        bass.pan = -10;
        bass.clips.push(mock_clip("clip-3", "Bass Pattern", 4.0, 24.0, &bass, 300, 0.05..0.95, rng));

        let mut drums = Track::new("track-3", "Drums", "chart-3");
        drums.volume = 85;
        drums.armed = true;
        drums.clips.push(mock_clip("clip-4", "Drum Loop", 0.0, 32.0, &drums, 400, 0.0..1.0, rng));

        let mut vocals = Track::new("track-4", "Vocals", "chart-4");
        vocals.volume = 70;
        vocals.pan = 5;
        vocals.muted = true;

        Self::new(vec![lead, bass, drums, vocals])
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn clip(&self, clip_id: &str) -> Option<&AudioClip> {
        self.tracks
            .iter()
            .flat_map(|t| t.clips.iter())
            .find(|c| c.id == clip_id)
    }

    pub fn toggle_mute(&mut self, track_id: &str) -> EditResult<bool> {
        let track = self.track_mut(track_id)?;
        track.muted = !track.muted;
        Ok(track.muted)
    }

    pub fn toggle_solo(&mut self, track_id: &str) -> EditResult<bool> {
        let track = self.track_mut(track_id)?;
        track.solo = !track.solo;
        Ok(track.solo)
    }

    pub fn toggle_arm(&mut self, track_id: &str) -> EditResult<bool> {
        let track = self.track_mut(track_id)?;
        track.armed = !track.armed;
        Ok(track.armed)
    }

    /// Set volume, clamped to 0-100. Returns the stored value.
    pub fn set_volume(&mut self, track_id: &str, volume: i32) -> EditResult<u8> {
        let track = self.track_mut(track_id)?;
        track.volume = volume.clamp(VOLUME_MIN as i32, VOLUME_MAX as i32) as u8;
        Ok(track.volume)
    }

    /// Set pan, clamped to -50..50. Returns the stored value.
    pub fn set_pan(&mut self, track_id: &str, pan: i32) -> EditResult<i8> {
        let track = self.track_mut(track_id)?;
        track.pan = pan.clamp(PAN_MIN as i32, PAN_MAX as i32) as i8;
        Ok(track.pan)
    }

    /// Whether a track is audible given mute and solo state
    ///
    /// When any track is soloed only soloed tracks play.
    pub fn is_audible(&self, track_id: &str) -> bool {
        let any_solo = self.tracks.iter().any(|t| t.solo);
        self.track(track_id)
            .is_some_and(|t| !t.muted && (!any_solo || t.solo))
    }

    /// Split a clip at an absolute timeline position
    ///
    /// The first half keeps the original id; the second half gets
    /// `<id>_split`, with `_split` repeated until the id is unused.
    /// Returns the id of the new clip.
    pub fn split_clip(&mut self, clip_id: &str, position: f64) -> EditResult<String> {
        let (track_index, clip_index) = self.locate_clip(clip_id)?;
        let mut new_id = format!("{}_split", clip_id);
        while self.clip(&new_id).is_some() {
            new_id.push_str("_split");
        }

        let clips = &mut self.tracks[track_index].clips;
        let clip = &clips[clip_index];

        let split_point = position - clip.start_time;
        if split_point <= 0.0 || split_point >= clip.duration {
            return Err(EditError::SplitOutsideClip {
                clip_id: clip_id.to_string(),
                position,
            });
        }

        let mut tail = clip.clone();
        tail.id = new_id.clone();
        tail.start_time = position;
        tail.duration = clip.duration - split_point;

        clips[clip_index].duration = split_point;
        clips.insert(clip_index + 1, tail);

        log::info!("split clip {} at {:.2}s -> {}", clip_id, position, new_id);
        Ok(new_id)
    }

    /// Scale a clip's duration by `ratio_percent` (100 = unchanged)
    pub fn stretch_clip(&mut self, clip_id: &str, ratio_percent: f64) -> EditResult<f64> {
        if !(ratio_percent > 0.0 && ratio_percent.is_finite()) {
            return Err(EditError::InvalidStretchRatio(ratio_percent));
        }
        let (track_index, clip_index) = self.locate_clip(clip_id)?;
        let clip = &mut self.tracks[track_index].clips[clip_index];
        clip.duration *= ratio_percent / 100.0;
        log::info!("stretched clip {} by {}%", clip_id, ratio_percent);
        Ok(clip.duration)
    }

    pub fn remove_clip(&mut self, clip_id: &str) -> EditResult<AudioClip> {
        let (track_index, clip_index) = self.locate_clip(clip_id)?;
        Ok(self.tracks[track_index].clips.remove(clip_index))
    }

    fn track_mut(&mut self, track_id: &str) -> EditResult<&mut Track> {
        self.tracks
            .iter_mut()
            .find(|t| t.id == track_id)
            .ok_or_else(|| EditError::TrackNotFound(track_id.to_string()))
    }

    fn locate_clip(&self, clip_id: &str) -> EditResult<(usize, usize)> {
        self.tracks
            .iter()
            .enumerate()
            .find_map(|(ti, t)| t.clips.iter().position(|c| c.id == clip_id).map(|ci| (ti, ci)))
            .ok_or_else(|| EditError::ClipNotFound(clip_id.to_string()))
    }
}

#[allow(clippy::too_many_arguments)]
fn mock_clip<R: Rng + ?Sized>(
    id: &str,
    name: &str,
    start_time: f64,
    duration: f64,
    track: &Track,
    columns: usize,
    range: std::ops::Range<f32>,
    rng: &mut R,
) -> AudioClip {
    AudioClip {
        id: id.to_string(),
        name: name.to_string(),
        start_time,
        duration,
        track_id: track.id.clone(),
        color: track.color.clone(),
        waveform: (0..columns).map(|_| rng.gen_range(range.clone())).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn demo() -> Arrangement {
        Arrangement::demo(&mut StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_demo_layout() {
        let arrangement = demo();
        let names: Vec<&str> = arrangement.tracks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Lead Synth", "Bass Line", "Drums", "Vocals"]);
        assert_eq!(arrangement.clip("clip-4").unwrap().waveform.len(), 400);
        assert_eq!(arrangement.clip("clip-3").unwrap().track_id, "track-2");
        assert!(arrangement.track("track-4").unwrap().clips.is_empty());
    }

    #[test]
    fn test_toggles_and_clamps() {
        let mut arrangement = demo();
        assert!(!arrangement.toggle_mute("track-4").unwrap());
        assert!(arrangement.toggle_solo("track-1").unwrap());
        assert!(!arrangement.toggle_arm("track-3").unwrap());
        assert_eq!(arrangement.set_volume("track-1", 140).unwrap(), 100);
        assert_eq!(arrangement.set_volume("track-1", -5).unwrap(), 0);
        assert_eq!(arrangement.set_pan("track-2", -80).unwrap(), -50);
        assert_eq!(arrangement.set_pan("track-2", 12).unwrap(), 12);
        assert_eq!(
            arrangement.toggle_mute("nope"),
            Err(EditError::TrackNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_solo_controls_audibility() {
        let mut arrangement = demo();
        assert!(arrangement.is_audible("track-1"));
        assert!(!arrangement.is_audible("track-4"));
        arrangement.toggle_solo("track-2").unwrap();
        assert!(!arrangement.is_audible("track-1"));
        assert!(arrangement.is_audible("track-2"));
    }

    #[test]
    fn test_split_clip() {
        let mut arrangement = demo();
        let new_id = arrangement.split_clip("clip-2", 20.0).unwrap();
        assert_eq!(new_id, "clip-2_split");

        let head = arrangement.clip("clip-2").unwrap();
        assert_eq!((head.start_time, head.duration), (16.0, 4.0));
        let tail = arrangement.clip("clip-2_split").unwrap();
        assert_eq!((tail.start_time, tail.duration), (20.0, 8.0));
        assert_eq!(tail.end_time(), 28.0);

        let ids: Vec<&str> = arrangement.track("track-1").unwrap().clips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["clip-1", "clip-2", "clip-2_split"]);
    }

    #[test]
    fn test_split_twice_keeps_ids_unique() {
        let mut arrangement = demo();
        assert_eq!(arrangement.split_clip("clip-2", 20.0).unwrap(), "clip-2_split");
        assert_eq!(arrangement.split_clip("clip-2", 18.0).unwrap(), "clip-2_split_split");

        let ids: Vec<&str> = arrangement.track("track-1").unwrap().clips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["clip-1", "clip-2", "clip-2_split_split", "clip-2_split"]);

        let removed = arrangement.remove_clip("clip-2_split").unwrap();
        assert_eq!(removed.start_time, 20.0);
        let middle = arrangement.clip("clip-2_split_split").unwrap();
        assert_eq!((middle.start_time, middle.duration), (18.0, 2.0));
    }

    #[test]
    fn test_split_outside_clip_rejected() {
        let mut arrangement = demo();
        for position in [16.0, 28.0, 40.0, 3.0] {
            assert!(matches!(
                arrangement.split_clip("clip-2", position),
                Err(EditError::SplitOutsideClip { .. })
            ));
        }
        assert_eq!(arrangement.track("track-1").unwrap().clips.len(), 2);
    }

    #[test]
    fn test_stretch_clip() {
        let mut arrangement = demo();
        assert_eq!(arrangement.stretch_clip("clip-1", 150.0).unwrap(), 12.0);
        assert_eq!(
            arrangement.stretch_clip("clip-1", 0.0),
            Err(EditError::InvalidStretchRatio(0.0))
        );
        assert_eq!(
            arrangement.stretch_clip("missing", 100.0),
            Err(EditError::ClipNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_remove_clip() {
        let mut arrangement = demo();
        let removed = arrangement.remove_clip("clip-3").unwrap();
        assert_eq!(removed.name, "Bass Pattern");
        assert!(arrangement.clip("clip-3").is_none());
    }
}
