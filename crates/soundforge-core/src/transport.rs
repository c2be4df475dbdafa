//! Simulated playback clock
//!
//! There is no audio engine behind the transport: a periodic tick from the
//! UI advances the position by a fixed step and wraps at the loop length.

use crate::config::TransportConfig;

/// Playback state
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    playing: bool,
    /// Current position in seconds
    position: f64,
    loop_length: f64,
    step: f64,
    bpm: f64,
}

impl Transport {
    pub fn new(config: &TransportConfig) -> Self {
        Self {
            playing: false,
            position: 0.0,
            loop_length: config.loop_length_secs.max(f64::EPSILON),
            step: config.step_secs.max(0.0),
            bpm: config.bpm,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn loop_length(&self) -> f64 {
        self.loop_length
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Position as a fraction of the loop (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        self.position / self.loop_length
    }

    /// Position in beats at the transport tempo
    pub fn position_beats(&self) -> f64 {
        self.position * self.bpm / 60.0
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        log::debug!("transport: {}", if self.playing { "play" } else { "pause" });
    }

    /// Stop and return to the start
    pub fn stop(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    /// Move the playhead, wrapping into the loop
    pub fn seek(&mut self, seconds: f64) {
        self.position = seconds.rem_euclid(self.loop_length);
    }

    /// Advance one step if playing
    pub fn tick(&mut self) {
        if self.playing {
            self.position = (self.position + self.step) % self.loop_length;
        }
    }

    /// `m:ss.s` display of the current position
    pub fn display_time(&self) -> String {
        let minutes = (self.position / 60.0).floor() as u64;
        let seconds = self.position % 60.0;
        format!("{}:{:04.1}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Transport {
        Transport::new(&TransportConfig::default())
    }

    #[test]
    fn test_tick_only_while_playing() {
        let mut t = transport();
        t.tick();
        assert_eq!(t.position(), 0.0);
        t.toggle_play();
        t.tick();
        t.tick();
        assert!((t.position() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_wraps_at_loop_length() {
        let mut t = transport();
        t.seek(63.95);
        t.toggle_play();
        t.tick();
        assert!(t.position() < 0.1);
    }

    #[test]
    fn test_stop_rewinds() {
        let mut t = transport();
        t.toggle_play();
        t.tick();
        t.stop();
        assert!(!t.is_playing());
        assert_eq!(t.position(), 0.0);
    }

    #[test]
    fn test_seek_wraps_negative() {
        let mut t = transport();
        t.seek(-1.0);
        assert_eq!(t.position(), 63.0);
    }

    #[test]
    fn test_display_time() {
        let mut t = transport();
        t.seek(5.3);
        assert_eq!(t.display_time(), "0:05.3");
        t.seek(61.5);
        assert_eq!(t.display_time(), "1:01.5");
    }

    #[test]
    fn test_position_beats() {
        let mut t = transport();
        t.seek(2.0);
        assert_eq!(t.position_beats(), 4.0);
    }
}
