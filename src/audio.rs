//! Background music control
//!
//! Playback itself belongs to the host. The core only decides when the
//! looped track should be running and forwards that to a `MusicBackend`.

/// Host-provided music playback
pub trait MusicBackend {
    fn start(&mut self, volume: f32);
    fn stop(&mut self);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl MusicBackend for LogBackend {
    fn start(&mut self, volume: f32) {
        log::info!("Music started (volume {volume:.2})");
    }

    fn stop(&mut self) {
        log::info!("Music stopped");
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn MusicBackend>,
    master_volume: f32,
    enabled: bool,
    playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogBackend))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn MusicBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            enabled: true,
            playing: false,
        }
    }

    /// Set master volume (0.0 - 1.0); restarts the track if it is playing
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        if self.playing {
            self.backend.start(self.master_volume);
        }
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Turn music on or off, starting or stopping playback to match
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.play();
        } else {
            self.stop();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start the track if enabled and not already running
    pub fn play(&mut self) {
        if !self.enabled || self.playing {
            return;
        }
        self.backend.start(self.master_volume);
        self.playing = true;
    }

    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.backend.stop();
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records backend calls
    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl MusicBackend for Recorder {
        fn start(&mut self, _volume: f32) {
            self.0.borrow_mut().push("start");
        }

        fn stop(&mut self) {
            self.0.borrow_mut().push("stop");
        }
    }

    #[test]
    fn test_toggle_starts_and_stops_once() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));

        audio.play();
        audio.play();
        audio.set_enabled(false);
        audio.set_enabled(false);
        audio.play();
        audio.set_enabled(true);

        assert_eq!(*recorder.0.borrow(), vec!["start", "stop", "start"]);
        assert!(audio.is_playing());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::default();
        audio.set_master_volume(3.0);
        assert_eq!(audio.master_volume(), 1.0);
        audio.set_master_volume(-1.0);
        assert_eq!(audio.master_volume(), 0.0);
    }
}
