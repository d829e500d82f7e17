//! Playback seam for Pomodoro background music.
//!
//! Playback itself is an external collaborator; the crate only fixes the
//! contract and drives it around session start/stop. The built-in backend is
//! silent, so `--music` exercises the full load/play/stop cycle without
//! linking an audio stack. Playback failures are reported and never affect
//! the timer.

use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

pub trait MusicPlayer {
    fn load(&mut self, path: &Path) -> AppResult<()>;
    fn set_volume(&mut self, volume: f64) -> AppResult<()>;
    fn play(&mut self, looped: bool) -> AppResult<()>;
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Default backend: validates the track path and tracks playback state but
/// produces no sound.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    track: Option<PathBuf>,
    volume: f64,
    playing: bool,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self {
            track: None,
            volume: 0.5,
            playing: false,
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn track(&self) -> Option<&Path> {
        self.track.as_deref()
    }
}

impl MusicPlayer for SilentPlayer {
    fn load(&mut self, path: &Path) -> AppResult<()> {
        if !path.is_file() {
            return Err(AppError::AudioLoad(format!(
                "no such file: {}",
                path.display()
            )));
        }
        self.track = Some(path.to_path_buf());
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> AppResult<()> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(AppError::AudioInit(format!(
                "volume out of range: {}",
                volume
            )));
        }
        self.volume = volume;
        Ok(())
    }

    fn play(&mut self, _looped: bool) -> AppResult<()> {
        if self.track.is_none() {
            return Err(AppError::AudioPlayback("no track loaded".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
