use std::path::Path;

use crate::audio::{MusicPlayer, SilentPlayer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::runner;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Run {
        pomodoro,
        music,
        volume,
    } = cmd
    else {
        return Ok(());
    };

    let mut player = SilentPlayer::new();

    // CLI flags win over the config file; a bad track or volume only
    // disables music, never the session itself.
    let volume = volume.unwrap_or(cfg.volume);
    if let Err(e) = player.set_volume(volume) {
        messages::error(e);
    }
    let track = music.as_ref().or(cfg.music_track.as_ref());
    if let Some(track) = track
        && let Err(e) = player.load(&expand_tilde(track))
    {
        messages::error(e);
    }

    runner::run_session(Path::new(&cfg.log_file), *pomodoro, &mut player)
}
