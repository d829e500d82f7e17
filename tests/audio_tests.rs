use std::path::Path;

use worklog::audio::{MusicPlayer, SilentPlayer};
use worklog::errors::AppError;

mod common;
use common::setup_test_log;

#[test]
fn load_rejects_missing_track() {
    let mut player = SilentPlayer::new();
    let err = player.load(Path::new("/no/such/track.mp3")).unwrap_err();
    assert!(matches!(err, AppError::AudioLoad(_)));
}

#[test]
fn volume_must_stay_in_range() {
    let mut player = SilentPlayer::new();
    assert!(player.set_volume(0.0).is_ok());
    assert!(player.set_volume(1.0).is_ok());
    assert!(matches!(
        player.set_volume(1.5).unwrap_err(),
        AppError::AudioInit(_)
    ));
    assert_eq!(player.volume(), 1.0);
}

#[test]
fn play_without_track_fails_and_never_reports_playing() {
    let mut player = SilentPlayer::new();
    assert!(matches!(
        player.play(true).unwrap_err(),
        AppError::AudioPlayback(_)
    ));
    assert!(!player.is_playing());
}

#[test]
fn play_and_stop_track_playback_state() {
    // any existing file works as a track for the silent backend
    let track = setup_test_log("audio_track");
    std::fs::write(&track, b"not really audio").unwrap();

    let mut player = SilentPlayer::new();
    assert!(player.track().is_none());
    player.load(Path::new(&track)).unwrap();
    assert_eq!(player.track(), Some(Path::new(track.as_str())));
    player.play(true).unwrap();
    assert!(player.is_playing());
    player.stop();
    assert!(!player.is_playing());
}
