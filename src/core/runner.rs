//! Foreground session loop: wires the state machine, the 1-second ticker,
//! the Enter-to-stop listener and the music player together, then persists
//! the finished session and re-renders the log view.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::audio::MusicPlayer;
use crate::core::session::{SessionState, Tick};
use crate::core::ticker::Ticker;
use crate::errors::AppResult;
use crate::store;
use crate::ui::{log_view, messages};
use crate::utils::time::format_secs;

#[derive(Debug, Clone, Copy)]
enum RunEvent {
    Tick,
    StopRequested,
}

/// Run one full session in the foreground, blocking until it stops.
///
/// The session ends on Enter, or automatically when a Pomodoro session
/// reaches its limit. A save failure is reported and the record is lost;
/// the call itself still succeeds.
pub fn run_session(
    log_path: &Path,
    pomodoro: bool,
    player: &mut dyn MusicPlayer,
) -> AppResult<()> {
    let state = SessionState::Idle.start(Local::now(), pomodoro);

    let SessionState::Running { started_at, .. } = &state else {
        unreachable!("start() from Idle always yields Running");
    };

    let started = started_at.format("%I:%M:%S %p");
    if pomodoro {
        messages::info(format!("Pomodoro started at: {}", started));
        if let Err(e) = player.play(true) {
            messages::error(e);
        }
    } else {
        messages::info(format!("Session started at: {}", started));
    }
    println!("Press Enter to stop the session.");

    let (tx, rx) = mpsc::channel::<RunEvent>();
    let mut ticker = Ticker::spawn(Duration::from_secs(1), tx.clone(), RunEvent::Tick);

    // Blocking stdin listener; the thread is left behind on auto-stop and
    // dies with the process.
    thread::spawn(move || {
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
        let _ = tx.send(RunEvent::StopRequested);
    });

    let mut auto_stopped = false;
    while let Ok(event) = rx.recv() {
        match event {
            RunEvent::Tick => match state.tick(Local::now()) {
                Some(Tick::Elapsed(secs)) => {
                    print!("\rTime: {}", format_secs(secs));
                    io::stdout().flush().ok();
                }
                Some(Tick::AutoStop) => {
                    auto_stopped = true;
                    break;
                }
                None => break,
            },
            RunEvent::StopRequested => break,
        }
    }
    ticker.cancel();

    if player.is_playing() {
        player.stop();
    }

    println!();
    if auto_stopped {
        messages::info("25-minute Pomodoro session complete!");
    }

    let (_, record) = state.stop(Local::now());
    if let Some(record) = record {
        match store::append(log_path, &record) {
            Ok(()) => messages::success(format!(
                "Session saved: {} {} ({})",
                record.date_str(),
                record.start_str(),
                record.duration_str()
            )),
            // Record is lost; the application keeps going.
            Err(e) => messages::error(e),
        }

        let groups = store::load_all(log_path)?;
        println!();
        log_view::render(&groups);
    }

    messages::info("No session active.");
    Ok(())
}
