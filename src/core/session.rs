//! Single-session timer state machine.
//!
//! At most one session can be active at a time. Transitions are pure
//! functions over explicit `now` instants so the Pomodoro auto-stop can be
//! tested against a simulated clock.

use chrono::{DateTime, Local};

use crate::models::SessionRecord;

/// Fixed Pomodoro length: 25 minutes.
pub const POMODORO_SECS: i64 = 25 * 60;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Running {
        started_at: DateTime<Local>,
        pomodoro: bool,
    },
}

/// Outcome of a periodic tick while a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Whole elapsed seconds since the session started.
    Elapsed(i64),
    /// Pomodoro limit reached; the caller must stop the session.
    AutoStop,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running { .. })
    }

    /// `Idle → Running`. Captures the start instant and the Pomodoro flag.
    pub fn start(self, now: DateTime<Local>, pomodoro: bool) -> SessionState {
        match self {
            SessionState::Idle => SessionState::Running {
                started_at: now,
                pomodoro,
            },
            running => running,
        }
    }

    /// `Running → Idle`, yielding the completed-session record.
    /// A stop on an idle state is a no-op and yields nothing.
    pub fn stop(self, now: DateTime<Local>) -> (SessionState, Option<SessionRecord>) {
        match self {
            SessionState::Running { started_at, .. } => {
                let record = SessionRecord::from_instants(started_at, now);
                (SessionState::Idle, Some(record))
            }
            idle => (idle, None),
        }
    }

    /// Periodic check while running: elapsed whole seconds for display, or
    /// the auto-stop signal once a Pomodoro session reaches its limit.
    pub fn tick(&self, now: DateTime<Local>) -> Option<Tick> {
        match self {
            SessionState::Running {
                started_at,
                pomodoro,
            } => {
                let elapsed = (now - *started_at).num_seconds();
                if *pomodoro && elapsed >= POMODORO_SECS {
                    Some(Tick::AutoStop)
                } else {
                    Some(Tick::Elapsed(elapsed))
                }
            }
            SessionState::Idle => None,
        }
    }
}
