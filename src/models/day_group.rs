use crate::utils::time::format_secs;

/// One session row as read back from the log file.
/// Values are kept as raw strings so a malformed time still renders; the
/// duration is parsed eagerly and contributes 0 to the day total on failure.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_raw: String,
    pub duration_secs: Option<i64>,
}

/// Sessions sharing one calendar date plus their summed duration.
/// Derived, never persisted: rebuilt from the full file on every load.
#[derive(Debug, Default)]
pub struct DayGroup {
    pub date: String,
    pub sessions: Vec<LogRow>,
    pub total_secs: i64,
}

impl DayGroup {
    pub fn total_str(&self) -> String {
        format_secs(self.total_secs)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
