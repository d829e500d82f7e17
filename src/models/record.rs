use chrono::{DateTime, Local, NaiveDate, NaiveTime};

use crate::utils::time::format_secs;

/// One completed work session, created only when a session stops.
/// Appended once to the log file and never edited or deleted afterwards.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub date: NaiveDate,      // ⇔ "Date" column (YYYY-MM-DD, from session start)
    pub start_time: NaiveTime, // ⇔ "Start Time" (HH:MM:SS, 24-hour)
    pub end_time: NaiveTime,   // ⇔ "End Time" (HH:MM:SS, 24-hour)
    pub duration_secs: i64,    // ⇔ "Duration" (HH:MM:SS, whole seconds)
}

impl SessionRecord {
    /// Build a record from the start/end instants of a session.
    /// The date is taken from the start instant; sub-second precision is
    /// discarded for both the clock values and the duration.
    pub fn from_instants(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        let duration_secs = (end - start).num_seconds().max(0);
        Self {
            date: start.date_naive(),
            start_time: truncate_subsec(start.time()),
            end_time: truncate_subsec(end.time()),
            duration_secs,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M:%S").to_string()
    }

    pub fn duration_str(&self) -> String {
        format_secs(self.duration_secs)
    }
}

fn truncate_subsec(t: NaiveTime) -> NaiveTime {
    use chrono::Timelike;
    t.with_nanosecond(0).unwrap_or(t)
}
