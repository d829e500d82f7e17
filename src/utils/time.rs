//! Time utilities: parsing HH:MM:SS, duration formatting, 12-hour display.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// Parse a `H:MM:SS`-style duration string into total seconds.
/// All three fields must be non-negative integers; hours may exceed two
/// digits.
pub fn parse_duration_secs(s: &str) -> AppResult<i64> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(AppError::InvalidDuration(s.to_string()));
    }
    let mut nums = [0i64; 3];
    for (i, p) in parts.iter().enumerate() {
        nums[i] = p
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
        if nums[i] < 0 {
            return Err(AppError::InvalidDuration(s.to_string()));
        }
    }
    Ok(nums[0] * 3600 + nums[1] * 60 + nums[2])
}

/// Format total seconds as zero-padded `HH:MM:SS`.
pub fn format_secs(total: i64) -> String {
    let t = total.max(0);
    format!("{:02}:{:02}:{:02}", t / 3600, (t % 3600) / 60, t % 60)
}

/// Render a stored `HH:MM:SS` value as a 12-hour clock (`09:00:00 AM`).
/// Falls back to the raw string with an error marker instead of failing the
/// whole log rendering.
pub fn clock_12h(t: &str) -> String {
    match parse_time(t) {
        Some(tm) => tm.format("%I:%M:%S %p").to_string(),
        None => format!("{} (Err)", t),
    }
}
