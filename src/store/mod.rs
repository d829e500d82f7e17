//! Log store: append-only CSV persistence of completed sessions and the
//! tolerant reload/group/total pass that feeds the per-day log view.
//!
//! File layout: UTF-8 CSV with header `Date,Start Time,End Time,Duration`,
//! one row per session, appended in completion order. The file is never
//! truncated or rewritten here.

use std::fs::{self, OpenOptions};
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use crate::errors::{AppError, AppResult};
use crate::models::{DayGroup, LogRow, SessionRecord};
use crate::ui::messages;
use crate::utils::path::parent_dir;
use crate::utils::time::parse_duration_secs;

pub const HEADERS: [&str; 4] = ["Date", "Start Time", "End Time", "Duration"];

/// Append one completed session to the log file.
///
/// Creates the parent directory if missing and writes the header row first
/// when the file is absent or zero-length. Exactly one data row is written
/// per call; existing rows are never touched.
pub fn append(path: &Path, record: &SessionRecord) -> AppResult<()> {
    if let Some(dir) = parent_dir(path)
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| AppError::DirectoryCreation {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut wtr = Writer::from_writer(file);

    if needs_header {
        wtr.write_record(HEADERS)?;
    }
    wtr.write_record([
        record.date_str(),
        record.start_str(),
        record.end_str(),
        record.duration_str(),
    ])?;
    wtr.flush().map_err(|e| AppError::FileWrite {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Reload the whole log file and rebuild the per-day aggregates.
///
/// An absent or zero-length file yields no groups. A row missing any of the
/// four fields is skipped with a warning; a row whose duration does not
/// parse stays listed but adds 0 to its day total. Groups come back ordered
/// by date string descending (chronological for `YYYY-MM-DD`), sessions in
/// file order within each group.
pub fn load_all(path: &Path) -> AppResult<Vec<DayGroup>> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => {}
        _ => return Ok(Vec::new()),
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    // Map header names to column indexes so reordered files still load.
    let header = rdr.headers()?.clone();
    let idx: Vec<Option<usize>> = HEADERS
        .iter()
        .map(|name| header.iter().position(|h| h == *name))
        .collect();

    let mut rows: Vec<LogRow> = Vec::new();
    for result in rdr.records() {
        let rec = match result {
            Ok(r) => r,
            Err(e) => {
                messages::warning(format!("Skipping unreadable row: {}", e));
                continue;
            }
        };

        let fields: Vec<Option<&str>> = idx
            .iter()
            .map(|slot| slot.and_then(|i| rec.get(i)))
            .collect();
        let (Some(date), Some(start), Some(end), Some(dur)) =
            (fields[0], fields[1], fields[2], fields[3])
        else {
            messages::warning(format!("Skipping malformed row: {:?}", rec));
            continue;
        };

        let duration_secs = match parse_duration_secs(dur) {
            Ok(s) => Some(s),
            Err(_) => {
                messages::warning(format!(
                    "Could not parse duration '{}' for date {}",
                    dur, date
                ));
                None
            }
        };

        rows.push(LogRow {
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            duration_raw: dur.to_string(),
            duration_secs,
        });
    }

    Ok(group_by_date(rows))
}

/// Group rows by their exact `Date` string, keeping file order inside each
/// group, and order the groups most recent day first.
fn group_by_date(rows: Vec<LogRow>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for row in rows {
        let slot = groups.iter().position(|g| g.date == row.date);
        let group = match slot {
            Some(i) => &mut groups[i],
            None => {
                groups.push(DayGroup {
                    date: row.date.clone(),
                    ..Default::default()
                });
                groups.last_mut().unwrap()
            }
        };
        group.total_secs += row.duration_secs.unwrap_or(0);
        group.sessions.push(row);
    }
    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}
