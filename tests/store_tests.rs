use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};

use worklog::models::SessionRecord;
use worklog::store;

mod common;
use common::{seed_log, setup_test_log};

fn record(date: &str, start: &str, end: &str, duration_secs: i64) -> SessionRecord {
    SessionRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        start_time: NaiveTime::parse_from_str(start, "%H:%M:%S").expect("start"),
        end_time: NaiveTime::parse_from_str(end, "%H:%M:%S").expect("end"),
        duration_secs,
    }
}

#[test]
fn append_two_sessions_same_day_totals_correctly() {
    let log = setup_test_log("append_same_day");
    let path = Path::new(&log);

    store::append(path, &record("2024-01-01", "09:00:00", "09:01:30", 90)).unwrap();
    store::append(path, &record("2024-01-01", "10:00:00", "10:00:30", 30)).unwrap();

    let groups = store::load_all(path).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].date, "2024-01-01");
    assert_eq!(groups[0].session_count(), 2);
    assert_eq!(groups[0].total_str(), "00:02:00");

    // file order preserved within the day
    assert_eq!(groups[0].sessions[0].start_time, "09:00:00");
    assert_eq!(groups[0].sessions[1].start_time, "10:00:00");
}

#[test]
fn append_writes_header_exactly_once() {
    let log = setup_test_log("header_once");
    let path = Path::new(&log);

    store::append(path, &record("2024-03-05", "08:00:00", "08:10:00", 600)).unwrap();
    store::append(path, &record("2024-03-05", "09:00:00", "09:10:00", 600)).unwrap();

    let content = fs::read_to_string(path).unwrap();
    let header_lines = content
        .lines()
        .filter(|l| l.starts_with("Date,Start Time"))
        .count();
    assert_eq!(header_lines, 1);
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn groups_come_back_most_recent_day_first() {
    let log = setup_test_log("group_order");
    let path = Path::new(&log);

    store::append(path, &record("2024-01-01", "09:00:00", "09:30:00", 1800)).unwrap();
    store::append(path, &record("2024-02-01", "09:00:00", "09:30:00", 1800)).unwrap();
    store::append(path, &record("2023-12-31", "09:00:00", "09:30:00", 1800)).unwrap();

    let groups = store::load_all(path).unwrap();
    let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-02-01", "2024-01-01", "2023-12-31"]);
}

#[test]
fn absent_file_loads_as_empty() {
    let log = setup_test_log("absent_file");
    let groups = store::load_all(Path::new(&log)).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn zero_length_file_loads_as_empty() {
    let log = setup_test_log("empty_file");
    fs::write(&log, "").unwrap();
    let groups = store::load_all(Path::new(&log)).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn row_missing_a_field_is_skipped_without_aborting() {
    let log = setup_test_log("missing_field");
    seed_log(
        &log,
        &[
            "2024-01-01,09:00:00,09:30:00,00:30:00",
            "2024-01-01,10:00:00", // truncated row
            "2024-01-02,11:00:00,11:15:00,00:15:00",
        ],
    );

    let groups = store::load_all(Path::new(&log)).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, "2024-01-02");
    assert_eq!(groups[0].session_count(), 1);
    assert_eq!(groups[1].date, "2024-01-01");
    assert_eq!(groups[1].session_count(), 1);
}

#[test]
fn unparseable_duration_is_listed_but_counts_as_zero() {
    let log = setup_test_log("bad_duration");
    seed_log(
        &log,
        &[
            "2024-01-01,09:00:00,09:30:00,00:30:00",
            "2024-01-01,10:00:00,10:45:00,garbage",
        ],
    );

    let groups = store::load_all(Path::new(&log)).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].session_count(), 2);
    assert_eq!(groups[0].total_str(), "00:30:00");
    assert_eq!(groups[0].sessions[1].duration_raw, "garbage");
    assert!(groups[0].sessions[1].duration_secs.is_none());
}

#[test]
fn n_records_across_dates_reload_as_n_rows() {
    let log = setup_test_log("n_records");
    let path = Path::new(&log);

    for day in 1..=3 {
        for hour in 9..12 {
            store::append(
                path,
                &record(
                    &format!("2024-05-{:02}", day),
                    &format!("{:02}:00:00", hour),
                    &format!("{:02}:20:00", hour),
                    1200,
                ),
            )
            .unwrap();
        }
    }

    let groups = store::load_all(path).unwrap();
    assert_eq!(groups.len(), 3);
    let total_rows: usize = groups.iter().map(|g| g.session_count()).sum();
    assert_eq!(total_rows, 9);
    for g in &groups {
        assert_eq!(g.total_str(), "01:00:00");
    }
}

#[test]
fn append_to_missing_directory_creates_it() {
    let mut dir = std::env::temp_dir();
    dir.push("worklog_nested_dir_test");
    fs::remove_dir_all(&dir).ok();
    let path = dir.join("logs").join("work_logs.csv");

    store::append(&path, &record("2024-06-01", "09:00:00", "09:05:00", 300)).unwrap();
    let groups = store::load_all(&path).unwrap();
    assert_eq!(groups.len(), 1);
}
