#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test log path inside the system temp dir and remove any
/// existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a fake home directory for tests that touch the config file
pub fn setup_test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog_home", name));
    let home = path.to_string_lossy().to_string();
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create test home");
    home
}

/// Write a ready-made log file with a header and the given data rows
pub fn seed_log(path: &str, rows: &[&str]) {
    let mut content = String::from("Date,Start Time,End Time,Duration\n");
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(path, content).expect("seed log file");
}
