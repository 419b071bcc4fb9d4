#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use worklog::core::Session;
use worklog::models::LogEntry;
use worklog::ui::Console;

pub type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

pub fn wlog() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a fresh, empty directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

pub fn write_log(path: &Path, content: &str) {
    fs::write(path, content).expect("write log file");
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn entry(d: &str, task: &str, mins: u32, notes: &str) -> LogEntry {
    LogEntry::new(date(d), task, mins, notes)
}

/// Session reading its answers from `input`, one per line.
pub fn session_with_input(path: &Path, input: &str) -> TestSession {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    Session::new(path, console)
}

pub fn output_of(session: TestSession) -> String {
    String::from_utf8(session.into_console().into_output()).expect("utf8 output")
}
