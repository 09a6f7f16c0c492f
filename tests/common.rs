#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rshiftlog::core::calculator::ShiftCalculator;
use rshiftlog::models::DailyRecord;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 7h 42m
pub const STANDARD_SHIFT: i64 = 462;

/// CLI command isolated in `home` (config dir lives under it), no colours.
pub fn rsl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rshiftlog");
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Store path inside the temp dir.
pub fn store_path(dir: &Path) -> PathBuf {
    dir.join("registro_orari.json")
}

/// Init a store and return its path as a string for `--store`.
pub fn init_store(home: &Path) -> String {
    let store = store_path(home).to_string_lossy().to_string();
    rsl(home)
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();
    store
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Record computed with the default standard shift.
pub fn record(day: &str, entry: &str, exit: &str) -> DailyRecord {
    let shift = ShiftCalculator::new(STANDARD_SHIFT)
        .compute(entry, exit)
        .expect("valid test times");
    DailyRecord::new(date(day), &shift)
}

pub fn records(days: &[(&str, &str, &str)]) -> BTreeMap<String, DailyRecord> {
    days.iter()
        .map(|(d, i, o)| (d.to_string(), record(d, i, o)))
        .collect()
}
