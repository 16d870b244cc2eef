//! Time utilities: parsing HH:MM and YYYY-MM-DD, weekday names, "now"
//! resolution with test overrides.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveTime, Weekday};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Weekday name as used for schedule map keys ("Monday".."Sunday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Resolve the (date, time) the queries run against. The hidden `--on` and
/// `--at` CLI overrides replace the wall clock so tests stay deterministic.
pub fn resolve_now(
    date_override: Option<&str>,
    time_override: Option<&str>,
) -> AppResult<(NaiveDate, NaiveTime)> {
    let now = Local::now();

    let date = match date_override {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => now.date_naive(),
    };
    let time = match time_override {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
        None => now.time(),
    };
    Ok((date, time))
}
