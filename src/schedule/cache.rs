//! Flat-file snapshot cache.
//!
//! Two JSON files under the data directory mirror the derived snapshot: the
//! tutor map (with a reserved `last_fetch` timestamp key) and the list of
//! five weekday grids. The spreadsheet stays the source of truth, so the
//! cache is overwritten wholesale and never repaired in place: any malformed
//! file is simply a forced miss.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::snapshot::{DayGrid, GRID_ROWS, SLOT_COUNT, ScheduleSnapshot};
use crate::models::tutor::Tutor;
use crate::schedule::source;
use crate::ui::messages::{info, warning};
use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

pub const TUTOR_CACHE_FILE: &str = "tutor_data.json";
pub const DAY_CACHE_FILE: &str = "daily_schedules.json";

/// Timestamp format of the `last_fetch` cache key.
const LAST_FETCH_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// On-disk shape of the tutor cache: the tutor map keyed by lower-cased
/// name, plus one reserved key for the fetch timestamp.
#[derive(Serialize, Deserialize)]
struct TutorCacheFile {
    last_fetch: String,
    #[serde(flatten)]
    tutors: BTreeMap<String, Tutor>,
}

/// Return the current snapshot, re-deriving from the sheets only when the
/// cache is missing, malformed, or older than the source.
///
/// Never fatal: with the source gone this falls back to the last good
/// snapshot, and with no cache either it returns the empty snapshot and lets
/// dependents render "no data".
pub fn load_or_refresh(cfg: &Config) -> AppResult<ScheduleSnapshot> {
    let data_dir = Path::new(&cfg.data_dir);

    let source_time = match source::modified_time(Path::new(&cfg.source_dir)) {
        Ok(t) => t,
        Err(err) => {
            warning(format!("{err}; using cached data if present"));
            return Ok(read_cached(data_dir).unwrap_or_else(|_| ScheduleSnapshot::empty()));
        }
    };

    let cached = match read_cached(data_dir) {
        Ok(snapshot) => Some(snapshot),
        Err(AppError::Io(ref e)) if e.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            warning(format!("{err}; re-deriving from source"));
            None
        }
    };

    // Valid iff the stored fetch time is strictly later than the source's
    // modification time, both timezone-aware.
    if let Some(snapshot) = &cached
        && snapshot.last_fetch.is_some_and(|t| t > source_time)
    {
        return Ok(snapshot.clone());
    }

    match refresh(cfg) {
        Ok(snapshot) => Ok(snapshot),
        Err(err) => {
            // Keep the previous snapshot on a failed derivation.
            warning(format!("Schedule refresh failed: {err}"));
            Ok(cached.unwrap_or_else(ScheduleSnapshot::empty))
        }
    }
}

/// Unconditionally re-derive from the sheets and overwrite both cache files.
pub fn refresh(cfg: &Config) -> AppResult<ScheduleSnapshot> {
    info("Updating schedule from the staffing sheets...");
    let derived = source::derive(Path::new(&cfg.source_dir))?;

    let snapshot = ScheduleSnapshot {
        grids: derived.grids,
        tutors: derived.tutors,
        last_fetch: Some(Local::now()),
    };
    persist(Path::new(&cfg.data_dir), &snapshot)?;
    Ok(snapshot)
}

/// Load the snapshot back from the two cache files.
///
/// Io(NotFound) means "no cache yet"; any decode problem surfaces as
/// `CacheCorrupt` and is treated by the caller as a forced miss.
pub fn read_cached(data_dir: &Path) -> AppResult<ScheduleSnapshot> {
    let tutor_raw = std::fs::read_to_string(data_dir.join(TUTOR_CACHE_FILE))?;
    let days_raw = std::fs::read_to_string(data_dir.join(DAY_CACHE_FILE))?;

    let tutor_file: TutorCacheFile = serde_json::from_str(&tutor_raw)
        .map_err(|e| AppError::CacheCorrupt(format!("{TUTOR_CACHE_FILE}: {e}")))?;
    let grids: Vec<DayGrid> = serde_json::from_str(&days_raw)
        .map_err(|e| AppError::CacheCorrupt(format!("{DAY_CACHE_FILE}: {e}")))?;

    if grids.len() != 5 {
        return Err(AppError::CacheCorrupt(format!(
            "{DAY_CACHE_FILE}: expected 5 weekday grids, found {}",
            grids.len()
        )));
    }
    // A truncated or ragged grid would panic downstream consumers that
    // index by slot column, so it is a forced miss like any other decode
    // problem.
    for (day, grid) in grids.iter().enumerate() {
        if grid.len() != GRID_ROWS || grid.iter().any(|row| row.len() != SLOT_COUNT) {
            return Err(AppError::CacheCorrupt(format!(
                "{DAY_CACHE_FILE}: malformed grid for weekday {day}"
            )));
        }
    }

    let last_fetch = parse_last_fetch(&tutor_file.last_fetch)?;
    Ok(ScheduleSnapshot {
        grids,
        tutors: tutor_file.tutors,
        last_fetch: Some(last_fetch),
    })
}

/// Overwrite both cache files with the given snapshot.
pub fn persist(data_dir: &Path, snapshot: &ScheduleSnapshot) -> AppResult<()> {
    std::fs::create_dir_all(data_dir)?;

    let last_fetch = snapshot
        .last_fetch
        .map(|t| t.format(LAST_FETCH_FORMAT).to_string())
        .unwrap_or_default();
    let tutor_file = TutorCacheFile {
        last_fetch,
        tutors: snapshot.tutors.clone(),
    };

    let tutor_json = serde_json::to_string_pretty(&tutor_file)
        .map_err(|e| AppError::Other(format!("tutor cache serialization: {e}")))?;
    let days_json = serde_json::to_string_pretty(&snapshot.grids)
        .map_err(|e| AppError::Other(format!("day cache serialization: {e}")))?;

    std::fs::write(data_dir.join(TUTOR_CACHE_FILE), tutor_json)?;
    std::fs::write(data_dir.join(DAY_CACHE_FILE), days_json)?;
    Ok(())
}

fn parse_last_fetch(raw: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(raw, LAST_FETCH_FORMAT)
        .map_err(|_| AppError::CacheCorrupt(format!("bad last_fetch timestamp: '{raw}'")))?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::CacheCorrupt(format!("unrepresentable last_fetch: '{raw}'")))
}
