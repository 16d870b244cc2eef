use chrono::{NaiveDate, NaiveTime};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tutorboard::config::Config;
use tutorboard::errors::AppError;
use tutorboard::schedule::cache;
use tutorboard::ui::board;

mod common;

fn cfg_for(source_dir: &str, data_dir: &str) -> Config {
    Config {
        source_dir: source_dir.to_string(),
        data_dir: data_dir.to_string(),
        open_hour: 7,
        roster_slots: 10,
    }
}

fn read_last_fetch(data_dir: &str) -> String {
    let raw = std::fs::read_to_string(Path::new(data_dir).join(cache::TUTOR_CACHE_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["last_fetch"].as_str().unwrap().to_string()
}

#[test]
fn snapshot_round_trips_through_the_cache_files() {
    let scratch = common::scratch_dir("cache_roundtrip");
    let (source_dir, data_dir) = common::setup_sheets(&scratch);
    let cfg = cfg_for(&source_dir, &data_dir);

    let written = cache::refresh(&cfg).unwrap();
    let reloaded = cache::read_cached(Path::new(&data_dir)).unwrap();

    assert_eq!(reloaded.grids, written.grids);
    assert_eq!(reloaded.tutors, written.tutors);
}

#[test]
fn unchanged_source_means_a_pure_cache_hit() {
    let scratch = common::scratch_dir("cache_idempotent");
    let (source_dir, data_dir) = common::setup_sheets(&scratch);
    let cfg = cfg_for(&source_dir, &data_dir);

    // Let the sheet mtimes fall strictly behind "now".
    thread::sleep(Duration::from_millis(50));

    let first = cache::load_or_refresh(&cfg).unwrap();
    assert!(!first.is_empty());
    let stamp = read_last_fetch(&data_dir);

    let second = cache::load_or_refresh(&cfg).unwrap();
    assert_eq!(second.tutors, first.tutors);
    // No re-derivation, no write: the stored stamp is byte-identical.
    assert_eq!(read_last_fetch(&data_dir), stamp);
}

#[test]
fn stale_cache_triggers_a_refresh() {
    let scratch = common::scratch_dir("cache_stale");
    let (source_dir, data_dir) = common::setup_sheets(&scratch);
    let cfg = cfg_for(&source_dir, &data_dir);

    cache::refresh(&cfg).unwrap();

    // Age the stored stamp far behind the sheet mtimes.
    let path = Path::new(&data_dir).join(cache::TUTOR_CACHE_FILE);
    let raw = std::fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["last_fetch"] = serde_json::Value::from("2020-01-01 00:00:00.000000");
    std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

    let snapshot = cache::load_or_refresh(&cfg).unwrap();
    assert!(!snapshot.is_empty());
    assert_ne!(read_last_fetch(&data_dir), "2020-01-01 00:00:00.000000");
}

#[test]
fn corrupt_cache_is_a_forced_miss_not_an_error() {
    let scratch = common::scratch_dir("cache_corrupt");
    let (source_dir, data_dir) = common::setup_sheets(&scratch);
    let cfg = cfg_for(&source_dir, &data_dir);

    std::fs::write(Path::new(&data_dir).join(cache::TUTOR_CACHE_FILE), "{ not json").unwrap();
    std::fs::write(Path::new(&data_dir).join(cache::DAY_CACHE_FILE), "[]").unwrap();

    let snapshot = cache::load_or_refresh(&cfg).unwrap();
    assert!(snapshot.tutors.contains_key("jane doe"));
}

#[test]
fn ragged_cached_grid_is_rejected_not_served() {
    let scratch = common::scratch_dir("cache_ragged");
    let data_dir = format!("{scratch}/data");
    std::fs::create_dir_all(&data_dir).unwrap();

    // Five well-counted grids whose bottom row was truncated while the top
    // row still reaches the last slot column.
    let mut grid: Vec<Vec<String>> = vec![vec!["C".to_string(); 28]; 6];
    grid[0][27] = "MA".to_string();
    grid[5].truncate(2);
    let grids = vec![grid; 5];
    std::fs::write(
        Path::new(&data_dir).join(cache::DAY_CACHE_FILE),
        serde_json::to_string_pretty(&grids).unwrap(),
    )
    .unwrap();
    std::fs::write(
        Path::new(&data_dir).join(cache::TUTOR_CACHE_FILE),
        r#"{ "last_fetch": "2030-01-01 00:00:00.000000" }"#,
    )
    .unwrap();

    assert!(matches!(
        cache::read_cached(Path::new(&data_dir)),
        Err(AppError::CacheCorrupt(_))
    ));

    // With the sheets gone too, the malformed cache degrades to "no data"
    // and the board renders its empty state instead of indexing past the
    // short row.
    let cfg = cfg_for(&format!("{scratch}/missing_source"), &data_dir);
    let snapshot = cache::load_or_refresh(&cfg).unwrap();
    assert!(snapshot.is_empty());

    let monday = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let afternoon = NaiveTime::from_hms_opt(13, 45, 0).unwrap();
    let rendered = board::render_board(&cfg, &snapshot, monday, afternoon).unwrap();
    assert!(rendered.contains("No schedule data yet"));
}

#[test]
fn absent_source_falls_back_to_the_cached_snapshot() {
    let scratch = common::scratch_dir("cache_fallback");
    let (source_dir, data_dir) = common::setup_sheets(&scratch);
    let cfg = cfg_for(&source_dir, &data_dir);

    cache::refresh(&cfg).unwrap();
    std::fs::remove_dir_all(&source_dir).unwrap();

    let snapshot = cache::load_or_refresh(&cfg).unwrap();
    assert!(snapshot.tutors.contains_key("jane doe"));
}

#[test]
fn no_source_and_no_cache_yields_the_empty_snapshot() {
    let scratch = common::scratch_dir("cache_empty");
    let cfg = cfg_for(
        &format!("{scratch}/missing_source"),
        &format!("{scratch}/missing_data"),
    );

    let snapshot = cache::load_or_refresh(&cfg).unwrap();
    assert!(snapshot.is_empty());
    assert!(snapshot.last_fetch.is_none());
}
