//! Derivation of coverage grids and tutor records from the staffing sheets.
//!
//! The source "document" is a directory holding the three sheets of the
//! management workbook, exported as CSV. The parser depends on the fixed
//! layout described below; moving rows around in the workbook breaks it.

use crate::errors::{AppError, AppResult};
use crate::models::coverage::CoverageCode;
use crate::models::role::Role;
use crate::models::snapshot::{DayGrid, GRID_ROWS, SLOT_COUNT, open_range};
use crate::models::tutor::Tutor;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Weekly role-coverage grids, one 6-row block per weekday.
pub const PRINT_SCHEDULE_SHEET: &str = "print_schedule.csv";
/// One row per (tutor, weekday): name, weekday, major, 28 slot codes.
pub const SCHEDULE_SHEET: &str = "schedule.csv";
/// One row per tutor: academic class and optional profile picture.
pub const TUTOR_INFO_SHEET: &str = "tutor_info.csv";

/// First data row of each weekday block in the print schedule sheet.
const GRID_BLOCK_STARTS: [usize; 5] = [4, 13, 22, 31, 40];
/// Slot columns start after the row-label column.
const GRID_COL_OFFSET: usize = 1;

/// Header rows above the first (tutor, weekday) row of the schedule sheet.
const SCHEDULE_SKIP_ROWS: usize = 11;
const SCHEDULE_SLOT_OFFSET: usize = 3;

/// Header rows of the tutor info sheet, and its fixed metadata columns.
const INFO_SKIP_ROWS: usize = 1;
const INFO_CLASS_COL: usize = 3;
const INFO_IMAGE_COL: usize = 9;

const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Everything ScheduleSource hands to the cache layer in one derivation.
#[derive(Debug)]
pub struct DerivedSchedule {
    pub grids: Vec<DayGrid>,
    pub tutors: BTreeMap<String, Tutor>,
}

/// Newest modification time across the three sheets.
///
/// Cache validity compares against this, so a change to any single sheet
/// invalidates the snapshot.
pub fn modified_time(source_dir: &Path) -> AppResult<DateTime<Local>> {
    if !source_dir.is_dir() {
        return Err(AppError::SourceUnavailable(
            source_dir.display().to_string(),
        ));
    }

    let mut newest: Option<DateTime<Local>> = None;
    for sheet in [PRINT_SCHEDULE_SHEET, SCHEDULE_SHEET, TUTOR_INFO_SHEET] {
        let meta = std::fs::metadata(sheet_path(source_dir, sheet))
            .map_err(|_| AppError::ScheduleIncomplete(sheet.to_string()))?;
        let modified: DateTime<Local> = meta.modified()?.into();
        if newest.is_none_or(|t| modified > t) {
            newest = Some(modified);
        }
    }
    newest.ok_or_else(|| AppError::SourceUnavailable(source_dir.display().to_string()))
}

/// Transform the sheet directory into the five weekday grids plus the tutor
/// map. Fails with `SourceUnavailable` when the directory is missing and
/// `ScheduleIncomplete` when a sheet is; callers fall back to the cache.
pub fn derive(source_dir: &Path) -> AppResult<DerivedSchedule> {
    if !source_dir.is_dir() {
        return Err(AppError::SourceUnavailable(
            source_dir.display().to_string(),
        ));
    }

    let grids = read_grids(source_dir)?;
    let mut tutors = read_tutor_schedules(source_dir)?;
    apply_tutor_info(source_dir, &mut tutors)?;

    Ok(DerivedSchedule { grids, tutors })
}

fn sheet_path(source_dir: &Path, sheet: &str) -> PathBuf {
    source_dir.join(sheet)
}

/// Read one sheet as raw rows of strings. Every cell is kept as-is; the
/// callers decide how blanks normalize.
fn read_rows(source_dir: &Path, sheet: &str) -> AppResult<Vec<Vec<String>>> {
    let path = sheet_path(source_dir, sheet);
    if !path.is_file() {
        return Err(AppError::ScheduleIncomplete(sheet.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)
        .map_err(|e| AppError::SourceUnavailable(format!("{}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::SourceUnavailable(format!("{}: {e}", path.display())))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

fn cell<'a>(row: &'a [String], col: usize) -> &'a str {
    row.get(col).map(|s| s.as_str()).unwrap_or("")
}

/// Parse the five weekday blocks and normalize each one to its open range.
fn read_grids(source_dir: &Path) -> AppResult<Vec<DayGrid>> {
    let rows = read_rows(source_dir, PRINT_SCHEDULE_SHEET)?;

    let mut grids = Vec::with_capacity(GRID_BLOCK_STARTS.len());
    for start in GRID_BLOCK_STARTS {
        let mut grid: DayGrid = Vec::with_capacity(GRID_ROWS);
        for row_index in start..start + GRID_ROWS {
            let row = rows.get(row_index).map(|r| r.as_slice()).unwrap_or(&[]);
            let codes = (0..SLOT_COUNT)
                .map(|slot| CoverageCode::from_cell(cell(row, GRID_COL_OFFSET + slot)))
                .collect();
            grid.push(codes);
        }
        clamp_to_open_range(&mut grid);
        grids.push(grid);
    }
    Ok(grids)
}

/// Force every column outside the day's open range to `Closed`, for every
/// row. This is what normalizes variable opening hours across days: a day
/// that opens late simply has its leading columns clamped.
fn clamp_to_open_range(grid: &mut DayGrid) {
    let (first, last) = open_range(grid);
    for row in grid.iter_mut() {
        for (col, code) in row.iter_mut().enumerate() {
            if col < first || col >= last {
                *code = CoverageCode::Closed;
            }
        }
    }
}

/// Parse the free-form (tutor, weekday) table. The first row bearing a name
/// creates the record; each row fills in one weekday and (re)sets the major.
fn read_tutor_schedules(source_dir: &Path) -> AppResult<BTreeMap<String, Tutor>> {
    let rows = read_rows(source_dir, SCHEDULE_SHEET)?;

    let mut tutors: BTreeMap<String, Tutor> = BTreeMap::new();
    for row in rows.iter().skip(SCHEDULE_SKIP_ROWS) {
        let name = cell(row, 0).trim();
        if name.is_empty() {
            continue;
        }

        let weekday = cell(row, 1).trim();
        if !WEEKDAY_NAMES.contains(&weekday) {
            continue;
        }

        let mut slots: Vec<CoverageCode> = (0..SLOT_COUNT)
            .map(|slot| CoverageCode::from_cell(cell(row, SCHEDULE_SLOT_OFFSET + slot)))
            .collect();
        // Short rows still satisfy the shared-length invariant.
        slots.resize(SLOT_COUNT, CoverageCode::Blank);

        let tutor = tutors
            .entry(name.to_lowercase())
            .or_insert_with(|| Tutor::new(name));
        tutor.schedule.insert(weekday.to_string(), slots);
        if let Some(role) = Role::from_abbr(cell(row, 2)) {
            tutor.major = Some(role);
        }
    }
    Ok(tutors)
}

/// Fold the info sheet into already-known tutors. Names that never appeared
/// in the schedule sheet are ignored, not added.
fn apply_tutor_info(source_dir: &Path, tutors: &mut BTreeMap<String, Tutor>) -> AppResult<()> {
    let rows = read_rows(source_dir, TUTOR_INFO_SHEET)?;

    for row in rows.iter().skip(INFO_SKIP_ROWS) {
        let name = cell(row, 0).trim();
        if name.is_empty() {
            continue;
        }
        if let Some(tutor) = tutors.get_mut(&name.to_lowercase()) {
            tutor.academic_class = cell(row, INFO_CLASS_COL).trim().to_string();

            let image = cell(row, INFO_IMAGE_COL).trim();
            if !image.is_empty() {
                tutor.profile_image = image.to_string();
            }
        }
    }
    Ok(())
}
