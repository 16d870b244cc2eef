use crate::models::coverage::CoverageCode;
use crate::models::role::ALL_ROLES;
use crate::models::tutor::Tutor;
use chrono::{DateTime, Local, Weekday};
use std::collections::BTreeMap;

/// Half-hour slots spanned by the full operating window of one day.
pub const SLOT_COUNT: usize = 28;

/// Rows in one raw weekday block of the print schedule sheet.
pub const GRID_ROWS: usize = 6;

/// One weekday's raw role-coverage grid: `GRID_ROWS` rows of `SLOT_COUNT`
/// codes, in sheet order (including the hidden spacer row).
pub type DayGrid = Vec<Vec<CoverageCode>>;

/// The complete derived schedule state as of one successful refresh.
///
/// Owned by the cache layer; the shift engine and the presenter only ever
/// read a reference. Rebuilt wholesale on each re-derivation, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleSnapshot {
    /// Monday..Friday raw grids. Empty when no data has been derived yet.
    pub grids: Vec<DayGrid>,
    /// Lower-cased name → tutor record.
    pub tutors: BTreeMap<String, Tutor>,
    /// When this snapshot was derived. `None` for the empty snapshot.
    pub last_fetch: Option<DateTime<Local>>,
}

impl ScheduleSnapshot {
    /// The "no data yet" snapshot dependents must tolerate.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty() && self.tutors.is_empty()
    }

    /// Raw grid for a weekday; `None` on weekends or before any derivation.
    pub fn grid(&self, weekday: Weekday) -> Option<&DayGrid> {
        let index = weekday.num_days_from_monday() as usize;
        if index >= 5 {
            return None;
        }
        self.grids.get(index)
    }

    /// One weekday's grid with the hidden spacer row dropped and the rows
    /// rearranged into role priority order (MAE, CMPE, ECE, CEE, BENG), which
    /// is what the presenter and `next_arrival` work against.
    pub fn today_schedule(&self, weekday: Weekday) -> Option<Vec<Vec<CoverageCode>>> {
        let grid = self.grid(weekday)?;
        let mut rows = Vec::with_capacity(ALL_ROLES.len());
        for role in ALL_ROLES {
            rows.push(grid.get(role.sheet_row())?.clone());
        }
        Some(rows)
    }
}

/// The contiguous `[first, last)` slot-column span where at least one role is
/// staffed. `(0, 0)` when the whole day is closed.
pub fn open_range(rows: &[Vec<CoverageCode>]) -> (usize, usize) {
    let mut first = SLOT_COUNT;
    let mut last = 0;
    for row in rows {
        for (col, code) in row.iter().enumerate() {
            if *code != CoverageCode::Closed {
                if col < first {
                    first = col;
                }
                if col >= last {
                    last = col + 1;
                }
            }
        }
    }
    if first >= last { (0, 0) } else { (first, last) }
}
