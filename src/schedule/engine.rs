//! Shift engine: pure queries over a snapshot and a slot index.
//!
//! Nothing here touches disk or holds state between calls, which is what
//! makes the "who is here right now" logic trivially testable with fixed
//! timestamps.

use crate::models::coverage::CoverageCode;
use crate::models::snapshot::ScheduleSnapshot;
use crate::models::tutor::Tutor;
use crate::schedule::slot;
use std::fmt;

/// One tutor currently on shift, with the per-query departure string filled.
#[derive(Debug, Clone, PartialEq)]
pub struct OnShift {
    pub tutor: Tutor,
    /// Slot at which the tutor stops staffing; sequence length when they
    /// stay through closing.
    pub departs_slot: usize,
    /// 12-hour clock rendering of `departs_slot`.
    pub here_until: String,
}

/// When a currently-absent role next has someone scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextArrival {
    At(String),
    Tomorrow,
}

impl fmt::Display for NextArrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextArrival::At(time) => write!(f, "at {time}"),
            NextArrival::Tomorrow => write!(f, "Tomorrow"),
        }
    }
}

/// All tutors on shift at `now_index` on the given weekday.
///
/// A tutor without a sequence for the day, or whose sequence does not cover
/// `now_index`, is simply not on shift — never an error. Ordering is
/// unspecified; see [`sort_roster`].
pub fn on_shift(
    snapshot: &ScheduleSnapshot,
    weekday_name: &str,
    now_index: usize,
    open_hour: u32,
) -> Vec<OnShift> {
    let mut result = Vec::new();

    for tutor in snapshot.tutors.values() {
        let Some(sequence) = tutor.day_schedule(weekday_name) else {
            continue;
        };
        if now_index >= sequence.len() || !sequence[now_index].is_staffed() {
            continue;
        }

        let departs_slot = find_first_non_staffed(sequence, now_index + 1).unwrap_or(sequence.len());
        result.push(OnShift {
            tutor: tutor.clone(),
            departs_slot,
            here_until: slot::slot_clock(departs_slot, open_hour),
        });
    }
    result
}

/// First index at or after `from` whose code is not a role marker.
pub fn find_first_non_staffed(sequence: &[CoverageCode], from: usize) -> Option<usize> {
    (from..sequence.len()).find(|&i| !sequence[i].is_staffed())
}

/// Scan one role's grid row forward from `now_index + 1` for the next
/// staffed slot today. No look-ahead into other days: when nothing is found
/// the answer is the `Tomorrow` sentinel.
pub fn next_arrival(role_row: &[CoverageCode], now_index: usize, open_hour: u32) -> NextArrival {
    match find_first_staffed(role_row, now_index + 1) {
        Some(slot_index) => NextArrival::At(slot::slot_clock(slot_index, open_hour)),
        None => NextArrival::Tomorrow,
    }
}

/// Like [`next_arrival`], but scanning the whole day. Used before opening
/// hours, when there is no current slot to scan from.
pub fn first_arrival(role_row: &[CoverageCode], open_hour: u32) -> NextArrival {
    match find_first_staffed(role_row, 0) {
        Some(slot_index) => NextArrival::At(slot::slot_clock(slot_index, open_hour)),
        None => NextArrival::Tomorrow,
    }
}

fn find_first_staffed(sequence: &[CoverageCode], from: usize) -> Option<usize> {
    (from..sequence.len()).find(|&i| sequence[i].is_staffed())
}

/// Roster order for the board: role priority first, then who leaves soonest.
pub fn sort_roster(roster: &mut [OnShift]) {
    roster.sort_by_key(|entry| {
        let rank = entry
            .tutor
            .major
            .map(|role| role.priority())
            .unwrap_or(usize::MAX);
        (rank, entry.departs_slot)
    });
}
