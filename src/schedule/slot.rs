//! Slot clock: wall-clock time ⇄ half-hour slot indices.
//!
//! Slot 0 is the first half hour of the operating day (`open_hour`:00).
//! Deployments open at different hours, so the origin is always passed in
//! from configuration, never hard-coded here.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Map a time of day to its zero-based half-hour slot index.
///
/// Times before `open_hour` fail with `BeforeOpening`; callers treat that as
/// "nothing is open right now". No upper bound is enforced here — callers
/// must check against the actual schedule length.
pub fn slot_index(now: NaiveTime, open_hour: u32) -> AppResult<usize> {
    let half_hours = now.hour() * 2 + if now.minute() >= 30 { 1 } else { 0 };
    let origin = open_hour * 2;
    if half_hours < origin {
        return Err(AppError::BeforeOpening(now.format("%H:%M").to_string()));
    }
    Ok((half_hours - origin) as usize)
}

/// Render a slot index as a 12-hour "h:mm" clock string, anchored at slot 0
/// of the day. Slot `len` of a sequence therefore converts to closing time.
pub fn slot_clock(slot: usize, open_hour: u32) -> String {
    let half_hours = slot + open_hour as usize * 2;
    let hour = half_hours / 2;
    let minute = (half_hours % 2) * 30;
    let display_hour = (hour + 11) % 12 + 1;
    format!("{display_hour}:{minute:02}")
}

/// Seconds until the next half-hour boundary (:00 or :30).
///
/// The refresh timer re-arms itself with this after every firing instead of
/// repeating at a fixed interval, so redraws stay aligned to slot edges.
pub fn secs_until_next_boundary(now: NaiveTime) -> u64 {
    let minutes_until_next = if now.minute() < 30 {
        30 - now.minute()
    } else {
        60 - now.minute()
    };
    (minutes_until_next as u64) * 60 - now.second() as u64
}
