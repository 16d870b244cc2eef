//! Terminal rendering of the kiosk board: today's coverage grid plus the
//! roster of tutors currently on shift. This is the presentation collaborator
//! of the schedule core; everything here is read-only over a snapshot.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::coverage::CoverageCode;
use crate::models::role::{ALL_ROLES, Role};
use crate::models::snapshot::{ScheduleSnapshot, open_range};
use crate::schedule::engine::{self, NextArrival, OnShift};
use crate::schedule::slot;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::time::weekday_name;
use ansi_term::{Colour, Style};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Lanyard colors from the printed schedule.
fn role_colour(role: Role) -> Colour {
    match role {
        Role::Mechanical => Colour::RGB(242, 62, 44),
        Role::Computer => Colour::RGB(237, 130, 24),
        Role::Electrical => Colour::RGB(237, 181, 14),
        Role::Civil => Colour::RGB(45, 161, 47),
        Role::Biological => Colour::RGB(41, 109, 227),
    }
}

const CELL_WIDTH: usize = 3;
const LABEL_WIDTH: usize = 6;

/// Render today's trimmed grid. Rows are in role priority order; columns are
/// limited to the day's open range; `now_index` (when inside the range) is
/// drawn inverted so the current slot stands out.
pub fn render_grid(
    rows: &[Vec<CoverageCode>],
    now_index: Option<usize>,
    open_hour: u32,
) -> String {
    let (first, last) = open_range(rows);
    let mut out = String::new();

    // Hour labels across the top, one per two slots.
    out.push_str(&" ".repeat(LABEL_WIDTH));
    for col in first..last {
        if col % 2 == 0 {
            out.push_str(&pad_right(
                &slot::slot_clock(col, open_hour),
                CELL_WIDTH * 2,
            ));
        } else if col == first {
            // Odd opening slot: keep the labels aligned to their columns.
            out.push_str(&" ".repeat(CELL_WIDTH));
        }
    }
    out.push('\n');

    for (row, role) in ALL_ROLES.iter().enumerate() {
        out.push_str(&pad_right(role.abbr(), LABEL_WIDTH));
        for col in first..last {
            let code = rows[row][col];
            let text = match code {
                CoverageCode::Staffed(_) => pad_right(code.as_cell(), CELL_WIDTH),
                CoverageCode::Closed => pad_right("·", CELL_WIDTH),
                CoverageCode::Blank => " ".repeat(CELL_WIDTH),
            };

            let mut style = match code.role() {
                Some(r) => role_colour(r).bold(),
                None => Colour::RGB(217, 217, 217).normal(),
            };
            if now_index == Some(col) {
                style = style.reverse();
            }
            out.push_str(&style.paint(text).to_string());
        }
        out.push('\n');
    }
    out
}

/// Render the on-shift roster, padding leftover slots with "will return"
/// lines for the roles nobody is currently covering.
pub fn render_roster(
    roster: &[OnShift],
    today: &[Vec<CoverageCode>],
    now_index: Option<usize>,
    cfg: &Config,
) -> String {
    let mut out = String::new();

    for entry in roster {
        let colour = entry
            .tutor
            .major
            .map(role_colour)
            .unwrap_or(Colour::RGB(217, 217, 217));
        let major = entry
            .tutor
            .major
            .map(|r| r.display_name())
            .unwrap_or("Tutor");

        out.push_str(&format!(
            "  {} {} — {}  Here until {}\n",
            colour.paint("●"),
            pad_right(&entry.tutor.name, 22),
            pad_right(&format!("{major}, {}", entry.tutor.academic_class), 32),
            entry.here_until,
        ));
    }

    let mut absent: Vec<Role> = ALL_ROLES
        .iter()
        .copied()
        .filter(|role| !roster.iter().any(|e| e.tutor.major == Some(*role)))
        .collect();
    absent.truncate(cfg.roster_slots.saturating_sub(roster.len()));

    for role in absent {
        let arrival = match now_index {
            Some(index) => engine::next_arrival(&today[role.priority()], index, cfg.open_hour),
            None => engine::first_arrival(&today[role.priority()], cfg.open_hour),
        };
        let note = match arrival {
            NextArrival::Tomorrow => "will return Tomorrow".to_string(),
            at => format!("will return {at}"),
        };
        out.push_str(&format!(
            "  {} {} — {note}\n",
            role_colour(role).paint("○"),
            pad_right(role.display_name(), 22),
        ));
    }
    out
}

/// The full dashboard for one (date, time): title, grid, roster.
pub fn render_board(
    cfg: &Config,
    snapshot: &ScheduleSnapshot,
    date: NaiveDate,
    time: NaiveTime,
) -> AppResult<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        Style::new()
            .bold()
            .paint("Welcome to The Engineering Tutor Center")
    ));

    let weekday = weekday_name(date.weekday());
    let now_index = slot::slot_index(time, cfg.open_hour).ok();

    match snapshot.today_schedule(date.weekday()) {
        Some(today) => {
            out.push_str(&format!("{}\n", bold(&format!("{weekday}'s Schedule"))));
            out.push_str(&render_grid(&today, now_index, cfg.open_hour));
            out.push('\n');

            let mut roster = match now_index {
                Some(index) => engine::on_shift(snapshot, weekday, index, cfg.open_hour),
                None => Vec::new(),
            };
            engine::sort_roster(&mut roster);

            out.push_str(&format!("{}\n", bold("On shift right now")));
            if roster.is_empty() && now_index.is_none() {
                out.push_str("  The center has not opened yet.\n");
            }
            out.push_str(&render_roster(&roster, &today, now_index, cfg));
        }
        None if snapshot.is_empty() => {
            out.push_str("No schedule data yet. Run `tutorboard refresh` once the staffing\nsheets are in place.\n");
        }
        None => {
            out.push_str("No schedule today — see you Monday!\n");
        }
    }
    Ok(out)
}
