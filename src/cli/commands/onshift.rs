use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::schedule::{cache, engine, slot};
use crate::utils::formatting::pad_right;
use crate::utils::time::{resolve_now, weekday_name};
use chrono::Datelike;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (date, time) = resolve_now(cli.on.as_deref(), cli.at.as_deref())?;
    let snapshot = cache::load_or_refresh(cfg)?;

    // Before opening hours there is nobody on shift, not an error.
    let Ok(now_index) = slot::slot_index(time, cfg.open_hour) else {
        println!("The center has not opened yet.");
        return Ok(());
    };

    let weekday = weekday_name(date.weekday());
    let mut roster = engine::on_shift(&snapshot, weekday, now_index, cfg.open_hour);
    engine::sort_roster(&mut roster);

    if roster.is_empty() {
        println!("Nobody is on shift right now.");
        return Ok(());
    }

    for entry in &roster {
        let major = entry
            .tutor
            .major
            .map(|r| r.abbr())
            .unwrap_or("—");
        println!(
            "{} {} {} here until {}",
            pad_right(&entry.tutor.name, 22),
            pad_right(major, 5),
            pad_right(&entry.tutor.academic_class, 10),
            entry.here_until,
        );
    }
    Ok(())
}
