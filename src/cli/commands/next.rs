use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::schedule::{cache, engine, slot};
use crate::utils::time::resolve_now;
use chrono::Datelike;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Next { role } = &cli.command else {
        return Ok(());
    };
    let role = Role::from_abbr(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

    let (date, time) = resolve_now(cli.on.as_deref(), cli.at.as_deref())?;
    let snapshot = cache::load_or_refresh(cfg)?;

    let Some(today) = snapshot.today_schedule(date.weekday()) else {
        println!("No schedule today.");
        return Ok(());
    };

    let row = &today[role.priority()];
    let arrival = match slot::slot_index(time, cfg.open_hour) {
        Ok(now_index) => engine::next_arrival(row, now_index, cfg.open_hour),
        Err(_) => engine::first_arrival(row, cfg.open_hour),
    };
    println!("{} {}", role.display_name(), arrival);
    Ok(())
}
