use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::schedule::{cache, slot};
use crate::ui::board::render_grid;
use crate::utils::time::{resolve_now, weekday_name};
use chrono::Datelike;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (date, time) = resolve_now(cli.on.as_deref(), cli.at.as_deref())?;
    let snapshot = cache::load_or_refresh(cfg)?;

    match snapshot.today_schedule(date.weekday()) {
        Some(today) => {
            let now_index = slot::slot_index(time, cfg.open_hour).ok();
            println!("{}'s coverage:", weekday_name(date.weekday()));
            print!("{}", render_grid(&today, now_index, cfg.open_hour));
        }
        None if snapshot.is_empty() => println!("No schedule data yet."),
        None => println!("No schedule today."),
    }
    Ok(())
}
