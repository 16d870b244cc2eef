use crate::config::Config;
use crate::errors::AppResult;
use crate::schedule::cache;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let snapshot = cache::refresh(cfg)?;
    success(format!(
        "Schedule refreshed: {} tutors, {} weekday grids",
        snapshot.tutors.len(),
        snapshot.grids.len()
    ));
    Ok(())
}
