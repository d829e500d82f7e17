use std::path::Path;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::log_view;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let groups = store::load_all(Path::new(&cfg.log_file))?;
    log_view::render(&groups);
    Ok(())
}
