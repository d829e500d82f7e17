use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the log directory under the user's document area
pub fn handle() -> AppResult<()> {
    let log_file = Config::init_all()?;

    println!("⚙️  Initializing worklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗒️  Session log : {}", log_file.display());

    messages::success("worklog initialization completed!");
    Ok(())
}
