use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
            println!(
                "📄 Current configuration ({}):\n",
                Config::config_file().display()
            );
            println!("{}", yaml);
        } else {
            messages::info("Nothing to do. Try 'worklog config --print'.");
        }
    }
    Ok(())
}
