use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-session logger: time sessions (Pomodoro optional) and keep a per-day CSV log",
    long_about = None
)]
pub struct Cli {
    /// Override the session log file path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the log directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Run a work session in the foreground (Enter stops it)
    Run {
        /// Pomodoro mode: stop automatically after 25 minutes
        #[arg(long = "pomodoro", help = "Pomodoro mode (25 min auto-stop)")]
        pomodoro: bool,

        /// Music track to loop during a Pomodoro session
        #[arg(long = "music", value_name = "PATH")]
        music: Option<String>,

        /// Playback volume, 0.0 to 1.0
        #[arg(long = "volume", value_name = "VOL")]
        volume: Option<f64>,
    },

    /// Show the per-day session log, most recent day first
    Log,
}
