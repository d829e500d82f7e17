use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

const APP_DIR_NAME: &str = "WorkLogger";
const LOG_FILE_NAME: &str = "work_logs.csv";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_file: String,
    #[serde(default)]
    pub music_track: Option<String>,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    0.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_path().to_string_lossy().to_string(),
            music_track: None,
            volume: default_volume(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Default location of the session log: a per-app folder under the
    /// user's document area, falling back to the executable's own directory
    /// when that folder cannot be resolved or created.
    pub fn log_file_path() -> PathBuf {
        Self::data_dir().join(LOG_FILE_NAME)
    }

    /// Resolve the directory holding the session log, creating the
    /// documents-area folder on the way. A resolution or creation failure
    /// switches to the executable's own directory.
    pub fn data_dir() -> PathBuf {
        if let Some(docs) = dirs::document_dir() {
            let dir = docs.join(APP_DIR_NAME);
            if fs::create_dir_all(&dir).is_ok() {
                return dir;
            }
        }
        Self::exe_dir()
    }

    fn exe_dir() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file and the log directory
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        // data_dir() already fell back to the exe dir if the documents area
        // was unusable; an error here means even the fallback is unwritable.
        let data_dir = Self::data_dir();
        fs::create_dir_all(&data_dir).map_err(|e| AppError::DirectoryCreation {
            path: data_dir.display().to_string(),
            source: e,
        })?;

        Ok(data_dir.join(LOG_FILE_NAME))
    }
}
