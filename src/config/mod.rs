use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the three exported sheet CSVs.
    pub source_dir: String,
    /// Directory for the two flat cache files.
    pub data_dir: String,
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    #[serde(default = "default_roster_slots")]
    pub roster_slots: usize,
}

fn default_open_hour() -> u32 {
    7
}
fn default_roster_slots() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            source_dir: dir.join("schedule").to_string_lossy().to_string(),
            data_dir: dir.join("data").to_string_lossy().to_string(),
            open_hour: default_open_hour(),
            roster_slots: default_roster_slots(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tutorboard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tutorboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tutorboard.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Invalid config file ({e}); using defaults"));
                Self::default()
            }),
            Err(e) => {
                warning(format!("Failed to read config file ({e}); using defaults"));
                Self::default()
            }
        }
    }

    /// Initialize the configuration file and the source/data directories
    pub fn init_all(custom_source: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Source dir: user provided or default
        let source_dir = if let Some(source) = custom_source {
            let p = std::path::Path::new(&source);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("schedule")
        };

        let config = Config {
            source_dir: source_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&source_dir)?;
        fs::create_dir_all(&config.data_dir)?;

        println!("✅ Source dir:  {:?}", source_dir);
        println!("✅ Data dir:    {:?}", config.data_dir);

        Ok(())
    }
}
