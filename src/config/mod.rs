use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Ambient application configuration (YAML file in the user's dotdir).
///
/// Distinct from the persisted ledger `Settings`: the config locates the
/// storage, the settings record lives inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));
            appdata.join("worklog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".worklog")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Full path of the default storage database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Create the configuration directory, config file, and storage file.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
            };
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(db_path)
    }
}
