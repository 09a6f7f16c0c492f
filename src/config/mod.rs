use crate::errors::{AppError, AppResult};
use crate::utils::formatting::parse_duration;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_standard_shift")]
    pub standard_shift: String,
    #[serde(default = "default_holiday_region")]
    pub holiday_region: String,
    #[serde(default)]
    pub extra_holidays: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_standard_shift() -> String {
    "7h 42m".to_string()
}
fn default_holiday_region() -> String {
    "IT".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            standard_shift: default_standard_shift(),
            holiday_region: default_holiday_region(),
            extra_holidays: Vec::new(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshiftlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rshiftlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftlog.conf")
    }

    /// Return the full path of the default record store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("registro_orari.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(?cfg, "loaded configuration");
        Ok(cfg)
    }

    /// Store path with `~/` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Standard shift in minutes.
    pub fn standard_shift_minutes(&self) -> AppResult<i64> {
        let mins = parse_duration(&self.standard_shift).map_err(|_| {
            AppError::Config(format!(
                "invalid standard_shift '{}' (expected e.g. 7h 42m)",
                self.standard_shift
            ))
        })?;
        if mins <= 0 {
            return Err(AppError::Config(format!(
                "standard_shift must be positive, got '{}'",
                self.standard_shift
            )));
        }
        Ok(mins)
    }

    pub fn extra_holiday_dates(&self) -> AppResult<Vec<NaiveDate>> {
        self.extra_holidays
            .iter()
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map_err(|_| AppError::Config(format!("invalid extra holiday '{s}'")))
            })
            .collect()
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store name: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
