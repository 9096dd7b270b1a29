use crate::core::calculator::proximity::DEFAULT_RADIUS_MILES;
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const APP_DIR: &str = ".rcharitymap";
pub const CONFIG_FILE: &str = "rcharitymap.conf";
pub const DATABASE_FILE: &str = "rcharitymap.sqlite";

/// Geographic center of the contiguous United States.
pub const FALLBACK_LATITUDE: f64 = 39.8283;
pub const FALLBACK_LONGITUDE: f64 = -98.5795;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_radius")]
    pub default_radius_miles: f64,
    #[serde(default = "default_exclude_past")]
    pub exclude_past: bool,
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
    #[serde(default = "default_resolver_url")]
    pub resolver_url: String,
    #[serde(default = "default_resolver_limit")]
    pub resolver_limit: usize,
    #[serde(default = "default_resolver_timeout")]
    pub resolver_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_host")]
    pub default_host: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_radius() -> f64 {
    DEFAULT_RADIUS_MILES
}
fn default_exclude_past() -> bool {
    true
}
fn default_fallback_latitude() -> f64 {
    FALLBACK_LATITUDE
}
fn default_fallback_longitude() -> f64 {
    FALLBACK_LONGITUDE
}
fn default_resolver_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}
fn default_resolver_limit() -> usize {
    5
}
fn default_resolver_timeout() -> u64 {
    10
}
fn default_user_agent() -> String {
    format!("rcharitymap/{}", env!("CARGO_PKG_VERSION"))
}
fn default_host() -> String {
    "Unknown host".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_radius_miles: default_radius(),
            exclude_past: default_exclude_past(),
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
            resolver_url: default_resolver_url(),
            resolver_limit: default_resolver_limit(),
            resolver_timeout_secs: default_resolver_timeout(),
            user_agent: default_user_agent(),
            default_host: default_host(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rcharitymap`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        crate::core::calculator::proximity::validate_radius(self.default_radius_miles)?;
        self.fallback_coordinate()?;
        if self.resolver_limit == 0 {
            return Err(AppError::Config("resolver_limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Documented fallback reference coordinate.
    pub fn fallback_coordinate(&self) -> AppResult<Coordinate> {
        Coordinate::new(self.fallback_latitude, self.fallback_longitude)
    }

    /// Initialize configuration and database directories for `self.database`
    /// (already resolved by `run()`). Returns the database path.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let db_path = PathBuf::from(&self.database);

        if !is_test {
            self.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
