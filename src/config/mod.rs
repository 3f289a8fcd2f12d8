use crate::api::DEFAULT_API_URL;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub credentials_file: String,
    pub clock_check: bool,
    pub clock_tolerance_minutes: i64,
    pub ntp_server: String,
    pub snark_probability: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials_file: Self::credentials_path().to_string_lossy().to_string(),
            clock_check: true,
            clock_tolerance_minutes: 10,
            ntp_server: "pool.ntp.org:123".to_string(),
            snark_probability: 0.5,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// `~/.rtimesheet`, falling back to the working directory when no home
    /// directory can be resolved.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesheet")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    pub fn credentials_path() -> PathBuf {
        Self::config_dir().join("credentials.enc")
    }

    /// Credential file location with `~/` expanded.
    pub fn credentials_location(&self) -> PathBuf {
        expand_tilde(&self.credentials_file)
    }

    /// Load from `path` (or the default location). A missing file yields
    /// defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration, creating the parent directory if needed.
    pub fn save(&self, path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.snark_probability) {
            return Err(AppError::Config(format!(
                "snark_probability must be between 0 and 1, got {}",
                self.snark_probability
            )));
        }
        if self.clock_tolerance_minutes < 0 {
            return Err(AppError::Config(
                "clock_tolerance_minutes must not be negative".into(),
            ));
        }
        Ok(())
    }
}
