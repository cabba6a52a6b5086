use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ENV_API_TOKEN: &str = "WEEKSHEET_API_TOKEN";
pub const ENV_TEAM_ID: &str = "WEEKSHEET_TEAM_ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_task_link_base")]
    pub task_link_base: String,
    /// Offset of the reporting timezone (weekday bucketing), in minutes
    #[serde(default = "default_reporting_offset")]
    pub reporting_utc_offset_minutes: i32,
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_requests: usize,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_api_base_url() -> String {
    "https://api.clickup.com/api/v2".to_string()
}
fn default_task_link_base() -> String {
    "https://app.clickup.com/t".to_string()
}
fn default_reporting_offset() -> i32 {
    330
}
fn default_max_concurrent() -> usize {
    8
}
fn default_timeout() -> u64 {
    30
}
fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            team_id: String::new(),
            api_base_url: default_api_base_url(),
            task_link_base: default_task_link_base(),
            reporting_utc_offset_minutes: default_reporting_offset(),
            max_concurrent_requests: default_max_concurrent(),
            request_timeout_secs: default_timeout(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("weeksheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".weeksheet")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("weeksheet.conf")
    }

    /// Config file in use: `--config` override or the default location
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Load the config file, then apply environment overrides.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::resolve_path(custom))?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// `WEEKSHEET_API_TOKEN` / `WEEKSHEET_TEAM_ID` win over the file.
    pub fn apply_env(&mut self) {
        if let Ok(token) = env::var(ENV_API_TOKEN)
            && !token.trim().is_empty()
        {
            self.api_token = token;
        }
        if let Ok(team) = env::var(ENV_TEAM_ID)
            && !team.trim().is_empty()
        {
            self.team_id = team;
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Required keys that are empty or out of range
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_token.trim().is_empty() {
            missing.push("api_token");
        }
        if self.team_id.trim().is_empty() {
            missing.push("team_id");
        }
        if self.max_concurrent_requests == 0 {
            missing.push("max_concurrent_requests");
        }
        if !(-14 * 60..=14 * 60).contains(&self.reporting_utc_offset_minutes) {
            missing.push("reporting_utc_offset_minutes");
        }
        missing
    }

    /// Copy safe to print: the token is masked except for its last 4 chars.
    pub fn masked(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.api_token.is_empty() {
            let chars: Vec<char> = cfg.api_token.chars().collect();
            let keep = chars.len().min(4);
            let tail: String = chars[chars.len() - keep..].iter().collect();
            cfg.api_token = format!("****{tail}");
        }
        cfg
    }
}
