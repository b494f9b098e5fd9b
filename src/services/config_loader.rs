use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "icepc.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl FetchConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Offset of the club's local time from UTC.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_contests_csv_url")]
    pub contests_csv_url: String,
    #[serde(default = "default_coders_csv_url")]
    pub coders_csv_url: String,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contests_csv_url: default_contests_csv_url(),
            coders_csv_url: default_coders_csv_url(),
            fetch: FetchConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

fn default_retries() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_utc_offset_minutes() -> i32 {
    6 * 60
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_contests_csv_url() -> String {
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vSXSB-zO1tuSWPCZEgENWdwJJezIyqmlksdwAulBsawNFVekKYlGn6dS0imxMq5qRNjHtB8MUWF0QLX/pub?gid=1861808501&single=true&output=csv".to_string()
}

fn default_coders_csv_url() -> String {
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vS_rvXyZpvU4zsqMZ10-px2NULkBw5rfCTGUD2HHVYDAjUdZuDuxbgjtkjGtIWHD-lPkvHzLjlnC9Tq/pub?gid=1893792376&single=true&output=csv".to_string()
}

pub fn load_site_config(config_path: &Path) -> Result<SiteConfig, ConfigError> {
    if !config_path.exists() {
        info!("{} not found, using defaults", config_path.display());
        return Ok(SiteConfig::default());
    }

    let raw = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.display().to_string(),
        source,
    })?;

    let config = toml::from_str::<SiteConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: config_path.display().to_string(),
        source,
    })?;

    info!("Loaded config from {}", config_path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_site_config(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.fetch.retries, 3);
        assert_eq!(config.schedule.utc_offset_minutes, 360);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contests_csv_url = \"http://localhost/c.csv\"").unwrap();
        writeln!(file, "[fetch]\nretries = 5").unwrap();

        let config = load_site_config(file.path()).unwrap();
        assert_eq!(config.contests_csv_url, "http://localhost/c.csv");
        assert_eq!(config.fetch.retries, 5);
        assert_eq!(config.fetch.initial_delay_ms, 1000);
        assert_eq!(config.schedule.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "retries = [").unwrap();
        assert!(matches!(
            load_site_config(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
