//! Process configuration
//!
//! Loaded once from environment variables (and an optional `.env`) at
//! startup. The theme is published process-wide through [`init`] and only
//! read afterwards.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ConfigError::Invalid(format!(
                "CAMPUS_THEME must be 'dark' or 'light', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Visual theme for every rendered view
    pub theme: Theme,
    /// Name used in the assistant's greeting
    pub student_name: String,
    /// Default output path for `report`
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            student_name: "John".to_string(),
            report_path: PathBuf::from("campus-report.md"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let theme = match lookup("CAMPUS_THEME") {
            Some(value) => value.parse()?,
            None => defaults.theme,
        };

        let student_name = lookup("CAMPUS_STUDENT_NAME")
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or(defaults.student_name);

        Ok(Config {
            theme,
            student_name,
            report_path: lookup("CAMPUS_REPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_path),
        })
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Publish the theme for the rest of the process. Later calls are ignored.
pub fn init(config: &Config) -> Theme {
    *THEME.get_or_init(|| config.theme)
}

pub fn theme() -> Theme {
    THEME.get().copied().unwrap_or_default()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
