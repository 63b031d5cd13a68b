// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use remcal_core::{ApiConfig, WeekStart};

pub const APP_NAME: &str = "remcal";

const REMCAL_CONFIG_ENV: &str = "REMCAL_CONFIG";

/// Locate and parse the configuration file.
///
/// Priority: `--config` flag, then the `REMCAL_CONFIG` environment
/// variable, then `<config dir>/remcal/config.toml`.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(REMCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the remcal client.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Reminder service connection settings.
    pub api: ApiConfig,

    /// First day of the calendar week.
    #[serde(default)]
    pub week_start: WeekStart,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
