// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

/// Reminder service configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the reminder service (e.g. `http://localhost:8080/api/v1`).
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("remcal-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
