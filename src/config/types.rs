use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Connection settings for the RTPI API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without the endpoint name (e.g., "https://data.smartdublin.ie/cgi-bin/rtpi").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Operator code passed with every request (e.g., "bac" for Dublin Bus).
    #[serde(default = "default_operator")]
    pub operator: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Startup defaults for the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Route selected when the application starts.
    #[serde(default)]
    pub route: Option<String>,
}

fn default_base_url() -> String {
    "https://data.smartdublin.ie/cgi-bin/rtpi".to_string()
}

fn default_operator() -> String {
    "bac".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            operator: default_operator(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
