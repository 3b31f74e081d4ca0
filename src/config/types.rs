use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::view::FetchMode;

/// Demo collection endpoint used when nothing is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What the list view fetches and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Resource endpoint (e.g., "https://jsonplaceholder.typicode.com/posts").
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Optional single-resource id appended as `{endpoint}/{param}`.
    #[serde(default)]
    pub param: Option<String>,
    /// Re-fetch policy: "immediate", "memoized" or "manual".
    #[serde(default)]
    pub mode: FetchMode,
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Log output for the terminal front end, where stdout belongs to the UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Append logs to this file. Without it the terminal UI logs nowhere.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_agent() -> String {
    format!("feedview/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            param: None,
            mode: FetchMode::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
