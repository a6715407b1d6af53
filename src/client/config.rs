//! Client configuration
//!
//! Where the backend lives and under which context path the pages are
//! served. Values come from the builder, the environment
//! (`ROLLBOOK_SERVER_URL`, `ROLLBOOK_CONTEXT_PATH`), or a TOML file, in
//! that order of preference.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    context_path: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("ROLLBOOK_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let context_path = std::env::var("ROLLBOOK_CONTEXT_PATH").unwrap_or_default();
        Self {
            server_url,
            context_path,
        }
    }
}

impl Config {
    /// Create a new configuration from environment or defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        let file: ConfigFile = toml::from_str(&raw)?;

        let mut builder = Self::builder();
        if let Some(url) = file.server_url {
            builder = builder.server_url(url);
        }
        if let Some(path) = file.context_path {
            builder = builder.context_path(path);
        }
        builder.build()
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Deployment prefix under which the pages are served, e.g.
    /// `/student-management`. Empty for a root deployment.
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// Full URL for an API endpoint, e.g. `api_url("/students")`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}/api{}", self.server_url, self.context_path, endpoint)
    }

    /// Page path for client-side navigation, e.g. `page_path("login.html")`
    pub fn page_path(&self, page: &str) -> String {
        format!("{}/{}", self.context_path, page)
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    server_url: Option<String>,
    context_path: Option<String>,
}

impl ConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the context path
    pub fn context_path(mut self, path: impl Into<String>) -> Self {
        self.context_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let server_url = self
            .server_url
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        if server_url.is_empty() {
            return Err(ConfigError::MissingValue("server_url"));
        }
        // Trailing slashes would produce `//api/...` URLs
        let server_url = server_url.trim_end_matches('/').to_string();

        let context_path = self.context_path.unwrap_or_default();
        if !context_path.is_empty() && !context_path.starts_with('/') {
            return Err(ConfigError::InvalidContextPath(context_path));
        }
        let context_path = context_path.trim_end_matches('/').to_string();

        Ok(Config {
            server_url,
            context_path,
        })
    }
}

/// On-disk configuration file shape
#[derive(Debug, Deserialize)]
struct ConfigFile {
    server_url: Option<String>,
    context_path: Option<String>,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {0}: {1}")]
    Io(String, #[source] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("context path must start with '/': {0}")]
    InvalidContextPath(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
