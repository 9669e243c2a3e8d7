//! Client configuration

use serde::{Deserialize, Serialize};

use crate::sdk::errors::{BatchError, Result};

/// Default Graph API root
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// OAuth access token supplied by the host session layer
    pub access_token: String,
    /// Graph API root URL
    pub base_url: String,
    /// API version segment, e.g. `v19.0` (optional)
    pub api_version: Option<String>,
    /// Settings
    pub settings: ClientSettings,
}

/// Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self { timeout: 30 }
    }
}

impl ClientConfig {
    /// Configuration with the default Graph root and settings
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: None,
            settings: ClientSettings::default(),
        }
    }

    /// Configuration from `GRAPH_ACCESS_TOKEN`, `GRAPH_API_BASE_URL` and
    /// `GRAPH_API_VERSION` environment variables
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("GRAPH_ACCESS_TOKEN").map_err(|_| {
            BatchError::Config(
                "No access token configured. Please set the GRAPH_ACCESS_TOKEN environment variable."
                    .to_string(),
            )
        })?;

        let mut builder = ConfigBuilder::new().access_token(&access_token);

        if let Ok(base_url) = std::env::var("GRAPH_API_BASE_URL") {
            builder = builder.base_url(&base_url);
        }

        if let Ok(version) = std::env::var("GRAPH_API_VERSION") {
            builder = builder.api_version(&version);
        }

        Ok(builder.build())
    }
}

/// Configuration builder
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::new(String::new()),
        }
    }

    /// Access token
    pub fn access_token(mut self, token: &str) -> Self {
        self.config.access_token = token.to_string();
        self
    }

    /// Graph API root URL
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// API version segment, e.g. `v19.0`
    pub fn api_version(mut self, version: &str) -> Self {
        self.config.api_version = Some(version.to_string());
        self
    }

    /// Request timeout in seconds
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.settings.timeout = timeout;
        self
    }

    /// Configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
