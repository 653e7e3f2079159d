use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Connection settings for the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagementConfig {
    /// Base URL of the management API (e.g. `https://api.contentful.com`).
    pub api_base_url: String,
    /// Personal access or OAuth token sent as a bearer token.
    pub access_token: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ManagementConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.contentful.com".to_string(),
            access_token: String::new(),
            timeout_secs: 60,
            user_agent: concat!("spacefetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ManagementConfig {
    /// Creates a config for the default API host with the given token.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Checks that the config can be used to issue requests.
    pub fn validate(&self) -> ClientResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ClientError::Config("api_base_url is empty".to_string()));
        }
        if self.access_token.trim().is_empty() {
            return Err(ClientError::Config("access_token is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub(crate) fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
