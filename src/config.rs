use std::time::Duration;

use crate::error::{ApiError, Result};

/// Default public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";

const TOKEN_ENV: &str = "CROWDIN_PERSONAL_TOKEN";
const ORGANIZATION_ENV: &str = "CROWDIN_ORGANIZATION";
const BASE_URL_ENV: &str = "CROWDIN_BASE_URL";

/// Account credentials and endpoint selection
#[derive(Clone)]
pub struct Credentials {
    /// Personal access token sent as a bearer token
    pub token: String,
    /// Enterprise organization; selects `https://{organization}.api.crowdin.com/api/v2`
    pub organization: Option<String>,
    /// Explicit endpoint override, takes precedence over `organization`
    pub base_url: Option<String>,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            organization: None,
            base_url: None,
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Read credentials from `CROWDIN_PERSONAL_TOKEN`, `CROWDIN_ORGANIZATION`
    /// and `CROWDIN_BASE_URL`
    ///
    /// Returns `ApiError::InvalidConfig` if the token is missing or empty
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::InvalidConfig {
                message: format!("{} is not set", TOKEN_ENV),
            })?;

        Ok(Self {
            token,
            organization: non_empty_env(ORGANIZATION_ENV),
            base_url: non_empty_env(BASE_URL_ENV),
        })
    }

    /// Resolve the API root, without a trailing slash
    pub fn api_url(&self) -> String {
        if let Some(base_url) = &self.base_url {
            return base_url.trim_end_matches('/').to_string();
        }
        match &self.organization {
            Some(org) => format!("https://{}.api.crowdin.com/api/v2", org),
            None => DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("organization", &self.organization)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Transport-level settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout; `None` disables it
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: format!("crowdin-source-files/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
