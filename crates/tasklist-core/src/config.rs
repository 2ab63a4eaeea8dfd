//! Client Configuration
//!
//! Where the tasks resource lives and how chatty the logs are.

use log::LevelFilter;
use reqwest::Url;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::TaskId;

/// Tasks resource of the reference backend on its default port
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/tasks";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Base resource URL and log level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct ApiConfig {
    base_url: String,
    log_level: LevelFilter,
}

#[derive(Deserialize)]
struct RawConfig {
    base_url: Option<String>,
    log_level: Option<String>,
}

impl TryFrom<RawConfig> for ApiConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        ApiConfig::from_overrides(raw.base_url.as_deref(), raw.log_level.as_deref())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ApiConfig {
    /// Validate an absolute http(s) base URL. A trailing slash is dropped.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.cannot_be_a_base() {
            return Err(invalid("url cannot be a base"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed"));
        }

        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = level
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        Ok(self)
    }

    /// Configuration baked in at build time via `TASKLIST_API_BASE` and `TASKLIST_LOG`.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_overrides(option_env!("TASKLIST_API_BASE"), option_env!("TASKLIST_LOG"))
    }

    /// Defaults with optional overrides applied on top.
    pub fn from_overrides(base_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = base_url {
            config = config.with_base_url(url)?;
        }
        if let Some(level) = log_level {
            config = config.with_log_level(level)?;
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// `GET`/`POST` target
    pub fn collection_url(&self) -> String {
        self.base_url.clone()
    }

    /// `GET`/`PUT`/`DELETE` target for one task
    pub fn item_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}
