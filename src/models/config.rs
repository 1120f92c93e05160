// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// WordPress REST API connection settings
    #[serde(default)]
    pub wordpress: WordPressConfig,

    /// Search box behavior and highlighting
    #[serde(default)]
    pub search: SearchConfig,

    /// Public site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// `WP_API_URL` wins over `WORDPRESS_API_URL`. Blank values are ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_url) = non_blank("WP_API_URL").or_else(|| non_blank("WORDPRESS_API_URL")) {
            self.wordpress.api_url = api_url.trim().to_string();
        }
        if let Some(site_url) = non_blank("SITE_URL") {
            self.site.url = site_url.trim().to_string();
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.wordpress.timeout_secs == 0 {
            return Err(AppError::validation("wordpress.timeout_secs must be > 0"));
        }
        if !(1..=100).contains(&self.wordpress.per_page) {
            return Err(AppError::validation(
                "wordpress.per_page must be between 1 and 100",
            ));
        }
        if self.wordpress.user_agent.trim().is_empty() {
            return Err(AppError::validation("wordpress.user_agent is empty"));
        }
        if self.wordpress.is_configured() {
            Url::parse(self.wordpress.api_url.trim()).map_err(|e| {
                AppError::validation(format!("wordpress.api_url is not a valid URL: {e}"))
            })?;
        }
        if self.search.debounce_ms == 0 {
            return Err(AppError::validation("search.debounce_ms must be > 0"));
        }
        if self.search.excerpt_length == 0 {
            return Err(AppError::validation("search.excerpt_length must be > 0"));
        }
        Url::parse(&self.site.url)
            .map_err(|e| AppError::validation(format!("site.url is not a valid URL: {e}")))?;
        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace" | "off"
        ) {
            return Err(AppError::validation(format!(
                "logging.level '{}' is not a known level",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// WordPress REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPressConfig {
    /// Base URL of the REST API, e.g. `https://cms.example.com/wp-json/wp/v2`.
    /// Empty means unconfigured: searches return nothing.
    #[serde(default)]
    pub api_url: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Results requested per search
    #[serde(default = "defaults::per_page")]
    pub per_page: u32,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl WordPressConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty()
    }

    /// API base without a trailing slash, or `None` when unconfigured.
    pub fn base_url(&self) -> Option<&str> {
        let base = self.api_url.trim().trim_end_matches('/');
        (!base.is_empty()).then_some(base)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for WordPressConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            timeout_secs: defaults::timeout(),
            per_page: defaults::per_page(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Search box behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is searched
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,

    /// CSS class on `<mark>`; empty for a bare tag
    #[serde(default = "defaults::mark_class")]
    pub mark_class: String,

    /// Maximum excerpt length in result listings
    #[serde(default = "defaults::excerpt_length")]
    pub excerpt_length: usize,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::debounce_ms(),
            mark_class: defaults::mark_class(),
            excerpt_length: defaults::excerpt_length(),
        }
    }
}

/// Public site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical origin used for absolute article links
    #[serde(default = "defaults::site_url")]
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: defaults::site_url(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use crate::search::DEFAULT_MARK_CLASS;

    // WordPress defaults
    pub fn timeout() -> u64 {
        15
    }
    pub fn per_page() -> u32 {
        50
    }
    pub fn user_agent() -> String {
        concat!("news-search/", env!("CARGO_PKG_VERSION")).into()
    }

    // Search defaults
    pub fn debounce_ms() -> u64 {
        300
    }
    pub fn mark_class() -> String {
        DEFAULT_MARK_CLASS.into()
    }
    pub fn excerpt_length() -> usize {
        160
    }

    // Site defaults
    pub fn site_url() -> String {
        "https://example.com".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
