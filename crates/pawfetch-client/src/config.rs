//! Client configuration for the adoption service.

use anyhow::{Context, Result};

/// Production adoption service address.
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

const BASE_URL_ENV: &str = "PAWFETCH_BASE_URL";

/// Adoption service configuration.
#[derive(Debug, Clone)]
pub struct AdoptionConfig {
    pub base_url: String,
}

impl AdoptionConfig {
    /// Creates a config from the environment.
    ///
    /// Base URL resolution order:
    /// 1. `PAWFETCH_BASE_URL` environment variable
    /// 2. `explicit_base_url` parameter (from the embedding application)
    /// 3. Production default
    ///
    /// # Errors
    /// Returns an error if an override is not a well-formed URL.
    pub fn from_env(explicit_base_url: Option<&str>) -> Result<Self> {
        let base_url = resolve_base_url(explicit_base_url, BASE_URL_ENV, DEFAULT_BASE_URL)?;
        Ok(Self { base_url })
    }
}

/// Resolves a base URL with precedence: env > explicit > default.
fn resolve_base_url(explicit: Option<&str>, env_var: &str, default_url: &str) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var(env_var) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Try explicit value
    if let Some(explicit_url) = explicit {
        let trimmed = explicit_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Default
    Ok(default_url.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid adoption service base URL: {url}"))?;
    Ok(())
}
