//! HTTP facade over the adoption service.
//!
//! The client is stateless apart from the transport's cookie jar: the
//! session cookie set by `/auth/login` is stored there and replayed
//! automatically on every subsequent request. Failures are returned to the
//! caller unchanged; there are no retries and no caching.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use pawfetch_types::{Dog, Identity, MatchResult, SearchPage};

use crate::config::AdoptionConfig;
use crate::error::{ApiError, ApiResult};

/// Standard User-Agent header for pawfetch API requests.
const USER_AGENT: &str = concat!("pawfetch/", env!("CARGO_PKG_VERSION"));

/// Adoption service API client.
pub struct AdoptionClient {
    config: AdoptionConfig,
    http: reqwest::Client,
}

impl AdoptionClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the
    ///   production service.
    /// - At runtime, panics if `PAWFETCH_BLOCK_REAL_API=1` and `base_url` is
    ///   the production service.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Use `PAWFETCH_BASE_URL` or the config to point to a mock server.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: AdoptionConfig) -> Result<Self> {
        // Compile-time guard for unit tests
        #[cfg(test)]
        if config.base_url == crate::config::DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production adoption service!\n\
                 Set PAWFETCH_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        // Runtime guard for integration tests (set PAWFETCH_BLOCK_REAL_API=1 in test harness)
        #[cfg(not(test))]
        if std::env::var("PAWFETCH_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && config.base_url == crate::config::DEFAULT_BASE_URL
        {
            panic!(
                "PAWFETCH_BLOCK_REAL_API=1 but trying to use the production adoption service!\n\
                 Set PAWFETCH_BASE_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    /// Logs in with the given name and email.
    ///
    /// On success the service sets the session cookie (captured by the
    /// cookie jar) and this returns whatever body it sent back, untouched.
    pub async fn login(&self, name: &str, email: &str) -> ApiResult<Identity> {
        let request = LoginRequest { name, email };
        let url = self.url("/auth/login");
        let body = self
            .send("POST", "/auth/login", self.http.post(url).json(&request))
            .await?;
        Ok(lenient_json(&body))
    }

    /// Invalidates the current session on the service side.
    pub async fn logout(&self) -> ApiResult<()> {
        let url = self.url("/auth/logout");
        self.send("POST", "/auth/logout", self.http.post(url))
            .await?;
        Ok(())
    }

    /// Searches for dogs, forwarding `query` as the query string untouched.
    ///
    /// Filter/sort/pagination fields are owned by the service; pass whatever
    /// it understands (e.g. `&[("breeds", "Akita"), ("size", "25")]`).
    pub async fn search_dogs<Q>(&self, query: &Q) -> ApiResult<SearchPage>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url("/dogs/search");
        let body = self
            .send("GET", "/dogs/search", self.http.get(url).query(query))
            .await?;
        decode("/dogs/search", &body)
    }

    /// Returns every breed name known to the service.
    pub async fn breeds(&self) -> ApiResult<Vec<String>> {
        self.get("/dogs/breeds").await
    }

    /// Fetches the full record for each of the given dog IDs.
    ///
    /// Records come back in service-defined order, not input order.
    pub async fn dogs_by_id(&self, ids: &[String]) -> ApiResult<Vec<Dog>> {
        self.post("/dogs", ids).await
    }

    /// Asks the service to pick a single match from the given dog IDs.
    pub async fn match_dog(&self, ids: &[String]) -> ApiResult<MatchResult> {
        self.post("/dogs/match", ids).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.send("GET", path, self.http.get(self.url(path))).await?;
        decode(path, &body)
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.http.post(self.url(path)).json(body);
        let body = self.send("POST", path, builder).await?;
        decode(path, &body)
    }

    /// Sends a request and returns the raw body of a successful response.
    async fn send(
        &self,
        method: &str,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> ApiResult<String> {
        debug!(method, path, "sending adoption service request");

        let response = builder.send().await.map_err(ApiError::network)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;

        if !status.is_success() {
            warn!(
                method,
                path,
                status = status.as_u16(),
                "adoption service request failed"
            );
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        Ok(body)
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    name: &'a str,
    email: &'a str,
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|err| ApiError::decode(path, &err))
}

/// Permissive body handling for service-owned payloads: JSON when it parses,
/// the raw text as a JSON string otherwise, `null` for an empty body.
fn lenient_json(body: &str) -> Identity {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| serde_json::Value::String(trimmed.to_string()))
}
