//! Quote client implementation.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sakata_traits::{FetchError, Fundamentals, QuoteSource};
use thiserror::Error;

use crate::retry::RetryPolicy;
use crate::types::QuotePayload;

/// Default exchange suffix appended to bare numeric codes.
const DEFAULT_SUFFIX: &str = ".T";

/// Per-attempt request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration errors raised while constructing a [`QuoteClient`].
#[derive(Debug, Error)]
pub enum QuoteConfigError {
    /// The `QUOTE_API_URL` environment variable is not set.
    #[error("QUOTE_API_URL environment variable not set")]
    MissingBaseUrl,
}

/// Why one fetch attempt failed. Internal; the last one is flattened into
/// the [`FetchError`] reason once the retry budget is spent.
#[derive(Debug, Error)]
enum AttemptError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream returned an empty body")]
    EmptyBody,
    #[error("unparseable payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("payload carries no usable price")]
    NoPrice,
}

/// Client for the per-issue quote-summary endpoint.
///
/// Fetches `{base_url}/{symbol}{suffix}` and extracts the fundamentals
/// fields by name. Retry/backoff is governed by a [`RetryPolicy`]; there
/// is no caching and no shared mutable state.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: String,
    suffix: String,
    policy: RetryPolicy,
}

impl QuoteClient {
    /// Create a client against the given quote-summary base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
            policy: RetryPolicy::default(),
        }
    }

    /// Create a client from the `QUOTE_API_URL` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self, QuoteConfigError> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = env::var("QUOTE_API_URL").map_err(|_| QuoteConfigError::MissingBaseUrl)?;
        Ok(Self::new(base_url))
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the exchange suffix appended to bare codes.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Build the request URL for a bare symbol.
    fn url(&self, symbol: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url.trim_end_matches('/'),
            symbol,
            self.suffix
        )
    }

    /// One attempt: request, status check, parse, usable-price check.
    async fn attempt(&self, url: &str) -> Result<QuotePayload, AttemptError> {
        let response = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(AttemptError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(AttemptError::Transport)?;
        if body.trim().is_empty() {
            return Err(AttemptError::EmptyBody);
        }

        let payload: QuotePayload = serde_json::from_str(&body)?;
        if !payload.has_usable_price() {
            return Err(AttemptError::NoPrice);
        }

        Ok(payload)
    }
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch(&self, symbol: &str) -> Result<Fundamentals, FetchError> {
        let url = self.url(symbol);
        let attempts = self.policy.max_attempts.max(1);

        if let Some(delay) = self.policy.initial_delay() {
            tokio::time::sleep(delay).await;
        }

        let mut last_failure = String::new();
        for attempt in 0..attempts {
            if attempt > 0 {
                tokio::time::sleep(self.policy.delay_after_attempt(attempt - 1)).await;
            }

            match self.attempt(&url).await {
                Ok(payload) => return Ok(payload.into()),
                Err(err) => {
                    tracing::debug!(
                        symbol,
                        attempt = attempt + 1,
                        attempts,
                        error = %err,
                        "quote attempt failed"
                    );
                    last_failure = err.to_string();
                }
            }
        }

        Err(FetchError {
            symbol: symbol.to_string(),
            attempts,
            reason: last_failure,
        })
    }
}
