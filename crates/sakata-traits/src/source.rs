//! Data-source trait seams consumed by the pipeline.

use async_trait::async_trait;

use crate::error::{FetchError, UniverseError};
use crate::types::{Fundamentals, Issue};

/// Fetches one issue's fundamentals from the quote upstream.
///
/// Implementations own their retry/backoff policy; a returned
/// [`FetchError`] means every attempt was exhausted. No caching: repeated
/// calls for the same symbol hit the upstream again.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch fundamentals for a bare exchange-local symbol.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] once the retry budget is spent.
    async fn fetch(&self, symbol: &str) -> Result<Fundamentals, FetchError>;
}

/// Produces the ordered, deduplicated list of issues to evaluate.
#[async_trait]
pub trait UniverseSource: Send + Sync {
    /// Resolve the target universe.
    ///
    /// The returned issues are deduplicated by symbol, preserving first
    /// occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError`] if the listing cannot be located or no
    /// rows survive the code-format filter. Universe errors are fatal to
    /// the run.
    async fn fetch_universe(&self) -> Result<Vec<Issue>, UniverseError>;
}
