//! Error types shared across the sakata crates.
//!
//! Per-issue valuation failures are not errors: they are modelled as
//! [`crate::RejectionKind`] values and counted. The types here cover the
//! two fetch boundaries that can genuinely fail — the per-issue quote
//! fetch (recoverable, becomes a rejection) and the universe fetch
//! (fatal to the run).

use thiserror::Error;

/// All retry attempts for one issue's quote fetch were exhausted.
///
/// Carries the symbol so the caller can classify the failure without
/// tracking it separately. The quote client never caches partial results;
/// an exhausted fetch means nothing usable arrived.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("quote fetch for {symbol} failed after {attempts} attempt(s): {reason}")]
pub struct FetchError {
    /// Exchange-local identifier of the issue that failed.
    pub symbol: String,
    /// Number of attempts that were made.
    pub attempts: u32,
    /// Description of the last attempt's failure.
    pub reason: String,
}

/// The universe listing could not be resolved into issues.
///
/// Any of these is fatal: the run exits non-zero and produces no partial
/// report.
#[derive(Debug, Error)]
pub enum UniverseError {
    /// The listing page request failed at the transport level.
    #[error("listing request failed: {0}")]
    Request(String),
    /// The listing page returned a non-success status.
    #[error("listing upstream returned status {0}")]
    Status(u16),
    /// No table in the listing page looked like a constituent table.
    #[error("constituent table not found in listing page")]
    TableNotFound,
    /// A table was found, but no rows survived the code-format filter.
    #[error("no rows matched the fixed-width numeric code format")]
    NoValidRows,
}
