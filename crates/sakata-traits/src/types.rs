//! Domain types shared across the sakata pipeline.

use serde::Serialize;

/// One constituent of the target universe.
///
/// Issues are produced once by a [`crate::UniverseSource`] and are read-only
/// afterwards. The `symbol` is the exchange-local identifier: a fixed-width
/// numeric code such as `"7203"`, without any exchange suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Exchange-local identifier (fixed-width numeric code).
    pub symbol: String,
    /// Human-readable issue name as published in the listing.
    pub display_name: String,
}

impl Issue {
    /// Create a new issue.
    #[must_use]
    pub fn new(symbol: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
        }
    }
}

/// Raw fundamentals snapshot for a single issue.
///
/// Every field is optional: the upstream schema is opaque and routinely
/// omits fields per issue. A `Fundamentals` value lives only for the
/// duration of one evaluation and is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fundamentals {
    /// Last traded price.
    pub price: Option<f64>,
    /// Forward (projected) earnings per share.
    pub forward_eps: Option<f64>,
    /// Trailing twelve-month earnings per share.
    pub trailing_eps: Option<f64>,
    /// Trailing price-to-earnings ratio.
    pub trailing_pe: Option<f64>,
    /// Book value per share.
    pub book_value: Option<f64>,
    /// Price-to-book ratio.
    pub price_to_book: Option<f64>,
    /// Year-over-year earnings growth, as a fraction (0.10 = 10%).
    pub earnings_growth: Option<f64>,
    /// Year-over-year revenue growth, as a fraction.
    pub revenue_growth: Option<f64>,
    /// Dividend yield, as a fraction.
    pub dividend_yield: Option<f64>,
}

/// The resolved inputs a valuation model actually used.
///
/// Kept on every [`Valuation`] so a report reader can see which fallback
/// won and what the model arithmetic was fed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "model")]
pub enum ModelInputs {
    /// Inputs of the linear growth-and-yield model.
    GrowthYield {
        /// Resolved earnings per share.
        eps: f64,
        /// Capped growth rate in percentage points.
        growth_pct: f64,
        /// Dividend yield in percentage points.
        yield_pct: f64,
        /// Final multiplier applied to EPS.
        multiplier: f64,
    },
    /// Inputs of the Graham-number model.
    Graham {
        /// Resolved earnings per share.
        eps: f64,
        /// Resolved book value per share.
        book_value_per_share: f64,
    },
}

/// A successfully valued issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    /// Exchange-local identifier.
    pub symbol: String,
    /// Human-readable issue name.
    pub display_name: String,
    /// Price at evaluation time.
    pub price: f64,
    /// Model-estimated fair value; always strictly positive.
    pub fair_value: f64,
    /// Signed percentage difference between fair value and price.
    pub upside_pct: f64,
    /// The model inputs that produced this estimate.
    pub inputs: ModelInputs,
}

/// Why an issue could not be valued.
///
/// A rejection is a counted, non-fatal outcome: it never aborts the run.
/// Each kind maps to a stable [`label`](Self::label) used as the tally key
/// and in log output.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionKind {
    /// The quote upstream could not be reached or returned garbage for
    /// every attempt.
    FetchFailed,
    /// The payload carried no usable price.
    MissingPrice,
    /// No EPS could be resolved through the model's fallback chain.
    MissingEarnings,
    /// Resolved EPS was zero or negative.
    NegativeOrZeroEarnings,
    /// No book value per share could be resolved.
    MissingBookValue,
    /// Resolved book value per share was zero or negative.
    NonPositiveBookValue,
    /// The model arithmetic left its valid domain (e.g. a non-positive
    /// radicand). Guarded against earlier, but defended.
    MathDomainError,
    /// The growth-and-yield multiplier fell below the configured floor.
    BelowMultiplierFloor,
    /// The computed upside exceeded the model's sanity ceiling, which
    /// usually signals a feed-scale error rather than a bargain.
    UpsideOutOfRange,
    /// Anything unforeseen, with a human-readable detail.
    Unknown(String),
}

impl RejectionKind {
    /// Stable identifier for tallying and logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FetchFailed => "fetch_failed",
            Self::MissingPrice => "missing_price",
            Self::MissingEarnings => "missing_earnings",
            Self::NegativeOrZeroEarnings => "negative_or_zero_earnings",
            Self::MissingBookValue => "missing_book_value",
            Self::NonPositiveBookValue => "non_positive_book_value",
            Self::MathDomainError => "math_domain_error",
            Self::BelowMultiplierFloor => "below_multiplier_floor",
            Self::UpsideOutOfRange => "upside_out_of_range",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(detail) => write!(f, "unknown: {detail}"),
            other => f.write_str(other.label()),
        }
    }
}

/// The outcome of evaluating one issue.
///
/// Every issue put into the pipeline yields exactly one of these; there
/// are no silent drops.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuationResult {
    /// The issue was valued.
    Success(Valuation),
    /// The issue was rejected for a specific, counted reason.
    Rejected {
        /// Exchange-local identifier of the rejected issue.
        symbol: String,
        /// Why it was rejected.
        reason: RejectionKind,
    },
}

impl ValuationResult {
    /// The symbol this result belongs to.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Success(v) => &v.symbol,
            Self::Rejected { symbol, .. } => symbol,
        }
    }

    /// Whether this result is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_new() {
        let issue = Issue::new("7203", "トヨタ自動車");
        assert_eq!(issue.symbol, "7203");
        assert_eq!(issue.display_name, "トヨタ自動車");
    }

    #[test]
    fn test_fundamentals_default_is_all_absent() {
        let f = Fundamentals::default();
        assert!(f.price.is_none());
        assert!(f.forward_eps.is_none());
        assert!(f.dividend_yield.is_none());
    }

    #[test]
    fn test_rejection_labels_are_unique() {
        let kinds = [
            RejectionKind::FetchFailed,
            RejectionKind::MissingPrice,
            RejectionKind::MissingEarnings,
            RejectionKind::NegativeOrZeroEarnings,
            RejectionKind::MissingBookValue,
            RejectionKind::NonPositiveBookValue,
            RejectionKind::MathDomainError,
            RejectionKind::BelowMultiplierFloor,
            RejectionKind::UpsideOutOfRange,
            RejectionKind::Unknown(String::new()),
        ];
        let labels: std::collections::BTreeSet<_> = kinds.iter().map(RejectionKind::label).collect();
        assert_eq!(labels.len(), kinds.len());
    }

    #[test]
    fn test_rejection_display_carries_detail() {
        let kind = RejectionKind::Unknown("worker panicked".to_string());
        assert_eq!(kind.to_string(), "unknown: worker panicked");
        assert_eq!(RejectionKind::FetchFailed.to_string(), "fetch_failed");
    }

    #[test]
    fn test_result_symbol_accessor() {
        let rejected = ValuationResult::Rejected {
            symbol: "7203".to_string(),
            reason: RejectionKind::FetchFailed,
        };
        assert_eq!(rejected.symbol(), "7203");
        assert!(!rejected.is_success());
    }

    #[test]
    fn test_model_inputs_serialize_tagged() {
        let inputs = ModelInputs::Graham {
            eps: 8.0,
            book_value_per_share: 50.0,
        };
        let json = serde_json::to_value(&inputs).unwrap();
        assert_eq!(json["model"], "graham");
        assert_eq!(json["eps"], 8.0);
    }
}
