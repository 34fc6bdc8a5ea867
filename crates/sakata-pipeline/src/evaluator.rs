//! Per-issue evaluation: fetch, gate, model, tag.

use std::sync::Arc;

use sakata_traits::{
    Issue, QuoteSource, RejectionKind, Valuation, ValuationModel, ValuationResult,
};

/// Evaluates one issue end to end.
///
/// The evaluator is total: every call returns exactly one
/// [`ValuationResult`], success or rejected, and never propagates an
/// error. A failure here must stay a counted rejection — one bad issue is
/// not allowed to abort the run.
#[derive(Clone)]
pub struct Evaluator {
    quotes: Arc<dyn QuoteSource>,
    model: Arc<dyn ValuationModel>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("model", &self.model.name())
            .finish_non_exhaustive()
    }
}

impl Evaluator {
    /// Create an evaluator over the given quote source and model.
    #[must_use]
    pub fn new(quotes: Arc<dyn QuoteSource>, model: Arc<dyn ValuationModel>) -> Self {
        Self { quotes, model }
    }

    /// Name of the configured model.
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Evaluate one issue.
    pub async fn evaluate(&self, issue: &Issue) -> ValuationResult {
        let fundamentals = match self.quotes.fetch(&issue.symbol).await {
            Ok(f) => f,
            Err(err) => {
                tracing::debug!(symbol = %issue.symbol, error = %err, "fetch exhausted");
                return ValuationResult::Rejected {
                    symbol: issue.symbol.clone(),
                    reason: RejectionKind::FetchFailed,
                };
            }
        };

        // The quote client only accepts payloads with a usable price, but
        // the gate belongs to the pipeline contract, not the client.
        let Some(price) = fundamentals.price else {
            return ValuationResult::Rejected {
                symbol: issue.symbol.clone(),
                reason: RejectionKind::MissingPrice,
            };
        };

        match self.model.evaluate(&fundamentals) {
            Ok(estimate) => ValuationResult::Success(Valuation {
                symbol: issue.symbol.clone(),
                display_name: issue.display_name.clone(),
                price,
                fair_value: estimate.fair_value,
                upside_pct: estimate.upside_pct,
                inputs: estimate.inputs,
            }),
            Err(reason) => ValuationResult::Rejected {
                symbol: issue.symbol.clone(),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sakata_models::GrowthYieldModel;
    use sakata_traits::{FetchError, Fundamentals};
    use std::collections::HashMap;

    /// Scripted quote source: a fixed snapshot per symbol, fetch failure
    /// for anything unlisted.
    struct ScriptedQuotes(HashMap<String, Fundamentals>);

    #[async_trait]
    impl QuoteSource for ScriptedQuotes {
        async fn fetch(&self, symbol: &str) -> Result<Fundamentals, FetchError> {
            self.0.get(symbol).copied().ok_or_else(|| FetchError {
                symbol: symbol.to_string(),
                attempts: 3,
                reason: "scripted failure".to_string(),
            })
        }
    }

    fn evaluator(quotes: ScriptedQuotes) -> Evaluator {
        Evaluator::new(Arc::new(quotes), Arc::new(GrowthYieldModel::default()))
    }

    fn valued() -> Fundamentals {
        Fundamentals {
            price: Some(100.0),
            forward_eps: Some(10.0),
            earnings_growth: Some(0.30),
            dividend_yield: Some(0.02),
            ..Fundamentals::default()
        }
    }

    #[tokio::test]
    async fn test_success_path() {
        let quotes = ScriptedQuotes(HashMap::from([("7203".to_string(), valued())]));
        let result = evaluator(quotes).evaluate(&Issue::new("7203", "トヨタ自動車")).await;
        match result {
            ValuationResult::Success(v) => {
                assert_eq!(v.symbol, "7203");
                assert_eq!(v.display_name, "トヨタ自動車");
                approx::assert_relative_eq!(v.fair_value, 270.0);
                approx::assert_relative_eq!(v.upside_pct, 170.0);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_rejection() {
        let quotes = ScriptedQuotes(HashMap::new());
        let result = evaluator(quotes).evaluate(&Issue::new("9984", "SBG")).await;
        assert_eq!(
            result,
            ValuationResult::Rejected {
                symbol: "9984".to_string(),
                reason: RejectionKind::FetchFailed,
            }
        );
    }

    #[tokio::test]
    async fn test_missing_price_gate() {
        let no_price = Fundamentals {
            forward_eps: Some(10.0),
            ..Fundamentals::default()
        };
        let quotes = ScriptedQuotes(HashMap::from([("6758".to_string(), no_price)]));
        let result = evaluator(quotes).evaluate(&Issue::new("6758", "ソニーグループ")).await;
        assert_eq!(
            result,
            ValuationResult::Rejected {
                symbol: "6758".to_string(),
                reason: RejectionKind::MissingPrice,
            }
        );
    }

    #[tokio::test]
    async fn test_model_rejection_passes_through() {
        let no_earnings = Fundamentals {
            price: Some(100.0),
            ..Fundamentals::default()
        };
        let quotes = ScriptedQuotes(HashMap::from([("8035".to_string(), no_earnings)]));
        let result = evaluator(quotes).evaluate(&Issue::new("8035", "東京エレクトロン")).await;
        assert_eq!(
            result,
            ValuationResult::Rejected {
                symbol: "8035".to_string(),
                reason: RejectionKind::MissingEarnings,
            }
        );
    }
}
