//! Wire types for the quote upstream's summary document.

use sakata_traits::Fundamentals;
use serde::Deserialize;

/// The slice of the upstream quote-summary document sakata reads.
///
/// The document carries many more keys; unknown ones are ignored. Every
/// field is optional because the upstream omits any of them per issue,
/// and `null` is treated the same as absent.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    /// Last traded price.
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Forward earnings per share.
    #[serde(default)]
    pub forward_eps: Option<f64>,
    /// Trailing earnings per share.
    #[serde(default)]
    pub trailing_eps: Option<f64>,
    /// Trailing price-to-earnings ratio.
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    /// Book value per share.
    #[serde(default)]
    pub book_value: Option<f64>,
    /// Price-to-book ratio.
    #[serde(default)]
    pub price_to_book: Option<f64>,
    /// Year-over-year earnings growth, as a fraction.
    #[serde(default)]
    pub earnings_growth: Option<f64>,
    /// Year-over-year revenue growth, as a fraction.
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    /// Dividend yield, as a fraction.
    #[serde(default)]
    pub dividend_yield: Option<f64>,
}

impl QuotePayload {
    /// Whether the payload carries a usable price.
    ///
    /// A fetch attempt only counts as successful when this holds; a
    /// non-finite or non-positive price is feed garbage, not a quote.
    #[must_use]
    pub fn has_usable_price(&self) -> bool {
        self.current_price.is_some_and(|p| p.is_finite() && p > 0.0)
    }
}

impl From<QuotePayload> for Fundamentals {
    fn from(payload: QuotePayload) -> Self {
        Self {
            price: payload.current_price.filter(|p| p.is_finite() && *p > 0.0),
            forward_eps: payload.forward_eps.filter(|v| v.is_finite()),
            trailing_eps: payload.trailing_eps.filter(|v| v.is_finite()),
            trailing_pe: payload.trailing_pe.filter(|v| v.is_finite()),
            book_value: payload.book_value.filter(|v| v.is_finite()),
            price_to_book: payload.price_to_book.filter(|v| v.is_finite()),
            earnings_growth: payload.earnings_growth.filter(|v| v.is_finite()),
            revenue_growth: payload.revenue_growth.filter(|v| v.is_finite()),
            dividend_yield: payload.dividend_yield.filter(|v| v.is_finite()),
        }
    }
}
