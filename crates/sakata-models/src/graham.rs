//! Graham-number fair-value model.

use sakata_traits::{Estimate, Fundamentals, ModelInputs, RejectionKind, ValuationModel};
use serde::{Deserialize, Serialize};

use crate::fallback::{Extractor, resolve};

/// EPS resolution order. Unlike the growth model, a missing EPS can be
/// derived from price over a positive trailing P/E.
const EPS_CHAIN: &[(&str, Extractor)] = &[
    ("forwardEps", |f| f.forward_eps),
    ("trailingEps", |f| f.trailing_eps),
    ("price/trailingPE", |f| match (f.price, f.trailing_pe) {
        (Some(price), Some(pe)) if pe > 0.0 => Some(price / pe),
        _ => None,
    }),
];

/// Book-value-per-share resolution order, with the price-to-book
/// derivation as fallback.
const BPS_CHAIN: &[(&str, Extractor)] = &[
    ("bookValue", |f| f.book_value),
    ("price/priceToBook", |f| match (f.price, f.price_to_book) {
        (Some(price), Some(ptb)) if ptb > 0.0 => Some(price / ptb),
        _ => None,
    }),
];

/// Configuration for the Graham-number model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrahamConfig {
    /// The blended valuation constant. 22.5 encodes an assumed ceiling of
    /// P/E = 15 times P/B = 1.5.
    pub multiplier: f64,
    /// Upside above this many percent is treated as a feed-scale error.
    /// Tighter than the growth model's ceiling: asset-based valuation
    /// rarely justifies more than a 3x mispricing (default: 300.0).
    pub upside_ceiling_pct: f64,
}

impl Default for GrahamConfig {
    fn default() -> Self {
        Self {
            multiplier: 22.5,
            upside_ceiling_pct: 300.0,
        }
    }
}

/// Geometric fair-value model: `sqrt(22.5 × EPS × BPS)`.
#[derive(Debug, Clone)]
pub struct GrahamModel {
    config: GrahamConfig,
}

impl GrahamModel {
    /// Create the model with the given configuration.
    #[must_use]
    pub const fn new(config: GrahamConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GrahamConfig {
        &self.config
    }
}

impl Default for GrahamModel {
    fn default() -> Self {
        Self::new(GrahamConfig::default())
    }
}

impl ValuationModel for GrahamModel {
    fn name(&self) -> &str {
        "graham"
    }

    fn evaluate(&self, fundamentals: &Fundamentals) -> Result<Estimate, RejectionKind> {
        let price = fundamentals.price.ok_or(RejectionKind::MissingPrice)?;

        let (_, eps) =
            resolve(EPS_CHAIN, fundamentals).ok_or(RejectionKind::MissingEarnings)?;
        if eps <= 0.0 {
            return Err(RejectionKind::NegativeOrZeroEarnings);
        }

        let (_, bps) =
            resolve(BPS_CHAIN, fundamentals).ok_or(RejectionKind::MissingBookValue)?;
        if bps <= 0.0 {
            return Err(RejectionKind::NonPositiveBookValue);
        }

        // Unreachable given the guards above, but the sqrt domain is
        // defended rather than assumed.
        let radicand = self.config.multiplier * eps * bps;
        if !radicand.is_finite() || radicand <= 0.0 {
            return Err(RejectionKind::MathDomainError);
        }

        let fair_value = radicand.sqrt();
        let upside_pct = (fair_value - price) / price * 100.0;
        if upside_pct > self.config.upside_ceiling_pct {
            return Err(RejectionKind::UpsideOutOfRange);
        }

        Ok(Estimate {
            fair_value,
            upside_pct,
            inputs: ModelInputs::Graham {
                eps,
                book_value_per_share: bps,
            },
        })
    }
}
