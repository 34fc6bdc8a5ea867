//! Growth-and-yield fair-value model.

use sakata_traits::{Estimate, Fundamentals, ModelInputs, RejectionKind, ValuationModel};
use serde::{Deserialize, Serialize};

use crate::fallback::{Extractor, resolve};

/// EPS resolution order: projected earnings first, realized second.
const EPS_CHAIN: &[(&str, Extractor)] = &[
    ("forwardEps", |f| f.forward_eps),
    ("trailingEps", |f| f.trailing_eps),
];

/// Growth resolution order: earnings growth first, revenue growth as the
/// weaker proxy.
const GROWTH_CHAIN: &[(&str, Extractor)] = &[
    ("earningsGrowth", |f| f.earnings_growth),
    ("revenueGrowth", |f| f.revenue_growth),
];

/// Configuration for the growth-and-yield model.
///
/// All policy constants live here rather than in the arithmetic. The
/// growth default has flip-flopped historically (5% in early revisions,
/// 0% today); keeping it a field makes either policy a config edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrowthYieldConfig {
    /// Growth assumed when neither earnings nor revenue growth is known,
    /// as a fraction (default: 0.0, conservative).
    pub default_growth: f64,
    /// Ceiling applied to growth, in percentage points (default: 25.0).
    pub growth_cap_pct: f64,
    /// Minimum meaningful multiplier; issues below it are rejected
    /// (default: 1.0, boundary inclusive).
    pub multiplier_floor: f64,
    /// Upside above this many percent is treated as a feed-scale error
    /// (default: 1000.0).
    pub upside_ceiling_pct: f64,
}

impl Default for GrowthYieldConfig {
    fn default() -> Self {
        Self {
            default_growth: 0.0,
            growth_cap_pct: 25.0,
            multiplier_floor: 1.0,
            upside_ceiling_pct: 1000.0,
        }
    }
}

/// Linear fair-value model: `EPS × (capped growth pct + yield pct)`.
///
/// Suited to earnings-driven screening of profitable issues; it has no
/// opinion on asset value and rejects issues whose combined growth and
/// yield make the multiplier meaningless.
#[derive(Debug, Clone)]
pub struct GrowthYieldModel {
    config: GrowthYieldConfig,
}

impl GrowthYieldModel {
    /// Create the model with the given configuration.
    #[must_use]
    pub const fn new(config: GrowthYieldConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GrowthYieldConfig {
        &self.config
    }
}

impl Default for GrowthYieldModel {
    fn default() -> Self {
        Self::new(GrowthYieldConfig::default())
    }
}

impl ValuationModel for GrowthYieldModel {
    fn name(&self) -> &str {
        "growth_yield"
    }

    fn evaluate(&self, fundamentals: &Fundamentals) -> Result<Estimate, RejectionKind> {
        let price = fundamentals.price.ok_or(RejectionKind::MissingPrice)?;

        let (_, eps) =
            resolve(EPS_CHAIN, fundamentals).ok_or(RejectionKind::MissingEarnings)?;
        if eps <= 0.0 {
            return Err(RejectionKind::NegativeOrZeroEarnings);
        }

        let growth = resolve(GROWTH_CHAIN, fundamentals)
            .map_or(self.config.default_growth, |(_, g)| g);
        let yield_raw = fundamentals.dividend_yield.unwrap_or(0.0);

        // Into percentage points; growth capped above, floored at zero.
        let growth_pct = (growth * 100.0).min(self.config.growth_cap_pct).max(0.0);
        let yield_pct = yield_raw * 100.0;

        let multiplier = growth_pct + yield_pct;
        if multiplier < self.config.multiplier_floor {
            return Err(RejectionKind::BelowMultiplierFloor);
        }

        let fair_value = eps * multiplier;
        if !fair_value.is_finite() || fair_value <= 0.0 {
            return Err(RejectionKind::MathDomainError);
        }

        let upside_pct = (fair_value - price) / price * 100.0;
        if upside_pct > self.config.upside_ceiling_pct {
            return Err(RejectionKind::UpsideOutOfRange);
        }

        Ok(Estimate {
            fair_value,
            upside_pct,
            inputs: ModelInputs::GrowthYield {
                eps,
                growth_pct,
                yield_pct,
                multiplier,
            },
        })
    }
}
