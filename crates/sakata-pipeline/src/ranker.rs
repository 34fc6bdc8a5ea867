//! Ranking of successful valuations.

use sakata_traits::Valuation;

/// Sort successes by estimated upside, descending.
///
/// The sort is stable: equal upsides keep their relative arrival order, so
/// identical inputs produce byte-identical reports across runs.
#[must_use]
pub fn rank(mut successes: Vec<Valuation>) -> Vec<Valuation> {
    successes.sort_by(|a, b| b.upside_pct.total_cmp(&a.upside_pct));
    successes
}
