//! Table-driven fallback resolution.
//!
//! Each model input is resolved through an ordered list of
//! `(source name, extractor)` pairs, stopping at the first present value.
//! Keeping the chains as data keeps the priority policy visible in one
//! place and testable without any fetch machinery.

use sakata_traits::Fundamentals;

/// Extracts one candidate value from a fundamentals snapshot.
pub(crate) type Extractor = fn(&Fundamentals) -> Option<f64>;

/// Resolve the first present value in `chain`, returning the winning
/// source name alongside it.
pub(crate) fn resolve(
    chain: &[(&'static str, Extractor)],
    fundamentals: &Fundamentals,
) -> Option<(&'static str, f64)> {
    chain
        .iter()
        .find_map(|(source, extract)| extract(fundamentals).map(|value| (*source, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &[(&str, Extractor)] = &[
        ("forwardEps", |f| f.forward_eps),
        ("trailingEps", |f| f.trailing_eps),
    ];

    #[test]
    fn test_first_present_wins() {
        let fundamentals = Fundamentals {
            forward_eps: Some(12.0),
            trailing_eps: Some(10.0),
            ..Fundamentals::default()
        };
        assert_eq!(resolve(CHAIN, &fundamentals), Some(("forwardEps", 12.0)));
    }

    #[test]
    fn test_falls_through_to_later_sources() {
        let fundamentals = Fundamentals {
            trailing_eps: Some(10.0),
            ..Fundamentals::default()
        };
        assert_eq!(resolve(CHAIN, &fundamentals), Some(("trailingEps", 10.0)));
    }

    #[test]
    fn test_empty_snapshot_resolves_nothing() {
        assert_eq!(resolve(CHAIN, &Fundamentals::default()), None);
    }

    #[test]
    fn test_derived_extractors_can_combine_fields() {
        let derived: &[(&str, Extractor)] = &[("priceOverPe", |f| match (f.price, f.trailing_pe) {
            (Some(price), Some(pe)) if pe > 0.0 => Some(price / pe),
            _ => None,
        })];

        let fundamentals = Fundamentals {
            price: Some(150.0),
            trailing_pe: Some(15.0),
            ..Fundamentals::default()
        };
        assert_eq!(resolve(derived, &fundamentals), Some(("priceOverPe", 10.0)));

        let negative_pe = Fundamentals {
            price: Some(150.0),
            trailing_pe: Some(-3.0),
            ..Fundamentals::default()
        };
        assert_eq!(resolve(derived, &negative_pe), None);
    }
}
