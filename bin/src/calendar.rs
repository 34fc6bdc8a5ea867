//! Exchange calendar gate.
//!
//! The job is scheduled every day; this module decides whether today is a
//! trading day in Tokyo. Weekends are computed; exchange closures come
//! from the embedded table below, which can be extended at runtime through
//! the `MARKET_HOLIDAYS` environment variable (comma-separated
//! `YYYY-MM-DD` entries).

use std::collections::HashMap;
use std::env;

use chrono::{Datelike, FixedOffset, NaiveDate, Utc, Weekday};

/// Exchange closures, including national holidays observed by the
/// exchange and the year-end/new-year maintenance days.
///
/// TODO: extend the table for 2027 when the exchange publishes its
/// calendar (usually late autumn 2026).
const CLOSURES: &[(&str, &str)] = &[
    // 2025
    ("2025-01-01", "元日"),
    ("2025-01-02", "年始休業"),
    ("2025-01-03", "年始休業"),
    ("2025-01-13", "成人の日"),
    ("2025-02-11", "建国記念の日"),
    ("2025-02-24", "天皇誕生日 振替休日"),
    ("2025-03-20", "春分の日"),
    ("2025-04-29", "昭和の日"),
    ("2025-05-05", "こどもの日"),
    ("2025-05-06", "振替休日"),
    ("2025-07-21", "海の日"),
    ("2025-08-11", "山の日"),
    ("2025-09-15", "敬老の日"),
    ("2025-09-23", "秋分の日"),
    ("2025-10-13", "スポーツの日"),
    ("2025-11-03", "文化の日"),
    ("2025-11-24", "勤労感謝の日 振替休日"),
    ("2025-12-31", "大晦日休業"),
    // 2026
    ("2026-01-01", "元日"),
    ("2026-01-02", "年始休業"),
    ("2026-01-12", "成人の日"),
    ("2026-02-11", "建国記念の日"),
    ("2026-02-23", "天皇誕生日"),
    ("2026-03-20", "春分の日"),
    ("2026-04-29", "昭和の日"),
    ("2026-05-04", "みどりの日"),
    ("2026-05-05", "こどもの日"),
    ("2026-05-06", "振替休日"),
    ("2026-07-20", "海の日"),
    ("2026-08-11", "山の日"),
    ("2026-09-21", "敬老の日"),
    ("2026-09-22", "国民の休日"),
    ("2026-09-23", "秋分の日"),
    ("2026-10-12", "スポーツの日"),
    ("2026-11-03", "文化の日"),
    ("2026-11-23", "勤労感謝の日"),
    ("2026-12-31", "大晦日休業"),
];

/// JST is UTC+9 year-round; no DST.
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// What the calendar says about one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MarketDay {
    /// A regular trading day.
    Open,
    /// Saturday or Sunday.
    Weekend,
    /// A known closure, with its label when the embedded table has one.
    Holiday(String),
}

/// Today's date in Tokyo.
pub(crate) fn today_jst() -> NaiveDate {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is valid");
    Utc::now().with_timezone(&jst).date_naive()
}

/// Classify a date against weekends, the embedded closure table, and any
/// extra closures supplied by the operator.
pub(crate) fn classify(date: NaiveDate, extra: &[NaiveDate]) -> MarketDay {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return MarketDay::Weekend;
    }

    if let Some(label) = closure_table().get(&date) {
        return MarketDay::Holiday((*label).to_string());
    }

    if extra.contains(&date) {
        return MarketDay::Holiday("operator-configured closure".to_string());
    }

    MarketDay::Open
}

/// Extra closures from `MARKET_HOLIDAYS`, ignoring entries that do not
/// parse (with a warning — a typo must not silently open the gate).
pub(crate) fn extra_holidays_from_env() -> Vec<NaiveDate> {
    let Ok(raw) = env::var("MARKET_HOLIDAYS") else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match NaiveDate::parse_from_str(entry, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::warn!(entry, "ignoring unparseable MARKET_HOLIDAYS entry");
                None
            }
        })
        .collect()
}

fn closure_table() -> HashMap<NaiveDate, &'static str> {
    CLOSURES
        .iter()
        .filter_map(|(date, label)| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .map(|d| (d, *label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_detection() {
        assert_eq!(classify(date(2026, 8, 8), &[]), MarketDay::Weekend); // Saturday
        assert_eq!(classify(date(2026, 8, 9), &[]), MarketDay::Weekend); // Sunday
        assert_eq!(classify(date(2026, 8, 7), &[]), MarketDay::Open); // Friday
    }

    #[test]
    fn test_embedded_closures() {
        match classify(date(2026, 1, 1), &[]) {
            MarketDay::Holiday(label) => assert_eq!(label, "元日"),
            other => panic!("expected holiday, got {other:?}"),
        }
        // 2026-08-11 (山の日) falls on a Tuesday.
        assert!(matches!(classify(date(2026, 8, 11), &[]), MarketDay::Holiday(_)));
    }

    #[test]
    fn test_weekend_wins_over_table() {
        // 2026-01-03 is a Saturday; it is a closure by weekday, not table.
        assert_eq!(classify(date(2026, 1, 3), &[]), MarketDay::Weekend);
    }

    #[test]
    fn test_operator_closures() {
        let extra = vec![date(2026, 8, 7)];
        assert!(matches!(
            classify(date(2026, 8, 7), &extra),
            MarketDay::Holiday(_)
        ));
        assert_eq!(classify(date(2026, 8, 6), &extra), MarketDay::Open);
    }

    #[test]
    fn test_closure_table_parses_fully() {
        assert_eq!(closure_table().len(), CLOSURES.len());
    }
}
