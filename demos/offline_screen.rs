//! Offline screening demo.
//!
//! Runs the whole pipeline against scripted fundamentals instead of the
//! live quote upstream and prints the rendered report, so the flow can be
//! inspected without network access or credentials:
//!
//! ```bash
//! cargo run --example offline_screen
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sakata::models::GrowthYieldModel;
use sakata::prelude::*;
use sakata::report::{ReportMeta, render_report};

/// Scripted fundamentals: three valuable issues, one with no earnings,
/// one that the "upstream" refuses to serve.
struct ScriptedQuotes(HashMap<&'static str, Fundamentals>);

impl ScriptedQuotes {
    fn fixture() -> Self {
        let mut table = HashMap::new();
        table.insert(
            "7203",
            Fundamentals {
                price: Some(2500.0),
                forward_eps: Some(220.0),
                earnings_growth: Some(0.12),
                dividend_yield: Some(0.028),
                ..Fundamentals::default()
            },
        );
        table.insert(
            "9984",
            Fundamentals {
                price: Some(8000.0),
                trailing_eps: Some(310.0),
                revenue_growth: Some(0.31),
                ..Fundamentals::default()
            },
        );
        table.insert(
            "6758",
            Fundamentals {
                price: Some(13000.0),
                forward_eps: Some(820.0),
                earnings_growth: Some(0.09),
                dividend_yield: Some(0.006),
                ..Fundamentals::default()
            },
        );
        table.insert(
            "4385",
            Fundamentals {
                price: Some(2200.0),
                ..Fundamentals::default()
            },
        );
        Self(table)
    }
}

#[async_trait]
impl QuoteSource for ScriptedQuotes {
    async fn fetch(&self, symbol: &str) -> Result<Fundamentals, FetchError> {
        self.0.get(symbol).copied().ok_or_else(|| FetchError {
            symbol: symbol.to_string(),
            attempts: 3,
            reason: "scripted outage".to_string(),
        })
    }
}

#[tokio::main]
async fn main() {
    let universe = vec![
        Issue::new("7203", "トヨタ自動車"),
        Issue::new("9984", "ソフトバンクグループ"),
        Issue::new("6758", "ソニーグループ"),
        Issue::new("4385", "メルカリ"),
        Issue::new("9999", "データ提供なし"),
    ];

    let evaluator = Arc::new(Evaluator::new(
        Arc::new(ScriptedQuotes::fixture()),
        Arc::new(GrowthYieldModel::default()),
    ));

    let tally = PipelineRunner::new(RunnerConfig {
        workers: 4,
        ..RunnerConfig::default()
    })
    .run(universe, evaluator)
    .await;

    let evaluated = tally.evaluated_total();
    let rejected = tally.rejected_total();
    let ranked = rank(tally.into_successes());

    let meta = ReportMeta {
        universe_label: "DEMO5".to_string(),
        run_date: NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date"),
        method_note: "Based on projected EPS, growth rate (capped at 25%), and dividend yield."
            .to_string(),
        evaluated,
        rejected,
    };

    println!("{}", render_report(&ranked, &meta));
}
