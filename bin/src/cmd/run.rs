//! The screening run: gate, resolve, evaluate, rank, render, sync.

use std::sync::Arc;

use sakata_models::create_model;
use sakata_pipeline::{Evaluator, PipelineRunner, RunnerConfig, rank};
use sakata_quotes::QuoteClient;
use sakata_report::{ContentPublisher, ReportMeta, render_report};
use sakata_traits::UniverseSource;
use sakata_universe::{ListingConfig, ListingTableSource};

use crate::calendar::{self, MarketDay};
use crate::cmd::FatalError;
use crate::config;

/// Options for one screening run.
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    /// Worker pool width.
    pub(crate) workers: usize,
    /// Valuation model name.
    pub(crate) model: String,
    /// Skip the calendar gate.
    pub(crate) force: bool,
    /// Print the report instead of publishing it.
    pub(crate) dry_run: bool,
}

/// Execute one run end to end.
pub(crate) async fn execute(opts: RunOptions) -> Result<(), FatalError> {
    let today = calendar::today_jst();

    if !opts.force {
        match calendar::classify(today, &calendar::extra_holidays_from_env()) {
            MarketDay::Open => tracing::info!(%today, "market open"),
            MarketDay::Weekend => {
                tracing::info!(%today, "weekend; skipping run");
                return Ok(());
            }
            MarketDay::Holiday(label) => {
                tracing::info!(%today, holiday = %label, "holiday; skipping run");
                return Ok(());
            }
        }
    }

    // Resolve every collaborator before the first network call so that
    // configuration problems surface immediately with exit code 2.
    let model = create_model(&opts.model)?;
    let quotes = QuoteClient::from_env().map_err(|err| FatalError::QuoteConfig(err.to_string()))?;
    let publisher = if opts.dry_run {
        None
    } else {
        Some(ContentPublisher::new(config::sync_target_from_env()?))
    };

    let source = ListingTableSource::new(ListingConfig::new(config::listing_url()));
    let universe = source.fetch_universe().await?;
    tracing::info!(count = universe.len(), "processing universe");

    let evaluator = Arc::new(Evaluator::new(Arc::new(quotes), Arc::from(model)));
    let method_note = method_note(evaluator.model_name());

    let runner = PipelineRunner::new(RunnerConfig {
        workers: opts.workers,
        ..RunnerConfig::default()
    });
    let tally = runner.run(universe, evaluator).await;
    tally.log_summary();

    let evaluated = tally.evaluated_total();
    let rejected = tally.rejected_total();
    let ranked = rank(tally.into_successes());
    if ranked.is_empty() {
        tracing::info!("no issues ranked; nothing to publish");
        return Ok(());
    }

    let meta = ReportMeta {
        universe_label: config::universe_label(),
        run_date: today,
        method_note,
        evaluated,
        rejected,
    };
    let body = render_report(&ranked, &meta);

    match publisher {
        Some(publisher) => publisher.publish(&body).await?,
        None => println!("{body}"),
    }

    Ok(())
}

/// One-line methodology note for the report intro.
fn method_note(model_name: &str) -> String {
    match model_name {
        "graham" => {
            "Based on the Graham number: sqrt(22.5 × EPS × book value per share).".to_string()
        }
        _ => "Based on projected EPS, growth rate (capped at 25%), and dividend yield.".to_string(),
    }
}
