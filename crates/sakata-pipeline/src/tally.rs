//! Per-run accounting of successes and rejections.

use std::collections::BTreeMap;

use sakata_traits::{RejectionKind, Valuation, ValuationResult};

/// How many rejected symbols to keep per kind for diagnosis.
const SAMPLE_LIMIT: usize = 5;

/// The single piece of shared mutable state in a run.
///
/// Workers record every [`ValuationResult`] here, under one mutex held by
/// the runner. Counters are keyed by the rejection kind's stable label;
/// `BTreeMap` keeps summary output deterministically ordered. The first
/// few rejected symbols per kind are retained so a spike in one counter
/// can be diagnosed without flooding the log.
#[derive(Debug, Default)]
pub struct RunTally {
    successes: Vec<Valuation>,
    counts: BTreeMap<&'static str, u64>,
    samples: BTreeMap<&'static str, Vec<String>>,
}

impl RunTally {
    /// Account one evaluation outcome.
    pub fn record(&mut self, result: ValuationResult) {
        match result {
            ValuationResult::Success(valuation) => self.successes.push(valuation),
            ValuationResult::Rejected { symbol, reason } => self.record_rejection(&symbol, &reason),
        }
    }

    fn record_rejection(&mut self, symbol: &str, reason: &RejectionKind) {
        let label = reason.label();
        *self.counts.entry(label).or_insert(0) += 1;
        let samples = self.samples.entry(label).or_default();
        if samples.len() < SAMPLE_LIMIT {
            samples.push(symbol.to_string());
        }
    }

    /// Successes collected so far, in completion order.
    #[must_use]
    pub fn successes(&self) -> &[Valuation] {
        &self.successes
    }

    /// Consume the tally, yielding the collected successes.
    #[must_use]
    pub fn into_successes(self) -> Vec<Valuation> {
        self.successes
    }

    /// Count for one rejection label.
    #[must_use]
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total rejections across all kinds.
    #[must_use]
    pub fn rejected_total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Total results accounted (successes plus rejections).
    #[must_use]
    pub fn evaluated_total(&self) -> u64 {
        self.successes.len() as u64 + self.rejected_total()
    }

    /// Iterate rejection counts in label order.
    pub fn counts(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }

    /// The retained sample symbols for one rejection label.
    #[must_use]
    pub fn samples(&self, label: &str) -> &[String] {
        self.samples.get(label).map_or(&[], Vec::as_slice)
    }

    /// Log the per-kind rejection summary and sample symbols.
    pub fn log_summary(&self) {
        tracing::info!(
            evaluated = self.evaluated_total(),
            ranked = self.successes.len(),
            rejected = self.rejected_total(),
            "run tally"
        );
        for (label, count) in self.counts() {
            tracing::info!(
                kind = label,
                count,
                samples = ?self.samples(label),
                "rejections"
            );
        }
    }
}
