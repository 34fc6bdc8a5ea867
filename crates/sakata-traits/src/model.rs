//! ValuationModel trait — the seam between raw fundamentals and a fair
//! value.
//!
//! A model is a pure function: no I/O, no shared state, deterministic for
//! a given [`Fundamentals`]. Models reject with a specific
//! [`RejectionKind`] instead of emitting `NaN` or non-positive estimates.

use crate::types::{Fundamentals, ModelInputs, RejectionKind};

/// A fair-value estimate produced by a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Estimated fair value; strictly positive.
    pub fair_value: f64,
    /// Signed percentage difference between fair value and price.
    pub upside_pct: f64,
    /// The resolved inputs the model arithmetic used.
    pub inputs: ModelInputs,
}

/// A valuation strategy turning fundamentals into a fair-value estimate.
///
/// Implementations must be `Send + Sync` so a single model instance can be
/// shared across the worker pool.
pub trait ValuationModel: Send + Sync + std::fmt::Debug {
    /// Short stable name, used for CLI selection and report annotations.
    fn name(&self) -> &str;

    /// Evaluate one issue's fundamentals.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionKind`] describing exactly why the issue
    /// could not be valued. Implementations must never panic on any
    /// combination of present/absent fields.
    fn evaluate(&self, fundamentals: &Fundamentals) -> Result<Estimate, RejectionKind>;
}
