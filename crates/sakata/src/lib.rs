#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # sakata
//!
//! Daily fair-value screening for a fixed equity universe.
//!
//! sakata is an umbrella crate re-exporting the sakata sub-crates. The
//! pipeline resolves the target universe from a listing page, fetches
//! per-issue fundamentals under bounded retry, applies one of two
//! fallback-driven valuation models, ranks the survivors by estimated
//! mispricing, and publishes an HTML report to a remote content sink.
//!
//! ## Crate Organization
//!
//! - [`traits`] — domain types and the trait seams
//! - [`quotes`] — quote-provider client with retry policy
//! - [`models`] — the growth-and-yield and Graham-number models
//! - [`universe`] — listing-page universe source
//! - [`pipeline`] — evaluator, bounded-concurrency runner, ranker
//! - [`report`] — HTML rendering and remote publishing
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use sakata::pipeline::{Evaluator, PipelineRunner, RunnerConfig, rank};
//! use sakata::quotes::QuoteClient;
//! use sakata::models::GrowthYieldModel;
//!
//! # async fn run(universe: Vec<sakata::Issue>) {
//! let evaluator = Arc::new(Evaluator::new(
//!     Arc::new(QuoteClient::from_env().unwrap()),
//!     Arc::new(GrowthYieldModel::default()),
//! ));
//! let tally = PipelineRunner::new(RunnerConfig::default())
//!     .run(universe, evaluator)
//!     .await;
//! let ranked = rank(tally.into_successes());
//! # }
//! ```

/// Version information for the sakata crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Domain types and trait seams.
pub mod traits {
    pub use sakata_traits::*;
}

/// Quote-provider client and retry policy.
pub mod quotes {
    pub use sakata_quotes::*;
}

/// Fair-value models.
pub mod models {
    pub use sakata_models::*;
}

/// Universe resolution.
pub mod universe {
    pub use sakata_universe::*;
}

/// Evaluation, fan-out and ranking.
pub mod pipeline {
    pub use sakata_pipeline::*;
}

/// Report rendering and publishing.
pub mod report {
    pub use sakata_report::*;
}

// Re-export the core vocabulary at the top level for convenience.
pub use sakata_traits::{
    Fundamentals, Issue, ModelInputs, QuoteSource, RejectionKind, UniverseSource, Valuation,
    ValuationModel, ValuationResult,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::pipeline::{Evaluator, PipelineRunner, RunnerConfig, rank};
    pub use crate::traits::*;
}
