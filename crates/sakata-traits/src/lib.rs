#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Core type and trait definitions for the sakata valuation pipeline.
//!
//! This crate holds the domain vocabulary shared by every other sakata
//! crate: the universe [`Issue`], the raw [`Fundamentals`] snapshot, the
//! tagged [`ValuationResult`] with its [`RejectionKind`] taxonomy, and the
//! trait seams ([`ValuationModel`], [`QuoteSource`], [`UniverseSource`])
//! that the concrete crates plug into.

/// The version of the sakata-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod model;
pub mod source;
pub mod types;

// Re-exports
pub use error::{FetchError, UniverseError};
pub use model::{Estimate, ValuationModel};
pub use source::{QuoteSource, UniverseSource};
pub use types::{Fundamentals, Issue, ModelInputs, RejectionKind, Valuation, ValuationResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
