#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Fair-value models for the sakata pipeline.
//!
//! Two interchangeable strategies implement the
//! [`ValuationModel`](sakata_traits::ValuationModel) seam:
//!
//! - [`GrowthYieldModel`] — linear: EPS times a growth-plus-yield
//!   multiplier, for earnings-driven screening.
//! - [`GrahamModel`] — geometric: `sqrt(22.5 × EPS × BPS)`, the classic
//!   asset-aware conservative estimate.
//!
//! Both are pure and deterministic, resolve their inputs through ordered
//! fallback chains, and reject with a specific
//! [`RejectionKind`](sakata_traits::RejectionKind) instead of ever
//! emitting `NaN` or a non-positive fair value.

mod fallback;
pub mod graham;
pub mod growth_yield;
mod registry;

pub use graham::{GrahamConfig, GrahamModel};
pub use growth_yield::{GrowthYieldConfig, GrowthYieldModel};
pub use registry::{ModelError, create_model};
