#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Quote-provider client for sakata.
//!
//! This crate wraps the third-party quote upstream behind the
//! [`QuoteSource`](sakata_traits::QuoteSource) seam. The upstream schema is
//! opaque; the handful of fields the valuation models need are picked out
//! by name (`currentPrice`, `forwardEps`, `trailingEps`, `trailingPE`,
//! `bookValue`, `priceToBook`, `earningsGrowth`, `revenueGrowth`,
//! `dividendYield`).
//!
//! # Environment Variables
//!
//! Set `QUOTE_API_URL` in your environment or `.env` file to the provider's
//! per-symbol quote-summary endpoint:
//!
//! ```bash
//! QUOTE_API_URL=https://quotes.example.com/v1/summary
//! ```

mod client;
mod retry;
mod types;

pub use client::{QuoteClient, QuoteConfigError};
pub use retry::RetryPolicy;
pub use types::QuotePayload;
