#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Universe resolution for sakata.
//!
//! The target universe is published as a semi-structured HTML listing
//! page. [`ListingTableSource`] fetches that page, locates the constituent
//! table by shape, and turns it into a deduplicated list of
//! [`Issue`](sakata_traits::Issue)s. Any failure here is fatal to the run:
//! a partial universe would silently shrink the report.

mod listing;

pub use listing::{ListingConfig, ListingTableSource};
