//! Run configuration.
//!
//! The publish target arrives as one opaque JSON document in the
//! `SYNC_CONFIG` environment variable so the scheduler only has to manage
//! a single secret. The listing URL and quote endpoint are plain env vars
//! with sensible defaults where one exists.

use std::env;

use sakata_report::SyncTarget;
use thiserror::Error;

/// Constituent listing of the target index, as published by the
/// brokerage's market-information pages.
const DEFAULT_LISTING_URL: &str = "https://site1.sbisec.co.jp/ETGate/WPLETmgR001Control?OutSide=on&getFlg=on&burl=search_market&cat1=market&cat2=info&dir=info&file=market_meigara_400.html";

/// Label used in the report heading.
const DEFAULT_UNIVERSE_LABEL: &str = "JPX400";

/// Configuration errors. All of them are fatal before any network work.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// `SYNC_CONFIG` is not set.
    #[error("SYNC_CONFIG environment variable not set")]
    Missing,
    /// `SYNC_CONFIG` is set but not the expected JSON document.
    #[error("invalid SYNC_CONFIG: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Read the publish target from `SYNC_CONFIG`.
pub(crate) fn sync_target_from_env() -> Result<SyncTarget, ConfigError> {
    let raw = env::var("SYNC_CONFIG").map_err(|_| ConfigError::Missing)?;
    parse_sync_config(&raw)
}

/// Parse the `SYNC_CONFIG` JSON document.
fn parse_sync_config(raw: &str) -> Result<SyncTarget, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

/// Listing URL, overridable through `LISTING_URL`.
pub(crate) fn listing_url() -> String {
    env::var("LISTING_URL").unwrap_or_else(|_| DEFAULT_LISTING_URL.to_string())
}

/// Universe label for the report heading, overridable through
/// `UNIVERSE_LABEL`.
pub(crate) fn universe_label() -> String {
    env::var("UNIVERSE_LABEL").unwrap_or_else(|_| DEFAULT_UNIVERSE_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_sync_config() {
        let target = parse_sync_config(
            r#"{
                "endpoint": "https://content.example.com",
                "user": "sync-bot",
                "token": "app-token",
                "resource_id": 42
            }"#,
        )
        .unwrap();
        assert_eq!(target.endpoint, "https://content.example.com");
        assert_eq!(target.resource_id, 42);
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        let err = parse_sync_config("{not json").expect_err("malformed");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_fields_are_invalid() {
        let err = parse_sync_config(r#"{"endpoint": "https://x"}"#).expect_err("incomplete");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
