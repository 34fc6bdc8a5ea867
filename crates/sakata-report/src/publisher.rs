//! Remote content publishing.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Request timeout for the publish call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to deliver the rendered report.
///
/// Deserialized straight from the `SYNC_CONFIG` JSON document. The sink is
/// a page-style resource addressed by id; credentials travel as HTTP basic
/// auth.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncTarget {
    /// Base endpoint of the content sink, without trailing slash.
    pub endpoint: String,
    /// Basic-auth user.
    pub user: String,
    /// Basic-auth application token.
    pub token: String,
    /// Id of the page resource to overwrite.
    pub resource_id: u64,
}

/// Errors raised while publishing the report.
///
/// Every variant is fatal to the run: there is no local persistence and no
/// publish retry — the job reruns next cycle.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The transport failed before a response arrived.
    #[error("publish transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The sink answered with a non-success status.
    #[error("publish failed with status {status}: {detail}")]
    Status {
        /// HTTP status code returned by the sink.
        status: u16,
        /// Response body, truncated, for diagnosis.
        detail: String,
    },
}

/// Publishes a rendered document body to the remote content sink.
#[derive(Debug, Clone)]
pub struct ContentPublisher {
    http: Client,
    target: SyncTarget,
}

impl ContentPublisher {
    /// Create a publisher for the given sink target.
    #[must_use]
    pub fn new(target: SyncTarget) -> Self {
        Self {
            http: Client::new(),
            target,
        }
    }

    /// The URL of the page resource being overwritten.
    #[must_use]
    pub fn resource_url(&self) -> String {
        format!(
            "{}/wp-json/wp/v2/pages/{}",
            self.target.endpoint.trim_end_matches('/'),
            self.target.resource_id
        )
    }

    /// Push the document body to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] on any transport failure or non-success
    /// status. Callers treat this as fatal.
    pub async fn publish(&self, body: &str) -> Result<(), PublishError> {
        let url = self.resource_url();
        tracing::info!(%url, bytes = body.len(), "syncing report to remote sink");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.target.user, Some(&self.target.token))
            .json(&serde_json::json!({ "content": body }))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail: String = detail.chars().take(500).collect();
            return Err(PublishError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::info!("sync complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> SyncTarget {
        SyncTarget {
            endpoint: "https://content.example.com/".to_string(),
            user: "sync-bot".to_string(),
            token: "app-token".to_string(),
            resource_id: 42,
        }
    }

    #[test]
    fn test_resource_url() {
        let publisher = ContentPublisher::new(target());
        assert_eq!(
            publisher.resource_url(),
            "https://content.example.com/wp-json/wp/v2/pages/42"
        );
    }

    #[test]
    fn test_target_deserializes_from_sync_config_json() {
        let target: SyncTarget = serde_json::from_str(
            r#"{
                "endpoint": "https://content.example.com",
                "user": "sync-bot",
                "token": "app-token",
                "resource_id": 42
            }"#,
        )
        .unwrap();
        assert_eq!(target.resource_id, 42);
        assert_eq!(target.user, "sync-bot");
    }

    #[tokio::test]
    async fn test_unreachable_sink_is_transport_error() {
        let publisher = ContentPublisher::new(SyncTarget {
            endpoint: "http://127.0.0.1:9".to_string(),
            ..target()
        });
        let err = publisher.publish("<p>report</p>").await.expect_err("sink is down");
        assert!(matches!(err, PublishError::Transport(_)));
    }
}
