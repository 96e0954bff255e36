//! HTTP client that forwards one sample to a spreadsheet webhook.
//!
//! One POST per call, JSON body, success only on HTTP 200. There is no retry:
//! a failed relay is reported to the caller and the sample stays wherever the
//! caller recorded it.

use std::time::Duration;

use influence_core::Sample;
use reqwest::{header, Client, StatusCode, Url};

use crate::error::RelayError;
use crate::status::RelayStatus;

pub struct RelayClient {
    client: Client,
}

impl RelayClient {
    /// Creates a client whose requests give up after `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Sends `sample` as a JSON object to `endpoint`.
    ///
    /// # Errors
    ///
    /// - [`RelayError::InvalidEndpoint`] if `endpoint` is not an http(s) URL.
    /// - [`RelayError::Status`] if the endpoint answers with any status but 200.
    /// - [`RelayError::Timeout`] if no answer arrives within the timeout.
    /// - [`RelayError::Transport`] on connection, DNS, or TLS failure.
    pub async fn relay(&self, sample: &Sample, endpoint: &str) -> Result<(), RelayError> {
        let url = parse_endpoint(endpoint)?;
        let body = serde_json::to_vec(sample)?;

        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| classify_send_error(e, &url))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RelayError::Status {
                status: status.as_u16(),
                endpoint: url.to_string(),
            });
        }
        Ok(())
    }
}

/// A relay client bound to one endpoint, as configured for a session.
pub struct RelayTarget {
    client: RelayClient,
    endpoint: String,
}

impl RelayTarget {
    #[must_use]
    pub fn new(client: RelayClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Relays `sample` and folds the outcome into a [`RelayStatus`].
    ///
    /// Never fails: relay errors are logged and returned as
    /// [`RelayStatus::Failed`].
    pub async fn deliver(&self, sample: &Sample) -> RelayStatus {
        match self.client.relay(sample, &self.endpoint).await {
            Ok(()) => {
                tracing::info!(
                    country = %sample.country,
                    category = %sample.media_category,
                    "sample relayed to webhook"
                );
                RelayStatus::Relayed
            }
            Err(err) => {
                tracing::warn!(
                    kind = ?err.kind(),
                    error = %err,
                    "sample relay failed; local copy kept"
                );
                RelayStatus::from_error(&err)
            }
        }
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, RelayError> {
    let url = Url::parse(endpoint.trim()).map_err(|e| RelayError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn classify_send_error(err: reqwest::Error, url: &Url) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout {
            endpoint: url.to_string(),
        }
    } else {
        RelayError::Transport {
            endpoint: url.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
