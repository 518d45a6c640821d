//! Async HTTP client wrapping the RSVP JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response};
use rsvp_core::{
  ErrorKind,
  listing::RsvpListing,
  record::{CandidateRsvp, RsvpRecord},
};
use serde::Deserialize;

/// Connection settings for the RSVP API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Error body returned by the API on any failed request.
#[derive(Debug, Deserialize)]
pub struct ApiFailure {
  pub error:   ErrorKind,
  pub message: String,
}

/// Async HTTP client for the RSVP JSON API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/rsvps`
  pub async fn listing(&self) -> Result<RsvpListing> {
    let resp = self
      .client
      .get(self.url("/rsvps"))
      .send()
      .await
      .context("GET /rsvps failed")?;

    let resp = check(resp, "GET /rsvps").await?;
    resp.json().await.context("deserialising listing")
  }

  /// `POST /api/rsvps`
  pub async fn submit(&self, candidate: &CandidateRsvp) -> Result<RsvpRecord> {
    let resp = self
      .client
      .post(self.url("/rsvps"))
      .json(candidate)
      .send()
      .await
      .context("POST /rsvps failed")?;

    let resp = check(resp, "POST /rsvps").await?;
    resp.json().await.context("deserialising stored rsvp")
  }
}

/// Pass successful responses through; turn API error bodies into their
/// user-facing message.
async fn check(resp: Response, what: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  match resp.json::<ApiFailure>().await {
    Ok(failure) => {
      tracing::debug!(kind = ?failure.error, "{what} → {status}");
      Err(anyhow!(failure.message))
    }
    Err(_) => Err(anyhow!("{what} → {status}")),
  }
}
