/// Prediction service client — the single point of entry for all HTTP calls
/// made by the workflow (probe, options, predict).
///
/// Callers depend on the `PredictionApi` trait rather than on reqwest so the
/// form and submission logic can be exercised against a scripted backend.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::models::ProfileDraft;

pub const PROBE_PATH: &str = "/";
pub const OPTIONS_PATH: &str = "/api/options";
pub const PREDICT_PATH: &str = "/api/predict";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Status and raw body of a completed request. Classification is left to
/// the caller since options and predictions treat failures differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `"<code> <reason>"`, e.g. `"503 Service Unavailable"`.
    pub fn status_line(&self) -> String {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("");
        format!("{} {}", self.status, reason).trim_end().to_string()
    }
}

#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Host the client talks to, used in connectivity messages.
    fn base_url(&self) -> &str;

    /// `GET /`. Only reachability matters; the status is returned for logging.
    async fn probe(&self) -> Result<u16, ApiError>;

    /// `GET /api/options`.
    async fn fetch_options(&self) -> Result<RawResponse, ApiError>;

    /// `POST /api/predict` with the draft as the JSON body.
    async fn predict(&self, draft: &ProfileDraft) -> Result<RawResponse, ApiError>;
}

/// reqwest-backed client. No timeout is applied to the prediction call;
/// only the probe carries one.
#[derive(Clone)]
pub struct HttpPredictionApi {
    client: Client,
    base_url: String,
    probe_timeout: Duration,
}

impl HttpPredictionApi {
    pub fn new(base_url: impl Into<String>, probe_timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
            probe_timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn into_raw(response: reqwest::Response) -> Result<RawResponse, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn probe(&self) -> Result<u16, ApiError> {
        let response = self
            .client
            .get(self.url(PROBE_PATH))
            .timeout(self.probe_timeout)
            .send()
            .await?;
        Ok(response.status().as_u16())
    }

    async fn fetch_options(&self) -> Result<RawResponse, ApiError> {
        let url = self.url(OPTIONS_PATH);
        debug!("Fetching options from: {url}");
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;
        Self::into_raw(response).await
    }

    async fn predict(&self, draft: &ProfileDraft) -> Result<RawResponse, ApiError> {
        let url = self.url(PREDICT_PATH);
        debug!("Submitting form data to: {url}");
        let response = self.client.post(url).json(draft).send().await?;
        debug!("Received response status: {}", response.status());
        Self::into_raw(response).await
    }
}
