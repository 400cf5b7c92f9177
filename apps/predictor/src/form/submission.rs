//! Submission pipeline: one `POST /api/predict` per user-initiated submit.
//!
//! States: Idle → Submitting → {Succeeded | Failed}. No retries. On success
//! the result and the draft that produced it are written to the result store
//! and the caller is told to navigate to the results view.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::api_client::{PredictionApi, RawResponse};
use crate::errors::AppError;
use crate::models::{PredictionResult, ProfileDraft};
use crate::routes::Route;
use crate::store::ResultStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(AppError),
}

pub struct SubmissionPipeline {
    api: Arc<dyn PredictionApi>,
    state: SubmissionState,
}

impl SubmissionPipeline {
    pub fn new(api: Arc<dyn PredictionApi>) -> Self {
        Self {
            api,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// While true the submit affordance must stay disabled.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn last_error(&self) -> Option<&AppError> {
        match &self.state {
            SubmissionState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Submits `draft`. The exclusive borrow makes this single-flight per
    /// pipeline. The store is written only on success.
    pub async fn submit(
        &mut self,
        draft: &ProfileDraft,
        store: &mut ResultStore,
    ) -> Result<Route, AppError> {
        self.state = SubmissionState::Submitting;
        info!("Submitting profile to {}", self.api.base_url());

        let outcome = match self.api.predict(draft).await {
            Ok(response) => classify_response(response),
            Err(e) => {
                error!("Prediction request failed: {e}");
                Err(AppError::Transport(e.to_string()))
            }
        };

        let stored = outcome.and_then(|result| {
            store.write(&result, draft)?;
            Ok(result)
        });

        match stored {
            Ok(result) => {
                info!(
                    "Prediction succeeded: {} ({} recommendations)",
                    result.primary_prediction,
                    result.recommendations.len()
                );
                self.state = SubmissionState::Succeeded;
                Ok(Route::Results)
            }
            Err(e) => {
                warn!("Prediction failed: {e}");
                self.state = SubmissionState::Failed(e.clone());
                Err(e)
            }
        }
    }
}

/// Maps a raw `/api/predict` response onto a result or one of the
/// submission error kinds.
pub fn classify_response(response: RawResponse) -> Result<PredictionResult, AppError> {
    if !response.is_success() {
        error!("Error response ({}): {}", response.status, response.body);
        return Err(AppError::Http {
            status: response.status,
            body: response.body,
        });
    }

    let value: Value = serde_json::from_str(&response.body).map_err(|e| {
        error!("Failed to parse JSON response: {e}");
        AppError::InvalidResponse
    })?;

    if let Some(message) = value.get("error").and_then(error_message) {
        return Err(AppError::Rejected(message));
    }

    serde_json::from_value(value).map_err(|e| {
        error!("Prediction response has unexpected shape: {e}");
        AppError::InvalidResponse
    })
}

/// `null`, `false` and `""` do not count as an error.
fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
