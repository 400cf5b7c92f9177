// Prediction form: option loading, draft editing and submission.
// All HTTP goes through api_client; the only state shared with the results
// view is the ResultStore passed into `submit`.

pub mod controller;
pub mod options;
pub mod submission;

use std::sync::Arc;

use tracing::{info, warn};

use crate::api_client::PredictionApi;
use crate::errors::AppError;
use crate::models::OptionSet;
use crate::routes::Route;
use crate::store::ResultStore;

pub use controller::FormController;
pub use options::{load_options, OptionsOutcome};
pub use submission::{SubmissionPipeline, SubmissionState};

/// One mounted instance of the prediction form.
pub struct FormPage {
    options: OptionSet,
    outcome: OptionsOutcome,
    controller: FormController,
    pipeline: SubmissionPipeline,
    banner: Option<String>,
}

impl FormPage {
    /// Loads options (degrading to defaults) and starts from an empty draft.
    pub async fn mount(api: Arc<dyn PredictionApi>) -> Self {
        let outcome = load_options(api.as_ref()).await;
        let banner = outcome.notice().map(|e| e.to_string());
        Self {
            options: outcome.options(),
            outcome,
            controller: FormController::new(),
            pipeline: SubmissionPipeline::new(api),
            banner,
        }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn options_outcome(&self) -> &OptionsOutcome {
        &self.outcome
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormController {
        &mut self.controller
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.pipeline.state()
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.pipeline.is_submitting()
    }

    /// The error line shown above the form, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Starts over with a default draft and no banner.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.banner = None;
    }

    /// Gates on required fields, then runs the submission pipeline. An
    /// incomplete draft never reaches the network.
    pub async fn submit(&mut self, store: &mut ResultStore) -> Result<Route, AppError> {
        self.banner = None;

        let missing = self.controller.missing_required();
        if !missing.is_empty() {
            let err = AppError::IncompleteProfile(missing);
            warn!("Submission blocked: {err}");
            self.banner = Some(format!("Error: {err}"));
            return Err(err);
        }

        match self.pipeline.submit(self.controller.draft(), store).await {
            Ok(route) => {
                info!("Navigating to {route}");
                Ok(route)
            }
            Err(e) => {
                self.banner = Some(format!("Error: {e}"));
                Err(e)
            }
        }
    }
}
