//! Option loading for the form's select inputs.
//!
//! Two stages: a reachability probe against the service host, then the
//! options fetch. Either failure degrades to `OptionSet::fallback()` so the
//! form stays usable; the outcome says which path was taken.

use tracing::{error, info, warn};

use crate::api_client::PredictionApi;
use crate::errors::AppError;
use crate::models::OptionSet;

#[derive(Debug, Clone, PartialEq)]
pub enum OptionsOutcome {
    Loaded(OptionSet),
    /// Probe succeeded but the options call or its payload did not.
    Degraded { reason: String },
    /// Probe failed; the options endpoint was never called.
    Unreachable { base_url: String },
}

impl OptionsOutcome {
    /// The options the form should offer. Never empty-handed.
    pub fn options(&self) -> OptionSet {
        match self {
            OptionsOutcome::Loaded(options) => options.clone(),
            OptionsOutcome::Degraded { .. } | OptionsOutcome::Unreachable { .. } => {
                OptionSet::fallback()
            }
        }
    }

    /// At most one notice per load: a connectivity error already explains
    /// the fallback, so no second warning is produced for it.
    pub fn notice(&self) -> Option<AppError> {
        match self {
            OptionsOutcome::Loaded(_) => None,
            OptionsOutcome::Degraded { reason } => {
                Some(AppError::OptionsUnavailable(reason.clone()))
            }
            OptionsOutcome::Unreachable { base_url } => {
                Some(AppError::Unreachable(base_url.clone()))
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, OptionsOutcome::Loaded(_))
    }
}

pub async fn load_options(api: &dyn PredictionApi) -> OptionsOutcome {
    match api.probe().await {
        Ok(status) if (200..300).contains(&status) => info!("Backend server is available"),
        Ok(status) => warn!("Backend server ping responded with status: {status}"),
        Err(e) => {
            error!("Failed to ping backend server: {e}");
            return OptionsOutcome::Unreachable {
                base_url: api.base_url().to_string(),
            };
        }
    }

    let response = match api.fetch_options().await {
        Ok(r) => r,
        Err(e) => return degraded(e.to_string()),
    };

    if !response.is_success() {
        return degraded(format!(
            "Failed to fetch options: {}",
            response.status_line()
        ));
    }

    match serde_json::from_str::<OptionSet>(&response.body) {
        Ok(options) => {
            info!(
                "Loaded {} education levels and {} skill levels",
                options.education_levels.len(),
                options.skill_levels.len()
            );
            OptionsOutcome::Loaded(options)
        }
        Err(e) => degraded(format!("Invalid options payload: {e}")),
    }
}

fn degraded(reason: String) -> OptionsOutcome {
    warn!("Error fetching options, using defaults: {reason}");
    OptionsOutcome::Degraded { reason }
}
