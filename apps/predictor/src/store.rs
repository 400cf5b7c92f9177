//! Session-scoped handoff between the form and the results view.
//!
//! A single slot: the last successful prediction and the draft that produced
//! it, each stored as a JSON document under a well-known key. Last write
//! wins; nothing is merged and nothing expires until the session ends.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::AppError;
use crate::models::{PredictionResult, ProfileDraft};

pub const PREDICTION_RESULT_KEY: &str = "predictionResult";
pub const FORM_DATA_KEY: &str = "formData";

/// String key/value storage that lives as long as the browsing session.
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the results view reads back on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPrediction {
    pub result: PredictionResult,
    /// Absent when only the result key was written.
    pub profile: Option<ProfileDraft>,
}

#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    storage: SessionStorage,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_storage(storage: SessionStorage) -> Self {
        Self { storage }
    }

    /// Replaces the slot with a new result/draft pair. Both documents are
    /// encoded before either key is touched.
    pub fn write(
        &mut self,
        result: &PredictionResult,
        profile: &ProfileDraft,
    ) -> Result<(), AppError> {
        let result_json =
            serde_json::to_string(result).map_err(|e| AppError::Storage(e.to_string()))?;
        let profile_json =
            serde_json::to_string(profile).map_err(|e| AppError::Storage(e.to_string()))?;

        self.storage.set(PREDICTION_RESULT_KEY, result_json);
        self.storage.set(FORM_DATA_KEY, profile_json);
        debug!(
            "Stored prediction '{}' for results view",
            result.primary_prediction
        );
        Ok(())
    }

    pub fn read(&self) -> Result<StoredPrediction, AppError> {
        let raw_result = self
            .storage
            .get(PREDICTION_RESULT_KEY)
            .ok_or(AppError::MissingResult)?;
        let result: PredictionResult = serde_json::from_str(raw_result)
            .map_err(|e| AppError::CorruptResult(e.to_string()))?;

        let profile = self
            .storage
            .get(FORM_DATA_KEY)
            .map(|raw| serde_json::from_str::<ProfileDraft>(raw))
            .transpose()
            .map_err(|e| AppError::CorruptResult(e.to_string()))?;

        Ok(StoredPrediction { result, profile })
    }

    pub fn is_empty(&self) -> bool {
        self.storage.get(PREDICTION_RESULT_KEY).is_none()
    }

    /// Drops everything; called when the browsing session ends.
    pub fn end_session(&mut self) {
        self.storage.clear();
    }
}
