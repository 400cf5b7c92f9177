use crate::errors::AppError;
use crate::models::{ProfileDraft, ProfileField, SliderField};

/// Owns the mutable draft between form mount and submission.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: ProfileDraft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_slider(&mut self, field: SliderField, value: u8) {
        self.draft.set_slider(field, value);
    }

    /// Name-based variant for inputs that only know their wire name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), AppError> {
        let field: ProfileField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_slider_by_name(&mut self, name: &str, value: u8) -> Result<(), AppError> {
        let field: SliderField = name.parse()?;
        self.set_slider(field, value);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.draft = ProfileDraft::default();
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        self.draft.missing_required()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}
