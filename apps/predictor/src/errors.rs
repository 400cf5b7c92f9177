use thiserror::Error;

/// Workflow-level error type.
///
/// Every variant is terminal for the current attempt: the user either
/// resubmits or navigates back. Nothing here is retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// The service host did not answer the reachability probe.
    #[error("Cannot connect to the prediction server. Please check if it's running at {0}")]
    Unreachable(String),

    /// `/api/options` failed after a successful probe. Non-fatal.
    #[error("Error connecting to the server: {0}. Using default options.")]
    OptionsUnavailable(String),

    #[error("Server responded with status: {status}. Details: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response from server. Please check backend logs.")]
    InvalidResponse,

    /// A well-formed `{ "error": ... }` payload, surfaced verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),

    #[error("Please fill in the required fields: {}", .0.join(", "))]
    IncompleteProfile(Vec<&'static str>),

    #[error("No prediction results found. Please complete the prediction form first.")]
    MissingResult,

    #[error("Failed to load prediction results. Please complete the prediction form first.")]
    CorruptResult(String),

    #[error("Failed to store prediction results: {0}")]
    Storage(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl AppError {
    /// Errors for which the results view offers a way back to the form.
    pub fn needs_form(&self) -> bool {
        matches!(self, AppError::MissingResult | AppError::CorruptResult(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_embeds_status_and_body() {
        let err = AppError::Http {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server responded with status: 500. Details: internal error"
        );
    }

    #[test]
    fn test_rejected_is_verbatim() {
        assert_eq!(
            AppError::Rejected("Model not loaded".to_string()).to_string(),
            "Model not loaded"
        );
    }

    #[test]
    fn test_incomplete_profile_lists_fields() {
        let err = AppError::IncompleteProfile(vec!["education", "leadership"]);
        assert_eq!(
            err.to_string(),
            "Please fill in the required fields: education, leadership"
        );
    }

    #[test]
    fn test_only_result_errors_need_form() {
        assert!(AppError::MissingResult.needs_form());
        assert!(AppError::CorruptResult("eof".to_string()).needs_form());
        assert!(!AppError::InvalidResponse.needs_form());
    }
}
