use serde::{Deserialize, Serialize};

/// A scored career returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub career: String,
    pub probability: f64, // 0 – 100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDetails {
    pub model_type: String,
    pub student_performance_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
}

/// Successful `/api/predict` payload. Read-only once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub primary_prediction: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_details: Option<ModelDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_full_service_payload() {
        let result: PredictionResult = serde_json::from_value(json!({
            "primaryPrediction": "Data Scientist",
            "recommendations": [
                {"career": "Data Scientist", "probability": 81.5},
                {"career": "Software Engineer", "probability": 64}
            ],
            "requestId": "a1b2c3d4",
            "modelDetails": {
                "modelType": "RandomForestClassifier",
                "modelPath": "student_model.pkl",
                "studentPerformanceScore": 77.2
            }
        }))
        .unwrap();

        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[1].probability, 64.0);
        let details = result.model_details.unwrap();
        assert_eq!(details.model_type, "RandomForestClassifier");
        assert_eq!(details.model_path.as_deref(), Some("student_model.pkl"));
        assert_eq!(result.request_id.as_deref(), Some("a1b2c3d4"));
    }

    #[test]
    fn test_recommendations_and_details_are_optional() {
        let result: PredictionResult =
            serde_json::from_value(json!({"primaryPrediction": "Teacher"})).unwrap();
        assert!(result.recommendations.is_empty());
        assert!(result.model_details.is_none());
    }

    #[test]
    fn test_missing_primary_prediction_is_rejected() {
        let parsed = serde_json::from_value::<PredictionResult>(json!({"recommendations": []}));
        assert!(parsed.is_err());
    }
}
